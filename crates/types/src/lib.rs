//! Shared plumbing for the campus contract fleet: call contexts, event
//! journals, deployment address derivation, and the card number validator.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod ctx;
pub use ctx::CallContext;

mod deploy;
pub use deploy::Deployer;

mod journal;
pub use journal::EventJournal;

pub mod luhn;
