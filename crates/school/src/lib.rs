//! A school management registry. The deploying account is the principal;
//! the principal appoints teachers, either may enroll students, and
//! students pay tuition in native value.

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

mod error;
pub use error::SchoolError;

mod events;
pub use events::SchoolEvent;

mod roster;
pub use roster::{Gender, PaymentStatus, Student, Teacher};

mod school;
pub use school::School;
