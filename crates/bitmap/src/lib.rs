//! Thirty-two byte-wide values packed into one 256-bit word, with hex
//! persistence and a game-character sheet built on the low slots.

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
pub use error::BitmapError;

mod sheet;
pub use sheet::{Attributes, CharacterSheet};

mod word;
pub use word::{Bitmap, SLOT_BITS, SLOT_COUNT};
