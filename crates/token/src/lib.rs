//! An in-process ERC20 ledger: balances, allowances, and the transfer and
//! approval flows, plus a personal-message-gated mint.
//!
//! The ledger keeps EVM conventions. Amounts are [`U256`], identities are
//! 20-byte addresses, mints are transfers from the zero address, and every
//! rejected operation reports the reason string a revert would carry.
//!
//! [`U256`]: alloy::primitives::U256

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
pub use error::TokenError;

mod events;
pub use events::TokenEvent;

mod ledger;
pub use ledger::{Token, TokenMetadata};

mod mint;
pub use mint::mint_digest;
