//! A token savings pot. Savers escrow ERC20 funds until a withdrawal date;
//! the manager sweeps the pot once the saving target is met. A wired reward
//! NFT pays out on every third save.

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

mod bank;
pub use bank::{PiggyBank, REWARD_CADENCE};

mod error;
pub use error::{NftError, PiggyBankError};

mod events;
pub use events::{NftEvent, PiggyBankEvent};

mod nft;
pub use nft::PiggyNft;
