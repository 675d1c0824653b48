//! A sealed-bid auction. Bidders commit a hash of their bid alongside a
//! token deposit, reveal the bid after the commit window, and the auction
//! settles once the reveal window closes: the seller is paid the highest
//! revealed bid and everything else is refunded.

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

mod auction;
pub use auction::{SealedBid, SealedBidAuction};

mod error;
pub use error::AuctionError;

mod events;
pub use events::AuctionEvent;

mod phase;
pub use phase::{AuctionPhase, PhaseClock, REVEAL_PERIOD};

mod seal;
pub use seal::seal_bid;
