use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Events journaled by the sealed-bid auction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionEvent {
    /// A sealed bid landed with its deposit in escrow.
    BidSubmitted {
        /// The committing account.
        bidder: Address,
        /// The deposit escrowed with the commitment.
        deposit: U256,
    },
    /// A bid was opened during the reveal window.
    BidRevealed {
        /// The revealing account.
        bidder: Address,
        /// The value the commitment sealed.
        value: U256,
    },
    /// The auction settled.
    Ended {
        /// The highest revealed bidder, if anyone revealed.
        winner: Option<Address>,
        /// The amount paid to the seller.
        amount: U256,
    },
}
