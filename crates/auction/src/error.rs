use alloy::primitives::{Address, U256};
use campus_token::TokenError;

/// Errors raised by the sealed-bid auction.
#[derive(Debug, Copy, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuctionError {
    /// A bid was submitted after the bidding deadline.
    #[error("bidding is closed")]
    BiddingClosed,
    /// The bidder has already submitted a sealed bid.
    #[error("bid already submitted")]
    AlreadyBid,
    /// The deposit does not cover the minimum bid.
    #[error("deposit below minimum bid")]
    DepositBelowMinimum {
        /// The deposit offered.
        deposit: U256,
        /// The minimum the auction demands.
        min_bid: U256,
    },
    /// A reveal or settlement was attempted during the bidding window.
    #[error("bidding still open")]
    BiddingStillOpen,
    /// A reveal was attempted after the reveal window closed.
    #[error("reveal is closed")]
    RevealClosed,
    /// The account never submitted a sealed bid.
    #[error("no sealed bid for this bidder")]
    UnknownBidder {
        /// The account with no bid on record.
        bidder: Address,
    },
    /// The bid has already been revealed.
    #[error("bid already revealed")]
    AlreadyRevealed,
    /// The revealed value and secret do not hash to the commitment.
    #[error("revealed bid does not match commitment")]
    CommitmentMismatch,
    /// The revealed value is larger than the escrowed deposit.
    #[error("revealed bid exceeds deposit")]
    RevealExceedsDeposit {
        /// The revealed bid value.
        value: U256,
        /// The deposit escrowed at commit time.
        deposit: U256,
    },
    /// Settlement was attempted before the reveal window closed.
    #[error("reveal period not over")]
    RevealNotOver,
    /// The auction has already been settled.
    #[error("auction already ended")]
    AlreadyEnded,
    /// The escrow ledger rejected a transfer.
    #[error(transparent)]
    Token(#[from] TokenError),
}
