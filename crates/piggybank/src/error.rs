use alloy::primitives::{Address, U256};
use campus_token::TokenError;

/// Error type for savings pot operations. Display text is the reason string
/// the equivalent on-chain revert carries.
#[derive(Debug, Copy, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PiggyBankError {
    /// A save landed after the withdrawal date.
    #[error("YOU CAN NO LONGER SAVE")]
    SavingClosed,
    /// A save carried no value.
    #[error("ZERO AMOUNT NOT ALLOWED")]
    ZeroAmount,
    /// A withdrawal landed before the withdrawal date.
    #[error("NOT YET TIME")]
    NotYetTime,
    /// A withdrawal was attempted below the saving target.
    #[error("TARGET AMOUNT NOT REACHED")]
    TargetNotReached {
        /// Amount saved so far.
        saved: U256,
        /// The target the pot must reach.
        target: U256,
    },
    /// A withdrawal by anyone but the manager.
    #[error("ONLY MANAGER CAN WITHDRAW")]
    NotManager {
        /// The rejected caller.
        caller: Address,
    },
    /// The escrow transfer on the token ledger failed.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// The reward mint failed.
    #[error(transparent)]
    Nft(#[from] NftError),
}

/// Error type for the reward NFT.
#[derive(Debug, Copy, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NftError {
    /// An owner-only call by someone else.
    #[error("caller is not the owner")]
    NotOwner {
        /// The rejected caller.
        caller: Address,
    },
    /// A mint targeted the zero address.
    #[error("mint to the zero address")]
    MintToZero,
}
