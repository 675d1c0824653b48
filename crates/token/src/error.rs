use alloy::primitives::{Address, U256};

/// Error type for ledger operations. Display text is the reason string the
/// equivalent on-chain revert carries; the fields hold the figures behind
/// the rejection.
#[derive(Debug, Copy, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// A debit was larger than the account's balance.
    #[error("Insufficient balance")]
    InsufficientBalance {
        /// The account being debited.
        account: Address,
        /// The balance at the time of the call.
        balance: U256,
        /// The amount the call tried to move.
        needed: U256,
    },
    /// A transfer targeted the zero address.
    #[error("Invalid recipient address")]
    InvalidRecipient,
    /// An approval targeted the zero address.
    #[error("Invalid spender address")]
    InvalidSpender,
    /// A delegated transfer exceeded the spender's allowance.
    #[error("Allowance exceeded")]
    AllowanceExceeded {
        /// The account whose funds were being spent.
        owner: Address,
        /// The spender whose allowance was checked.
        spender: Address,
        /// The allowance at the time of the call.
        allowance: U256,
        /// The amount the call tried to spend.
        needed: U256,
    },
    /// An allowance was queried for the zero address.
    #[error("Invalid address")]
    InvalidAddress,
    /// A mint authorization did not recover to the recipient.
    #[error("NOMINT: Invalid signature")]
    InvalidMintSignature,
}
