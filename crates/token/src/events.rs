use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Events the ledger journals. Mints surface as transfers from the zero
/// address, per EVM convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Value moved between accounts.
    Transfer {
        /// The debited account, or zero for a mint.
        from: Address,
        /// The credited account.
        to: Address,
        /// The amount moved.
        value: U256,
    },
    /// An owner granted a spender an allowance.
    Approval {
        /// The account whose funds may be spent.
        owner: Address,
        /// The account allowed to spend them.
        spender: Address,
        /// The allowance granted. Replaces any prior allowance.
        value: U256,
    },
}
