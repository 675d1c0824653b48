use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Events the savings pot journals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiggyBankEvent {
    /// A saver escrowed funds into the pot.
    Saved {
        /// The contributing account.
        saver: Address,
        /// The amount escrowed by this save.
        amount: U256,
        /// The pot's running total after the save.
        total_saved: U256,
    },
    /// A reward NFT was minted for a saver.
    RewardMinted {
        /// The rewarded account.
        saver: Address,
        /// The minted token id.
        token_id: u64,
    },
    /// The manager swept the pot.
    Withdrawn {
        /// The receiving account.
        to: Address,
        /// The amount swept.
        amount: U256,
    },
}

/// Events the reward NFT journals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NftEvent {
    /// A token was minted.
    Minted {
        /// The receiving account.
        to: Address,
        /// The minted token id.
        token_id: u64,
    },
    /// Contract ownership moved.
    OwnershipTransferred {
        /// The previous owner.
        previous: Address,
        /// The new owner.
        new: Address,
    },
}
