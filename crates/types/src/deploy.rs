use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Derives the contract addresses a deployer account produces.
///
/// Tracks the account's nonce and yields the same `CREATE` addresses a real
/// chain would assign, so fixture worlds carry the addresses a deployment
/// log prints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployer {
    /// The deploying account.
    account: Address,
    /// The next nonce to consume.
    nonce: u64,
}

impl Deployer {
    /// Create a deployer for a fresh account, starting at nonce 0.
    pub const fn new(account: Address) -> Self {
        Self { account, nonce: 0 }
    }

    /// Create a deployer for an account whose nonce is already `nonce`.
    pub const fn with_nonce(account: Address, nonce: u64) -> Self {
        Self { account, nonce }
    }

    /// The address the next deployment will receive, consuming a nonce.
    pub fn next_address(&mut self) -> Address {
        let address = self.account.create(self.nonce);
        self.nonce += 1;
        address
    }

    /// The address the next deployment would receive, without consuming it.
    pub fn peek(&self) -> Address {
        self.account.create(self.nonce)
    }

    /// The deploying account.
    pub const fn account(&self) -> Address {
        self.account
    }

    /// The next nonce to consume.
    pub const fn nonce(&self) -> u64 {
        self.nonce
    }
}
