use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// The environment a contract observes for a single call: the account that
/// sent it and the timestamp at which it lands.
///
/// Contexts are cheap to copy and are threaded through every state-mutating
/// operation. When one contract invokes another on its own behalf, it
/// re-attributes the context to its own address, so the callee sees the
/// calling contract as the sender.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallContext {
    /// The account the call is attributed to.
    sender: Address,
    /// Unix seconds at which the call lands.
    timestamp: u64,
}

impl CallContext {
    /// Create a context for `sender` at timestamp 0.
    pub const fn new(sender: Address) -> Self {
        Self { sender, timestamp: 0 }
    }

    /// Pin the context to a timestamp.
    pub const fn at(self, timestamp: u64) -> Self {
        Self { sender: self.sender, timestamp }
    }

    /// Re-attribute the context to a different sender at the same instant.
    pub const fn reattributed(self, sender: Address) -> Self {
        Self { sender, timestamp: self.timestamp }
    }

    /// The account the call is attributed to.
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// The timestamp at which the call lands.
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
