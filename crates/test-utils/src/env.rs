use crate::users::DEPLOYER;
use alloy::primitives::Address;
use campus_types::{CallContext, Deployer};

/// Where the deterministic test clock starts.
pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;

/// A deterministic clock and deployment-address source.
///
/// Fixture worlds deploy through the env so every run sees the same
/// addresses, and tests move time with [`TestEnv::warp`] instead of
/// sleeping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestEnv {
    deployer: Deployer,
    now: u64,
}

impl TestEnv {
    /// An env rooted at [`GENESIS_TIMESTAMP`], deploying from [`DEPLOYER`].
    pub const fn new() -> Self {
        Self { deployer: Deployer::new(DEPLOYER), now: GENESIS_TIMESTAMP }
    }

    /// An env rooted at the wall clock, for demo runs.
    pub fn live() -> Self {
        Self { deployer: Deployer::new(DEPLOYER), now: chrono::Utc::now().timestamp() as u64 }
    }

    /// Unix seconds of the env clock.
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward by `seconds`.
    pub fn warp(&mut self, seconds: u64) {
        self.now = self.now.saturating_add(seconds);
    }

    /// A call from `sender` at the current clock.
    pub const fn ctx_for(&self, sender: Address) -> CallContext {
        CallContext::new(sender).at(self.now)
    }

    /// The address the next deployment will receive.
    pub fn next_address(&mut self) -> Address {
        self.deployer.next_address()
    }

    /// The deploying account.
    pub const fn deployer(&self) -> Address {
        self.deployer.account()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
