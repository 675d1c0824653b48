use alloy::{
    primitives::{address, Address},
    signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
};
use std::sync::LazyLock;

/// Deterministic signing keys for tests, filled with 1 through 10.
pub static TEST_SIGNERS: LazyLock<[PrivateKeySigner; 10]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        PrivateKeySigner::from(SigningKey::from_slice(&[i as u8 + 1; 32]).unwrap())
    })
});

/// Addresses of [`TEST_SIGNERS`], in the same order.
pub static TEST_USERS: LazyLock<[Address; 10]> =
    LazyLock::new(|| TEST_SIGNERS.each_ref().map(|s| s.address()));

/// The stock dev-chain deployer. Fixture worlds deploy from this account,
/// so their contract addresses match what a local deployment log prints.
pub const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
