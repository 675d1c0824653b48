use alloy::{
    primitives::{keccak256, B256, U256},
    sol_types::SolValue,
};

/// Seals a bid into the commitment submitted during the bidding window.
///
/// The commitment is the keccak-256 digest of the ABI encoding of the bid
/// value and the bidder's secret, as a `(uint256, string)` parameter pair.
/// Revealing later means reproducing this digest from the opened values.
pub fn seal_bid(value: U256, secret: &str) -> B256 {
    keccak256((value, secret).abi_encode_params())
}
