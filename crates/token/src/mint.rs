use crate::{Token, TokenError};
use alloy::{
    primitives::{keccak256, Address, Signature, B256, U256},
    sol_types::SolValue,
};
use campus_types::CallContext;
use tracing::info;

/// The digest a wallet signs to authorize minting `amount` to `recipient`.
///
/// Packed keccak-256 over `(address, uint256)`. Wallets sign it as an
/// EIP-191 personal message, so recovery happens over the prefixed hash.
pub fn mint_digest(recipient: Address, amount: U256) -> B256 {
    keccak256((recipient, amount).abi_encode_packed())
}

impl Token {
    /// Mint `amount` to `recipient` against a personal-message signature
    /// over [`mint_digest`].
    ///
    /// The recovered signer must be the recipient itself, so an
    /// authorization can only ever mint to the key that produced it. Any
    /// other signer, or a signature over a different recipient or amount,
    /// is rejected.
    pub fn mint_signed(
        &mut self,
        ctx: CallContext,
        recipient: Address,
        amount: U256,
        signature: &Signature,
    ) -> Result<(), TokenError> {
        let digest = mint_digest(recipient, amount);
        let recovered = signature
            .recover_address_from_msg(digest)
            .map_err(|_| TokenError::InvalidMintSignature)?;
        if recovered != recipient {
            return Err(TokenError::InvalidMintSignature);
        }

        self.mint(recipient, amount);
        info!(token = %self.address(), caller = %ctx.sender(), %recipient, %amount, "signed mint");
        Ok(())
    }
}
