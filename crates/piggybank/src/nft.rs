use crate::{NftError, NftEvent};
use alloy::primitives::Address;
use campus_types::{CallContext, EventJournal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The reward NFT handed to diligent savers.
///
/// A minimal owned collection: sequential token ids from 1, minting
/// restricted to the contract owner. The savings pot is made the owner
/// right after deployment so it can mint rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiggyNft {
    /// The address this instance is deployed at.
    address: Address,
    /// The account allowed to mint and to hand over ownership.
    owner: Address,
    /// The next token id to assign.
    next_id: u64,
    /// Token id to holder.
    owners: HashMap<u64, Address>,
    /// Holder to token count.
    balances: HashMap<Address, u64>,
    /// Journal of emitted events.
    events: EventJournal<NftEvent>,
}

impl PiggyNft {
    /// Deploy the collection at `address`, owned by `owner`.
    pub fn deploy(address: Address, owner: Address) -> Self {
        Self {
            address,
            owner,
            next_id: 1,
            owners: HashMap::new(),
            balances: HashMap::new(),
            events: EventJournal::new(),
        }
    }

    /// Hand ownership to `new_owner`. Owner only.
    pub fn transfer_ownership(
        &mut self,
        ctx: CallContext,
        new_owner: Address,
    ) -> Result<(), NftError> {
        self.ensure_minter(ctx.sender())?;
        let previous = self.owner;
        self.owner = new_owner;
        self.events.record(NftEvent::OwnershipTransferred { previous, new: new_owner });
        debug!(nft = %self.address, %previous, owner = %new_owner, "ownership transferred");
        Ok(())
    }

    /// Mint the next token to `to`. Owner only.
    pub fn mint(&mut self, ctx: CallContext, to: Address) -> Result<u64, NftError> {
        self.ensure_minter(ctx.sender())?;
        if to.is_zero() {
            return Err(NftError::MintToZero);
        }

        let token_id = self.next_id;
        self.next_id += 1;
        self.owners.insert(token_id, to);
        *self.balances.entry(to).or_default() += 1;
        self.events.record(NftEvent::Minted { to, token_id });
        debug!(nft = %self.address, %to, token_id, "minted");
        Ok(token_id)
    }

    /// The number of tokens `account` holds.
    pub fn balance_of(&self, account: Address) -> u64 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// The holder of `token_id`, if it has been minted.
    pub fn owner_of(&self, token_id: u64) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }

    /// The address this instance is deployed at.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The current contract owner.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// The number of tokens minted so far.
    pub const fn total_minted(&self) -> u64 {
        self.next_id - 1
    }

    /// Borrow the journal of emitted events.
    pub const fn events(&self) -> &EventJournal<NftEvent> {
        &self.events
    }

    /// Check that `caller` may mint.
    pub(crate) fn ensure_minter(&self, caller: Address) -> Result<(), NftError> {
        if caller != self.owner {
            return Err(NftError::NotOwner { caller });
        }
        Ok(())
    }
}
