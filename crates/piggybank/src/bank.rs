use crate::{PiggyBankError, PiggyBankEvent, PiggyNft};
use alloy::primitives::{Address, U256};
use campus_token::Token;
use campus_types::{CallContext, EventJournal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// A reward NFT is minted on every save whose per-saver count is a multiple
/// of this.
pub const REWARD_CADENCE: u32 = 3;

/// A token savings pot.
///
/// Savers escrow ERC20 funds into the pot until the withdrawal date, having
/// first approved the pot on the token ledger. Once the date passes and the
/// target is met, the manager sweeps the whole pot. A pot deployed with a
/// reward NFT mints one to a saver on every [`REWARD_CADENCE`]th save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiggyBank {
    /// The address this instance is deployed at.
    address: Address,
    /// The ledger the pot escrows funds on.
    token: Address,
    /// The reward collection, when one is wired.
    nft: Option<Address>,
    /// The amount the pot must reach before a withdrawal.
    target_amount: U256,
    /// Unix seconds after which saving closes and withdrawal opens.
    withdrawal_date: u64,
    /// The only account allowed to sweep the pot.
    manager: Address,
    /// Lifetime contribution per saver.
    contributions: HashMap<Address, U256>,
    /// Number of saves per saver, for the reward cadence.
    save_counts: HashMap<Address, u32>,
    /// Running total of escrowed funds.
    total_saved: U256,
    /// Journal of emitted events.
    events: EventJournal<PiggyBankEvent>,
}

impl PiggyBank {
    /// Deploy a pot at `address` over the ledger at `token`.
    pub fn deploy(
        address: Address,
        target_amount: U256,
        withdrawal_date: u64,
        manager: Address,
        token: Address,
    ) -> Self {
        Self {
            address,
            token,
            nft: None,
            target_amount,
            withdrawal_date,
            manager,
            contributions: HashMap::new(),
            save_counts: HashMap::new(),
            total_saved: U256::ZERO,
            events: EventJournal::new(),
        }
    }

    /// Deploy a pot with a reward collection wired in. The collection must
    /// be handed to the pot (ownership transfer) before rewards can mint.
    pub fn deploy_with_nft(
        address: Address,
        target_amount: U256,
        withdrawal_date: u64,
        manager: Address,
        token: Address,
        nft: Address,
    ) -> Self {
        let mut bank = Self::deploy(address, target_amount, withdrawal_date, manager, token);
        bank.nft = Some(nft);
        bank
    }

    /// Escrow `amount` from the caller into the pot.
    ///
    /// The caller must have approved the pot on the ledger. Closes at the
    /// withdrawal date (saving exactly at the date still lands). When a
    /// reward collection is wired, pass it in so cadence saves can mint.
    pub fn save(
        &mut self,
        ctx: CallContext,
        token: &mut Token,
        mut nft: Option<&mut PiggyNft>,
        amount: U256,
    ) -> Result<(), PiggyBankError> {
        if ctx.timestamp() > self.withdrawal_date {
            return Err(PiggyBankError::SavingClosed);
        }
        if amount.is_zero() {
            return Err(PiggyBankError::ZeroAmount);
        }

        let count = self.save_counts.get(&ctx.sender()).copied().unwrap_or_default() + 1;
        let reward_due = self.nft.is_some() && count % REWARD_CADENCE == 0;

        // The mint must not be able to fail once funds have moved, so the
        // ownership gate is checked up front.
        if reward_due {
            debug_assert!(nft.is_some(), "reward collection wired but not supplied");
            if let Some(nft) = nft.as_deref() {
                debug_assert_eq!(Some(nft.address()), self.nft);
                nft.ensure_minter(self.address)?;
            }
        }

        token.transfer_from(ctx.reattributed(self.address), ctx.sender(), self.address, amount)?;

        let contribution = self.contributions.entry(ctx.sender()).or_default();
        *contribution = contribution.saturating_add(amount);
        self.total_saved = self.total_saved.saturating_add(amount);
        self.save_counts.insert(ctx.sender(), count);
        self.events.record(PiggyBankEvent::Saved {
            saver: ctx.sender(),
            amount,
            total_saved: self.total_saved,
        });

        if reward_due {
            if let Some(nft) = nft.as_deref_mut() {
                let token_id = nft.mint(ctx.reattributed(self.address), ctx.sender())?;
                self.events.record(PiggyBankEvent::RewardMinted { saver: ctx.sender(), token_id });
            }
        }

        debug!(bank = %self.address, saver = %ctx.sender(), %amount, count, "saved");
        Ok(())
    }

    /// Sweep the pot's whole ledger balance to the manager.
    ///
    /// Manager only, at or after the withdrawal date, and only once the
    /// target has been reached. Returns the amount swept.
    pub fn withdrawal(
        &mut self,
        ctx: CallContext,
        token: &mut Token,
    ) -> Result<U256, PiggyBankError> {
        if ctx.sender() != self.manager {
            return Err(PiggyBankError::NotManager { caller: ctx.sender() });
        }
        if ctx.timestamp() < self.withdrawal_date {
            return Err(PiggyBankError::NotYetTime);
        }
        if self.total_saved < self.target_amount {
            return Err(PiggyBankError::TargetNotReached {
                saved: self.total_saved,
                target: self.target_amount,
            });
        }

        let amount = token.balance_of(self.address);
        token.transfer(ctx.reattributed(self.address), self.manager, amount)?;
        self.total_saved = U256::ZERO;
        self.events.record(PiggyBankEvent::Withdrawn { to: self.manager, amount });
        info!(bank = %self.address, manager = %self.manager, %amount, "pot swept");
        Ok(amount)
    }

    /// Lifetime contribution of `saver`.
    pub fn contributions(&self, saver: Address) -> U256 {
        self.contributions.get(&saver).copied().unwrap_or_default()
    }

    /// Number of saves `saver` has made.
    pub fn save_count(&self, saver: Address) -> u32 {
        self.save_counts.get(&saver).copied().unwrap_or_default()
    }

    /// The address this instance is deployed at.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The ledger the pot escrows funds on.
    pub const fn token(&self) -> Address {
        self.token
    }

    /// The reward collection, when one is wired.
    pub const fn nft(&self) -> Option<Address> {
        self.nft
    }

    /// The amount the pot must reach before a withdrawal.
    pub const fn target_amount(&self) -> U256 {
        self.target_amount
    }

    /// Unix seconds after which saving closes and withdrawal opens.
    pub const fn withdrawal_date(&self) -> u64 {
        self.withdrawal_date
    }

    /// The only account allowed to sweep the pot.
    pub const fn manager(&self) -> Address {
        self.manager
    }

    /// Running total of escrowed funds.
    pub const fn total_saved(&self) -> U256 {
        self.total_saved
    }

    /// Borrow the journal of emitted events.
    pub const fn events(&self) -> &EventJournal<PiggyBankEvent> {
        &self.events
    }
}
