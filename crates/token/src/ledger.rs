use crate::{TokenError, TokenEvent};
use alloy::primitives::{Address, U256};
use campus_types::{CallContext, EventJournal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Immutable descriptive fields of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display decimals. Purely descriptive; amounts are raw units.
    pub decimals: u8,
}

impl TokenMetadata {
    /// Create token metadata.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self { name: name.into(), symbol: symbol.into(), decimals }
    }
}

/// An ERC20 ledger instance.
///
/// Holds the balance and allowance books for one deployed token and journals
/// every transfer and approval. All mutating operations are atomic: a
/// rejected call leaves the ledger exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The address this instance is deployed at.
    address: Address,
    /// Name, symbol, and decimals.
    metadata: TokenMetadata,
    /// Total units in circulation.
    total_supply: U256,
    /// Balance book.
    balances: HashMap<Address, U256>,
    /// Allowance book, keyed by owner then spender.
    allowances: HashMap<Address, HashMap<Address, U256>>,
    /// Journal of emitted events.
    events: EventJournal<TokenEvent>,
}

impl Token {
    /// Deploy a token at `address`, crediting the whole initial supply to
    /// `owner`.
    pub fn deploy(
        address: Address,
        metadata: TokenMetadata,
        initial_supply: U256,
        owner: Address,
    ) -> Self {
        let mut token = Self {
            address,
            metadata,
            total_supply: U256::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            events: EventJournal::new(),
        };
        token.mint(owner, initial_supply);
        debug!(token = %address, %owner, supply = %initial_supply, "deployed token");
        token
    }

    /// Move `value` from the caller to `to`.
    pub fn transfer(&mut self, ctx: CallContext, to: Address, value: U256) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }
        self.debit(ctx.sender(), value)?;
        self.credit(to, value);
        self.events.record(TokenEvent::Transfer { from: ctx.sender(), to, value });
        debug!(token = %self.address, from = %ctx.sender(), %to, %value, "transfer");
        Ok(())
    }

    /// Allow `spender` to move up to `value` of the caller's funds. Replaces
    /// any prior allowance for that spender.
    pub fn approve(
        &mut self,
        ctx: CallContext,
        spender: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        if spender.is_zero() {
            return Err(TokenError::InvalidSpender);
        }
        self.allowances.entry(ctx.sender()).or_default().insert(spender, value);
        self.events.record(TokenEvent::Approval { owner: ctx.sender(), spender, value });
        debug!(token = %self.address, owner = %ctx.sender(), %spender, %value, "approval");
        Ok(())
    }

    /// Move `value` from `from` to `to` on the strength of the caller's
    /// allowance, debiting the allowance by the amount moved.
    pub fn transfer_from(
        &mut self,
        ctx: CallContext,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::InvalidRecipient);
        }

        let spender = ctx.sender();
        let allowance = self.allowance_of(from, spender);
        let remaining = allowance.checked_sub(value).ok_or(TokenError::AllowanceExceeded {
            owner: from,
            spender,
            allowance,
            needed: value,
        })?;

        self.debit(from, value)?;
        self.credit(to, value);
        self.allowances.entry(from).or_default().insert(spender, remaining);
        self.events.record(TokenEvent::Transfer { from, to, value });
        debug!(token = %self.address, %from, %to, %spender, %value, "delegated transfer");
        Ok(())
    }

    /// The allowance `owner` has granted `spender`.
    ///
    /// Rejects zero addresses on either side, as the deployed getter does.
    pub fn allowance(&self, owner: Address, spender: Address) -> Result<U256, TokenError> {
        if owner.is_zero() || spender.is_zero() {
            return Err(TokenError::InvalidAddress);
        }
        Ok(self.allowance_of(owner, spender))
    }

    /// The balance of `account`, zero if it has never held funds.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// The address this instance is deployed at.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Human-readable token name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Display decimals.
    pub const fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// Total units in circulation.
    pub const fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Borrow the journal of emitted events.
    pub const fn events(&self) -> &EventJournal<TokenEvent> {
        &self.events
    }

    /// Credit `value` to `to` and grow the supply, journaling a mint.
    pub(crate) fn mint(&mut self, to: Address, value: U256) {
        self.credit(to, value);
        self.total_supply = self.total_supply.saturating_add(value);
        self.events.record(TokenEvent::Transfer { from: Address::ZERO, to, value });
    }

    /// Allowance lookup without the zero-address guard.
    fn allowance_of(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&owner).and_then(|m| m.get(&spender)).copied().unwrap_or_default()
    }

    fn debit(&mut self, account: Address, value: U256) -> Result<(), TokenError> {
        let balance = self.balance_of(account);
        let remaining = balance.checked_sub(value).ok_or(TokenError::InsufficientBalance {
            account,
            balance,
            needed: value,
        })?;
        self.balances.insert(account, remaining);
        Ok(())
    }

    fn credit(&mut self, account: Address, value: U256) {
        let entry = self.balances.entry(account).or_default();
        *entry = entry.saturating_add(value);
    }
}
