//! Deployment parameters loaded from `CAMPUS_*` environment variables,
//! falling back to the packaged deployment values.

use crate::{fixtures::DAY, users::DEPLOYER};
use alloy::primitives::{
    utils::{parse_ether, UnitsError},
    Address, U256,
};
use std::env;

const DEPLOYER_VAR: &str = "CAMPUS_DEPLOYER";
const TOKEN_NAME_VAR: &str = "CAMPUS_TOKEN_NAME";
const TOKEN_SYMBOL_VAR: &str = "CAMPUS_TOKEN_SYMBOL";
const TOKEN_DECIMALS_VAR: &str = "CAMPUS_TOKEN_DECIMALS";
const TOKEN_SUPPLY_VAR: &str = "CAMPUS_TOKEN_SUPPLY";
const BANK_TARGET_VAR: &str = "CAMPUS_BANK_TARGET";
const BANK_PERIOD_VAR: &str = "CAMPUS_BANK_PERIOD";
const AUCTION_MIN_BID_VAR: &str = "CAMPUS_AUCTION_MIN_BID";
const AUCTION_DURATION_VAR: &str = "CAMPUS_AUCTION_DURATION";

/// Error type for [`DeployConfig`] loading. Captures errors related to
/// loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing or non-unicode environment variable.
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing an integer environment variable.
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing hex from an environment variable.
    #[error("failed to parse hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Error parsing an ether amount from an environment variable.
    #[error("failed to parse ether amount: {0}")]
    Units(#[from] UnitsError),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        Self::Var(s.to_string())
    }
}

/// Load a variable from the environment.
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment, if set.
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load an integer from the environment, falling back when unset.
pub fn load_u64_or(key: &str, default: u64) -> Result<u64, ConfigError> {
    match load_string_opt(key) {
        Some(val) => val.parse::<u64>().map_err(Into::into),
        None => Ok(default),
    }
}

/// Load a small integer from the environment, falling back when unset.
pub fn load_u8_or(key: &str, default: u8) -> Result<u8, ConfigError> {
    match load_string_opt(key) {
        Some(val) => val.parse::<u8>().map_err(Into::into),
        None => Ok(default),
    }
}

/// Load an address from the environment, falling back when unset.
pub fn load_address_or(key: &str, default: Address) -> Result<Address, ConfigError> {
    match load_string_opt(key) {
        Some(val) => val.parse().map_err(Into::into),
        None => Ok(default),
    }
}

/// Load a decimal ether amount from the environment, falling back when
/// unset.
pub fn load_ether_or(key: &str, default: U256) -> Result<U256, ConfigError> {
    match load_string_opt(key) {
        Some(val) => parse_ether(&val).map_err(Into::into),
        None => Ok(default),
    }
}

/// Load a raw unit count from the environment, falling back when unset.
pub fn load_units_or(key: &str, default: U256) -> Result<U256, ConfigError> {
    match load_string_opt(key) {
        Some(val) => val.parse::<u128>().map(U256::from).map_err(Into::into),
        None => Ok(default),
    }
}

/// Deployment parameters for the campus fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// The deploying account.
    pub deployer: Address,
    /// Token name.
    pub token_name: String,
    /// Token ticker symbol.
    pub token_symbol: String,
    /// Token display decimals.
    pub token_decimals: u8,
    /// Initial token supply, in raw units.
    pub token_supply: U256,
    /// Savings target of the pot, in wei.
    pub bank_target: U256,
    /// Seconds of saving before the pot's withdrawal date.
    pub bank_period: u64,
    /// Smallest acceptable auction deposit, in wei.
    pub auction_min_bid: U256,
    /// Seconds the auction accepts sealed bids.
    pub auction_duration: u64,
}

impl DeployConfig {
    /// Load the config from `CAMPUS_*` variables. A variable that is set
    /// must parse; one that is unset falls back to the packaged value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = Self::default();
        Ok(Self {
            deployer: load_address_or(DEPLOYER_VAR, base.deployer)?,
            token_name: load_string_opt(TOKEN_NAME_VAR).unwrap_or(base.token_name),
            token_symbol: load_string_opt(TOKEN_SYMBOL_VAR).unwrap_or(base.token_symbol),
            token_decimals: load_u8_or(TOKEN_DECIMALS_VAR, base.token_decimals)?,
            token_supply: load_units_or(TOKEN_SUPPLY_VAR, base.token_supply)?,
            bank_target: load_ether_or(BANK_TARGET_VAR, base.bank_target)?,
            bank_period: load_u64_or(BANK_PERIOD_VAR, base.bank_period)?,
            auction_min_bid: load_ether_or(AUCTION_MIN_BID_VAR, base.auction_min_bid)?,
            auction_duration: load_u64_or(AUCTION_DURATION_VAR, base.auction_duration)?,
        })
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            deployer: DEPLOYER,
            token_name: "IDOLOR TOKEN".into(),
            token_symbol: "ID".into(),
            token_decimals: 8,
            token_supply: U256::from(1_000_000_000_000u64),
            bank_target: parse_ether("100").unwrap(),
            bank_period: DAY,
            auction_min_bid: parse_ether("100").unwrap(),
            auction_duration: 3_600,
        }
    }
}
