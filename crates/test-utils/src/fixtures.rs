use crate::{env::TestEnv, users::DEPLOYER};
use alloy::primitives::{utils::parse_ether, Address, U256};
use campus_auction::SealedBidAuction;
use campus_piggybank::{PiggyBank, PiggyNft};
use campus_school::School;
use campus_token::{Token, TokenMetadata};

/// One day in seconds.
pub const DAY: u64 = 86_400;

/// Parse a decimal ether amount into wei.
pub fn eth(amount: &str) -> U256 {
    parse_ether(amount).unwrap()
}

/// The stock ERC20 deployment: a million ether of "TestToken" held by the
/// deployer.
pub fn deploy_token(env: &mut TestEnv) -> Token {
    Token::deploy(
        env.next_address(),
        TokenMetadata::new("TestToken", "TST", 18),
        eth("1000000"),
        DEPLOYER,
    )
}

/// The low-decimals deployment: a trillion raw units of "IDOLOR TOKEN" at
/// 8 decimals.
pub fn deploy_idolor_token(env: &mut TestEnv) -> Token {
    Token::deploy(
        env.next_address(),
        TokenMetadata::new("IDOLOR TOKEN", "ID", 8),
        U256::from(1_000_000_000_000u64),
        DEPLOYER,
    )
}

/// Move `amount` of `token` from the deployer to each of `users`.
pub fn fund(env: &TestEnv, token: &mut Token, users: &[Address], amount: U256) {
    for user in users {
        token.transfer(env.ctx_for(DEPLOYER), *user, amount).unwrap();
    }
}

/// A pot over `token` targeting 100 ether, closing one day past the env
/// clock, managed by the deployer.
pub fn deploy_piggy_bank(env: &mut TestEnv, token: &Token) -> PiggyBank {
    PiggyBank::deploy(env.next_address(), eth("100"), env.now() + DAY, DEPLOYER, token.address())
}

/// [`deploy_piggy_bank`] with a reward collection wired in and handed to
/// the pot, so cadence saves can mint.
pub fn deploy_piggy_bank_with_nft(env: &mut TestEnv, token: &Token) -> (PiggyBank, PiggyNft) {
    let mut nft = PiggyNft::deploy(env.next_address(), DEPLOYER);
    let bank = PiggyBank::deploy_with_nft(
        env.next_address(),
        eth("100"),
        env.now() + DAY,
        DEPLOYER,
        token.address(),
        nft.address(),
    );
    nft.transfer_ownership(env.ctx_for(DEPLOYER), bank.address()).unwrap();
    (bank, nft)
}

/// A fresh registry with the deployer as principal.
pub fn deploy_school(env: &mut TestEnv) -> School {
    School::deploy(env.next_address(), DEPLOYER)
}

/// An auction by the deployer over `token`: minimum bid a tenth of an
/// ether, bidding open for a minute past the env clock.
pub fn deploy_auction(env: &mut TestEnv, token: &Token) -> SealedBidAuction {
    SealedBidAuction::deploy(
        env.next_address(),
        env.ctx_for(DEPLOYER),
        token.address(),
        eth("0.1"),
        60,
    )
}
