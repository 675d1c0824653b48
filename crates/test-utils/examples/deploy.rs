//! Deploys the whole campus fleet into an in-memory world and prints the
//! resulting addresses and parameters as JSON.
//!
//! Parameters come from `CAMPUS_*` environment variables; unset variables
//! fall back to the packaged deployment values.

use campus_auction::SealedBidAuction;
use campus_piggybank::{PiggyBank, PiggyNft};
use campus_school::School;
use campus_test_utils::{config::DeployConfig, env::TestEnv};
use campus_token::{Token, TokenMetadata};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = DeployConfig::from_env()?;
    let mut env = TestEnv::live();

    let token = Token::deploy(
        env.next_address(),
        TokenMetadata::new(cfg.token_name.clone(), cfg.token_symbol.clone(), cfg.token_decimals),
        cfg.token_supply,
        cfg.deployer,
    );
    info!(address = %token.address(), "token deployed");

    let mut nft = PiggyNft::deploy(env.next_address(), cfg.deployer);
    let bank = PiggyBank::deploy_with_nft(
        env.next_address(),
        cfg.bank_target,
        env.now() + cfg.bank_period,
        cfg.deployer,
        token.address(),
        nft.address(),
    );
    nft.transfer_ownership(env.ctx_for(cfg.deployer), bank.address())?;
    info!(address = %bank.address(), nft = %nft.address(), "piggy bank deployed");

    let school = School::deploy(env.next_address(), cfg.deployer);
    info!(address = %school.address(), "school deployed");

    let auction = SealedBidAuction::deploy(
        env.next_address(),
        env.ctx_for(cfg.deployer),
        token.address(),
        cfg.auction_min_bid,
        cfg.auction_duration,
    );
    info!(address = %auction.address(), "auction deployed");

    let report = serde_json::json!({
        "deployer": cfg.deployer,
        "token": {
            "address": token.address(),
            "name": token.name(),
            "symbol": token.symbol(),
            "decimals": token.decimals(),
            "total_supply": token.total_supply(),
        },
        "piggy_bank": {
            "address": bank.address(),
            "nft": nft.address(),
            "target_amount": bank.target_amount(),
            "withdrawal_date": bank.withdrawal_date(),
        },
        "school": {
            "address": school.address(),
            "principal": school.principal(),
        },
        "auction": {
            "address": auction.address(),
            "min_bid": auction.min_bid(),
            "deadline": auction.deadline(),
            "reveal_deadline": auction.reveal_deadline(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
