use alloy::primitives::{Address, U256};
use campus_test_utils::{
    env::TestEnv,
    fixtures::{deploy_idolor_token, deploy_token, eth},
    users::*,
};
use campus_token::TokenEvent;

#[test]
fn deployment_mints_the_whole_supply_to_the_owner() {
    let mut env = TestEnv::new();
    let token = deploy_token(&mut env);

    assert_eq!(token.name(), "TestToken");
    assert_eq!(token.symbol(), "TST");
    assert_eq!(token.decimals(), 18);
    assert_eq!(token.total_supply(), eth("1000000"));
    assert_eq!(token.balance_of(DEPLOYER), eth("1000000"));
}

#[test]
fn transfers_move_funds_and_journal_events() {
    let mut env = TestEnv::new();
    let mut token = deploy_token(&mut env);
    let [alice, bob, ..] = *TEST_USERS;

    token.transfer(env.ctx_for(DEPLOYER), alice, eth("50")).unwrap();
    token.transfer(env.ctx_for(alice), bob, eth("20")).unwrap();

    assert_eq!(token.balance_of(DEPLOYER), eth("999950"));
    assert_eq!(token.balance_of(alice), eth("30"));
    assert_eq!(token.balance_of(bob), eth("20"));
    assert_eq!(
        token.events().last(),
        Some(&TokenEvent::Transfer { from: alice, to: bob, value: eth("20") })
    );
}

#[test]
fn overdrawn_transfers_revert_untouched() {
    let mut env = TestEnv::new();
    let mut token = deploy_token(&mut env);
    let [alice, bob, ..] = *TEST_USERS;

    let err = token.transfer(env.ctx_for(alice), bob, U256::from(1u64)).unwrap_err();
    assert_eq!(err.to_string(), "Insufficient balance");
    assert_eq!(token.balance_of(bob), U256::ZERO);

    let err = token.transfer(env.ctx_for(DEPLOYER), Address::ZERO, eth("1")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid recipient address");
}

#[test]
fn delegated_spending_consumes_the_allowance() {
    let mut env = TestEnv::new();
    let mut token = deploy_token(&mut env);
    let [spender, recipient, ..] = *TEST_USERS;

    token.approve(env.ctx_for(DEPLOYER), spender, eth("100")).unwrap();
    assert_eq!(token.allowance(DEPLOYER, spender), Ok(eth("100")));

    token.transfer_from(env.ctx_for(spender), DEPLOYER, recipient, eth("60")).unwrap();
    assert_eq!(token.balance_of(recipient), eth("60"));
    assert_eq!(token.allowance(DEPLOYER, spender), Ok(eth("40")));

    let err =
        token.transfer_from(env.ctx_for(spender), DEPLOYER, recipient, eth("50")).unwrap_err();
    assert_eq!(err.to_string(), "Allowance exceeded");
    assert_eq!(token.balance_of(recipient), eth("60"));
}

#[test]
fn allowance_lookups_reject_the_zero_address() {
    let mut env = TestEnv::new();
    let token = deploy_token(&mut env);

    let err = token.allowance(Address::ZERO, DEPLOYER).unwrap_err();
    assert_eq!(err.to_string(), "Invalid address");
    let err = token.allowance(DEPLOYER, Address::ZERO).unwrap_err();
    assert_eq!(err.to_string(), "Invalid address");
}

#[test]
fn the_packaged_token_counts_in_raw_units() {
    let mut env = TestEnv::new();
    let token = deploy_idolor_token(&mut env);

    assert_eq!(token.name(), "IDOLOR TOKEN");
    assert_eq!(token.symbol(), "ID");
    assert_eq!(token.decimals(), 8);
    assert_eq!(token.total_supply(), U256::from(1_000_000_000_000u64));
    assert_eq!(token.balance_of(DEPLOYER), U256::from(1_000_000_000_000u64));
}
