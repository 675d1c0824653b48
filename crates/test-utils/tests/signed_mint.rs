use alloy::{
    primitives::{Address, U256},
    signers::SignerSync,
};
use campus_test_utils::{env::TestEnv, fixtures::deploy_idolor_token, users::*};
use campus_token::{mint_digest, TokenEvent};

#[test]
fn recipients_mint_against_their_own_signature() {
    let mut env = TestEnv::new();
    let mut token = deploy_idolor_token(&mut env);
    let signer = &TEST_SIGNERS[0];
    let recipient = signer.address();
    let amount = U256::from(500_000_000u64);

    let digest = mint_digest(recipient, amount);
    let signature = signer.sign_message_sync(digest.as_slice()).unwrap();

    let supply_before = token.total_supply();
    token.mint_signed(env.ctx_for(recipient), recipient, amount, &signature).unwrap();

    assert_eq!(token.balance_of(recipient), amount);
    assert_eq!(token.total_supply(), supply_before + amount);
    assert_eq!(
        token.events().last(),
        Some(&TokenEvent::Transfer { from: Address::ZERO, to: recipient, value: amount })
    );
}

#[test]
fn foreign_signatures_cannot_mint() {
    let mut env = TestEnv::new();
    let mut token = deploy_idolor_token(&mut env);
    let recipient = TEST_USERS[0];
    let amount = U256::from(500_000_000u64);

    // Signed by someone who is not the recipient.
    let digest = mint_digest(recipient, amount);
    let signature = TEST_SIGNERS[1].sign_message_sync(digest.as_slice()).unwrap();

    let err = token
        .mint_signed(env.ctx_for(recipient), recipient, amount, &signature)
        .unwrap_err();
    assert_eq!(err.to_string(), "NOMINT: Invalid signature");
    assert_eq!(token.balance_of(recipient), U256::ZERO);
}

#[test]
fn tampered_amounts_break_the_signature() {
    let mut env = TestEnv::new();
    let mut token = deploy_idolor_token(&mut env);
    let signer = &TEST_SIGNERS[0];
    let recipient = signer.address();

    let digest = mint_digest(recipient, U256::from(100u64));
    let signature = signer.sign_message_sync(digest.as_slice()).unwrap();

    let err = token
        .mint_signed(env.ctx_for(recipient), recipient, U256::from(200u64), &signature)
        .unwrap_err();
    assert_eq!(err.to_string(), "NOMINT: Invalid signature");
    assert_eq!(token.total_supply(), U256::from(1_000_000_000_000u64));
}
