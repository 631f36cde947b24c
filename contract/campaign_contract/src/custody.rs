use soroban_sdk::{token, Address, Env};

use crate::error::CampaignError;
use crate::storage;

/// Pull a contribution from `from` into the contract's custody.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), CampaignError> {
    let token_address = storage::read_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` out of the contract's custody to `to`.
pub fn release(env: &Env, to: &Address, amount: i128) -> Result<(), CampaignError> {
    let token_address = storage::read_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

