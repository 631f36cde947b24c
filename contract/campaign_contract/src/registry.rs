use soroban_sdk::{log, Address, Env, Vec};

use crate::error::CampaignError;
use crate::events;
use crate::storage::{self, Campaign, CampaignId};

pub fn initialize(env: &Env, token: &Address) -> Result<(), CampaignError> {
    if storage::is_initialized(env) {
        return Err(CampaignError::AlreadyInitialized);
    }

    storage::write_token(env, token);
    storage::write_campaign_count(env, 0);
    Ok(())
}

/// Open a new campaign managed by `manager` and append it to the listing.
pub fn create_campaign(
    env: &Env,
    manager: Address,
    minimum_contribution: i128,
) -> Result<CampaignId, CampaignError> {
    manager.require_auth();

    if minimum_contribution < 0 {
        return Err(CampaignError::InvalidAmount);
    }

    let campaign_id = storage::read_campaign_count(env)?;
    let next = campaign_id
        .checked_add(1)
        .ok_or(CampaignError::ArithmeticError)?;

    let campaign = Campaign {
        manager: manager.clone(),
        minimum_contribution,
        approvers_count: 0,
        requests_count: 0,
        balance: 0,
    };

    storage::write_campaign(env, campaign_id, &campaign);
    storage::write_campaign_count(env, next);

    log!(env, "campaign created", campaign_id, minimum_contribution);
    events::emit_campaign_created(
        env,
        events::CampaignCreatedEvent {
            campaign_id,
            manager,
            minimum_contribution,
        },
    );

    Ok(campaign_id)
}

/// Every campaign id in creation order. Cost grows with the registry; use
/// `get_campaigns_page` once the listing gets large.
pub fn get_campaigns(env: &Env) -> Result<Vec<CampaignId>, CampaignError> {
    let count = storage::read_campaign_count(env)?;
    let mut campaigns = Vec::new(env);
    for id in 0..count {
        campaigns.push_back(id);
    }
    Ok(campaigns)
}

/// Up to `limit` ids starting at `start`, capped at `MAX_PAGE_SIZE`.
pub fn get_campaigns_page(
    env: &Env,
    start: u32,
    limit: u32,
) -> Result<Vec<CampaignId>, CampaignError> {
    let count = storage::read_campaign_count(env)?;
    let end = start
        .saturating_add(limit.min(storage::MAX_PAGE_SIZE))
        .min(count);

    let mut campaigns = Vec::new(env);
    for id in start..end {
        campaigns.push_back(id);
    }
    Ok(campaigns)
}

pub fn get_campaign_count(env: &Env) -> Result<u32, CampaignError> {
    storage::read_campaign_count(env)
}
