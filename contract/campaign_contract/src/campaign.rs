use soroban_sdk::{log, Address, Env, String};

use crate::custody;
use crate::error::CampaignError;
use crate::events;
use crate::storage::{self, Campaign, CampaignId, CampaignSummary, RequestIndex, SpendingRequest};

/// Strict majority with the threshold floor-divided: 3 approvers need 2 votes,
/// 4 approvers need 3.
pub fn quorum_reached(approval_count: u32, approvers_count: u32) -> bool {
    approval_count > approvers_count / 2
}

fn require_manager(campaign: &Campaign, caller: &Address) -> Result<(), CampaignError> {
    if *caller != campaign.manager {
        return Err(CampaignError::Unauthorized);
    }
    Ok(())
}

/// Accept a contribution strictly above the campaign minimum and admit the
/// contributor as an approver.
pub fn contribute(
    env: &Env,
    campaign_id: CampaignId,
    contributor: Address,
    amount: i128,
) -> Result<(), CampaignError> {
    contributor.require_auth();

    let mut campaign = storage::read_campaign(env, campaign_id)?;
    if amount <= campaign.minimum_contribution {
        return Err(CampaignError::InsufficientContribution);
    }

    campaign.balance = campaign
        .balance
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticError)?;

    let newly_admitted = !storage::is_approver(env, campaign_id, &contributor);
    if newly_admitted {
        campaign.approvers_count = campaign
            .approvers_count
            .checked_add(1)
            .ok_or(CampaignError::ArithmeticError)?;
    }

    custody::collect(env, &contributor, amount)?;

    if newly_admitted {
        storage::write_approver(env, campaign_id, &contributor);
    }
    storage::write_campaign(env, campaign_id, &campaign);

    log!(env, "contribution accepted", campaign_id, amount);
    events::emit_contributed(
        env,
        events::ContributedEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
            balance: campaign.balance,
        },
    );
    if newly_admitted {
        events::emit_approver_added(
            env,
            events::ApproverAddedEvent {
                campaign_id,
                approver: contributor,
                approvers_count: campaign.approvers_count,
            },
        );
    }

    Ok(())
}

pub fn create_request(
    env: &Env,
    campaign_id: CampaignId,
    caller: Address,
    description: String,
    value: i128,
    recipient: Address,
) -> Result<RequestIndex, CampaignError> {
    caller.require_auth();

    let mut campaign = storage::read_campaign(env, campaign_id)?;
    require_manager(&campaign, &caller)?;

    // Balance is only checked at finalization.
    if value < 0 {
        return Err(CampaignError::InvalidAmount);
    }
    // A payout to the contract itself would leave funds no campaign owns.
    if recipient == env.current_contract_address() {
        return Err(CampaignError::InvalidRecipient);
    }

    let request_index = campaign.requests_count;
    campaign.requests_count = request_index
        .checked_add(1)
        .ok_or(CampaignError::ArithmeticError)?;

    let request = SpendingRequest {
        description: description.clone(),
        value,
        recipient: recipient.clone(),
        complete: false,
        approval_count: 0,
    };

    storage::write_request(env, campaign_id, request_index, &request);
    storage::write_campaign(env, campaign_id, &campaign);

    events::emit_request_created(
        env,
        events::RequestCreatedEvent {
            campaign_id,
            request_index,
            description,
            value,
            recipient,
        },
    );

    Ok(request_index)
}

pub fn approve_request(
    env: &Env,
    campaign_id: CampaignId,
    approver: Address,
    request_index: RequestIndex,
) -> Result<(), CampaignError> {
    approver.require_auth();

    storage::read_campaign(env, campaign_id)?;
    if !storage::is_approver(env, campaign_id, &approver) {
        return Err(CampaignError::NotApprover);
    }

    let mut request = storage::read_request(env, campaign_id, request_index)?;
    if request.complete {
        return Err(CampaignError::AlreadyFinalized);
    }
    if storage::has_approved(env, campaign_id, request_index, &approver) {
        return Err(CampaignError::AlreadyApproved);
    }

    request.approval_count = request
        .approval_count
        .checked_add(1)
        .ok_or(CampaignError::ArithmeticError)?;

    storage::write_approval(env, campaign_id, request_index, &approver);
    storage::write_request(env, campaign_id, request_index, &request);

    events::emit_request_approved(
        env,
        events::RequestApprovedEvent {
            campaign_id,
            request_index,
            approver,
            approval_count: request.approval_count,
        },
    );

    Ok(())
}

/// Pay out an approved request and close it for good.
pub fn finalize(
    env: &Env,
    campaign_id: CampaignId,
    caller: Address,
    request_index: RequestIndex,
) -> Result<(), CampaignError> {
    caller.require_auth();

    let mut campaign = storage::read_campaign(env, campaign_id)?;
    require_manager(&campaign, &caller)?;

    let mut request = storage::read_request(env, campaign_id, request_index)?;
    if request.complete {
        return Err(CampaignError::AlreadyFinalized);
    }
    if !quorum_reached(request.approval_count, campaign.approvers_count) {
        log!(
            env,
            "quorum not met",
            request.approval_count,
            campaign.approvers_count
        );
        return Err(CampaignError::QuorumNotMet);
    }
    if campaign.balance < request.value {
        return Err(CampaignError::InsufficientFunds);
    }

    campaign.balance -= request.value;
    request.complete = true;

    custody::release(env, &request.recipient, request.value)?;

    storage::write_request(env, campaign_id, request_index, &request);
    storage::write_campaign(env, campaign_id, &campaign);

    log!(env, "request finalized", campaign_id, request_index, request.value);
    events::emit_request_finalized(
        env,
        events::RequestFinalizedEvent {
            campaign_id,
            request_index,
            recipient: request.recipient,
            value: request.value,
        },
    );

    Ok(())
}

pub fn manager(env: &Env, campaign_id: CampaignId) -> Result<Address, CampaignError> {
    Ok(storage::read_campaign(env, campaign_id)?.manager)
}

pub fn minimum_contribution(env: &Env, campaign_id: CampaignId) -> Result<i128, CampaignError> {
    Ok(storage::read_campaign(env, campaign_id)?.minimum_contribution)
}

pub fn approvers_count(env: &Env, campaign_id: CampaignId) -> Result<u32, CampaignError> {
    Ok(storage::read_campaign(env, campaign_id)?.approvers_count)
}

pub fn is_approver(
    env: &Env,
    campaign_id: CampaignId,
    account: &Address,
) -> Result<bool, CampaignError> {
    storage::read_campaign(env, campaign_id)?;
    Ok(storage::is_approver(env, campaign_id, account))
}

pub fn get_request(
    env: &Env,
    campaign_id: CampaignId,
    request_index: RequestIndex,
) -> Result<SpendingRequest, CampaignError> {
    storage::read_campaign(env, campaign_id)?;
    storage::read_request(env, campaign_id, request_index)
}

pub fn get_requests_count(env: &Env, campaign_id: CampaignId) -> Result<u32, CampaignError> {
    Ok(storage::read_campaign(env, campaign_id)?.requests_count)
}

pub fn get_balance(env: &Env, campaign_id: CampaignId) -> Result<i128, CampaignError> {
    Ok(storage::read_campaign(env, campaign_id)?.balance)
}

pub fn get_summary(env: &Env, campaign_id: CampaignId) -> Result<CampaignSummary, CampaignError> {
    let campaign = storage::read_campaign(env, campaign_id)?;
    Ok(CampaignSummary {
        minimum_contribution: campaign.minimum_contribution,
        balance: campaign.balance,
        requests_count: campaign.requests_count,
        approvers_count: campaign.approvers_count,
        manager: campaign.manager,
    })
}
