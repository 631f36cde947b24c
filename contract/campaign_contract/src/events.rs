use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage::{CampaignId, RequestIndex};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub manager: Address,
    pub minimum_contribution: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ApproverAddedEvent {
    pub campaign_id: CampaignId,
    pub approver: Address,
    pub approvers_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct RequestCreatedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub description: String,
    pub value: i128,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct RequestApprovedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct RequestFinalizedEvent {
    pub campaign_id: CampaignId,
    pub request_index: RequestIndex,
    pub recipient: Address,
    pub value: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish(
        (Symbol::new(env, "contributed"), event.campaign_id),
        event,
    );
}

pub fn emit_approver_added(env: &Env, event: ApproverAddedEvent) {
    env.events().publish(
        (Symbol::new(env, "approver_added"), event.campaign_id),
        event,
    );
}

pub fn emit_request_created(env: &Env, event: RequestCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_created"), event.campaign_id),
        event,
    );
}

pub fn emit_request_approved(env: &Env, event: RequestApprovedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_approved"), event.campaign_id),
        event,
    );
}

pub fn emit_request_finalized(env: &Env, event: RequestFinalizedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_finalized"), event.campaign_id),
        event,
    );
}
