use soroban_sdk::{contracttype, Address, Env, String};

use crate::error::CampaignError;

pub type CampaignId = u32;
pub type RequestIndex = u32;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Approver(CampaignId, Address),
    Request(CampaignId, RequestIndex),
    Approval(CampaignId, RequestIndex, Address), // (Campaign, Request, Voter)
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub manager: Address,
    pub minimum_contribution: i128,
    pub approvers_count: u32,
    pub requests_count: u32,
    pub balance: i128, // Pooled custody held for this campaign
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SpendingRequest {
    pub description: String,
    pub value: i128,
    pub recipient: Address,
    pub complete: bool,
    pub approval_count: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignSummary {
    pub minimum_contribution: i128,
    pub balance: i128,
    pub requests_count: u32,
    pub approvers_count: u32,
    pub manager: Address,
}

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn read_token(e: &Env) -> Result<Address, CampaignError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CampaignError::NotInitialized)
}

pub fn write_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn read_campaign_count(e: &Env) -> Result<u32, CampaignError> {
    e.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .ok_or(CampaignError::NotInitialized)
}

pub fn write_campaign_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance(e);
}

pub fn read_campaign(e: &Env, id: CampaignId) -> Result<Campaign, CampaignError> {
    if !is_initialized(e) {
        return Err(CampaignError::NotInitialized);
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id))
        .ok_or(CampaignError::CampaignNotFound)
}

pub fn write_campaign(e: &Env, id: CampaignId, campaign: &Campaign) {
    let key = PersistentKey::Campaign(id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn is_approver(e: &Env, id: CampaignId, account: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&PersistentKey::Approver(id, account.clone()))
        .unwrap_or(false)
}

pub fn write_approver(e: &Env, id: CampaignId, account: &Address) {
    let key = PersistentKey::Approver(id, account.clone());
    e.storage().persistent().set(&key, &true);
    extend_persistent(e, &key);
}

pub fn read_request(
    e: &Env,
    id: CampaignId,
    index: RequestIndex,
) -> Result<SpendingRequest, CampaignError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Request(id, index))
        .ok_or(CampaignError::IndexOutOfRange)
}

pub fn write_request(e: &Env, id: CampaignId, index: RequestIndex, request: &SpendingRequest) {
    let key = PersistentKey::Request(id, index);
    e.storage().persistent().set(&key, request);
    extend_persistent(e, &key);
}

pub fn has_approved(e: &Env, id: CampaignId, index: RequestIndex, voter: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&PersistentKey::Approval(id, index, voter.clone()))
}

pub fn write_approval(e: &Env, id: CampaignId, index: RequestIndex, voter: &Address) {
    let key = PersistentKey::Approval(id, index, voter.clone());
    e.storage().persistent().set(&key, &true);
    extend_persistent(e, &key);
}
