#![no_std]

mod campaign;
mod custody;
mod error;
mod events;
mod registry;
mod storage;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::CampaignError;
pub use storage::{CampaignId, CampaignSummary, RequestIndex, SpendingRequest};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the contract with the native asset used for custody
    pub fn initialize(env: Env, token: Address) -> Result<(), CampaignError> {
        registry::initialize(&env, &token)
    }

    /// Create a new campaign; the authorizing `manager` becomes its manager
    pub fn create_campaign(
        env: Env,
        manager: Address,
        minimum_contribution: i128,
    ) -> Result<CampaignId, CampaignError> {
        registry::create_campaign(&env, manager, minimum_contribution)
    }

    /// List every campaign in creation order
    pub fn get_campaigns(env: Env) -> Result<Vec<CampaignId>, CampaignError> {
        registry::get_campaigns(&env)
    }

    /// List at most `limit` campaigns starting at id `start`
    pub fn get_campaigns_page(
        env: Env,
        start: u32,
        limit: u32,
    ) -> Result<Vec<CampaignId>, CampaignError> {
        registry::get_campaigns_page(&env, start, limit)
    }

    pub fn get_campaign_count(env: Env) -> Result<u32, CampaignError> {
        registry::get_campaign_count(&env)
    }

    /// Contribute strictly more than the minimum and become an approver
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CampaignError> {
        campaign::contribute(&env, campaign_id, contributor, amount)
    }

    /// Propose a spending request (manager only)
    pub fn create_request(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> Result<RequestIndex, CampaignError> {
        campaign::create_request(&env, campaign_id, caller, description, value, recipient)
    }

    /// Vote for a spending request (approvers only, once per request)
    pub fn approve_request(
        env: Env,
        campaign_id: CampaignId,
        approver: Address,
        request_index: RequestIndex,
    ) -> Result<(), CampaignError> {
        campaign::approve_request(&env, campaign_id, approver, request_index)
    }

    /// Release an approved request's funds to its recipient (manager only)
    pub fn finalize(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
        request_index: RequestIndex,
    ) -> Result<(), CampaignError> {
        campaign::finalize(&env, campaign_id, caller, request_index)
    }

    pub fn manager(env: Env, campaign_id: CampaignId) -> Result<Address, CampaignError> {
        campaign::manager(&env, campaign_id)
    }

    pub fn minimum_contribution(env: Env, campaign_id: CampaignId) -> Result<i128, CampaignError> {
        campaign::minimum_contribution(&env, campaign_id)
    }

    pub fn approvers_count(env: Env, campaign_id: CampaignId) -> Result<u32, CampaignError> {
        campaign::approvers_count(&env, campaign_id)
    }

    pub fn is_approver(
        env: Env,
        campaign_id: CampaignId,
        account: Address,
    ) -> Result<bool, CampaignError> {
        campaign::is_approver(&env, campaign_id, &account)
    }

    pub fn get_request(
        env: Env,
        campaign_id: CampaignId,
        request_index: RequestIndex,
    ) -> Result<SpendingRequest, CampaignError> {
        campaign::get_request(&env, campaign_id, request_index)
    }

    pub fn get_requests_count(env: Env, campaign_id: CampaignId) -> Result<u32, CampaignError> {
        campaign::get_requests_count(&env, campaign_id)
    }

    pub fn get_balance(env: Env, campaign_id: CampaignId) -> Result<i128, CampaignError> {
        campaign::get_balance(&env, campaign_id)
    }

    /// Minimum, balance, request count, approver count and manager in one read
    pub fn get_summary(env: Env, campaign_id: CampaignId) -> Result<CampaignSummary, CampaignError> {
        campaign::get_summary(&env, campaign_id)
    }
}
