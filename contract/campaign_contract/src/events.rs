use soroban_sdk::{contracttype, Address, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub name: String,
    pub owner: Address,
    pub manager: Address,
    pub reward_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignNameUpdatedEvent {
    pub campaign_id: CampaignId,
    pub name: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignDatesUpdatedEvent {
    pub campaign_id: CampaignId,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardAmountUpdatedEvent {
    pub campaign_id: CampaignId,
    pub reward_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct TaxRecipientUpdatedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct TaxRateUpdatedEvent {
    pub campaign_id: CampaignId,
    pub rate_bps: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignFundedEvent {
    pub campaign_id: CampaignId,
    pub amount: i128,
    pub tax: i128,
    pub net: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ScoreRegisteredEvent {
    pub campaign_id: CampaignId,
    pub participant: Address,
    pub score: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub participant: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_name_updated(env: &soroban_sdk::Env, event: CampaignNameUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_name_updated"),),
        event,
    );
}

pub fn emit_campaign_dates_updated(env: &soroban_sdk::Env, event: CampaignDatesUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_dates_updated"),),
        event,
    );
}

pub fn emit_reward_amount_updated(env: &soroban_sdk::Env, event: RewardAmountUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_amount_updated"),),
        event,
    );
}

pub fn emit_tax_recipient_updated(env: &soroban_sdk::Env, event: TaxRecipientUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "tax_recipient_updated"),),
        event,
    );
}

pub fn emit_tax_rate_updated(env: &soroban_sdk::Env, event: TaxRateUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "tax_rate_updated"),),
        event,
    );
}

pub fn emit_campaign_funded(env: &soroban_sdk::Env, event: CampaignFundedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_funded"),),
        event,
    );
}

pub fn emit_score_registered(env: &soroban_sdk::Env, event: ScoreRegisteredEvent) {
    env.events().publish(
        (Symbol::new(env, "score_registered"),),
        event,
    );
}

pub fn emit_reward_withdrawn(env: &soroban_sdk::Env, event: RewardWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_withdrawn"),),
        event,
    );
}
