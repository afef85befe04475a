use soroban_sdk::{contracttype, Address, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct ManagerChangedEvent {
    pub manager: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignRegisteredEvent {
    pub campaign_id: CampaignId,
    pub name: String,
    pub owner: Address,
    pub manager: Address,
}

pub fn emit_manager_changed(env: &soroban_sdk::Env, event: ManagerChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "manager_changed"),),
        event,
    );
}

pub fn emit_campaign_registered(env: &soroban_sdk::Env, event: CampaignRegisteredEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_registered"),),
        event,
    );
}
