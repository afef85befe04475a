#![no_std]

mod events;
mod storage_types;


use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, Env, String, Vec,
};

use storage_types::{
    DataKey, PersistentKey, BASIS_POINTS, TTL_INSTANCE, TTL_PERSISTENT,
};

pub use storage_types::{CampaignId, DirectoryDefaults, Error};

/// Creation surface of the campaign registry contract.
#[contractclient(name = "CampaignRegistryClient")]
pub trait CampaignRegistry {
    fn create_campaign(
        env: Env,
        name: String,
        owner: Address,
        manager: Address,
        start_time: u64,
        end_time: u64,
        reward_amount: i128,
        reward_token: Address,
        tax_recipient: Address,
        tax_rate_bps: u32,
    ) -> CampaignId;
}

#[contract]
pub struct DirectoryContract;

#[contractimpl]
impl DirectoryContract {
    /// Initialize the directory with its admin, the campaign registry it
    /// creates entries in, and the defaults copied into every campaign.
    pub fn initialize(
        e: Env,
        admin: Address,
        registry: Address,
        default_token: Address,
        default_tax_recipient: Address,
        default_tax_rate_bps: u32,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, Error::AlreadyInitialized);
        }

        admin.require_auth();

        if default_tax_rate_bps > BASIS_POINTS {
            panic_with_error!(&e, Error::InvalidTaxRate);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Registry, &registry);
        e.storage().instance().set(&DataKey::DefaultToken, &default_token);
        e.storage().instance().set(&DataKey::DefaultTaxRecipient, &default_tax_recipient);
        e.storage().instance().set(&DataKey::DefaultTaxRateBps, &default_tax_rate_bps);

        extend_instance(&e);
    }

    /// Designate the single principal allowed to create campaigns.
    /// Admin only; a new designation replaces the previous one.
    pub fn set_manager(e: Env, caller: Address, manager: Address) {
        caller.require_auth();

        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized));
        if caller != admin {
            panic_with_error!(&e, Error::Unauthorized);
        }

        e.storage().instance().set(&DataKey::Manager, &manager);
        extend_instance(&e);

        events::emit_manager_changed(&e, events::ManagerChangedEvent { manager });
    }

    /// Create a campaign on behalf of `owner`. Only the designated manager
    /// may call this; the new campaign is owned by `owner`, managed by the
    /// designated manager, and carries the directory defaults.
    pub fn create_campaign(
        e: Env,
        caller: Address,
        name: String,
        start_time: u64,
        end_time: u64,
        reward_amount: i128,
        owner: Address,
    ) -> CampaignId {
        caller.require_auth();

        let manager: Address = e
            .storage()
            .instance()
            .get(&DataKey::Manager)
            .unwrap_or_else(|| panic_with_error!(&e, Error::ManagerNotSet));
        if caller != manager {
            panic_with_error!(&e, Error::Unauthorized);
        }

        let registry: Address = e.storage().instance().get(&DataKey::Registry).unwrap();
        let default_token: Address = e.storage().instance().get(&DataKey::DefaultToken).unwrap();
        let default_tax_recipient: Address =
            e.storage().instance().get(&DataKey::DefaultTaxRecipient).unwrap();
        let default_tax_rate_bps: u32 =
            e.storage().instance().get(&DataKey::DefaultTaxRateBps).unwrap();

        let campaign_id = CampaignRegistryClient::new(&e, &registry).create_campaign(
            &name,
            &owner,
            &manager,
            &start_time,
            &end_time,
            &reward_amount,
            &default_token,
            &default_tax_recipient,
            &default_tax_rate_bps,
        );

        let mut all = read_index(&e, &PersistentKey::AllCampaigns);
        all.push_back(campaign_id);
        write_index(&e, &PersistentKey::AllCampaigns, &all);

        let owner_key = PersistentKey::OwnerCampaigns(owner.clone());
        let mut owned = read_index(&e, &owner_key);
        owned.push_back(campaign_id);
        write_index(&e, &owner_key, &owned);

        extend_instance(&e);

        events::emit_campaign_registered(
            &e,
            events::CampaignRegisteredEvent {
                campaign_id,
                name,
                owner,
                manager,
            },
        );

        campaign_id
    }

    /// View functions
    pub fn get_campaigns(e: Env) -> Vec<CampaignId> {
        read_index(&e, &PersistentKey::AllCampaigns)
    }

    pub fn get_campaigns_by_owner(e: Env, owner: Address) -> Vec<CampaignId> {
        read_index(&e, &PersistentKey::OwnerCampaigns(owner))
    }

    pub fn get_campaign_count(e: Env) -> u32 {
        read_index(&e, &PersistentKey::AllCampaigns).len()
    }

    pub fn get_manager(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Manager)
    }

    pub fn get_admin(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized))
    }

    pub fn get_registry(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Registry)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized))
    }

    pub fn get_defaults(e: Env) -> DirectoryDefaults {
        let reward_token: Address = e
            .storage()
            .instance()
            .get(&DataKey::DefaultToken)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized));
        let tax_recipient: Address =
            e.storage().instance().get(&DataKey::DefaultTaxRecipient).unwrap();
        let tax_rate_bps: u32 =
            e.storage().instance().get(&DataKey::DefaultTaxRateBps).unwrap();

        DirectoryDefaults {
            reward_token,
            tax_recipient,
            tax_rate_bps,
        }
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn read_index(e: &Env, key: &PersistentKey) -> Vec<CampaignId> {
    e.storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| Vec::new(e))
}

fn write_index(e: &Env, key: &PersistentKey, ids: &Vec<CampaignId>) {
    e.storage().persistent().set(key, ids);
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
