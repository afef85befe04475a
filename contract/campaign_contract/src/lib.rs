#![no_std]

mod access;
mod events;
mod ledger;
mod storage_types;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

use access::{require_role, Role};
use storage_types::{
    DataKey, PersistentKey, TaxConfig, BASIS_POINTS, TTL_INSTANCE, TTL_PERSISTENT,
};

pub use storage_types::{Campaign, CampaignId, Error, ScoreRecord};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the contract with the directory allowed to create campaigns
    pub fn initialize(e: Env, directory: Address) {
        if e.storage().instance().has(&DataKey::Directory) {
            panic_with_error!(&e, Error::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Directory, &directory);
        e.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        e.storage().instance().set(&DataKey::CampaignCount, &0u64);

        extend_instance(&e);
    }

    /// Create a new campaign entry. Only the directory may call this.
    pub fn create_campaign(
        e: Env,
        name: String,
        owner: Address,
        manager: Address,
        start_time: u64,
        end_time: u64,
        reward_amount: i128,
        reward_token: Address,
        tax_recipient: Address,
        tax_rate_bps: u32,
    ) -> CampaignId {
        let directory: Address = e
            .storage()
            .instance()
            .get(&DataKey::Directory)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized));
        directory.require_auth();

        if tax_rate_bps > BASIS_POINTS {
            panic_with_error!(&e, Error::InvalidTaxRate);
        }
        if end_time <= e.ledger().timestamp() {
            panic_with_error!(&e, Error::InvalidDates);
        }
        if reward_amount < 0 {
            panic_with_error!(&e, Error::InvalidAmount);
        }

        let campaign_id: CampaignId =
            e.storage().instance().get(&DataKey::NextCampaignId).unwrap();

        let campaign = Campaign {
            id: campaign_id,
            name: name.clone(),
            owner: owner.clone(),
            manager: manager.clone(),
            start_time,
            end_time,
            reward_token,
            reward_amount,
            funded: false,
            distributable_pool: 0,
            total_score: 0,
            tax: TaxConfig {
                recipient: tax_recipient,
                rate_bps: tax_rate_bps,
            },
            created_at: e.ledger().timestamp(),
        };
        write_campaign(&e, &campaign);

        e.storage().instance().set(&DataKey::NextCampaignId, &(campaign_id + 1));
        let count: u64 = e.storage().instance().get(&DataKey::CampaignCount).unwrap();
        e.storage().instance().set(&DataKey::CampaignCount, &(count + 1));
        extend_instance(&e);

        events::emit_campaign_created(
            &e,
            events::CampaignCreatedEvent {
                campaign_id,
                name,
                owner,
                manager,
                reward_amount,
            },
        );

        campaign_id
    }

    /// Rename a campaign. Owner only, before funding.
    pub fn update_name(e: Env, caller: Address, campaign_id: CampaignId, name: String) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);
        require_not_funded(&e, &campaign);

        campaign.name = name.clone();
        write_campaign(&e, &campaign);

        events::emit_campaign_name_updated(
            &e,
            events::CampaignNameUpdatedEvent { campaign_id, name },
        );
    }

    /// Move the campaign window. Owner only, before funding; the end date
    /// must be strictly in the future.
    pub fn update_dates(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
        start_time: u64,
        end_time: u64,
    ) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);
        require_not_funded(&e, &campaign);

        if end_time <= e.ledger().timestamp() {
            panic_with_error!(&e, Error::InvalidDates);
        }

        campaign.start_time = start_time;
        campaign.end_time = end_time;
        write_campaign(&e, &campaign);

        events::emit_campaign_dates_updated(
            &e,
            events::CampaignDatesUpdatedEvent {
                campaign_id,
                start_time,
                end_time,
            },
        );
    }

    /// Change the planned deposit. Owner only, before funding and strictly
    /// before the campaign start time.
    pub fn update_reward_amount(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
        reward_amount: i128,
    ) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);
        require_not_funded(&e, &campaign);

        if e.ledger().timestamp() >= campaign.start_time {
            panic_with_error!(&e, Error::CampaignStarted);
        }
        if reward_amount < 0 {
            panic_with_error!(&e, Error::InvalidAmount);
        }

        campaign.reward_amount = reward_amount;
        write_campaign(&e, &campaign);

        events::emit_reward_amount_updated(
            &e,
            events::RewardAmountUpdatedEvent {
                campaign_id,
                reward_amount,
            },
        );
    }

    /// Redirect the tax cut. Manager only, any time.
    pub fn set_tax_recipient(e: Env, caller: Address, campaign_id: CampaignId, recipient: Address) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Manager, &campaign);

        campaign.tax.recipient = recipient.clone();
        write_campaign(&e, &campaign);

        events::emit_tax_recipient_updated(
            &e,
            events::TaxRecipientUpdatedEvent {
                campaign_id,
                recipient,
            },
        );
    }

    /// Change the tax rate. Manager only, any time, capped at 100%.
    pub fn set_tax_rate(e: Env, caller: Address, campaign_id: CampaignId, rate_bps: u32) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Manager, &campaign);

        if rate_bps > BASIS_POINTS {
            panic_with_error!(&e, Error::InvalidTaxRate);
        }

        campaign.tax.rate_bps = rate_bps;
        write_campaign(&e, &campaign);

        events::emit_tax_rate_updated(
            &e,
            events::TaxRateUpdatedEvent {
                campaign_id,
                rate_bps,
            },
        );
    }

    /// Deposit the reward. Owner only, exactly once per campaign.
    ///
    /// The tax cut goes to the tax recipient; the rest becomes the
    /// distributable pool. The funded amount becomes the authoritative
    /// nominal reward amount.
    pub fn fund(e: Env, caller: Address, campaign_id: CampaignId, amount: i128) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);

        ledger::apply_funding(&e, &mut campaign, amount);
    }

    /// Record one contributor score. Owner only, first write wins.
    pub fn register_score(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
        participant: Address,
        score: u64,
    ) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);

        ledger::record_score(&e, &mut campaign, &participant, score);
        write_campaign(&e, &campaign);
    }

    /// Record a batch of contributor scores. Owner only.
    ///
    /// The first-write-wins rule applies to each pair independently, so a
    /// batch may land only some of its entries.
    pub fn register_scores(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
        participants: Vec<Address>,
        scores: Vec<u64>,
    ) {
        let mut campaign = read_campaign(&e, campaign_id);
        require_role(&e, &caller, Role::Owner, &campaign);

        if participants.len() != scores.len() {
            panic_with_error!(&e, Error::LengthMismatch);
        }

        for (participant, score) in participants.iter().zip(scores.iter()) {
            ledger::record_score(&e, &mut campaign, &participant, score);
        }
        write_campaign(&e, &campaign);
    }

    /// Withdraw the caller's proportional reward share, at most once.
    pub fn withdraw(e: Env, participant: Address, campaign_id: CampaignId) -> i128 {
        participant.require_auth();

        let campaign = read_campaign(&e, campaign_id);
        ledger::settle_withdrawal(&e, &campaign, &participant)
    }

    /// View functions
    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Campaign {
        read_campaign(&e, campaign_id)
    }

    pub fn get_score(e: Env, campaign_id: CampaignId, participant: Address) -> Option<ScoreRecord> {
        read_score(&e, campaign_id, &participant)
    }

    /// Share the participant could withdraw right now, 0 when there is
    /// nothing to claim.
    pub fn get_pending_reward(e: Env, campaign_id: CampaignId, participant: Address) -> i128 {
        let campaign = read_campaign(&e, campaign_id);
        if !campaign.funded {
            return 0;
        }

        match read_score(&e, campaign_id, &participant) {
            Some(record) if record.score > 0 && !record.withdrawn => ledger::proportional_share(
                &e,
                campaign.distributable_pool,
                record.score,
                campaign.total_score,
            ),
            _ => 0,
        }
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
    }

    pub fn get_directory(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Directory)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized))
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn require_not_funded(e: &Env, campaign: &Campaign) {
    if campaign.funded {
        panic_with_error!(e, Error::AlreadyFunded);
    }
}

pub(crate) fn read_campaign(e: &Env, campaign_id: CampaignId) -> Campaign {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(e, Error::CampaignNotFound))
}

pub(crate) fn write_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub(crate) fn read_score(
    e: &Env,
    campaign_id: CampaignId,
    participant: &Address,
) -> Option<ScoreRecord> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Score(campaign_id, participant.clone()))
}

pub(crate) fn write_score(e: &Env, campaign_id: CampaignId, record: &ScoreRecord) {
    let key = PersistentKey::Score(campaign_id, record.participant.clone());
    e.storage().persistent().set(&key, record);
    extend_persistent(e, &key);
}
