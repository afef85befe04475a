use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Directory,
    NextCampaignId,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Score(CampaignId, Address),
}

pub type CampaignId = u64;

// Tax cut taken out of the nominal deposit at funding time
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TaxConfig {
    pub recipient: Address,
    pub rate_bps: u32, // Basis points (e.g., 500 = 5%)
}

// One reward round
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub owner: Address,
    pub manager: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reward_token: Address,
    pub reward_amount: i128,        // Nominal deposit, mutable until funded
    pub funded: bool,
    pub distributable_pool: i128,   // Net of tax, fixed at funding
    pub total_score: u64,           // Always the sum of recorded scores
    pub tax: TaxConfig,
    pub created_at: u64,
}

// One participant's stake in a campaign.
// First write wins: a score of 0 is indistinguishable from "never set".
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ScoreRecord {
    pub participant: Address,
    pub score: u64,
    pub withdrawn: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    CampaignNotFound = 4,
    AlreadyFunded = 5,
    NotFunded = 6,
    AlreadyWithdrawn = 7,
    NoScore = 8,
    LengthMismatch = 9,
    InvalidTaxRate = 10,
    InvalidDates = 11,
    CampaignStarted = 12,
    InvalidAmount = 13,
    Overflow = 14,
}

// Constants
pub const BASIS_POINTS: u32 = 10000; // 100% in basis points
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
