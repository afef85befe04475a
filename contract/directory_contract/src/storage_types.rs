use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Manager,
    Registry,
    DefaultToken,
    DefaultTaxRecipient,
    DefaultTaxRateBps,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    AllCampaigns,
    OwnerCampaigns(Address),
}

pub type CampaignId = u64;

// Deployment-time defaults copied into every new campaign
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DirectoryDefaults {
    pub reward_token: Address,
    pub tax_recipient: Address,
    pub tax_rate_bps: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    ManagerNotSet = 4,
    InvalidTaxRate = 5,
}

// Constants
pub const BASIS_POINTS: u32 = 10000; // 100% in basis points
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
