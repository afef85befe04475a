use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::{Campaign, Error};

/// Role a campaign operation demands of its caller.
///
/// Owner and manager are disjoint capability sets, not a hierarchy: the
/// owner controls the campaign economics, the manager controls the tax
/// configuration.
#[derive(Clone, Copy)]
pub enum Role {
    Owner,
    Manager,
}

/// Authenticate `caller` and check it holds `role` on `campaign`.
pub fn require_role(e: &Env, caller: &Address, role: Role, campaign: &Campaign) {
    caller.require_auth();

    let holder = match role {
        Role::Owner => &campaign.owner,
        Role::Manager => &campaign.manager,
    };

    if caller != holder {
        panic_with_error!(e, Error::Unauthorized);
    }
}
