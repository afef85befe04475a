use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::events;
use crate::storage_types::{Campaign, Error, ScoreRecord, BASIS_POINTS};

/// Split a nominal deposit into `(tax, net)` at `rate_bps`.
///
/// Floor division, so `tax + net == amount` for every rate in
/// `[0, BASIS_POINTS]`. The tax is a cut out of the nominal amount,
/// not a surcharge on top of it.
pub fn tax_split(e: &Env, amount: i128, rate_bps: u32) -> (i128, i128) {
    let tax = amount
        .checked_mul(rate_bps as i128)
        .unwrap_or_else(|| panic_with_error!(e, Error::Overflow))
        / BASIS_POINTS as i128;
    (tax, amount - tax)
}

/// Floor share of `pool` owed to `score` out of `total_score`.
///
/// The sum of all shares computed against the same total is at most
/// `pool`; the rounding dust stays in the pool.
pub fn proportional_share(e: &Env, pool: i128, score: u64, total_score: u64) -> i128 {
    if total_score == 0 {
        return 0;
    }
    pool.checked_mul(score as i128)
        .unwrap_or_else(|| panic_with_error!(e, Error::Overflow))
        / total_score as i128
}

/// Record a participant's score, first write wins.
///
/// A participant whose stored score is nonzero is never overwritten; the
/// attempt is a no-op. A stored score of 0 counts as unset, so it can be
/// replaced. The registration event is published either way, carrying the
/// submitted score. Returns whether the write landed.
///
/// Mutates `campaign.total_score` in place; the caller persists the
/// campaign entry.
pub fn record_score(e: &Env, campaign: &mut Campaign, participant: &Address, score: u64) -> bool {
    let landed = match crate::read_score(e, campaign.id, participant) {
        Some(existing) if existing.score > 0 => false,
        _ => {
            let record = ScoreRecord {
                participant: participant.clone(),
                score,
                withdrawn: false,
            };
            crate::write_score(e, campaign.id, &record);

            campaign.total_score = campaign
                .total_score
                .checked_add(score)
                .unwrap_or_else(|| panic_with_error!(e, Error::Overflow));
            true
        }
    };

    events::emit_score_registered(
        e,
        events::ScoreRegisteredEvent {
            campaign_id: campaign.id,
            participant: participant.clone(),
            score,
        },
    );

    landed
}

/// Pull the deposit from the owner, forward the tax cut, retain the net
/// pool as custody.
///
/// The campaign entry is committed before any token movement, so a
/// re-entering token recipient can only ever observe the funded state.
pub fn apply_funding(e: &Env, campaign: &mut Campaign, amount: i128) {
    if campaign.funded {
        panic_with_error!(e, Error::AlreadyFunded);
    }
    if amount <= 0 {
        panic_with_error!(e, Error::InvalidAmount);
    }

    let (tax, net) = tax_split(e, amount, campaign.tax.rate_bps);

    campaign.funded = true;
    campaign.reward_amount = amount;
    campaign.distributable_pool = net;
    crate::write_campaign(e, campaign);

    let token_client = token::Client::new(e, &campaign.reward_token);
    let contract = e.current_contract_address();

    // Pull requires a prior allowance from the owner; failures propagate
    // from the token contract and revert the whole call.
    token_client.transfer_from(&contract, &campaign.owner, &contract, &amount);
    if tax > 0 {
        token_client.transfer(&contract, &campaign.tax.recipient, &tax);
    }

    events::emit_campaign_funded(
        e,
        events::CampaignFundedEvent {
            campaign_id: campaign.id,
            amount,
            tax,
            net,
        },
    );
}

/// Pay out `participant`'s proportional share, at most once.
///
/// The withdrawn flag is committed before the transfer out of custody.
pub fn settle_withdrawal(e: &Env, campaign: &Campaign, participant: &Address) -> i128 {
    if !campaign.funded {
        panic_with_error!(e, Error::NotFunded);
    }

    let mut record = match crate::read_score(e, campaign.id, participant) {
        Some(record) if record.score > 0 => record,
        _ => panic_with_error!(e, Error::NoScore),
    };
    if record.withdrawn {
        panic_with_error!(e, Error::AlreadyWithdrawn);
    }

    let share = proportional_share(
        e,
        campaign.distributable_pool,
        record.score,
        campaign.total_score,
    );

    record.withdrawn = true;
    crate::write_score(e, campaign.id, &record);

    let token_client = token::Client::new(e, &campaign.reward_token);
    token_client.transfer(&e.current_contract_address(), participant, &share);

    events::emit_reward_withdrawn(
        e,
        events::RewardWithdrawnEvent {
            campaign_id: campaign.id,
            participant: participant.clone(),
            amount: share,
        },
    );

    share
}
