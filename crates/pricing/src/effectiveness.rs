//! Weighted channel effectiveness, projected approvals and CPA.

use campaign_core::channels::{Channel, ChannelMetricsTable};
use campaign_core::types::{ChannelAllocation, MAX_TARGET_USERS, MIN_TARGET_USERS};
use serde::{Deserialize, Serialize};

const MIN_DIMINISHING_FACTOR: f64 = 0.5;
const MAX_DIMINISHING_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessOutcome {
    pub marketing_cost: f64,
    pub num_approvals: f64,
    pub cpa: f64,
    pub adjusted_approval_rate: f64,
    pub total_effectiveness: f64,
}

/// Scale factor on projected approvals: 0.5 at the smallest audience rising
/// linearly to 1.0 at the largest, clamped outside that domain.
pub fn diminishing_factor(target_users: u64) -> f64 {
    let lo = MIN_TARGET_USERS as f64;
    let hi = MAX_TARGET_USERS as f64;
    let t = ((target_users as f64 - lo) / (hi - lo)).clamp(0.0, 1.0);
    MIN_DIMINISHING_FACTOR + (MAX_DIMINISHING_FACTOR - MIN_DIMINISHING_FACTOR) * t
}

/// Effectiveness contributed by each channel.
///
/// Reach channels scale with their allocation. Statement and banner always
/// contribute their full weighted engagement; their week count only affects
/// cost.
pub fn channel_contributions(
    allocation: &ChannelAllocation,
    table: &ChannelMetricsTable,
) -> [(Channel, f64); 5] {
    Channel::ALL.map(|channel| {
        let metrics = table.get(channel);
        let contribution = match allocation.get(channel) {
            Some(pct) => f64::from(pct) / 100.0 * metrics.weight * metrics.engagement_rate,
            None => metrics.weighted_engagement(),
        };
        (channel, contribution)
    })
}

/// Run the effectiveness model for one set of inputs.
///
/// Allocations are used as given, so a reach total above 100% yields an
/// effectiveness above the nominal ceiling. When no approvals are projected
/// the CPA is reported as `0.0`.
pub fn compute_campaign_metrics(
    target_users: u64,
    cost_per_user: f64,
    base_approval_rate: f64,
    diminishing_factor: f64,
    setup_cost: f64,
    channel_allocations: &ChannelAllocation,
    channel_metrics: &ChannelMetricsTable,
) -> EffectivenessOutcome {
    let users = target_users as f64;
    let marketing_cost = cost_per_user * users + setup_cost;

    let total_effectiveness: f64 = channel_contributions(channel_allocations, channel_metrics)
        .iter()
        .map(|(_, c)| c)
        .sum();

    let adjusted_approval_rate = base_approval_rate * total_effectiveness;
    let num_approvals = users * adjusted_approval_rate * diminishing_factor;
    let cpa = if num_approvals > 0.0 {
        marketing_cost / num_approvals
    } else {
        0.0
    };

    EffectivenessOutcome {
        marketing_cost,
        num_approvals,
        cpa,
        adjusted_approval_rate,
        total_effectiveness,
    }
}
