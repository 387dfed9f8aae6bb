//! Volume discounts and blended per-user cost.

use campaign_core::types::{ChannelAllocation, ChannelCosts};
use serde::{Deserialize, Serialize};

/// Audience-size band that determines the volume discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeBand {
    /// Up to 100,000 users: list price.
    Standard,
    /// 100,001 to 200,000 users.
    Mid,
    /// More than 200,000 users.
    Large,
}

impl VolumeBand {
    /// Upper bounds are inclusive: 100,000 is `Standard`, 200,000 is `Mid`.
    pub fn for_audience(target_users: u64) -> Self {
        if target_users <= 100_000 {
            VolumeBand::Standard
        } else if target_users <= 200_000 {
            VolumeBand::Mid
        } else {
            VolumeBand::Large
        }
    }

    /// Price multiplier per channel for this band.
    pub fn multipliers(&self) -> ChannelCosts {
        match self {
            VolumeBand::Standard => ChannelCosts::new(1.0, 1.0, 1.0, 1.0, 1.0),
            VolumeBand::Mid => ChannelCosts::new(0.90, 0.90, 0.90, 0.95, 0.80),
            VolumeBand::Large => ChannelCosts::new(0.85, 0.85, 0.85, 0.95, 0.75),
        }
    }
}

/// Apply the volume discount for `target_users` to each base cost.
pub fn adjust_channel_costs(target_users: u64, base: ChannelCosts) -> ChannelCosts {
    let m = VolumeBand::for_audience(target_users).multipliers();
    ChannelCosts {
        sms: base.sms * m.sms,
        app: base.app * m.app,
        edm: base.edm * m.edm,
        statement: base.statement * m.statement,
        banner: base.banner * m.banner,
    }
}

/// Average cost per targeted user. Reach channels are weighted by their
/// reach percentage; duration channel totals are spread over the audience.
pub fn blended_cost_per_user(
    adjusted: &ChannelCosts,
    allocation: &ChannelAllocation,
    target_users: u64,
) -> f64 {
    let reach = adjusted.sms * f64::from(allocation.sms) / 100.0
        + adjusted.app * f64::from(allocation.app) / 100.0
        + adjusted.edm * f64::from(allocation.edm) / 100.0;

    if target_users == 0 {
        return reach;
    }

    let users = target_users as f64;
    reach + adjusted.statement / users + adjusted.banner / users
}
