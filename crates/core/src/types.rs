use serde::{Deserialize, Serialize};

use crate::channels::{Channel, ChannelMetricsTable};
use crate::error::{CampaignError, CampaignResult};

pub const MIN_TARGET_USERS: u64 = 50_000;
pub const MAX_TARGET_USERS: u64 = 500_000;
pub const MIN_APPROVAL_RATE: f64 = 0.001;
pub const MAX_APPROVAL_RATE: f64 = 0.15;
pub const DEFAULT_SETUP_COST: f64 = 10_000.0;

// ─── Inputs ─────────────────────────────────────────────────────────────────

/// Reach percentage per reach-based channel. The sum is never clamped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelAllocation {
    pub sms: u32,
    pub app: u32,
    pub edm: u32,
}

impl ChannelAllocation {
    pub fn new(sms: u32, app: u32, edm: u32) -> Self {
        Self { sms, app, edm }
    }

    pub fn recommended(table: &ChannelMetricsTable) -> Self {
        Self {
            sms: table.sms.bounds.recommended(),
            app: table.app.bounds.recommended(),
            edm: table.edm.bounds.recommended(),
        }
    }

    /// Percentage for a reach channel; `None` for duration channels.
    pub fn get(&self, channel: Channel) -> Option<u32> {
        match channel {
            Channel::Sms => Some(self.sms),
            Channel::App => Some(self.app),
            Channel::Edm => Some(self.edm),
            Channel::Statement | Channel::Banner => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, u32)> + '_ {
        Channel::REACH
            .into_iter()
            .filter_map(move |c| self.get(c).map(|pct| (c, pct)))
    }

    /// Total reach across channels, may exceed 100.
    pub fn total(&self) -> u32 {
        self.sms + self.app + self.edm
    }
}

/// Weeks active for each duration-based channel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationAllocation {
    pub statement_weeks: u32,
    pub banner_weeks: u32,
}

impl DurationAllocation {
    pub fn new(statement_weeks: u32, banner_weeks: u32) -> Self {
        Self {
            statement_weeks,
            banner_weeks,
        }
    }

    pub fn recommended(table: &ChannelMetricsTable) -> Self {
        Self {
            statement_weeks: table.statement.bounds.recommended(),
            banner_weeks: table.banner.bounds.recommended(),
        }
    }

    pub fn get(&self, channel: Channel) -> Option<u32> {
        match channel {
            Channel::Statement => Some(self.statement_weeks),
            Channel::Banner => Some(self.banner_weeks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignInputs {
    pub target_users: u64,
    /// Expected conversion rate as a fraction, e.g. `0.0549`.
    pub base_approval_rate: f64,
    pub setup_cost: f64,
    pub allocation: ChannelAllocation,
    pub duration: DurationAllocation,
}

impl CampaignInputs {
    /// Check the inputs against the domains the model is tuned for.
    /// The model itself accepts anything; this gate belongs to the caller.
    pub fn validate(&self, table: &ChannelMetricsTable) -> CampaignResult<()> {
        if !(MIN_TARGET_USERS..=MAX_TARGET_USERS).contains(&self.target_users) {
            return Err(CampaignError::Validation(format!(
                "target_users {} outside [{}, {}]",
                self.target_users, MIN_TARGET_USERS, MAX_TARGET_USERS
            )));
        }

        if !self.base_approval_rate.is_finite()
            || !(MIN_APPROVAL_RATE..=MAX_APPROVAL_RATE).contains(&self.base_approval_rate)
        {
            return Err(CampaignError::Validation(format!(
                "base_approval_rate {} outside [{}, {}]",
                self.base_approval_rate, MIN_APPROVAL_RATE, MAX_APPROVAL_RATE
            )));
        }

        if !self.setup_cost.is_finite() || self.setup_cost < 0.0 {
            return Err(CampaignError::Validation(format!(
                "setup_cost {} must be a non-negative amount",
                self.setup_cost
            )));
        }

        for (channel, pct) in self.allocation.iter() {
            let bounds = table.get(channel).bounds;
            if !bounds.contains(pct) {
                let (min, max) = bounds.range();
                return Err(CampaignError::Validation(format!(
                    "{} reach {}% outside [{}, {}]",
                    channel, pct, min, max
                )));
            }
        }

        for channel in Channel::DURATION {
            let weeks = self.duration.get(channel).unwrap_or_default();
            let bounds = table.get(channel).bounds;
            if !bounds.contains(weeks) {
                let (min, max) = bounds.range();
                return Err(CampaignError::Validation(format!(
                    "{} duration {} weeks outside [{}, {}]",
                    channel, weeks, min, max
                )));
            }
        }

        Ok(())
    }
}

// ─── Costs & Metrics ────────────────────────────────────────────────────────

/// One cost per channel. Reach channels carry a per-user cost, duration
/// channels a lump sum (per week or for the whole run, depending on context).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelCosts {
    pub sms: f64,
    pub app: f64,
    pub edm: f64,
    pub statement: f64,
    pub banner: f64,
}

impl ChannelCosts {
    pub fn new(sms: f64, app: f64, edm: f64, statement: f64, banner: f64) -> Self {
        Self {
            sms,
            app,
            edm,
            statement,
            banner,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Sms => self.sms,
            Channel::App => self.app,
            Channel::Edm => self.edm,
            Channel::Statement => self.statement,
            Channel::Banner => self.banner,
        }
    }

    /// True when every component is `>=` the matching component of `other`.
    pub fn dominates(&self, other: &ChannelCosts) -> bool {
        Channel::ALL
            .into_iter()
            .all(|c| self.get(c) >= other.get(c))
    }
}

/// Everything derived from one evaluation of [`CampaignInputs`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignMetrics {
    pub marketing_cost: f64,
    pub num_approvals: f64,
    /// Cost per acquisition; `0.0` when no approvals are projected.
    pub cpa: f64,
    pub adjusted_approval_rate: f64,
    pub total_effectiveness: f64,
    pub cost_per_user: f64,
    pub diminishing_factor: f64,
    /// Volume-adjusted costs. Statement and banner hold the whole run.
    pub adjusted_costs: ChannelCosts,
    /// Volume-adjusted weekly rate for statement and banner.
    pub weekly_statement_cost: f64,
    pub weekly_banner_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::channel_metrics;

    fn sample_inputs() -> CampaignInputs {
        let table = channel_metrics();
        CampaignInputs {
            target_users: 200_000,
            base_approval_rate: 0.0549,
            setup_cost: DEFAULT_SETUP_COST,
            allocation: ChannelAllocation::recommended(&table),
            duration: DurationAllocation::recommended(&table),
        }
    }

    #[test]
    fn test_recommended_inputs_are_valid() {
        let inputs = sample_inputs();
        assert_eq!(inputs.allocation, ChannelAllocation::new(20, 30, 25));
        assert_eq!(inputs.duration, DurationAllocation::new(4, 3));
        assert!(inputs.validate(&channel_metrics()).is_ok());
    }

    #[test]
    fn test_validate_target_users_domain() {
        let table = channel_metrics();
        let mut inputs = sample_inputs();

        inputs.target_users = MIN_TARGET_USERS;
        assert!(inputs.validate(&table).is_ok());
        inputs.target_users = MAX_TARGET_USERS;
        assert!(inputs.validate(&table).is_ok());

        inputs.target_users = 49_999;
        assert!(matches!(
            inputs.validate(&table),
            Err(CampaignError::Validation(_))
        ));
        inputs.target_users = 500_001;
        assert!(inputs.validate(&table).is_err());
    }

    #[test]
    fn test_validate_approval_rate() {
        let table = channel_metrics();
        let mut inputs = sample_inputs();

        inputs.base_approval_rate = 0.0;
        assert!(inputs.validate(&table).is_err());
        inputs.base_approval_rate = 0.2;
        assert!(inputs.validate(&table).is_err());
        inputs.base_approval_rate = f64::NAN;
        assert!(inputs.validate(&table).is_err());
        inputs.base_approval_rate = 0.15;
        assert!(inputs.validate(&table).is_ok());
    }

    #[test]
    fn test_validate_channel_bounds() {
        let table = channel_metrics();

        let mut inputs = sample_inputs();
        inputs.allocation.app = 101;
        let err = inputs.validate(&table).unwrap_err();
        assert!(err.to_string().contains("App Notification"));

        let mut inputs = sample_inputs();
        inputs.duration.banner_weeks = 13;
        assert!(inputs.validate(&table).is_err());

        let mut inputs = sample_inputs();
        inputs.setup_cost = -1.0;
        assert!(inputs.validate(&table).is_err());
    }

    #[test]
    fn test_over_allocation_is_not_a_validation_error() {
        let mut inputs = sample_inputs();
        inputs.allocation = ChannelAllocation::new(100, 100, 100);
        assert_eq!(inputs.allocation.total(), 300);
        assert!(inputs.validate(&channel_metrics()).is_ok());
    }

    #[test]
    fn test_allocation_lookup() {
        let alloc = ChannelAllocation::new(10, 20, 30);
        assert_eq!(alloc.get(Channel::App), Some(20));
        assert_eq!(alloc.get(Channel::Banner), None);
        let collected: Vec<_> = alloc.iter().collect();
        assert_eq!(
            collected,
            vec![(Channel::Sms, 10), (Channel::App, 20), (Channel::Edm, 30)]
        );
    }

    #[test]
    fn test_channel_costs_dominates() {
        let high = ChannelCosts::new(1.0, 1.0, 1.0, 1.0, 1.0);
        let low = ChannelCosts::new(0.9, 1.0, 0.5, 0.95, 0.8);
        assert!(high.dominates(&low));
        assert!(!low.dominates(&high));
        assert!(low.dominates(&low));
    }
}
