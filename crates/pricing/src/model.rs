use campaign_core::channels::{channel_metrics, ChannelMetricsTable};
use campaign_core::config::PricingConfig;
use campaign_core::types::{CampaignInputs, CampaignMetrics, ChannelCosts};
use tracing::debug;

use crate::cost::{adjust_channel_costs, blended_cost_per_user, VolumeBand};
use crate::effectiveness::{compute_campaign_metrics, diminishing_factor};

/// Owns the channel metrics table and the base rate card, and turns
/// [`CampaignInputs`] into [`CampaignMetrics`].
///
/// Holds no mutable state: evaluating the same inputs twice gives the same
/// metrics.
#[derive(Debug, Clone)]
pub struct PricingModel {
    metrics: ChannelMetricsTable,
    /// Per user for reach channels, per week for duration channels.
    base_rates: ChannelCosts,
}

impl PricingModel {
    pub fn new(metrics: ChannelMetricsTable, base_rates: ChannelCosts) -> Self {
        Self {
            metrics,
            base_rates,
        }
    }

    /// Model with the hand-tuned channel metrics and the configured rate card.
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(channel_metrics(), config.base_rates())
    }

    pub fn channel_metrics(&self) -> &ChannelMetricsTable {
        &self.metrics
    }

    pub fn base_rates(&self) -> &ChannelCosts {
        &self.base_rates
    }

    /// Pre-discount costs for the chosen durations.
    pub fn base_costs(&self, inputs: &CampaignInputs) -> ChannelCosts {
        ChannelCosts {
            statement: self.base_rates.statement * f64::from(inputs.duration.statement_weeks),
            banner: self.base_rates.banner * f64::from(inputs.duration.banner_weeks),
            ..self.base_rates
        }
    }

    pub fn evaluate(&self, inputs: &CampaignInputs) -> CampaignMetrics {
        let adjusted_costs = adjust_channel_costs(inputs.target_users, self.base_costs(inputs));
        let weekly = adjust_channel_costs(inputs.target_users, self.base_rates);

        let cost_per_user =
            blended_cost_per_user(&adjusted_costs, &inputs.allocation, inputs.target_users);
        let factor = diminishing_factor(inputs.target_users);

        let outcome = compute_campaign_metrics(
            inputs.target_users,
            cost_per_user,
            inputs.base_approval_rate,
            factor,
            inputs.setup_cost,
            &inputs.allocation,
            &self.metrics,
        );

        debug!(
            target_users = inputs.target_users,
            band = ?VolumeBand::for_audience(inputs.target_users),
            cost_per_user,
            diminishing_factor = factor,
            total_effectiveness = outcome.total_effectiveness,
            marketing_cost = outcome.marketing_cost,
            num_approvals = outcome.num_approvals,
            cpa = outcome.cpa,
            "Campaign evaluated"
        );

        CampaignMetrics {
            marketing_cost: outcome.marketing_cost,
            num_approvals: outcome.num_approvals,
            cpa: outcome.cpa,
            adjusted_approval_rate: outcome.adjusted_approval_rate,
            total_effectiveness: outcome.total_effectiveness,
            cost_per_user,
            diminishing_factor: factor,
            adjusted_costs,
            weekly_statement_cost: weekly.statement,
            weekly_banner_cost: weekly.banner,
        }
    }
}

impl Default for PricingModel {
    fn default() -> Self {
        Self::from_config(&PricingConfig::default())
    }
}
