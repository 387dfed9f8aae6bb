//! Per-channel cost breakdown table.

use campaign_core::channels::{Channel, ChannelMetricsTable};
use campaign_core::types::{CampaignInputs, CampaignMetrics};
use serde::Serialize;

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostUnit {
    PerUser,
    PerWeek,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelBreakdownRow {
    pub channel: Channel,
    /// Volume-adjusted price in `unit`.
    pub unit_cost: f64,
    pub unit: CostUnit,
    /// Reach percentage for reach channels, weeks for duration channels.
    pub allocation: u32,
    pub engagement_rate: f64,
}

impl ChannelBreakdownRow {
    pub fn cost_label(&self, currency: &str) -> String {
        match self.unit {
            CostUnit::PerUser => format!("{currency} {:.4}/user", self.unit_cost),
            CostUnit::PerWeek => format!("{}/week", format::currency(currency, self.unit_cost)),
        }
    }

    pub fn allocation_label(&self) -> String {
        match self.unit {
            CostUnit::PerUser => format!("{}% of users", self.allocation),
            CostUnit::PerWeek => format!("{} weeks", self.allocation),
        }
    }

    pub fn impact_label(&self) -> String {
        format!(
            "{:.1}% {}",
            self.engagement_rate * 100.0,
            self.channel.impact_label()
        )
    }
}

pub fn channel_breakdown(
    inputs: &CampaignInputs,
    metrics: &CampaignMetrics,
    table: &ChannelMetricsTable,
) -> Vec<ChannelBreakdownRow> {
    Channel::ALL
        .into_iter()
        .map(|channel| {
            let (unit_cost, unit, allocation) = match channel {
                Channel::Statement => (
                    metrics.weekly_statement_cost,
                    CostUnit::PerWeek,
                    inputs.duration.statement_weeks,
                ),
                Channel::Banner => (
                    metrics.weekly_banner_cost,
                    CostUnit::PerWeek,
                    inputs.duration.banner_weeks,
                ),
                reach => (
                    metrics.adjusted_costs.get(reach),
                    CostUnit::PerUser,
                    inputs.allocation.get(reach).unwrap_or_default(),
                ),
            };
            ChannelBreakdownRow {
                channel,
                unit_cost,
                unit,
                allocation,
                engagement_rate: table.get(channel).engagement_rate,
            }
        })
        .collect()
}
