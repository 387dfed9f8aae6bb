use campaign_core::config::ReportConfig;
use campaign_core::types::{CampaignInputs, CampaignMetrics};
use campaign_pricing::{ConversionRateAdvisory, PricingModel, ReachStatus};
use campaign_reporting::format;
use campaign_reporting::{channel_breakdown, ChannelBreakdownRow, Invoice, SummaryReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// One evaluated campaign with everything the reports draw from.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub inputs: CampaignInputs,
    pub metrics: CampaignMetrics,
    pub reach: ReachStatus,
    pub conversion: ConversionRateAdvisory,
    pub breakdown: Vec<ChannelBreakdownRow>,
}

impl Evaluation {
    pub fn new(
        model: &PricingModel,
        inputs: CampaignInputs,
        metrics: CampaignMetrics,
        reach: ReachStatus,
        conversion: ConversionRateAdvisory,
    ) -> Self {
        let breakdown = channel_breakdown(&inputs, &metrics, model.channel_metrics());
        Self {
            inputs,
            metrics,
            reach,
            conversion,
            breakdown,
        }
    }

    pub fn summary(&self, at: DateTime<Utc>, config: &ReportConfig) -> SummaryReport {
        SummaryReport::build(&self.inputs, &self.metrics, at, config)
    }

    pub fn invoice(&self, at: DateTime<Utc>, config: &ReportConfig) -> Invoice {
        Invoice::build(&self.inputs, &self.metrics, at, config)
    }
}

pub fn overview(eval: &Evaluation, config: &ReportConfig) -> Result<String, std::fmt::Error> {
    let cur = config.currency.as_str();
    let m = &eval.metrics;
    let i = &eval.inputs;
    let mut out = String::new();

    writeln!(out, "Campaign Metrics")?;
    writeln!(out, "  Total Marketing Cost   {}", format::currency(cur, m.marketing_cost))?;
    writeln!(out, "  Estimated Approvals    {}", format::count(m.num_approvals))?;
    writeln!(out, "  Cost Per Acquisition   {} {:.2}", cur, m.cpa)?;
    writeln!(out)?;

    writeln!(out, "Channel Cost Breakdown")?;
    writeln!(
        out,
        "  {:<20} {:<22} {:<16} {}",
        "Channel", "Cost", "Reach/Duration", "Expected Impact"
    )?;
    for row in &eval.breakdown {
        writeln!(
            out,
            "  {:<20} {:<22} {:<16} {}",
            row.channel.display_name(),
            row.cost_label(cur),
            row.allocation_label(),
            row.impact_label()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Campaign Insights")?;
    writeln!(
        out,
        "  Current target reach:      {} users",
        format::grouped(i.target_users as f64, 0)
    )?;
    writeln!(out, "  Channel reach utilization: {}%", i.allocation.total())?;
    writeln!(out, "  Average cost per user:     {}", format::unit_price(cur, m.cost_per_user))?;
    writeln!(out, "  Base conversion rate:      {}", format::percent(i.base_approval_rate, 2))?;
    writeln!(
        out,
        "  Adjusted conversion rate:  {}",
        format::percent(m.adjusted_approval_rate, 4)
    )?;
    writeln!(out, "  Total effectiveness score: {:.4}", m.total_effectiveness)?;
    writeln!(out, "  Diminishing factor:        {:.2}", m.diminishing_factor)?;

    let mut advisories = vec![eval.reach.message()];
    if let Some(msg) = eval.conversion.message() {
        advisories.push(msg.to_string());
    }
    writeln!(out)?;
    writeln!(out, "Advisories")?;
    for msg in advisories {
        writeln!(out, "  - {msg}")?;
    }

    Ok(out)
}
