//! Line-itemized campaign proposal / invoice.

use campaign_core::channels::Channel;
use campaign_core::config::ReportConfig;
use campaign_core::error::CampaignResult;
use campaign_core::types::{CampaignInputs, CampaignMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::summary::proposal_reference;
use crate::{csv, format};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: u64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub reference: String,
    pub issued_at: DateTime<Utc>,
    pub currency: String,
    pub line_items: Vec<InvoiceLine>,
    /// Equals the campaign's marketing cost.
    pub total: f64,
}

fn description(channel: Channel) -> &'static str {
    match channel {
        Channel::Sms => "SMS Marketing",
        Channel::App => "App Notifications",
        Channel::Edm => "eDM Campaign",
        Channel::Statement => "Statement Messages",
        Channel::Banner => "Website Banner",
    }
}

impl Invoice {
    pub fn build(
        inputs: &CampaignInputs,
        metrics: &CampaignMetrics,
        issued_at: DateTime<Utc>,
        config: &ReportConfig,
    ) -> Self {
        let users = inputs.target_users as f64;
        let mut line_items = vec![InvoiceLine {
            description: "Campaign Setup Fee".to_string(),
            quantity: 1,
            unit_cost: inputs.setup_cost,
            total_cost: inputs.setup_cost,
        }];

        for (channel, pct) in inputs.allocation.iter() {
            let reached = f64::from(pct) / 100.0 * users;
            let unit_cost = metrics.adjusted_costs.get(channel);
            line_items.push(InvoiceLine {
                description: description(channel).to_string(),
                quantity: reached.round() as u64,
                unit_cost,
                total_cost: unit_cost * reached,
            });
        }

        let durations = [
            (
                Channel::Statement,
                inputs.duration.statement_weeks,
                metrics.weekly_statement_cost,
            ),
            (
                Channel::Banner,
                inputs.duration.banner_weeks,
                metrics.weekly_banner_cost,
            ),
        ];
        for (channel, weeks, weekly) in durations {
            line_items.push(InvoiceLine {
                description: description(channel).to_string(),
                quantity: u64::from(weeks),
                unit_cost: weekly,
                total_cost: metrics.adjusted_costs.get(channel),
            });
        }

        debug!(
            lines = line_items.len(),
            total = metrics.marketing_cost,
            "Invoice built"
        );

        Self {
            reference: proposal_reference(&config.reference_prefix, &issued_at),
            issued_at,
            currency: config.currency.clone(),
            line_items,
            total: metrics.marketing_cost,
        }
    }

    /// Sum of the individual line totals.
    pub fn line_total(&self) -> f64 {
        self.line_items.iter().map(|l| l.total_cost).sum()
    }

    /// CSV with one row per line item and a closing `TOTAL` row. The reference
    /// and date appear on the first row only.
    pub fn to_csv(&self) -> String {
        let unit_header = format!("Unit Cost ({})", self.currency);
        let total_header = format!("Total Cost ({})", self.currency);
        let header = [
            "Item Reference",
            "Date",
            "Description",
            "Quantity",
            unit_header.as_str(),
            total_header.as_str(),
        ];

        let date = self.issued_at.format("%Y-%m-%d").to_string();
        let mut rows: Vec<Vec<String>> = self
            .line_items
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let (reference, date) = if i == 0 {
                    (self.reference.clone(), date.clone())
                } else {
                    (String::new(), String::new())
                };
                let unit = if line.unit_cost.fract() == 0.0 {
                    format!("{:.2}", line.unit_cost)
                } else {
                    format!("{:.4}", line.unit_cost)
                };
                vec![
                    reference,
                    date,
                    line.description.clone(),
                    format::grouped(line.quantity as f64, 0),
                    unit,
                    format!("{:.2}", line.total_cost),
                ]
            })
            .collect();

        rows.push(vec![
            String::new(),
            String::new(),
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            format!("{:.2}", self.total),
        ]);

        csv::write_rows(&header, rows)
    }

    pub fn to_json(&self) -> CampaignResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference_campaign;
    use chrono::TimeZone;

    fn invoice() -> Invoice {
        let (inputs, metrics) = reference_campaign();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 0).unwrap();
        Invoice::build(&inputs, &metrics, at, &ReportConfig::default())
    }

    #[test]
    fn test_line_items() {
        let inv = invoice();
        let descriptions: Vec<&str> = inv
            .line_items
            .iter()
            .map(|l| l.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Campaign Setup Fee",
                "SMS Marketing",
                "App Notifications",
                "eDM Campaign",
                "Statement Messages",
                "Website Banner"
            ]
        );

        let sms = &inv.line_items[1];
        assert_eq!(sms.quantity, 40_000);
        assert!((sms.total_cost - 1_080.0).abs() < 1e-9);

        let statement = &inv.line_items[4];
        assert_eq!(statement.quantity, 4);
        assert!((statement.unit_cost - 3_800.0).abs() < 1e-9);
        assert!((statement.total_cost - 15_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_lines_sum_to_marketing_cost() {
        let inv = invoice();
        assert!((inv.total - 40_320.0).abs() < 1e-9);
        assert!((inv.line_total() - inv.total).abs() < 1e-6);
    }

    #[test]
    fn test_csv_export() {
        let csv = invoice().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "Item Reference,Date,Description,Quantity,Unit Cost (RM),Total Cost (RM)"
        );
        assert_eq!(
            lines[1],
            "VX202603140926,2026-03-14,Campaign Setup Fee,1,10000.00,10000.00"
        );
        assert_eq!(lines[2], ",,SMS Marketing,\"40,000\",0.0270,1080.00");
        assert_eq!(lines[5], ",,Statement Messages,4,3800.00,15200.00");
        assert_eq!(lines[7], ",,TOTAL,,,40320.00");
    }

    #[test]
    fn test_json_export() {
        let json = invoice().to_json().unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.reference, "VX202603140926");
        assert_eq!(parsed.line_items.len(), 6);
    }
}
