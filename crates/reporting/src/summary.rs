//! Flat `Category, Item, Value` campaign summary.

use campaign_core::config::ReportConfig;
use campaign_core::error::CampaignResult;
use campaign_core::types::{CampaignInputs, CampaignMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{csv, format};

pub const SUMMARY_HEADER: [&str; 3] = ["Category", "Item", "Value"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Only the first row of each section carries the category name.
    pub category: String,
    pub item: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub reference: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<SummaryRow>,
}

/// Proposal reference: configured prefix plus a minute-resolution timestamp.
pub fn proposal_reference(prefix: &str, at: &DateTime<Utc>) -> String {
    format!("{}{}", prefix, at.format("%Y%m%d%H%M"))
}

struct SectionBuilder {
    rows: Vec<SummaryRow>,
}

impl SectionBuilder {
    fn section(&mut self, category: &str, items: Vec<(&str, String)>) {
        for (i, (item, value)) in items.into_iter().enumerate() {
            self.rows.push(SummaryRow {
                category: if i == 0 { category.to_string() } else { String::new() },
                item: item.to_string(),
                value,
            });
        }
    }
}

impl SummaryReport {
    pub fn build(
        inputs: &CampaignInputs,
        metrics: &CampaignMetrics,
        generated_at: DateTime<Utc>,
        config: &ReportConfig,
    ) -> Self {
        let cur = config.currency.as_str();
        let reference = proposal_reference(&config.reference_prefix, &generated_at);
        let mut b = SectionBuilder { rows: Vec::new() };

        b.section(
            "Campaign Information",
            vec![
                ("Target Users", format::grouped(inputs.target_users as f64, 0)),
                ("Campaign Date", generated_at.format("%Y-%m-%d").to_string()),
                ("Setup Cost", format::currency(cur, inputs.setup_cost)),
                ("Partner Reference", reference.clone()),
            ],
        );

        b.section(
            "Channel Allocation",
            vec![
                ("SMS Reach", format!("{}%", inputs.allocation.sms)),
                ("eDM Reach", format!("{}%", inputs.allocation.edm)),
                ("App Notification", format!("{}%", inputs.allocation.app)),
                (
                    "Statement Message Duration",
                    format!("{} weeks", inputs.duration.statement_weeks),
                ),
                (
                    "Website Banner Duration",
                    format!("{} weeks", inputs.duration.banner_weeks),
                ),
            ],
        );

        let costs = &metrics.adjusted_costs;
        b.section(
            "Costs",
            vec![
                ("SMS Cost (per user)", format::unit_price(cur, costs.sms)),
                (
                    "App Notification Cost (per user)",
                    format::unit_price(cur, costs.app),
                ),
                ("eDM Cost (per user)", format::unit_price(cur, costs.edm)),
                (
                    "Statement Message Cost (per week)",
                    format::currency(cur, metrics.weekly_statement_cost),
                ),
                (
                    "Website Banner Cost (per week)",
                    format::currency(cur, metrics.weekly_banner_cost),
                ),
            ],
        );

        b.section(
            "Campaign Metrics",
            vec![
                (
                    "Total Marketing Cost",
                    format::currency(cur, metrics.marketing_cost),
                ),
                ("Cost Per User", format::unit_price(cur, metrics.cost_per_user)),
                ("Estimated Approvals", format::count(metrics.num_approvals)),
                ("Cost Per Acquisition", format::currency(cur, metrics.cpa)),
                (
                    "Base Conversion Rate",
                    format::percent(inputs.base_approval_rate, 2),
                ),
                (
                    "Adjusted Conversion Rate",
                    format::percent(metrics.adjusted_approval_rate, 4),
                ),
            ],
        );

        Self {
            reference,
            generated_at,
            rows: b.rows,
        }
    }

    /// Value of the first row whose item matches `item`.
    pub fn value(&self, item: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.item == item)
            .map(|r| r.value.as_str())
    }

    pub fn to_csv(&self) -> String {
        csv::write_rows(
            &SUMMARY_HEADER,
            self.rows
                .iter()
                .map(|r| [r.category.as_str(), r.item.as_str(), r.value.as_str()]),
        )
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

    fn report() -> SummaryReport {
        let (inputs, metrics) = reference_campaign();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        SummaryReport::build(&inputs, &metrics, at, &ReportConfig::default())
    }

    #[test]
    fn test_reference_and_date() {
        let r = report();
        assert_eq!(r.reference, "VX202603140926");
        assert_eq!(r.value("Partner Reference"), Some("VX202603140926"));
        assert_eq!(r.value("Campaign Date"), Some("2026-03-14"));
    }

    #[test]
    fn test_sections_and_categories() {
        let r = report();
        assert_eq!(r.rows.len(), 20);
        let categories: Vec<&str> = r
            .rows
            .iter()
            .filter(|row| !row.category.is_empty())
            .map(|row| row.category.as_str())
            .collect();
        assert_eq!(
            categories,
            vec![
                "Campaign Information",
                "Channel Allocation",
                "Costs",
                "Campaign Metrics"
            ]
        );
    }

    #[test]
    fn test_formatted_values() {
        let r = report();
        assert_eq!(r.value("Target Users"), Some("200,000"));
        assert_eq!(r.value("Setup Cost"), Some("RM 10,000.00"));
        assert_eq!(r.value("SMS Reach"), Some("20%"));
        assert_eq!(r.value("Statement Message Duration"), Some("4 weeks"));
        assert_eq!(r.value("eDM Cost (per user)"), Some("RM 0.1800"));
        assert_eq!(
            r.value("Statement Message Cost (per week)"),
            Some("RM 3,800.00")
        );
        assert_eq!(r.value("Total Marketing Cost"), Some("RM 40,320.00"));
        assert_eq!(r.value("Cost Per User"), Some("RM 0.1516"));
        assert_eq!(r.value("Estimated Approvals"), Some("1,162"));
        assert_eq!(r.value("Cost Per Acquisition"), Some("RM 34.70"));
        assert_eq!(r.value("Base Conversion Rate"), Some("5.49%"));
        assert_eq!(r.value("Adjusted Conversion Rate"), Some("0.8715%"));
    }

    #[test]
    fn test_csv_export() {
        let csv = report().to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Category,Item,Value"));
        assert_eq!(
            lines.next(),
            Some("Campaign Information,Target Users,\"200,000\"")
        );
        assert_eq!(csv.lines().count(), 21);
    }

    #[test]
    fn test_json_export() {
        let json = report().to_json().unwrap();
        let parsed: SummaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows, report().rows);
    }
}
