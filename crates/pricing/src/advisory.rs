//! Non-fatal advisories surfaced to whoever collects the inputs.
//!
//! Nothing here changes the numbers the model produces.

use campaign_core::types::ChannelAllocation;
use serde::{Deserialize, Serialize};

const HIGH_CONVERSION_RATE: f64 = 0.08;
const LOW_CONVERSION_RATE: f64 = 0.01;

/// Total reach across SMS, app and eDM relative to 100% of the audience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReachStatus {
    Full,
    OverAllocated {
        total: u32,
    },
    UnderAllocated {
        total: u32,
        remaining: u32,
        /// Fraction of the maximum potential reached, `total / 100`.
        effectiveness_impact: f64,
    },
}

impl ReachStatus {
    pub fn assess(allocation: &ChannelAllocation) -> Self {
        let total = allocation.total();
        match total.cmp(&100) {
            std::cmp::Ordering::Equal => ReachStatus::Full,
            std::cmp::Ordering::Greater => ReachStatus::OverAllocated { total },
            std::cmp::Ordering::Less => ReachStatus::UnderAllocated {
                total,
                remaining: 100 - total,
                effectiveness_impact: f64::from(total) / 100.0,
            },
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, ReachStatus::Full)
    }

    pub fn message(&self) -> String {
        match *self {
            ReachStatus::Full => "Reaching 100% of the target audience".to_string(),
            ReachStatus::OverAllocated { total } => {
                format!("Total reach ({total}%) exceeds 100%; adjust the channel allocation")
            }
            ReachStatus::UnderAllocated {
                total,
                remaining,
                effectiveness_impact,
            } => format!(
                "Current reach is {total}% with {remaining}% unused; effectiveness reduced to {:.1}% of maximum potential",
                effectiveness_impact * 100.0
            ),
        }
    }
}

/// Base conversion rate compared against financial-services benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionRateAdvisory {
    WithinBenchmark,
    /// Above 8%; projections need historical data to back them.
    AboveBenchmark,
    /// Below 1%; audience, messaging or channel mix likely need work.
    BelowBenchmark,
}

impl ConversionRateAdvisory {
    pub fn assess(base_approval_rate: f64) -> Self {
        if base_approval_rate > HIGH_CONVERSION_RATE {
            ConversionRateAdvisory::AboveBenchmark
        } else if base_approval_rate < LOW_CONVERSION_RATE {
            ConversionRateAdvisory::BelowBenchmark
        } else {
            ConversionRateAdvisory::WithinBenchmark
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ConversionRateAdvisory::WithinBenchmark => None,
            ConversionRateAdvisory::AboveBenchmark => Some(
                "Expected conversion rate is higher than typical industry standards; \
                 make sure historical data supports this projection",
            ),
            ConversionRateAdvisory::BelowBenchmark => Some(
                "Expected conversion rate is lower than typical industry standards; \
                 review audience selection, campaign messaging and channel mix",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_full() {
        let status = ReachStatus::assess(&ChannelAllocation::new(40, 35, 25));
        assert!(status.is_full());
    }

    #[test]
    fn test_reach_over_allocated() {
        let status = ReachStatus::assess(&ChannelAllocation::new(50, 50, 1));
        assert_eq!(status, ReachStatus::OverAllocated { total: 101 });
        assert!(status.message().contains("101%"));
    }

    #[test]
    fn test_reach_under_allocated() {
        let status = ReachStatus::assess(&ChannelAllocation::new(20, 30, 25));
        match status {
            ReachStatus::UnderAllocated {
                total,
                remaining,
                effectiveness_impact,
            } => {
                assert_eq!(total, 75);
                assert_eq!(remaining, 25);
                assert!((effectiveness_impact - 0.75).abs() < f64::EPSILON);
            }
            other => panic!("expected UnderAllocated, got {other:?}"),
        }
        assert!(status.message().contains("75.0%"));
    }

    #[test]
    fn test_reach_empty() {
        let status = ReachStatus::assess(&ChannelAllocation::default());
        assert!(matches!(
            status,
            ReachStatus::UnderAllocated { remaining: 100, .. }
        ));
    }

    #[test]
    fn test_conversion_rate_thresholds() {
        assert_eq!(
            ConversionRateAdvisory::assess(0.0549),
            ConversionRateAdvisory::WithinBenchmark
        );
        assert_eq!(
            ConversionRateAdvisory::assess(0.08),
            ConversionRateAdvisory::WithinBenchmark
        );
        assert_eq!(
            ConversionRateAdvisory::assess(0.081),
            ConversionRateAdvisory::AboveBenchmark
        );
        assert_eq!(
            ConversionRateAdvisory::assess(0.01),
            ConversionRateAdvisory::WithinBenchmark
        );
        assert_eq!(
            ConversionRateAdvisory::assess(0.005),
            ConversionRateAdvisory::BelowBenchmark
        );
        assert!(ConversionRateAdvisory::WithinBenchmark.message().is_none());
        assert!(ConversionRateAdvisory::BelowBenchmark.message().is_some());
    }

    #[test]
    fn test_advisories_serialize_with_tags() {
        let json = serde_json::to_value(ReachStatus::OverAllocated { total: 120 }).unwrap();
        assert_eq!(json["status"], "over_allocated");
        assert_eq!(json["total"], 120);

        let json = serde_json::to_value(ConversionRateAdvisory::AboveBenchmark).unwrap();
        assert_eq!(json, "above_benchmark");
    }
}
