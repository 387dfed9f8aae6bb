//! Marketing channels and their hand-tuned effectiveness metrics.
//!
//! Reach-based channels (SMS, app notifications, eDM) are configured by the
//! percentage of the target audience they reach. Duration-based channels
//! (statement messages, website banners) are configured by the number of
//! weeks they run.

use serde::{Deserialize, Serialize};

// ─── Channels ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Sms,
    App,
    Edm,
    Statement,
    Banner,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Sms,
        Channel::App,
        Channel::Edm,
        Channel::Statement,
        Channel::Banner,
    ];

    pub const REACH: [Channel; 3] = [Channel::Sms, Channel::App, Channel::Edm];

    pub const DURATION: [Channel; 2] = [Channel::Statement, Channel::Banner];

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::App => "App Notification",
            Channel::Edm => "eDM",
            Channel::Statement => "Statement Message",
            Channel::Banner => "Website Banner",
        }
    }

    /// How the engagement rate of this channel is usually described.
    pub fn impact_label(&self) -> &'static str {
        match self {
            Channel::Sms | Channel::App => "engagement",
            Channel::Edm | Channel::Banner => "click rate",
            Channel::Statement => "open rate",
        }
    }

    pub fn is_reach_based(&self) -> bool {
        matches!(self, Channel::Sms | Channel::App | Channel::Edm)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─── Metrics ────────────────────────────────────────────────────────────────

/// Allowed input range and recommended default for a channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelBounds {
    /// Percentage of the audience reached.
    Reach {
        min_allocation: u32,
        max_allocation: u32,
        recommended: u32,
    },
    /// Number of weeks the channel runs.
    Duration {
        min_weeks: u32,
        max_weeks: u32,
        recommended_weeks: u32,
    },
}

impl ChannelBounds {
    /// Inclusive `(min, max)` range of the channel's input value.
    pub fn range(&self) -> (u32, u32) {
        match *self {
            ChannelBounds::Reach {
                min_allocation,
                max_allocation,
                ..
            } => (min_allocation, max_allocation),
            ChannelBounds::Duration {
                min_weeks,
                max_weeks,
                ..
            } => (min_weeks, max_weeks),
        }
    }

    pub fn recommended(&self) -> u32 {
        match *self {
            ChannelBounds::Reach { recommended, .. } => recommended,
            ChannelBounds::Duration {
                recommended_weeks, ..
            } => recommended_weeks,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChannelMetrics {
    /// Relative contribution of the channel to the effectiveness score.
    pub weight: f64,
    /// Fraction of reached users who engage, in `[0, 1]`.
    pub engagement_rate: f64,
    pub bounds: ChannelBounds,
}

impl ChannelMetrics {
    /// `weight * engagement_rate`, the contribution at full allocation.
    pub fn weighted_engagement(&self) -> f64 {
        self.weight * self.engagement_rate
    }
}

/// One [`ChannelMetrics`] record per channel. Built once and shared
/// read-only with the pricing model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChannelMetricsTable {
    pub sms: ChannelMetrics,
    pub app: ChannelMetrics,
    pub edm: ChannelMetrics,
    pub statement: ChannelMetrics,
    pub banner: ChannelMetrics,
}

pub const MAX_CAMPAIGN_WEEKS: u32 = 12;

impl ChannelMetricsTable {
    pub fn get(&self, channel: Channel) -> &ChannelMetrics {
        match channel {
            Channel::Sms => &self.sms,
            Channel::App => &self.app,
            Channel::Edm => &self.edm,
            Channel::Statement => &self.statement,
            Channel::Banner => &self.banner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelMetrics)> {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total_weight(&self) -> f64 {
        self.iter().map(|(_, m)| m.weight).sum()
    }
}

impl Default for ChannelMetricsTable {
    fn default() -> Self {
        channel_metrics()
    }
}

/// The hand-tuned channel metrics used by the pricing model.
pub fn channel_metrics() -> ChannelMetricsTable {
    ChannelMetricsTable {
        // No links allowed in SMS, so the lowest impact of the reach channels.
        sms: ChannelMetrics {
            weight: 0.15,
            engagement_rate: 0.05,
            bounds: ChannelBounds::Reach {
                min_allocation: 0,
                max_allocation: 100,
                recommended: 20,
            },
        },
        app: ChannelMetrics {
            weight: 0.25,
            engagement_rate: 0.15,
            bounds: ChannelBounds::Reach {
                min_allocation: 0,
                max_allocation: 100,
                recommended: 30,
            },
        },
        edm: ChannelMetrics {
            weight: 0.20,
            engagement_rate: 0.08,
            bounds: ChannelBounds::Reach {
                min_allocation: 0,
                max_allocation: 100,
                recommended: 25,
            },
        },
        statement: ChannelMetrics {
            weight: 0.40,
            engagement_rate: 0.35,
            bounds: ChannelBounds::Duration {
                min_weeks: 0,
                max_weeks: MAX_CAMPAIGN_WEEKS,
                recommended_weeks: 4,
            },
        },
        banner: ChannelMetrics {
            weight: 0.10,
            engagement_rate: 0.02,
            bounds: ChannelBounds::Duration {
                min_weeks: 0,
                max_weeks: MAX_CAMPAIGN_WEEKS,
                recommended_weeks: 3,
            },
        },
    }
}
