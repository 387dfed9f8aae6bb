pub mod channels;
pub mod config;
pub mod error;
pub mod types;

pub use channels::{channel_metrics, Channel, ChannelMetrics, ChannelMetricsTable};
pub use config::AppConfig;
pub use error::{CampaignError, CampaignResult};
