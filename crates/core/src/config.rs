use serde::Deserialize;
use tracing::debug;

use crate::types::{ChannelCosts, DEFAULT_SETUP_COST};

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `CAMPAIGN_PRICER__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Base (pre-discount) channel prices and the fixed setup fee.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_setup_cost")]
    pub setup_cost: f64,
    #[serde(default = "default_sms_per_user")]
    pub sms_per_user: f64,
    #[serde(default = "default_app_per_user")]
    pub app_per_user: f64,
    #[serde(default = "default_edm_per_user")]
    pub edm_per_user: f64,
    #[serde(default = "default_statement_per_week")]
    pub statement_per_week: f64,
    #[serde(default = "default_banner_per_week")]
    pub banner_per_week: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_target_users")]
    pub target_users: u64,
    #[serde(default = "default_base_approval_rate")]
    pub base_approval_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
}

// Default functions
fn default_setup_cost() -> f64 {
    DEFAULT_SETUP_COST
}
fn default_sms_per_user() -> f64 {
    0.03
}
fn default_app_per_user() -> f64 {
    0.06
}
fn default_edm_per_user() -> f64 {
    0.20
}
fn default_statement_per_week() -> f64 {
    4000.0
}
fn default_banner_per_week() -> f64 {
    750.0
}
fn default_target_users() -> u64 {
    200_000
}
fn default_base_approval_rate() -> f64 {
    0.0549
}
fn default_currency() -> String {
    "RM".to_string()
}
fn default_reference_prefix() -> String {
    "VX".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            setup_cost: default_setup_cost(),
            sms_per_user: default_sms_per_user(),
            app_per_user: default_app_per_user(),
            edm_per_user: default_edm_per_user(),
            statement_per_week: default_statement_per_week(),
            banner_per_week: default_banner_per_week(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_users: default_target_users(),
            base_approval_rate: default_base_approval_rate(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            reference_prefix: default_reference_prefix(),
        }
    }
}

impl PricingConfig {
    /// Per-unit base prices: per user for reach channels, per week for
    /// duration channels.
    pub fn base_rates(&self) -> ChannelCosts {
        ChannelCosts::new(
            self.sms_per_user,
            self.app_per_user,
            self.edm_per_user,
            self.statement_per_week,
            self.banner_per_week,
        )
    }
}

impl AppConfig {
    /// Load configuration from an optional config file, then environment
    /// variables (which take precedence).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        debug!(path = ?path, "Loading configuration");
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("CAMPAIGN_PRICER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
