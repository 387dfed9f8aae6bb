//! Campaign pricing model: volume-discounted channel costs, weighted channel
//! effectiveness, projected approvals and cost per acquisition.
//!
//! Every function here is pure. Callers re-run [`PricingModel::evaluate`]
//! whenever an input changes.

pub mod advisory;
pub mod cost;
pub mod effectiveness;
pub mod model;

pub use advisory::{ConversionRateAdvisory, ReachStatus};
pub use cost::{adjust_channel_costs, blended_cost_per_user, VolumeBand};
pub use effectiveness::{compute_campaign_metrics, diminishing_factor, EffectivenessOutcome};
pub use model::PricingModel;
