use campaign_core::types::{
    CampaignInputs, CampaignMetrics, ChannelAllocation, ChannelCosts, DurationAllocation,
};

/// 200,000 users, 20/30/25 reach, 4 statement weeks, 3 banner weeks.
pub(crate) fn reference_campaign() -> (CampaignInputs, CampaignMetrics) {
    let inputs = CampaignInputs {
        target_users: 200_000,
        base_approval_rate: 0.0549,
        setup_cost: 10_000.0,
        allocation: ChannelAllocation::new(20, 30, 25),
        duration: DurationAllocation::new(4, 3),
    };
    let metrics = CampaignMetrics {
        marketing_cost: 40_320.0,
        num_approvals: 1_162.05,
        cpa: 40_320.0 / 1_162.05,
        adjusted_approval_rate: 0.008715375,
        total_effectiveness: 0.15875,
        cost_per_user: 0.1516,
        diminishing_factor: 2.0 / 3.0,
        adjusted_costs: ChannelCosts::new(0.027, 0.054, 0.18, 15_200.0, 1_800.0),
        weekly_statement_cost: 3_800.0,
        weekly_banner_cost: 600.0,
    };
    (inputs, metrics)
}
