//! Campaign Pricer — campaign cost and conversion projections from a
//! channel allocation.
//!
//! Collects and validates inputs, evaluates the pricing model and prints the
//! requested report.

mod render;

use anyhow::Context;
use campaign_core::config::AppConfig;
use campaign_core::types::{CampaignInputs, ChannelAllocation, DurationAllocation};
use campaign_pricing::{ConversionRateAdvisory, PricingModel, ReachStatus};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Human-readable metrics, cost breakdown and insights
    Overview,
    /// Flat Category/Item/Value CSV
    Summary,
    /// Line-itemized proposal/invoice CSV
    Invoice,
    /// Full evaluation as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "campaign-pricer")]
#[command(about = "Campaign cost, approval and CPA projections from a channel mix")]
#[command(version)]
struct Cli {
    /// Optional TOML config file
    #[arg(long, env = "CAMPAIGN_PRICER_CONFIG")]
    config: Option<String>,

    /// Target user base (overrides config)
    #[arg(long)]
    target_users: Option<u64>,

    /// Expected base conversion rate in percent, e.g. 5.49 (overrides config)
    #[arg(long)]
    conversion_rate: Option<f64>,

    /// SMS reach (%)
    #[arg(long)]
    sms: Option<u32>,

    /// App notification reach (%)
    #[arg(long)]
    app: Option<u32>,

    /// eDM reach (%)
    #[arg(long)]
    edm: Option<u32>,

    /// Statement message duration (weeks)
    #[arg(long)]
    statement_weeks: Option<u32>,

    /// Website banner duration (weeks)
    #[arg(long)]
    banner_weeks: Option<u32>,

    /// Report to produce
    #[arg(long, value_enum, default_value_t = ReportKind::Overview)]
    report: ReportKind,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn campaign_inputs(&self, config: &AppConfig, model: &PricingModel) -> CampaignInputs {
        let table = model.channel_metrics();
        let allocation = ChannelAllocation::recommended(table);
        let duration = DurationAllocation::recommended(table);

        CampaignInputs {
            target_users: self.target_users.unwrap_or(config.defaults.target_users),
            base_approval_rate: self
                .conversion_rate
                .map(|pct| pct / 100.0)
                .unwrap_or(config.defaults.base_approval_rate),
            setup_cost: config.pricing.setup_cost,
            allocation: ChannelAllocation {
                sms: self.sms.unwrap_or(allocation.sms),
                app: self.app.unwrap_or(allocation.app),
                edm: self.edm.unwrap_or(allocation.edm),
            },
            duration: DurationAllocation {
                statement_weeks: self.statement_weeks.unwrap_or(duration.statement_weeks),
                banner_weeks: self.banner_weeks.unwrap_or(duration.banner_weeks),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_pricer=info,campaign_pricing=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let model = PricingModel::from_config(&config.pricing);
    let inputs = cli.campaign_inputs(&config, &model);

    info!(
        target_users = inputs.target_users,
        base_approval_rate = inputs.base_approval_rate,
        sms = inputs.allocation.sms,
        app = inputs.allocation.app,
        edm = inputs.allocation.edm,
        statement_weeks = inputs.duration.statement_weeks,
        banner_weeks = inputs.duration.banner_weeks,
        "Inputs collected"
    );

    inputs
        .validate(model.channel_metrics())
        .context("invalid campaign inputs")?;

    let reach = ReachStatus::assess(&inputs.allocation);
    if !reach.is_full() {
        warn!(status = ?reach, "{}", reach.message());
    }
    let conversion = ConversionRateAdvisory::assess(inputs.base_approval_rate);
    if let Some(message) = conversion.message() {
        warn!(advisory = ?conversion, "{}", message);
    }

    let metrics = model.evaluate(&inputs);
    info!(
        marketing_cost = metrics.marketing_cost,
        num_approvals = metrics.num_approvals,
        cpa = metrics.cpa,
        "Campaign metrics computed"
    );

    let evaluation = render::Evaluation::new(&model, inputs, metrics, reach, conversion);
    let now = Utc::now();
    let output = match cli.report {
        ReportKind::Overview => render::overview(&evaluation, &config.report)?,
        ReportKind::Summary => evaluation.summary(now, &config.report).to_csv(),
        ReportKind::Invoice => evaluation.invoice(now, &config.report).to_csv(),
        ReportKind::Json => serde_json::to_string_pretty(&evaluation)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), report = ?cli.report, "Report written");
        }
        None => print!("{output}"),
    }

    Ok(())
}
