//! Benchmarks for the campaign pricing model.
//! Run with: cargo bench -p campaign-pricing

use campaign_core::types::{CampaignInputs, ChannelAllocation, DurationAllocation};
use campaign_pricing::PricingModel;

fn main() {
    let model = PricingModel::default();
    let inputs: Vec<CampaignInputs> = (0..64)
        .map(|i| CampaignInputs {
            target_users: 50_000 + i * 7_000,
            base_approval_rate: 0.0549,
            setup_cost: 10_000.0,
            allocation: ChannelAllocation::new(20, 30, 25),
            duration: DurationAllocation::new((i % 13) as u32, 3),
        })
        .collect();

    // Warmup
    for input in &inputs {
        std::hint::black_box(model.evaluate(input));
    }

    let iterations = 100_000u32;
    let start = std::time::Instant::now();

    for _ in 0..iterations {
        for input in &inputs {
            std::hint::black_box(model.evaluate(std::hint::black_box(input)));
        }
    }

    let elapsed = start.elapsed();
    let evaluations = iterations as f64 * inputs.len() as f64;

    println!("=== Pricing Benchmark ===");
    println!("Evaluations: {}", evaluations);
    println!("Total time:  {:?}", elapsed);
    println!("Per call:    {:?}", elapsed / (iterations * inputs.len() as u32));
    println!("Throughput:  {:.0} evaluations/sec", evaluations / elapsed.as_secs_f64());
}
