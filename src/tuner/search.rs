use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::MenuCatalog;
use crate::tuner::evaluation::{evaluate_knobs, EvaluationResult};
use crate::tuner::knobs::{KnobRanges, TunerKnobs};

/// Configuration for the tuner.
pub struct TunerConfig {
    pub iterations: usize,
    pub seed: u64,
    pub budgets: Vec<f64>,
    pub ranges: KnobRanges,
    pub topk: usize,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            seed: 123,
            // Realistic daily targets across the user base
            budgets: vec![1500.0, 1800.0, 2200.0, 2800.0],
            ranges: KnobRanges::default(),
            topk: 10,
        }
    }
}

/// Results from a tuning run.
pub struct TunerResults {
    /// All evaluation results, sorted best to worst.
    pub results: Vec<EvaluationResult>,
    /// The baseline result using the shipped constants.
    pub baseline: EvaluationResult,
}

/// Run random-search tuning over the scoring knobs.
pub fn run_tuner(config: TunerConfig, catalog: &MenuCatalog) -> TunerResults {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.iterations);

    // Evaluate baseline (shipped constants)
    let baseline_knobs = TunerKnobs::default();
    let baseline = evaluate_knobs(&baseline_knobs, catalog, &config.budgets);

    println!(
        "Baseline: accuracy={:.2} filled={:.1} distinct={:.1}",
        baseline.avg_accuracy, baseline.avg_filled_slots, baseline.avg_distinct_menus
    );
    println!("    {}\n", baseline_knobs.display());

    println!("Running {} iterations...", config.iterations);

    let mut best_accuracy = baseline.avg_accuracy;

    for i in 0..config.iterations {
        let knobs = TunerKnobs::random(&mut rng, &config.ranges);
        let result = evaluate_knobs(&knobs, catalog, &config.budgets);

        if result.avg_accuracy > best_accuracy {
            best_accuracy = result.avg_accuracy;
            println!(
                "[{}/{}] New best: accuracy={:.2} filled={:.1} distinct={:.1}",
                i + 1,
                config.iterations,
                result.avg_accuracy,
                result.avg_filled_slots,
                result.avg_distinct_menus
            );
        }

        results.push(result);

        // Progress indicator every 10%
        if (i + 1) % (config.iterations / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.iterations as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    // Sort results best first
    results.sort_by(|a, b| b.cmp_score(a));

    TunerResults { results, baseline }
}
