use std::path::PathBuf;

use clap::Parser;

use reverse_diet_planner_rs::catalog::{load_catalog, MenuCatalog};
use reverse_diet_planner_rs::tuner::{
    print_topk, run_tuner, write_best_json, write_csv, KnobRanges, TunerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "tuner")]
#[command(about = "Scoring-weight tuner for the reverse meal planner")]
struct Args {
    /// Number of random search iterations
    #[arg(long, default_value = "300")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Daily calorie targets to evaluate (comma-separated)
    #[arg(long, default_value = "1500,1800,2200,2800")]
    budgets: String,

    /// Path to the menu catalog JSON
    #[arg(long, default_value = "menu_catalog.json")]
    catalog: PathBuf,

    /// Output CSV file for all results
    #[arg(long, default_value = "tuner_results.csv")]
    csv: PathBuf,

    /// Output JSON file for best result
    #[arg(long, default_value = "tuner_best.json")]
    json: PathBuf,

    /// Number of top results to display
    #[arg(long, default_value = "10")]
    topk: usize,
}

fn parse_budgets(s: &str) -> Vec<f64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    let items = match load_catalog(&args.catalog) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Error reading catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };

    let catalog = MenuCatalog::new(items);
    if catalog.is_empty() {
        eprintln!("Error: catalog {:?} has no usable menus", args.catalog);
        std::process::exit(1);
    }
    println!("Loaded {} menus from {:?}", catalog.len(), args.catalog);

    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        eprintln!("Error: no valid budgets provided");
        std::process::exit(1);
    }
    println!("Testing budgets: {:?}", budgets);

    let config = TunerConfig {
        iterations: args.iters,
        seed: args.seed,
        budgets,
        ranges: KnobRanges::default(),
        topk: args.topk,
    };

    let tuner_results = run_tuner(config, &catalog);

    print_topk(&tuner_results.results, args.topk);

    let best = &tuner_results.results[0];
    let baseline = &tuner_results.baseline;

    let improvement = best.avg_accuracy - baseline.avg_accuracy;
    println!("=== Comparison: Best vs Baseline ===");
    println!(
        "Baseline: accuracy={:.2} filled={:.1} distinct={:.1}",
        baseline.avg_accuracy, baseline.avg_filled_slots, baseline.avg_distinct_menus
    );
    println!(
        "Best:     accuracy={:.2} filled={:.1} distinct={:.1}",
        best.avg_accuracy, best.avg_filled_slots, best.avg_distinct_menus
    );
    println!("Change:   accuracy {:+.2}", improvement);
    println!();

    if let Err(e) = write_csv(&tuner_results.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote best result to {:?}", args.json);
    }
}
