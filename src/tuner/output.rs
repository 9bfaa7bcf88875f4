use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::tuner::evaluation::EvaluationResult;

/// Truncate a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all results to a CSV file.
pub fn write_csv(results: &[EvaluationResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "calorie_weight",
        "macro_weight",
        "variety_weight",
        "tolerance_kcal",
        "avg_accuracy",
        "avg_filled_slots",
        "avg_distinct_menus",
    ])?;

    for (i, result) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.3}", result.knobs.calorie_weight),
            format!("{:.3}", result.knobs.macro_weight),
            format!("{:.3}", result.knobs.variety_weight),
            format!("{:.0}", result.knobs.tolerance_kcal),
            format!("{:.2}", result.avg_accuracy),
            format!("{:.1}", result.avg_filled_slots),
            format!("{:.1}", result.avg_distinct_menus),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the best result to a JSON file with truncated floats.
pub fn write_best_json(best: &EvaluationResult, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "knobs": {
            "calorie_weight": truncate(best.knobs.calorie_weight, 3),
            "macro_weight": truncate(best.knobs.macro_weight, 3),
            "variety_weight": truncate(best.knobs.variety_weight, 3),
            "tolerance_kcal": truncate(best.knobs.tolerance_kcal, 0),
        },
        "metrics": {
            "avg_accuracy": truncate(best.avg_accuracy, 2),
            "avg_filled_slots": truncate(best.avg_filled_slots, 1),
            "avg_distinct_menus": truncate(best.avg_distinct_menus, 1),
        },
        "per_scenario": best.per_scenario.iter().map(|r| {
            serde_json::json!({
                "budget": r.budget,
                "selected_slot": r.selected_slot.label(),
                "avg_accuracy": truncate(r.avg_accuracy, 2),
                "filled_slots": r.filled_slots,
                "distinct_menus": r.distinct_menus,
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print top-k results to stdout.
pub fn print_topk(results: &[EvaluationResult], k: usize) {
    println!("\n=== Top {} Results (by accuracy) ===\n", k.min(results.len()));

    for (i, result) in results.iter().take(k).enumerate() {
        println!(
            "#{}: accuracy={:.2} filled={:.1} distinct={:.1}",
            i + 1,
            result.avg_accuracy,
            result.avg_filled_slots,
            result.avg_distinct_menus
        );
        println!("    {}", result.knobs.display());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuner::knobs::TunerKnobs;
    use tempfile::tempdir;

    fn sample_result() -> EvaluationResult {
        EvaluationResult {
            knobs: TunerKnobs::default(),
            avg_accuracy: 91.25,
            avg_filled_slots: 5.5,
            avg_distinct_menus: 4.0,
            per_scenario: vec![],
        }
    }

    #[test]
    fn test_write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("results.csv");
        let json_path = dir.path().join("best.json");

        write_csv(&[sample_result()], &csv_path).unwrap();
        write_best_json(&sample_result(), &json_path).unwrap();

        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("rank,calorie_weight"));
        assert!(csv.contains("91.25"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["metrics"]["avg_accuracy"], 91.25);
    }
}
