use std::collections::HashSet;

use crate::models::{MacroRatio, Nutrition, ScoreBreakdown};
use crate::planner::config::ScoringConfig;
use crate::planner::constants::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// Calorie fit: 100 at exact match, linearly down to 0 when the
/// deviation reaches the target itself. Clamped, never negative.
pub fn calorie_score(target_calories: f64, candidate_calories: f64) -> f64 {
    if target_calories <= 0.0 {
        return 0.0;
    }
    let deviation = (target_calories - candidate_calories).abs() / target_calories;
    (100.0 - deviation * 100.0).max(0.0)
}

/// Macro fit: each macro's fraction of candidate calories (4/4/9 kcal
/// per gram) compared against the target ratio; the absolute diffs are
/// summed and mapped onto [0, 100].
pub fn macro_score(serving: &Nutrition, target: &MacroRatio) -> f64 {
    if serving.calories <= 0.0 {
        return 0.0;
    }

    let carb_frac = serving.carbs * CARB_KCAL_PER_G / serving.calories;
    let protein_frac = serving.protein * PROTEIN_KCAL_PER_G / serving.calories;
    let fat_frac = serving.fat * FAT_KCAL_PER_G / serving.calories;

    let total_diff = (carb_frac - target.carbs).abs()
        + (protein_frac - target.protein).abs()
        + (fat_frac - target.fat).abs();

    (100.0 - total_diff * 100.0).max(0.0)
}

/// Variety: 100 for a category not yet used in this plan, 0 for a
/// repeat. Binary, never graded.
pub fn variety_score(category: &str, used_categories: &HashSet<String>) -> f64 {
    if used_categories.contains(category) {
        0.0
    } else {
        100.0
    }
}

/// Composite 0-100 score with its three-part breakdown.
pub fn score_candidate(
    serving: &Nutrition,
    category: &str,
    target_calories: f64,
    target_ratio: &MacroRatio,
    used_categories: &HashSet<String>,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let calorie = calorie_score(target_calories, serving.calories);
    let macro_fit = macro_score(serving, target_ratio);
    let variety = variety_score(category, used_categories);

    ScoreBreakdown {
        total: calorie * config.calorie_weight
            + macro_fit * config.macro_weight
            + variety * config.variety_weight,
        calorie,
        macro_fit,
        variety,
    }
}
