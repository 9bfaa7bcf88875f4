use std::collections::HashSet;

use assert_float_eq::assert_float_absolute_eq;

use reverse_diet_planner_rs::models::{MealSlot, Nutrition};
use reverse_diet_planner_rs::planner::{
    calorie_score, distribute_remaining, macro_score, score_candidate, variety_score,
    ScoringConfig, CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};

fn serving(cal: f64, protein: f64, carbs: f64, fat: f64) -> Nutrition {
    Nutrition {
        calories: cal,
        protein,
        carbs,
        fat,
    }
}

/// A serving that matches the given macro ratio exactly.
fn serving_for_ratio(cal: f64, carbs: f64, protein: f64, fat: f64) -> Nutrition {
    serving(
        cal,
        cal * protein / PROTEIN_KCAL_PER_G,
        cal * carbs / CARB_KCAL_PER_G,
        cal * fat / FAT_KCAL_PER_G,
    )
}

#[test]
fn test_distribution_renormalizes_over_remaining_slots() {
    // 2000 target, 500 selected at lunch: breakfast 0.25/0.60 * 1500,
    // dinner 0.35/0.60 * 1500
    let targets = distribute_remaining(2000.0, 500.0, MealSlot::Lunch);

    assert_eq!(targets.len(), 2);
    assert_float_absolute_eq!(targets[0].calories, 625.0, 1e-9);
    assert_float_absolute_eq!(targets[1].calories, 875.0, 1e-9);
}

#[test]
fn test_distribution_sums_to_remaining_for_every_slot() {
    for &selected in &MealSlot::ALL {
        for &(target, consumed) in &[(2000.0_f64, 500.0), (1800.0, 1799.0), (2500.0, 0.0)] {
            let expected: f64 = (target - consumed).max(0.0);
            let sum: f64 = distribute_remaining(target, consumed, selected)
                .iter()
                .map(|t| t.calories)
                .sum();
            assert_float_absolute_eq!(sum, expected, 1e-9);
        }
    }
}

#[test]
fn test_distribution_never_negative() {
    let targets = distribute_remaining(1500.0, 9000.0, MealSlot::Breakfast);
    assert!(targets.iter().all(|t| t.calories == 0.0));
}

#[test]
fn test_calorie_component_clamps_at_double_target() {
    assert_eq!(calorie_score(500.0, 1000.0), 0.0);
    assert_eq!(calorie_score(500.0, 1500.0), 0.0);
    assert_float_absolute_eq!(calorie_score(500.0, 400.0), 80.0, 1e-9);
}

#[test]
fn test_macro_component_uses_atwater_factors() {
    // 600 kcal at exactly 0.5/0.3/0.2 carb/protein/fat
    let ratio = reverse_diet_planner_rs::models::DietType::Balanced.macro_ratio();
    let exact = serving_for_ratio(600.0, 0.5, 0.3, 0.2);
    assert_float_absolute_eq!(macro_score(&exact, &ratio), 100.0, 1e-9);

    // Shifting 10% of calories from carbs to fat adds 0.2 total diff
    let shifted = serving_for_ratio(600.0, 0.4, 0.3, 0.3);
    assert_float_absolute_eq!(macro_score(&shifted, &ratio), 80.0, 1e-9);
}

#[test]
fn test_variety_component_is_strictly_binary() {
    let mut used = HashSet::new();
    used.insert("rice".to_string());
    used.insert("soup".to_string());

    for category in ["rice", "soup", "noodle", "salad"] {
        let score = variety_score(category, &used);
        assert!(score == 0.0 || score == 100.0);
    }
}

#[test]
fn test_perfect_candidate_total_is_100() {
    let ratio = reverse_diet_planner_rs::models::DietType::Balanced.macro_ratio();
    let breakdown = score_candidate(
        &serving_for_ratio(600.0, 0.5, 0.3, 0.2),
        "rice",
        600.0,
        &ratio,
        &HashSet::new(),
        &ScoringConfig::default(),
    );
    assert_float_absolute_eq!(breakdown.total, 100.0, 1e-9);
}

#[test]
fn test_custom_weights_change_composite_only() {
    let ratio = reverse_diet_planner_rs::models::DietType::Balanced.macro_ratio();
    let config = ScoringConfig {
        calorie_weight: 1.0,
        macro_weight: 0.0,
        variety_weight: 0.0,
        ..ScoringConfig::default()
    };

    // Category repeat and macro mismatch stop mattering
    let mut used = HashSet::new();
    used.insert("rice".to_string());

    let breakdown = score_candidate(
        &serving(600.0, 0.0, 150.0, 0.0),
        "rice",
        600.0,
        &ratio,
        &used,
        &config,
    );
    assert_float_absolute_eq!(breakdown.total, breakdown.calorie, 1e-9);
    assert_eq!(breakdown.variety, 0.0);
}
