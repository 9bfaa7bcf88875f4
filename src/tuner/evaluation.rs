use crate::catalog::MenuCatalog;
use crate::models::{DailyTarget, MealSlot, MenuItem, PlanRequest, SelectedMeal};
use crate::planner::config::EngineConfig;
use crate::planner::constants::slot_ratio;
use crate::planner::orchestrator::plan_alternatives;
use crate::tuner::knobs::TunerKnobs;

/// Result of evaluating one scenario (one budget and one pre-selected
/// slot).
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub budget: f64,
    pub selected_slot: MealSlot,

    /// Mean accuracy over the three strategy plans.
    pub avg_accuracy: f64,

    /// Recommendations produced across the three plans (max 6 when one
    /// slot is pre-selected).
    pub filled_slots: usize,

    /// Distinct menu ids recommended across the three plans.
    pub distinct_menus: usize,
}

/// Aggregated result of evaluating knobs across all scenarios.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub knobs: TunerKnobs,
    pub avg_accuracy: f64,
    pub avg_filled_slots: f64,
    pub avg_distinct_menus: f64,
    pub per_scenario: Vec<ScenarioResult>,
}

impl EvaluationResult {
    /// Lexicographic comparison: (avg_accuracy, avg_filled_slots,
    /// avg_distinct_menus). Higher is better for all metrics.
    pub fn cmp_score(&self, other: &Self) -> std::cmp::Ordering {
        match self.avg_accuracy.partial_cmp(&other.avg_accuracy) {
            Some(std::cmp::Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        match self.avg_filled_slots.partial_cmp(&other.avg_filled_slots) {
            Some(std::cmp::Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        self.avg_distinct_menus
            .partial_cmp(&other.avg_distinct_menus)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Synthetic selected meal for a scenario: consumes its slot's fair
/// share of the budget with a middle-of-the-road macro split.
fn scenario_meal(budget: f64, slot: MealSlot) -> SelectedMeal {
    let calories = budget * slot_ratio(slot);
    SelectedMeal {
        id: "scenario-selected".to_string(),
        name: "Scenario meal".to_string(),
        slot,
        calories,
        protein: calories * 0.30 / 4.0,
        carbs: calories * 0.50 / 4.0,
        fat: calories * 0.20 / 9.0,
    }
}

/// Evaluate a single knob configuration for one scenario.
pub fn evaluate_scenario(
    catalog: &MenuCatalog,
    budget: f64,
    slot: MealSlot,
    knobs: &TunerKnobs,
) -> ScenarioResult {
    let request = PlanRequest {
        selected_meal: scenario_meal(budget, slot),
        daily_target: DailyTarget {
            calories: budget,
            protein: budget * 0.30 / 4.0,
            carbs: budget * 0.50 / 4.0,
            fat: budget * 0.20 / 9.0,
        },
    };

    let config = EngineConfig {
        scoring: knobs.to_scoring_config(),
        deadline: None,
    };

    // A degenerate scenario (e.g. zero budget) scores as zero rather
    // than aborting the search.
    let set = match plan_alternatives(catalog, &request, &config) {
        Ok(set) => set,
        Err(_) => {
            return ScenarioResult {
                budget,
                selected_slot: slot,
                avg_accuracy: 0.0,
                filled_slots: 0,
                distinct_menus: 0,
            };
        }
    };

    let n = set.plans.len().max(1) as f64;
    let avg_accuracy = set.plans.iter().map(|p| p.accuracy as f64).sum::<f64>() / n;
    let filled_slots: usize = set.plans.iter().map(|p| p.recommendations.len()).sum();

    let mut menu_ids: Vec<&str> = set
        .plans
        .iter()
        .flat_map(|p| p.recommendations.iter().map(|r| r.menu.id.as_str()))
        .collect();
    menu_ids.sort_unstable();
    menu_ids.dedup();

    ScenarioResult {
        budget,
        selected_slot: slot,
        avg_accuracy,
        filled_slots,
        distinct_menus: menu_ids.len(),
    }
}

/// Evaluate knobs across every (budget, selected slot) combination.
pub fn evaluate_knobs(
    knobs: &TunerKnobs,
    catalog: &MenuCatalog,
    budgets: &[f64],
) -> EvaluationResult {
    let per_scenario: Vec<ScenarioResult> = budgets
        .iter()
        .flat_map(|&budget| {
            MealSlot::ALL
                .iter()
                .map(move |&slot| (budget, slot))
        })
        .map(|(budget, slot)| evaluate_scenario(catalog, budget, slot, knobs))
        .collect();

    let n = per_scenario.len() as f64;
    let avg_accuracy = per_scenario.iter().map(|r| r.avg_accuracy).sum::<f64>() / n;
    let avg_filled_slots = per_scenario.iter().map(|r| r.filled_slots as f64).sum::<f64>() / n;
    let avg_distinct_menus = per_scenario
        .iter()
        .map(|r| r.distinct_menus as f64)
        .sum::<f64>()
        / n;

    EvaluationResult {
        knobs: knobs.clone(),
        avg_accuracy,
        avg_filled_slots,
        avg_distinct_menus,
        per_scenario,
    }
}
