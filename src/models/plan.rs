use serde::{Deserialize, Serialize};

use crate::models::{DailyTarget, DietType, MealSlot, MenuItem, SelectedMeal};

/// A plain nutrition total (serving-scaled, grams for macros).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrition {
    pub fn add(&mut self, other: &Nutrition) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }
}

impl From<&SelectedMeal> for Nutrition {
    fn from(meal: &SelectedMeal) -> Self {
        Nutrition {
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
        }
    }
}

/// Composite score with its three-part breakdown. All components and
/// the total lie in [0, 100]; variety is exactly 0 or 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub calorie: f64,
    pub macro_fit: f64,
    pub variety: f64,
}

/// A candidate with its serving-scaled nutrition and score. Lives only
/// during selection; discarded once the winner is chosen.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub item: MenuItem,
    pub serving: Nutrition,
    pub score: ScoreBreakdown,
}

/// The chosen menu for one slot, in the output-contract shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMenu {
    pub id: String,
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One recommendation: a menu for one slot, with the slot's target and
/// the signed deviation from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecommendation {
    pub meal_slot: MealSlot,
    pub menu: RecommendedMenu,
    pub target_calories: f64,
    pub calories_diff: f64,
}

impl SlotRecommendation {
    pub fn from_candidate(slot: MealSlot, candidate: &ScoredCandidate, target: f64) -> Self {
        SlotRecommendation {
            meal_slot: slot,
            menu: RecommendedMenu {
                id: candidate.item.id.clone(),
                name: candidate.item.name.clone(),
                category: candidate.item.category.clone(),
                calories: candidate.serving.calories,
                protein: candidate.serving.protein,
                carbs: candidate.serving.carbs,
                fat: candidate.serving.fat,
            },
            target_calories: target,
            calories_diff: candidate.serving.calories - target,
        }
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.menu.calories,
            protein: self.menu.protein,
            carbs: self.menu.carbs,
            fat: self.menu.fat,
        }
    }
}

/// Why a slot carries no recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapReason {
    /// The distributed target for this slot was zero; nothing to plan.
    NotNeeded,
    /// The catalog returned no usable candidate within tolerance.
    NoCandidate,
}

/// A slot that ended up without a recommendation, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotGap {
    pub meal_slot: MealSlot,
    pub reason: GapReason,
}

/// One complete day-plan alternative for a single diet strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReversePlanResult {
    pub diet_type: DietType,
    pub diet_label: String,
    pub selected_meal: SelectedMeal,

    /// Recommendations in canonical slot order (breakfast, lunch,
    /// dinner), never including the pre-selected slot.
    pub recommendations: Vec<SlotRecommendation>,

    /// Slots without a recommendation and why.
    pub gaps: Vec<SlotGap>,

    /// Selected meal plus all recommendations, summed.
    pub daily_total: Nutrition,

    /// The daily target restated.
    pub target_total: DailyTarget,

    /// Integer 0-100 closeness of the assembled total to the target.
    pub accuracy: u32,
}

/// The orchestrator output: one plan per diet strategy in fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSet {
    pub plans: Vec<ReversePlanResult>,

    /// False when a deadline cut the run short and some strategies
    /// were skipped.
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_add() {
        let mut total = Nutrition {
            calories: 500.0,
            protein: 20.0,
            carbs: 70.0,
            fat: 12.0,
        };
        total.add(&Nutrition {
            calories: 300.0,
            protein: 10.0,
            carbs: 30.0,
            fat: 8.0,
        });
        assert!((total.calories - 800.0).abs() < 1e-9);
        assert!((total.protein - 30.0).abs() < 1e-9);
        assert!((total.carbs - 100.0).abs() < 1e-9);
        assert!((total.fat - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_gap_reason_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GapReason::NotNeeded).unwrap(),
            "\"not-needed\""
        );
        assert_eq!(
            serde_json::to_string(&GapReason::NoCandidate).unwrap(),
            "\"no-candidate\""
        );
    }
}
