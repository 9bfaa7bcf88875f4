use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// A fixed time-of-day meal bucket.
///
/// Slot ratios (see `planner::constants::slot_ratio`) are process-wide
/// constants summing to 1.0 across all three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Canonical slot order: plans always list recommendations in this
    /// order regardless of which slot was pre-selected.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "morning" => Ok(MealSlot::Breakfast),
            "lunch" | "midday" => Ok(MealSlot::Lunch),
            "dinner" | "evening" => Ok(MealSlot::Dinner),
            other => Err(PlanError::UnknownSlot(other.to_string())),
        }
    }
}

/// Target macro split as fractions of total calories.
///
/// Carbs + protein + fat sum to 1.0 for every diet type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// One of the three fixed diet archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Balanced,
    LowCarb,
    HighProtein,
}

impl DietType {
    /// Fixed strategy order: plans are always returned in this order.
    pub const ALL: [DietType; 3] = [DietType::Balanced, DietType::LowCarb, DietType::HighProtein];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Balanced => "Balanced",
            DietType::LowCarb => "Low-carb",
            DietType::HighProtein => "High-protein",
        }
    }

    /// Target calorie split for this archetype (carbs/protein/fat).
    pub fn macro_ratio(&self) -> MacroRatio {
        match self {
            DietType::Balanced => MacroRatio {
                carbs: 0.50,
                protein: 0.30,
                fat: 0.20,
            },
            DietType::LowCarb => MacroRatio {
                carbs: 0.20,
                protein: 0.40,
                fat: 0.40,
            },
            DietType::HighProtein => MacroRatio {
                carbs: 0.30,
                protein: 0.45,
                fat: 0.25,
            },
        }
    }
}

impl FromStr for DietType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "balanced" => Ok(DietType::Balanced),
            "low_carb" | "lowcarb" => Ok(DietType::LowCarb),
            "high_protein" | "highprotein" => Ok(DietType::HighProtein),
            other => Err(PlanError::UnknownDiet(other.to_string())),
        }
    }
}

/// The meal the user has already chosen. Produced upstream (food
/// recognition or search); never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMeal {
    pub id: String,
    pub name: String,
    pub slot: MealSlot,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// The user's daily goal, produced by the upstream TDEE calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTarget {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// The full input contract of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub selected_meal: SelectedMeal,
    pub daily_target: DailyTarget,
}

impl PlanRequest {
    /// Validate the request. Failures here are rejections, never
    /// silently coerced.
    pub fn validate(&self) -> Result<()> {
        if self.selected_meal.name.trim().is_empty() {
            return Err(PlanError::InvalidInput(
                "selectedMeal.name must not be empty".to_string(),
            ));
        }
        if !(self.selected_meal.calories >= 0.0) {
            return Err(PlanError::InvalidInput(
                "selectedMeal.calories must be non-negative".to_string(),
            ));
        }
        if !(self.daily_target.calories > 0.0) {
            return Err(PlanError::InvalidInput(
                "dailyTarget.calories must be positive".to_string(),
            ));
        }
        for (field, value) in [
            ("selectedMeal.protein", self.selected_meal.protein),
            ("selectedMeal.carbs", self.selected_meal.carbs),
            ("selectedMeal.fat", self.selected_meal.fat),
        ] {
            if !(value >= 0.0) {
                return Err(PlanError::InvalidInput(format!(
                    "{} must be non-negative",
                    field
                )));
            }
        }
        Ok(())
    }
}
