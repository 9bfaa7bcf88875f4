use serde::{Deserialize, Serialize};

use crate::models::plan::Nutrition;
use crate::models::MealSlot;

/// A menu item from the external catalog.
///
/// Nutrition facts are stored per 100 reference units (grams or
/// milliliters); one assumed serving is derived by scaling with the
/// engine's serving multiplier. Read-only: the catalog owns these rows,
/// the engine only borrows a snapshot per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,

    /// Category tag used by variety scoring (e.g. "rice", "soup",
    /// "noodle", "salad").
    pub category: String,

    /// Slot this item is typically offered in. `None` means any slot.
    #[serde(default)]
    pub slot: Option<MealSlot>,

    /// Calories per 100 reference units.
    pub calories: f64,

    /// Protein grams per 100 reference units.
    pub protein: f64,

    /// Carbohydrate grams per 100 reference units.
    pub carbs: f64,

    /// Fat grams per 100 reference units.
    pub fat: f64,
}

impl MenuItem {
    /// Nutrition for one assumed serving: per-100-unit facts scaled by
    /// the given serving multiplier.
    pub fn serving_nutrition(&self, multiplier: f64) -> Nutrition {
        Nutrition {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Whether this item may be offered in the given slot.
    pub fn fits_slot(&self, slot: MealSlot) -> bool {
        self.slot.is_none() || self.slot == Some(slot)
    }

    /// Basic validation: ids present and nutrition non-negative.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
    }
}
