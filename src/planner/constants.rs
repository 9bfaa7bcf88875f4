use crate::models::MealSlot;

/// Fixed share of the daily budget for each slot. Sums to 1.0 over all
/// slots; renormalized over the non-selected slots at distribution time.
pub const BREAKFAST_RATIO: f64 = 0.25;
pub const LUNCH_RATIO: f64 = 0.40;
pub const DINNER_RATIO: f64 = 0.35;

/// Serving multiplier applied to per-100-unit catalog nutrition to
/// approximate one serving. The catalog carries no per-item serving
/// size, so this single factor is applied uniformly to every category
/// (mains, snacks, drinks alike) — a known approximation that bounds
/// the accuracy claims downstream.
pub const SERVING_MULTIPLIER: f64 = 3.5;

/// Half-width of the calorie window used when querying candidates.
pub const CANDIDATE_TOLERANCE_KCAL: f64 = 150.0;

/// Composite score weights. Must sum to 1.0.
pub const CALORIE_WEIGHT: f64 = 0.4;
pub const MACRO_WEIGHT: f64 = 0.4;
pub const VARIETY_WEIGHT: f64 = 0.2;

/// Atwater factors: kcal per gram of each macro.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Fixed budget share for a slot.
pub fn slot_ratio(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_RATIO,
        MealSlot::Lunch => LUNCH_RATIO,
        MealSlot::Dinner => DINNER_RATIO,
    }
}
