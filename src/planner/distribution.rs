use crate::models::MealSlot;
use crate::planner::constants::slot_ratio;

/// Target calories for one non-selected slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTarget {
    pub slot: MealSlot,
    pub calories: f64,
}

/// Apportion the remaining daily budget across the slots other than
/// the one already consumed.
///
/// Each remaining slot's fixed ratio is renormalized by the ratio sum
/// of the non-selected slots, so the allocations always sum exactly to
/// `max(0, daily_target - selected)` no matter which slot was taken.
/// Returns targets in canonical slot order.
pub fn distribute_remaining(
    daily_target_calories: f64,
    selected_meal_calories: f64,
    selected_slot: MealSlot,
) -> Vec<SlotTarget> {
    let remaining = (daily_target_calories - selected_meal_calories).max(0.0);

    let ratio_sum: f64 = MealSlot::ALL
        .iter()
        .filter(|&&slot| slot != selected_slot)
        .map(|&slot| slot_ratio(slot))
        .sum();

    MealSlot::ALL
        .iter()
        .filter(|&&slot| slot != selected_slot)
        .map(|&slot| SlotTarget {
            slot,
            calories: remaining * slot_ratio(slot) / ratio_sum,
        })
        .collect()
}
