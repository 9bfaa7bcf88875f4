use std::collections::HashSet;

use tracing::debug;

use crate::catalog::CatalogGateway;
use crate::models::{
    DietType, GapReason, Nutrition, PlanRequest, ReversePlanResult, SlotGap, SlotRecommendation,
};
use crate::planner::config::ScoringConfig;
use crate::planner::distribution::SlotTarget;
use crate::planner::selection::select_for_slot;

/// Closeness of an assembled total to the daily target, as an integer
/// percentage. Computed honestly against whatever was assembled, gaps
/// included.
pub fn plan_accuracy(total_calories: f64, target_calories: f64) -> u32 {
    if target_calories <= 0.0 {
        return 0;
    }
    let deviation = (total_calories - target_calories).abs() / target_calories;
    (100.0 - deviation * 100.0).max(0.0).round() as u32
}

/// Assemble one complete day plan for a single diet strategy.
///
/// Walks the distributed slot targets in canonical order, picking the
/// best candidate per slot. The used-category set and the id exclusion
/// list are local to this plan, so the three strategy assemblies stay
/// independent of each other.
pub fn assemble_plan<G: CatalogGateway + ?Sized>(
    gateway: &G,
    diet: DietType,
    request: &PlanRequest,
    slot_targets: &[SlotTarget],
    config: &ScoringConfig,
) -> ReversePlanResult {
    let ratio = diet.macro_ratio();

    let mut used_categories: HashSet<String> = HashSet::new();
    let mut exclude_ids = vec![request.selected_meal.id.clone()];
    let mut recommendations: Vec<SlotRecommendation> = Vec::new();
    let mut gaps: Vec<SlotGap> = Vec::new();

    let mut daily_total = Nutrition::from(&request.selected_meal);

    for target in slot_targets {
        if target.calories <= 0.0 {
            gaps.push(SlotGap {
                meal_slot: target.slot,
                reason: GapReason::NotNeeded,
            });
            continue;
        }

        match select_for_slot(
            gateway,
            target.slot,
            target.calories,
            &ratio,
            &used_categories,
            &exclude_ids,
            config,
        ) {
            Some(candidate) => {
                debug!(
                    diet = %diet.label(),
                    slot = %target.slot,
                    menu = %candidate.item.name,
                    score = candidate.score.total,
                    "slot filled"
                );
                used_categories.insert(candidate.item.category.clone());
                exclude_ids.push(candidate.item.id.clone());
                daily_total.add(&candidate.serving);
                recommendations.push(SlotRecommendation::from_candidate(
                    target.slot,
                    &candidate,
                    target.calories,
                ));
            }
            None => {
                gaps.push(SlotGap {
                    meal_slot: target.slot,
                    reason: GapReason::NoCandidate,
                });
            }
        }
    }

    let accuracy = plan_accuracy(daily_total.calories, request.daily_target.calories);

    ReversePlanResult {
        diet_type: diet,
        diet_label: diet.label().to_string(),
        selected_meal: request.selected_meal.clone(),
        recommendations,
        gaps,
        daily_total,
        target_total: request.daily_target,
        accuracy,
    }
}
