use std::time::Instant;

use tracing::{debug, warn};

use crate::catalog::CatalogGateway;
use crate::error::Result;
use crate::models::{DietType, PlanRequest, PlanSet};
use crate::planner::assembly::assemble_plan;
use crate::planner::config::EngineConfig;
use crate::planner::distribution::distribute_remaining;

/// Build the full set of day-plan alternatives for a request.
///
/// Validates the input, distributes the remaining budget once (the
/// split depends only on the selected meal and target, not on the diet
/// strategy), then assembles one plan per strategy in fixed order:
/// balanced, low-carb, high-protein. With a configured deadline,
/// strategies that would start past it are skipped and the set is
/// flagged incomplete; nothing is silently truncated.
pub fn plan_alternatives<G: CatalogGateway + ?Sized>(
    gateway: &G,
    request: &PlanRequest,
    config: &EngineConfig,
) -> Result<PlanSet> {
    request.validate()?;

    let slot_targets = distribute_remaining(
        request.daily_target.calories,
        request.selected_meal.calories,
        request.selected_meal.slot,
    );
    debug!(?slot_targets, "distributed remaining budget");

    let started = Instant::now();
    let mut plans = Vec::with_capacity(DietType::ALL.len());
    let mut complete = true;

    for diet in DietType::ALL {
        if let Some(deadline) = config.deadline {
            if started.elapsed() >= deadline {
                warn!(diet = %diet.label(), "deadline exceeded, skipping remaining strategies");
                complete = false;
                break;
            }
        }
        plans.push(assemble_plan(
            gateway,
            diet,
            request,
            &slot_targets,
            &config.scoring,
        ));
    }

    Ok(PlanSet { plans, complete })
}
