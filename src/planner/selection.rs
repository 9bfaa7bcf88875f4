use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{CandidateQuery, CatalogGateway};
use crate::models::{MacroRatio, MealSlot, ScoredCandidate};
use crate::planner::config::ScoringConfig;
use crate::planner::scoring::score_candidate;

/// Pick the best menu for one slot of one plan.
///
/// Retrieves candidates within the configured calorie window, scores
/// every one, and returns the highest-scoring candidate. Ties break in
/// first-seen order (strictly-greater replacement over a stable scan).
/// A failing gateway or an empty window yields `None`, never an error.
pub fn select_for_slot<G: CatalogGateway + ?Sized>(
    gateway: &G,
    slot: MealSlot,
    target_calories: f64,
    target_ratio: &MacroRatio,
    used_categories: &HashSet<String>,
    exclude_ids: &[String],
    config: &ScoringConfig,
) -> Option<ScoredCandidate> {
    let query = CandidateQuery {
        target_calories,
        tolerance_kcal: config.tolerance_kcal,
        slot: Some(slot),
        exclude_ids: exclude_ids.to_vec(),
        serving_multiplier: config.serving_multiplier,
    };

    let candidates = match gateway.find(&query) {
        Ok(items) => items,
        Err(e) => {
            warn!(%slot, error = %e, "catalog read failed, treating as zero candidates");
            return None;
        }
    };

    debug!(%slot, target = target_calories, count = candidates.len(), "scoring candidates");

    let mut best: Option<ScoredCandidate> = None;
    for item in candidates {
        let serving = item.serving_nutrition(config.serving_multiplier);
        let score = score_candidate(
            &serving,
            &item.category,
            target_calories,
            target_ratio,
            used_categories,
            config,
        );

        let beats = best
            .as_ref()
            .map(|b| score.total > b.score.total)
            .unwrap_or(true);
        if beats {
            best = Some(ScoredCandidate {
                item,
                serving,
                score,
            });
        }
    }

    best
}
