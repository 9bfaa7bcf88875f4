use std::time::Duration;

use crate::planner::constants::{
    CALORIE_WEIGHT, CANDIDATE_TOLERANCE_KCAL, MACRO_WEIGHT, SERVING_MULTIPLIER, VARIETY_WEIGHT,
};

/// Runtime-configurable scoring parameters.
///
/// Defaults mirror the named constants; the tuner binary searches over
/// these to re-derive the weights against a catalog snapshot.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub calorie_weight: f64,
    pub macro_weight: f64,
    pub variety_weight: f64,

    /// Half-width of the candidate calorie window, in kcal.
    pub tolerance_kcal: f64,

    /// Per-100-unit to one-serving scaling factor.
    pub serving_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calorie_weight: CALORIE_WEIGHT,
            macro_weight: MACRO_WEIGHT,
            variety_weight: VARIETY_WEIGHT,
            tolerance_kcal: CANDIDATE_TOLERANCE_KCAL,
            serving_multiplier: SERVING_MULTIPLIER,
        }
    }
}

/// Engine-level settings wrapping the scoring parameters.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,

    /// Overall wall-clock budget for one orchestrator call. When
    /// exceeded, remaining strategies are skipped and the result is
    /// flagged incomplete. `None` means no deadline.
    pub deadline: Option<Duration>,
}
