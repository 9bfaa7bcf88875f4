use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::planner::config::ScoringConfig;
use crate::planner::constants::{
    CALORIE_WEIGHT, CANDIDATE_TOLERANCE_KCAL, MACRO_WEIGHT, VARIETY_WEIGHT,
};

/// Runtime-configurable scoring knobs for tuning.
///
/// Weights are kept normalized (sum 1.0) so every configuration stays
/// comparable to the shipped 0.4/0.4/0.2 split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunerKnobs {
    pub calorie_weight: f64,
    pub macro_weight: f64,
    pub variety_weight: f64,
    pub tolerance_kcal: f64,
}

impl Default for TunerKnobs {
    fn default() -> Self {
        Self {
            calorie_weight: CALORIE_WEIGHT,
            macro_weight: MACRO_WEIGHT,
            variety_weight: VARIETY_WEIGHT,
            tolerance_kcal: CANDIDATE_TOLERANCE_KCAL,
        }
    }
}

impl TunerKnobs {
    /// Generate random knobs within the given ranges. Weights are drawn
    /// independently and then renormalized to sum 1.0.
    pub fn random(rng: &mut impl Rng, ranges: &KnobRanges) -> Self {
        let calorie = rng.gen_range(ranges.calorie_weight.0..=ranges.calorie_weight.1);
        let macro_w = rng.gen_range(ranges.macro_weight.0..=ranges.macro_weight.1);
        let variety = rng.gen_range(ranges.variety_weight.0..=ranges.variety_weight.1);
        let sum = calorie + macro_w + variety;

        Self {
            calorie_weight: calorie / sum,
            macro_weight: macro_w / sum,
            variety_weight: variety / sum,
            tolerance_kcal: rng.gen_range(ranges.tolerance_kcal.0..=ranges.tolerance_kcal.1),
        }
    }

    /// The scoring config these knobs describe.
    pub fn to_scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            calorie_weight: self.calorie_weight,
            macro_weight: self.macro_weight,
            variety_weight: self.variety_weight,
            tolerance_kcal: self.tolerance_kcal,
            ..ScoringConfig::default()
        }
    }

    /// Format knobs as a compact string for display.
    pub fn display(&self) -> String {
        format!(
            "cw={:.3} mw={:.3} vw={:.3} tol={:.0}",
            self.calorie_weight, self.macro_weight, self.variety_weight, self.tolerance_kcal
        )
    }
}

/// Min/max ranges for each tunable knob.
#[derive(Debug, Clone)]
pub struct KnobRanges {
    /// (min, max) raw draw for the calorie weight (pre-normalization).
    pub calorie_weight: (f64, f64),
    /// (min, max) raw draw for the macro weight.
    pub macro_weight: (f64, f64),
    /// (min, max) raw draw for the variety weight.
    pub variety_weight: (f64, f64),
    /// (min, max) for the candidate calorie window half-width.
    pub tolerance_kcal: (f64, f64),
}

impl Default for KnobRanges {
    fn default() -> Self {
        Self {
            calorie_weight: (0.1, 0.8),
            macro_weight: (0.1, 0.8),
            variety_weight: (0.0, 0.5),
            tolerance_kcal: (50.0, 300.0),
        }
    }
}
