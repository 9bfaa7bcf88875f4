pub mod assembly;
pub mod config;
pub mod constants;
pub mod distribution;
pub mod orchestrator;
pub mod scoring;
pub mod selection;

pub use assembly::{assemble_plan, plan_accuracy};
pub use config::{EngineConfig, ScoringConfig};
pub use constants::*;
pub use distribution::{distribute_remaining, SlotTarget};
pub use orchestrator::plan_alternatives;
pub use scoring::{calorie_score, macro_score, score_candidate, variety_score};
pub use selection::select_for_slot;
