pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod tuner;

pub use error::{PlanError, Result};
pub use models::{MenuItem, PlanRequest, PlanSet, ReversePlanResult};
pub use planner::{plan_alternatives, EngineConfig, ScoringConfig};
