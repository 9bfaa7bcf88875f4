mod catalog;
mod meal;
mod plan;

pub use catalog::MenuItem;
pub use meal::{DailyTarget, DietType, MacroRatio, MealSlot, PlanRequest, SelectedMeal};
pub use plan::{
    GapReason, Nutrition, PlanSet, RecommendedMenu, ReversePlanResult, ScoreBreakdown,
    ScoredCandidate, SlotGap, SlotRecommendation,
};
