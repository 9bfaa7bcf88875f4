pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_request, match_menu_by_name, prompt_daily_target, prompt_selected_meal,
    prompt_slot,
};
pub use render::{display_menu_list, display_plan, display_plan_set};
