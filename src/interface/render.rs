use crate::models::{GapReason, MenuItem, PlanSet, ReversePlanResult};

/// Display one strategy plan as a formatted block.
pub fn display_plan(plan: &ReversePlanResult) {
    println!("=== {} ===", plan.diet_label);
    println!();

    println!(
        "  (chosen) {:<24} {} - {:>4.0} cal",
        plan.selected_meal.name,
        plan.selected_meal.slot,
        plan.selected_meal.calories
    );

    let max_name_len = plan
        .recommendations
        .iter()
        .map(|r| r.menu.name.len())
        .max()
        .unwrap_or(10);

    for rec in &plan.recommendations {
        let sign = if rec.calories_diff >= 0.0 { "+" } else { "" };
        println!(
            "  {:<9}{:<width$} {} - {:>4.0} cal (target {:.0}, {}{:.0})",
            "",
            rec.menu.name,
            rec.meal_slot,
            rec.menu.calories,
            rec.target_calories,
            sign,
            rec.calories_diff,
            width = max_name_len.max(24)
        );
    }

    for gap in &plan.gaps {
        let reason = match gap.reason {
            GapReason::NotNeeded => "target already met",
            GapReason::NoCandidate => "no catalog match",
        };
        println!("  {:<9}({}: {})", "", gap.meal_slot, reason);
    }

    println!();
    println!(
        "  Total: {:.0} cal, C:{:.0}g P:{:.0}g F:{:.0}g (target {:.0} cal)",
        plan.daily_total.calories,
        plan.daily_total.carbs,
        plan.daily_total.protein,
        plan.daily_total.fat,
        plan.target_total.calories
    );
    println!("  Accuracy: {}%", plan.accuracy);
    println!();
}

/// Display all strategy plans side by side (sequentially).
pub fn display_plan_set(set: &PlanSet) {
    if set.plans.is_empty() {
        println!("No plans generated.");
        return;
    }

    println!();
    for plan in &set.plans {
        display_plan(plan);
    }

    if !set.complete {
        println!("(!) Deadline exceeded: some strategies were skipped.");
        println!();
    }
}

/// Display the menu catalog as a simple list.
pub fn display_menu_list(menus: &[&MenuItem], serving_multiplier: f64, title: &str) {
    if menus.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, menus.len());
    println!();

    for menu in menus {
        let serving = menu.serving_nutrition(serving_multiplier);
        let slot = menu
            .slot
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| "any".to_string());
        println!(
            "  {} [{}] - {} - {:.0} cal/serving, C:{:.0} P:{:.0} F:{:.0}",
            menu.name, menu.category, slot, serving.calories, serving.carbs, serving.protein,
            serving.fat
        );
    }

    println!();
}
