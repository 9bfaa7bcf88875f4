use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{DailyTarget, MealSlot, MenuItem, PlanRequest, SelectedMeal};

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the slot the chosen meal belongs to.
pub fn prompt_slot() -> Result<MealSlot> {
    let options: Vec<&str> = MealSlot::ALL.iter().map(|s| s.label()).collect();

    let selection = Select::new()
        .with_prompt("Which meal slot is this for?")
        .items(&options)
        .default(1) // lunch
        .interact()?;

    Ok(MealSlot::ALL[selection])
}

/// Find a menu item by typed name, with fuzzy matching.
///
/// Tries an exact case-insensitive match first, then `jaro_winkler`
/// above 0.7 with a confirm/select flow. Returns `None` when the user
/// rejects every suggestion.
pub fn match_menu_by_name<'a>(name: &str, menus: &[&'a MenuItem]) -> Result<Option<&'a MenuItem>> {
    let exact = menus
        .iter()
        .find(|m| m.name.to_lowercase() == name.to_lowercase());
    if let Some(menu) = exact {
        return Ok(Some(menu));
    }

    let mut candidates: Vec<(&MenuItem, f64)> = menus
        .iter()
        .map(|m| (*m, jaro_winkler(&m.name.to_lowercase(), &name.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let menu = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", menu.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(menu) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(m, _)| m.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Prompt for the already-chosen meal.
///
/// A typed name matching the catalog fills in nutrition from the
/// serving-scaled catalog facts; otherwise the user enters the facts
/// by hand.
pub fn prompt_selected_meal(menus: &[&MenuItem], serving_multiplier: f64) -> Result<SelectedMeal> {
    let name: String = Input::new()
        .with_prompt("What meal have you already chosen?")
        .interact_text()?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(PlanError::InvalidInput("Meal name must not be empty".to_string()));
    }

    let slot = prompt_slot()?;

    if let Some(menu) = match_menu_by_name(&name, menus)? {
        let serving = menu.serving_nutrition(serving_multiplier);
        println!(
            "Using catalog facts for '{}': {:.0} kcal per serving",
            menu.name, serving.calories
        );
        return Ok(SelectedMeal {
            id: menu.id.clone(),
            name: menu.name.clone(),
            slot,
            calories: serving.calories,
            protein: serving.protein,
            carbs: serving.carbs,
            fat: serving.fat,
        });
    }

    println!("'{}' is not in the catalog; enter its nutrition facts.", name);
    let calories = prompt_number("Calories", 500.0)?;
    let protein = prompt_number("Protein (g)", 20.0)?;
    let carbs = prompt_number("Carbs (g)", 60.0)?;
    let fat = prompt_number("Fat (g)", 15.0)?;

    Ok(SelectedMeal {
        id: format!("manual-{}", name.to_lowercase().replace(' ', "-")),
        name,
        slot,
        calories,
        protein,
        carbs,
        fat,
    })
}

/// Prompt for the daily target.
pub fn prompt_daily_target() -> Result<DailyTarget> {
    let calories = prompt_number("Daily calorie target", 2000.0)?;
    if calories <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Daily calorie target must be positive".to_string(),
        ));
    }

    let protein = prompt_number("Daily protein target (g)", 120.0)?;
    let carbs = prompt_number("Daily carb target (g)", 250.0)?;
    let fat = prompt_number("Daily fat target (g)", 60.0)?;

    Ok(DailyTarget {
        calories,
        protein,
        carbs,
        fat,
    })
}

/// Collect a full plan request interactively.
pub fn collect_plan_request(menus: &[&MenuItem], serving_multiplier: f64) -> Result<PlanRequest> {
    let selected_meal = prompt_selected_meal(menus, serving_multiplier)?;
    let daily_target = prompt_daily_target()?;

    let request = PlanRequest {
        selected_meal,
        daily_target,
    };
    request.validate()?;
    Ok(request)
}
