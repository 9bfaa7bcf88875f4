use reverse_diet_planner_rs::catalog::MenuCatalog;
use reverse_diet_planner_rs::models::{
    DailyTarget, DietType, GapReason, MealSlot, MenuItem, PlanRequest, SelectedMeal,
};
use reverse_diet_planner_rs::planner::{plan_alternatives, EngineConfig};

fn menu(id: &str, name: &str, category: &str, cal_per_100: f64, p: f64, c: f64, f: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        slot: None,
        calories: cal_per_100,
        protein: p,
        carbs: c,
        fat: f,
    }
}

fn sample_catalog() -> MenuCatalog {
    // Servings (x3.5): 455 to 910 kcal, spread over categories
    MenuCatalog::new(vec![
        menu("m-1", "Kimchi Fried Rice", "rice", 180.0, 5.0, 28.0, 5.0),
        menu("m-2", "Beef Noodle Soup", "noodle", 210.0, 10.0, 25.0, 7.0),
        menu("m-3", "Grilled Chicken Salad", "salad", 130.0, 16.0, 6.0, 5.0),
        menu("m-4", "Pork Cutlet", "meat", 260.0, 14.0, 20.0, 13.0),
        menu("m-5", "Tofu Stew", "soup", 150.0, 10.0, 8.0, 8.0),
        menu("m-6", "Bulgogi Bowl", "meat", 200.0, 13.0, 18.0, 8.0),
    ])
}

fn request(selected_calories: f64, target_calories: f64, slot: MealSlot) -> PlanRequest {
    PlanRequest {
        selected_meal: SelectedMeal {
            id: "sel-1".to_string(),
            name: "Bibimbap".to_string(),
            slot,
            calories: selected_calories,
            protein: 20.0,
            carbs: 70.0,
            fat: 12.0,
        },
        daily_target: DailyTarget {
            calories: target_calories,
            protein: 120.0,
            carbs: 250.0,
            fat: 60.0,
        },
    }
}

#[test]
fn test_three_plans_with_consistent_totals() {
    let catalog = sample_catalog();
    let req = request(500.0, 2000.0, MealSlot::Lunch);

    let set = plan_alternatives(&catalog, &req, &EngineConfig::default()).unwrap();

    assert!(set.complete);
    assert_eq!(set.plans.len(), 3);

    let diets: Vec<DietType> = set.plans.iter().map(|p| p.diet_type).collect();
    assert_eq!(
        diets,
        vec![DietType::Balanced, DietType::LowCarb, DietType::HighProtein]
    );

    for plan in &set.plans {
        // Total = selected meal + recommendations, within rounding
        let rec_cal: f64 = plan.recommendations.iter().map(|r| r.menu.calories).sum();
        assert!((plan.daily_total.calories - (500.0 + rec_cal)).abs() < 1e-6);

        let rec_protein: f64 = plan.recommendations.iter().map(|r| r.menu.protein).sum();
        assert!((plan.daily_total.protein - (20.0 + rec_protein)).abs() < 1e-6);

        // Pre-selected slot never recommended
        assert!(plan.recommendations.iter().all(|r| r.meal_slot != MealSlot::Lunch));

        // Recommendations in canonical slot order
        let slots: Vec<MealSlot> = plan.recommendations.iter().map(|r| r.meal_slot).collect();
        let mut expected = slots.clone();
        expected.sort_by_key(|s| MealSlot::ALL.iter().position(|x| x == s).unwrap());
        assert_eq!(slots, expected);

        assert!(plan.accuracy <= 100);
    }
}

#[test]
fn test_deviation_is_signed_against_slot_target() {
    let catalog = sample_catalog();
    let req = request(500.0, 2000.0, MealSlot::Lunch);

    let set = plan_alternatives(&catalog, &req, &EngineConfig::default()).unwrap();
    for plan in &set.plans {
        for rec in &plan.recommendations {
            assert!(
                (rec.calories_diff - (rec.menu.calories - rec.target_calories)).abs() < 1e-9
            );
        }
    }
}

#[test]
fn test_selected_meal_over_target_produces_only_gaps() {
    let catalog = sample_catalog();
    let req = request(2100.0, 1800.0, MealSlot::Dinner);

    let set = plan_alternatives(&catalog, &req, &EngineConfig::default()).unwrap();

    for plan in &set.plans {
        assert!(plan.recommendations.is_empty());
        assert_eq!(plan.gaps.len(), 2);
        assert!(plan.gaps.iter().all(|g| g.reason == GapReason::NotNeeded));

        // Accuracy computed against the actual over-target total:
        // |2100 - 1800| / 1800 = 16.67% deviation
        assert_eq!(plan.accuracy, 83);
        assert!((plan.daily_total.calories - 2100.0).abs() < 1e-9);
    }
}

#[test]
fn test_catalog_miss_leaves_gap_in_every_strategy() {
    // Breakfast target (625) is coverable, dinner target (875) is not:
    // the only big-enough item is excluded once used, and the rest are
    // far below the window.
    let catalog = MenuCatalog::new(vec![
        menu("m-1", "Kimchi Fried Rice", "rice", 180.0, 5.0, 28.0, 5.0), // 630 kcal serving
        menu("m-2", "Seaweed Soup", "soup", 25.0, 2.0, 1.0, 1.0),        // 87.5 kcal serving
    ]);
    let req = request(500.0, 2000.0, MealSlot::Lunch);

    let set = plan_alternatives(&catalog, &req, &EngineConfig::default()).unwrap();

    for plan in &set.plans {
        assert_eq!(plan.recommendations.len(), 1);
        assert_eq!(plan.recommendations[0].meal_slot, MealSlot::Breakfast);

        assert_eq!(plan.gaps.len(), 1);
        assert_eq!(plan.gaps[0].meal_slot, MealSlot::Dinner);
        assert_eq!(plan.gaps[0].reason, GapReason::NoCandidate);

        // Dailies still honest: 500 + 630
        assert!((plan.daily_total.calories - 1130.0).abs() < 1e-9);
        assert!(plan.accuracy < 100);
    }
}

#[test]
fn test_idempotent_over_unchanged_catalog() {
    let catalog = sample_catalog();
    let req = request(650.0, 2200.0, MealSlot::Breakfast);
    let config = EngineConfig::default();

    let first = plan_alternatives(&catalog, &req, &config).unwrap();
    let second = plan_alternatives(&catalog, &req, &config).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_output_contract_shape() {
    let catalog = sample_catalog();
    let req = request(500.0, 2000.0, MealSlot::Lunch);

    let set = plan_alternatives(&catalog, &req, &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&set.plans).unwrap();

    let plans = json.as_array().unwrap();
    assert_eq!(plans.len(), 3);

    let first = &plans[0];
    assert_eq!(first["dietType"], "balanced");
    assert_eq!(first["dietLabel"], "Balanced");
    assert!(first["selectedMeal"]["calories"].is_number());
    assert!(first["dailyTotal"]["calories"].is_number());
    assert!(first["targetTotal"]["calories"].is_number());
    assert!(first["accuracy"].is_u64());

    let rec = &first["recommendations"][0];
    assert!(rec["mealSlot"].is_string());
    assert!(rec["menu"]["id"].is_string());
    assert!(rec["menu"]["category"].is_string());
    assert!(rec["targetCalories"].is_number());
    assert!(rec["caloriesDiff"].is_number());
}
