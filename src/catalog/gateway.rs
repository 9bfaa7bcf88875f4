use std::collections::HashMap;

use crate::error::Result;
use crate::models::{MealSlot, MenuItem};

/// A calorie-window candidate query.
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    /// Center of the calorie window (one-serving kcal).
    pub target_calories: f64,

    /// Half-width of the window, in kcal.
    pub tolerance_kcal: f64,

    /// Restrict to items offered in this slot. `None` matches any slot.
    pub slot: Option<MealSlot>,

    /// Item ids to skip (already used in the plan, or the selected meal).
    pub exclude_ids: Vec<String>,

    /// Per-100-unit to one-serving scaling factor. The window is
    /// evaluated against serving-scaled calories.
    pub serving_multiplier: f64,
}

/// The engine's single I/O boundary: a read-only view of the menu
/// catalog. A failing gateway is treated by callers as zero candidates
/// for the affected slot, never as a plan-level failure.
pub trait CatalogGateway {
    fn find(&self, query: &CandidateQuery) -> Result<Vec<MenuItem>>;
}

/// In-memory catalog keyed by item id. Backs the CLI (loaded from a
/// JSON or CSV snapshot) and the tests.
pub struct MenuCatalog {
    items: HashMap<String, MenuItem>,

    /// Insertion order of ids, so query results are deterministic.
    order: Vec<String>,
}

impl MenuCatalog {
    /// Build a catalog from a list of items, deduplicating by id
    /// (last occurrence wins) and dropping invalid rows.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for item in items {
            if !item.is_valid() {
                tracing::warn!(id = %item.id, "skipping invalid catalog row");
                continue;
            }
            if map.insert(item.id.clone(), item.clone()).is_none() {
                order.push(item.id);
            }
        }
        Self { items: map, order }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.get(id)
    }

    /// All items in insertion order.
    pub fn all_items(&self) -> Vec<&MenuItem> {
        self.order.iter().filter_map(|id| self.items.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogGateway for MenuCatalog {
    fn find(&self, query: &CandidateQuery) -> Result<Vec<MenuItem>> {
        let lo = query.target_calories - query.tolerance_kcal;
        let hi = query.target_calories + query.tolerance_kcal;

        let matches: Vec<MenuItem> = self
            .all_items()
            .into_iter()
            .filter(|item| !query.exclude_ids.iter().any(|id| id == &item.id))
            .filter(|item| query.slot.is_none_or(|slot| item.fits_slot(slot)))
            .filter(|item| {
                let serving_cal = item.calories * query.serving_multiplier;
                serving_cal >= lo && serving_cal <= hi
            })
            .cloned()
            .collect();

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cal_per_100: f64, slot: Option<MealSlot>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "rice".to_string(),
            slot,
            calories: cal_per_100,
            protein: 5.0,
            carbs: 20.0,
            fat: 3.0,
        }
    }

    fn query(target: f64) -> CandidateQuery {
        CandidateQuery {
            target_calories: target,
            tolerance_kcal: 150.0,
            slot: None,
            exclude_ids: Vec::new(),
            serving_multiplier: 3.5,
        }
    }

    #[test]
    fn test_window_uses_serving_scaled_calories() {
        // 180 per 100 units -> 630 per serving
        let catalog = MenuCatalog::new(vec![item("a", 180.0, None)]);

        assert_eq!(catalog.find(&query(630.0)).unwrap().len(), 1);
        assert_eq!(catalog.find(&query(780.0)).unwrap().len(), 1); // 630 at window edge
        assert!(catalog.find(&query(800.0)).unwrap().is_empty());
    }

    #[test]
    fn test_slot_filter_and_exclusions() {
        let catalog = MenuCatalog::new(vec![
            item("a", 180.0, Some(MealSlot::Lunch)),
            item("b", 180.0, Some(MealSlot::Dinner)),
            item("c", 180.0, None),
        ]);

        let mut q = query(630.0);
        q.slot = Some(MealSlot::Lunch);
        let found = catalog.find(&q).unwrap();
        let ids: Vec<&str> = found.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        q.exclude_ids = vec!["a".to_string()];
        let found = catalog.find(&q).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c");
    }

    #[test]
    fn test_dedup_by_id_last_wins() {
        let mut second = item("a", 180.0, None);
        second.category = "soup".to_string();

        let catalog = MenuCatalog::new(vec![item("a", 180.0, None), second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().category, "soup");
    }

    #[test]
    fn test_results_are_in_insertion_order() {
        let catalog = MenuCatalog::new(vec![
            item("z", 180.0, None),
            item("a", 180.0, None),
            item("m", 180.0, None),
        ]);
        let found = catalog.find(&query(630.0)).unwrap();
        let ids: Vec<&str> = found.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
