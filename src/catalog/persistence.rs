use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{MealSlot, MenuItem};

/// Load a menu catalog snapshot from a JSON file.
///
/// Deduplicates by id (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, MenuItem> = HashMap::new();
    let mut order = Vec::new();
    for item in items {
        if seen.insert(item.id.clone(), item.clone()).is_none() {
            order.push(item.id);
        }
    }

    Ok(order.into_iter().filter_map(|id| seen.remove(&id)).collect())
}

/// Save a menu catalog snapshot to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// One row of a CSV catalog export. Slot is free text so an empty cell
/// can mean "any slot".
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    slot: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

/// Import menu items from a CSV export of the catalog.
///
/// Expected header: `id,name,category,slot,calories,protein,carbs,fat`
/// with per-100-unit nutrition values. Rows with an unparseable slot
/// are kept slot-unrestricted.
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRow = row?;
        let slot = if row.slot.trim().is_empty() {
            None
        } else {
            match row.slot.parse::<MealSlot>() {
                Ok(slot) => Some(slot),
                Err(_) => {
                    tracing::warn!(id = %row.id, slot = %row.slot, "unknown slot in CSV, keeping unrestricted");
                    None
                }
            }
        };

        items.push(MenuItem {
            id: row.id,
            name: row.name,
            category: row.category,
            slot,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
        });
    }

    Ok(items)
}
