//! Menu payload cleaning.
//!
//! The extraction backend answers with a JSON document shaped like
//! `{"items": [{"name": "...", "price": "...", "description": "..."}]}`.
//! Fields may be missing, `null`, padded with whitespace, or not strings at
//! all. [`parse_menu`] turns such a payload into a list of [`MenuItem`]s with
//! every field filled in, and [`MenuItem::to_card`] renders one with its
//! normalized display price.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PriceError;
use crate::format::{NOT_AVAILABLE, normalize_price_str};
use crate::result::Result;

/// One cleaned menu entry, price still as extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name, never empty.
    pub name: String,
    /// Raw price text; `N/A` when the backend gave none.
    pub price: String,
    /// Description, or a generated one when the backend gave none.
    pub description: String,
}

/// A menu entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCard {
    /// Dish name.
    pub name: String,
    /// Normalized display price.
    pub price: String,
    /// Description.
    pub description: String,
}

impl MenuItem {
    /// Cleans a single payload entry. Returns `None` for entries that are not
    /// objects or that have no name.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(fields) = value.as_object() else {
            debug!("Skipping non-object menu entry: {}", value);
            return None;
        };

        let name = field_text(fields, "name");
        if name.is_empty() {
            debug!("Skipping menu entry without a name");
            return None;
        }
        let mut price = field_text(fields, "price");
        if price.is_empty() {
            price = NOT_AVAILABLE.to_string();
        }
        let mut description = field_text(fields, "description");
        if description.is_empty() {
            description = format!("A signature dish named {name}.");
        }

        Some(MenuItem {
            name,
            price,
            description,
        })
    }

    /// Renders the item with its normalized price.
    pub fn to_card(&self) -> MenuCard {
        MenuCard {
            name: self.name.clone(),
            price: normalize_price_str(&self.price),
            description: self.description.clone(),
        }
    }
}

/// Decodes and cleans a backend menu payload.
pub fn parse_menu(json: &str) -> Result<Vec<MenuItem>> {
    let payload: Value = serde_json::from_str(json)?;
    let items = payload
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| PriceError::MenuExtraction("No menu items detected in payload.".to_string()))?;

    let cleaned: Vec<MenuItem> = items.iter().filter_map(MenuItem::from_value).collect();
    if cleaned.is_empty() {
        return Err(PriceError::MenuExtraction(
            "All menu entries were empty after cleaning.".to_string(),
        ));
    }
    debug!("Cleaned {} of {} menu entries", cleaned.len(), items.len());
    Ok(cleaned)
}

/// Decodes, cleans and renders a backend menu payload in one step.
pub fn render_menu(json: &str) -> Result<Vec<MenuCard>> {
    Ok(parse_menu(json)?.iter().map(MenuItem::to_card).collect())
}

/// Text of a field: strings are trimmed; missing fields and falsy values
/// (`null`, `false`, zero, empty arrays and objects) are empty; other values
/// use their JSON rendering.
fn field_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None => String::new(),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(value) if is_falsy(value) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
