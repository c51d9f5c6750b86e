//! Item Entity
//!
//! A named, quantified line of a shopping list.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::{new_id, Entity};

/// A product line inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredItem")]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// How many to buy, never below 1
    pub quantity: u32,
    /// Already in the cart
    pub completed: bool,
}

/// Item as found in storage.
///
/// Older builds wrote `bought`; toggling an item there added `completed`
/// next to it, so both keys can be present. `completed` wins.
#[derive(Deserialize)]
struct StoredItem {
    id: String,
    name: String,
    #[serde(default = "default_quantity", deserialize_with = "clamped_quantity")]
    quantity: u32,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    bought: Option<bool>,
}

impl From<StoredItem> for Item {
    fn from(stored: StoredItem) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            quantity: stored.quantity,
            completed: stored.completed.or(stored.bought).unwrap_or(false),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

fn clamped_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    // Stored numbers may be floats or negative; anything below 1 reads as 1.
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw >= 1.0 {
        Ok(raw.min(u32::MAX as f64) as u32)
    } else {
        Ok(1)
    }
}

impl Item {
    /// Create a new, not yet completed item with a fresh id
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            quantity: quantity.max(1),
            completed: false,
        }
    }

    /// Set the quantity, clamped at 1
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Apply a +/- step to a quantity. The result never goes below 1.
pub fn step_quantity(quantity: u32, delta: i32) -> u32 {
    let next = i64::from(quantity) + i64::from(delta);
    next.clamp(1, i64::from(u32::MAX)) as u32
}
