//! ShoppingList Entity
//!
//! A named, dated collection of items. Item order is display order.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use super::entity::{new_id, Entity};
use super::item::Item;

/// A shopping list as persisted in the storage blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Lists written before list completion existed have no flag.
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ShoppingList {
    /// Create an empty, open list with a fresh id
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            // Backups carry milliseconds only
            created_at: created_at.trunc_subsecs(3),
            completed: false,
            items: Vec::new(),
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Remove an item by id. Returns whether something was removed.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Share of completed items, 0..=100, rounded
    pub fn progress_percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u32
    }
}

impl Entity for ShoppingList {
    fn id(&self) -> &str {
        &self.id
    }
}
