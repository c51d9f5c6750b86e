//! List Commands

use chrono::{DateTime, Utc};
use shopping_list_core::{commands, ShoppingList};

use super::repo;

pub fn list_lists() -> Vec<ShoppingList> {
    commands::list_lists(&repo())
}

pub fn create_list(name: &str, created_at: Option<DateTime<Utc>>) -> Result<ShoppingList, String> {
    let created_at = created_at.unwrap_or_else(Utc::now);
    commands::create_list(&repo(), name, created_at).map_err(|e| e.to_string())
}

pub fn update_list_info(id: &str, name: &str, created_at: DateTime<Utc>) -> Result<ShoppingList, String> {
    commands::update_list_info(&repo(), id, name, created_at).map_err(|e| e.to_string())
}

pub fn toggle_list(id: &str) -> Result<ShoppingList, String> {
    commands::toggle_list(&repo(), id).map_err(|e| e.to_string())
}

pub fn delete_list(id: &str) -> Result<(), String> {
    commands::delete_list(&repo(), id).map_err(|e| e.to_string())
}
