//! Item Commands

use shopping_list_core::{commands, ShoppingList};

use super::repo;

pub fn add_item(list_id: &str, name: &str, quantity: u32) -> Result<ShoppingList, String> {
    commands::add_item(&repo(), list_id, name, quantity).map_err(|e| e.to_string())
}

pub fn update_item(list_id: &str, item_id: &str, name: &str, quantity: u32) -> Result<ShoppingList, String> {
    commands::update_item(&repo(), list_id, item_id, name, quantity).map_err(|e| e.to_string())
}

pub fn toggle_item(list_id: &str, item_id: &str) -> Result<ShoppingList, String> {
    commands::toggle_item(&repo(), list_id, item_id).map_err(|e| e.to_string())
}

pub fn remove_item(list_id: &str, item_id: &str) -> Result<ShoppingList, String> {
    commands::remove_item(&repo(), list_id, item_id).map_err(|e| e.to_string())
}
