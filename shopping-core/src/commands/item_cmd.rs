//! Commands for Item CRUD inside a list
//!
//! Every command returns the whole updated list so views can re-render it.

use crate::domain::{DomainError, DomainResult, Item, ShoppingList};
use crate::repository::Repository;
use super::list_cmd::{modify_list, required_name};

fn item_not_found(item_id: &str) -> DomainError {
    DomainError::NotFound(format!("item {}", item_id))
}

/// Append a new item to a list
pub fn add_item<R: Repository<ShoppingList>>(
    repo: &R,
    list_id: &str,
    name: &str,
    quantity: u32,
) -> DomainResult<ShoppingList> {
    let item = Item::new(required_name(name, "product")?, quantity);
    modify_list(repo, list_id, |list| {
        list.items.push(item);
        Ok(())
    })
}

/// Change name and quantity of an existing item
pub fn update_item<R: Repository<ShoppingList>>(
    repo: &R,
    list_id: &str,
    item_id: &str,
    name: &str,
    quantity: u32,
) -> DomainResult<ShoppingList> {
    let name = required_name(name, "product")?;
    modify_list(repo, list_id, |list| {
        let item = list.item_mut(item_id).ok_or_else(|| item_not_found(item_id))?;
        item.name = name;
        item.set_quantity(quantity);
        Ok(())
    })
}

/// Flip the completed flag of an item
pub fn toggle_item<R: Repository<ShoppingList>>(
    repo: &R,
    list_id: &str,
    item_id: &str,
) -> DomainResult<ShoppingList> {
    modify_list(repo, list_id, |list| {
        list.item_mut(item_id).ok_or_else(|| item_not_found(item_id))?.toggle();
        Ok(())
    })
}

/// Remove an item from a list
pub fn remove_item<R: Repository<ShoppingList>>(
    repo: &R,
    list_id: &str,
    item_id: &str,
) -> DomainResult<ShoppingList> {
    modify_list(repo, list_id, |list| {
        if list.remove_item(item_id) {
            Ok(())
        } else {
            Err(item_not_found(item_id))
        }
    })
}
