//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::ShoppingList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All lists, as last read from storage
    pub lists: Vec<ShoppingList>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a list in the store by ID
pub fn store_update_list(store: &AppStore, updated: ShoppingList) {
    if let Some(list) = store.lists().write().iter_mut().find(|list| list.id == updated.id) {
        *list = updated;
    }
}

/// Add a list to the store
pub fn store_add_list(store: &AppStore, list: ShoppingList) {
    store.lists().write().push(list);
}

/// Remove a list from the store by ID
pub fn store_remove_list(store: &AppStore, list_id: &str) {
    store.lists().write().retain(|list| list.id != list_id);
}

/// Replace every list in the store
pub fn store_set_lists(store: &AppStore, lists: Vec<ShoppingList>) {
    store.lists().set(lists);
}

/// Tracked snapshot of all lists
pub fn store_lists(store: &AppStore) -> Vec<ShoppingList> {
    store.lists().get()
}
