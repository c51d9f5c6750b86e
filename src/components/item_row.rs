//! Item Row Component
//!
//! Individual item in a list. Clicking the row opens it for editing.

use leptos::prelude::*;
use shopping_list_core::Item;

use crate::commands;
use crate::components::{DeleteConfirmButton, ItemDraft};
use crate::context::use_app_context;
use crate::store::{store_update_list, use_app_store};

#[component]
pub fn ItemRow(
    list_id: String,
    item: Item,
    /// Opened with this item's values on click
    draft: RwSignal<Option<ItemDraft>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let ids = StoredValue::new((list_id, item.id.clone()));
    let completed = item.completed;
    let edit_draft = ItemDraft {
        item_id: Some(item.id.clone()),
        name: item.name.clone(),
        quantity: item.quantity,
    };

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let (list_id, item_id) = ids.get_value();
        match commands::toggle_item(&list_id, &item_id) {
            Ok(list) => store_update_list(&store, list),
            Err(e) => ctx.error(e),
        }
    };

    let remove = Callback::new(move |_| {
        let (list_id, item_id) = ids.get_value();
        match commands::remove_item(&list_id, &item_id) {
            Ok(list) => {
                store_update_list(&store, list);
                ctx.success("Item removed");
            }
            Err(e) => ctx.error(e),
        }
    });

    view! {
        <div
            class=if completed { "item-row completed" } else { "item-row" }
            on:click=move |_| draft.set(Some(edit_draft.clone()))
        >
            <button
                class=if completed { "check-btn checked" } else { "check-btn" }
                title="Mark as bought"
                on:click=toggle
            >
                "✓"
            </button>
            <div class="item-info">
                <span class="item-name">{item.name}</span>
                <span class="item-qty">{format!("Quantity: {}", item.quantity)}</span>
            </div>
            <DeleteConfirmButton button_class="delete-btn" prompt="Remove item?" on_confirm=remove />
        </div>
    }
}
