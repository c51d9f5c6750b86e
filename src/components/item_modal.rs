//! Item Modal Component
//!
//! Add a new item or edit name and quantity of an existing one.

use leptos::prelude::*;
use shopping_list_core::domain::step_quantity;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_update_list, use_app_store};

/// What the modal is editing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDraft {
    /// None while adding a new item
    pub item_id: Option<String>,
    pub name: String,
    pub quantity: u32,
}

impl ItemDraft {
    pub fn blank() -> Self {
        Self { item_id: None, name: String::new(), quantity: 1 }
    }
}

#[component]
pub fn ItemModal(
    list_id: String,
    /// Open while Some; set to None to close
    draft: RwSignal<Option<ItemDraft>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let list_id = StoredValue::new(list_id);

    let current = move || draft.get().unwrap_or_else(ItemDraft::blank);
    let set_name = move |name: String| {
        draft.update(|d| {
            if let Some(d) = d {
                d.name = name;
            }
        })
    };
    let step = move |delta: i32| {
        draft.update(|d| {
            if let Some(d) = d {
                d.quantity = step_quantity(d.quantity, delta);
            }
        })
    };

    let save = move |_| {
        let Some(d) = draft.get_untracked() else { return };
        if d.name.trim().is_empty() {
            ctx.error("Product name is required");
            return;
        }
        let list_id = list_id.get_value();
        let result = match &d.item_id {
            Some(item_id) => commands::update_item(&list_id, item_id, &d.name, d.quantity),
            None => commands::add_item(&list_id, &d.name, d.quantity),
        };
        match result {
            Ok(list) => {
                store_update_list(&store, list);
                ctx.success(if d.item_id.is_some() { "Item updated" } else { "Item added" });
                draft.set(None);
            }
            Err(e) => ctx.error(e),
        }
    };

    view! {
        <Show when=move || draft.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| draft.set(None)></div>
            <div class="modal">
                <h2 class="modal-title">
                    {move || if current().item_id.is_some() { "Edit item" } else { "New item" }}
                </h2>
                <input
                    type="text"
                    placeholder="Product name"
                    autofocus=true
                    prop:value=move || current().name
                    on:input=move |ev| set_name(event_target_value(&ev))
                />
                <div class="qty-stepper">
                    <button
                        type="button"
                        on:click=move |_| step(-1)
                    >
                        "-"
                    </button>
                    <span class="qty-value">{move || current().quantity}</span>
                    <button
                        type="button"
                        on:click=move |_| step(1)
                    >
                        "+"
                    </button>
                </div>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| draft.set(None)>"Cancel"</button>
                    <button type="button" class="confirm-btn" on:click=save>"Confirm"</button>
                </div>
            </div>
        </Show>
    }
}
