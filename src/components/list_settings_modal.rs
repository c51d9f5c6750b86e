//! List Settings Modal Component
//!
//! Rename a list and change its date.

use leptos::prelude::*;
use shopping_list_core::ShoppingList;

use crate::commands;
use crate::context::use_app_context;
use crate::format::{date_input_value, parse_date_input};
use crate::store::{store_update_list, use_app_store};

#[component]
pub fn ListSettingsModal(
    list: ShoppingList,
    /// Called after saving or cancelling
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let list_id = StoredValue::new(list.id.clone());
    let original_date = list.created_at;
    let (name, set_name) = signal(list.name.clone());
    let (date, set_date) = signal(date_input_value(&list.created_at));

    let save = move |_| {
        let new_name = name.get_untracked();
        if new_name.trim().is_empty() {
            ctx.error("List name is required");
            return;
        }
        // Keep the old date when the picker was cleared
        let created_at = parse_date_input(&date.get_untracked()).unwrap_or(original_date);
        match commands::update_list_info(&list_id.get_value(), &new_name, created_at) {
            Ok(updated) => {
                store_update_list(&store, updated);
                ctx.success("List updated");
                on_close.run(());
            }
            Err(e) => ctx.error(e),
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="modal">
            <h2 class="modal-title">"List settings"</h2>
            <label class="field-label">"Name"</label>
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label class="field-label">"Date"</label>
            <input
                type="date"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <div class="modal-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button type="button" class="confirm-btn" on:click=save>"Save"</button>
            </div>
        </div>
    }
}
