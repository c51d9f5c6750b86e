//! List Card Component
//!
//! One list on the overview: name, date, item count and actions.

use leptos::prelude::*;
use shopping_list_core::backup::ExportOutcome;
use shopping_list_core::ShoppingList;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::display_date;
use crate::store::{store_remove_list, store_update_list, use_app_store};

#[component]
pub fn ListCard(list: ShoppingList) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = StoredValue::new(list.id.clone());
    let completed = list.completed;
    let summary = format!("{} of {} items", list.completed_count(), list.items.len());

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        match commands::toggle_list(&id.get_value()) {
            Ok(updated) => store_update_list(&store, updated),
            Err(e) => ctx.error(e),
        }
    };

    let export = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        match commands::export_list(&id.get_value()) {
            Ok(ExportOutcome::Saved { filename, .. }) => ctx.success(format!("Saved {}", filename)),
            Ok(ExportOutcome::NothingToExport) => ctx.info("Nothing to export"),
            Err(e) => ctx.error(e),
        }
    };

    let delete = Callback::new(move |_| {
        let list_id = id.get_value();
        match commands::delete_list(&list_id) {
            Ok(()) => {
                store_remove_list(&store, &list_id);
                ctx.success("List deleted");
            }
            Err(e) => ctx.error(e),
        }
    });

    view! {
        <div
            class=if completed { "list-card completed" } else { "list-card" }
            on:click=move |_| ctx.open_list(id.get_value())
        >
            <div class="list-card-info">
                <h2 class="list-card-name">{list.name}</h2>
                <span class="list-card-date">{display_date(&list.created_at)}</span>
            </div>
            <div class="list-card-actions">
                <span class="list-card-count">{summary}</span>
                <button class="complete-btn" title="Mark list done" on:click=toggle>
                    {if completed { "✓ Done" } else { "Mark done" }}
                </button>
                <button class="export-btn" title="Export this list" on:click=export>"CSV"</button>
                <DeleteConfirmButton button_class="delete-btn" prompt="Delete list?" on_confirm=delete />
            </div>
        </div>
    }
}
