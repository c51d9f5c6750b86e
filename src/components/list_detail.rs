//! List Detail Component
//!
//! Header with progress, the item list and the item/settings modals.

use leptos::prelude::*;

use crate::components::{ItemDraft, ItemModal, ItemRow, ListSettingsModal};
use crate::context::use_app_context;
use crate::format::display_date;
use crate::store::{store_lists, use_app_store};

#[component]
pub fn ListDetail(list_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = StoredValue::new(list_id.clone());
    let list = Memo::new(move |_| {
        let id = id.get_value();
        store_lists(&store).into_iter().find(|list| list.id == id)
    });
    Effect::new(move |_| {
        if list.get().is_none() {
            ctx.error("List not found");
            ctx.go_home();
        }
    });
    let draft = RwSignal::new(None::<ItemDraft>);
    let (editing_info, set_editing_info) = signal(false);

    view! {
        <button class="back-btn" on:click=move |_| ctx.go_home()>"← Back"</button>
        {move || match list.get() {
            None => view! {
                <p class="empty-state">"List not found."</p>
            }.into_any(),
            Some(current) => {
                let progress = current.progress_percent();
                let summary = format!("{} of {} items", current.completed_count(), current.items.len());
                view! {
                    <header class="list-header" title="Edit list" on:click=move |_| set_editing_info.set(true)>
                        <h1 class="list-title">{current.name.clone()}</h1>
                        <span class="list-date">{display_date(&current.created_at)}</span>
                        <div class="progress-track">
                            <div class="progress-fill" style=format!("width: {}%;", progress)></div>
                        </div>
                        <div class="progress-row">
                            <span class="progress-summary">{summary}</span>
                            <span class="progress-percent">{format!("{}%", progress)}</span>
                        </div>
                    </header>
                }.into_any()
            }
        }}

        <button class="add-item-btn" on:click=move |_| draft.set(Some(ItemDraft::blank()))>
            "+ Add item"
        </button>

        <div class="item-list">
            <Show
                when=move || list.get().is_some_and(|list| !list.items.is_empty())
                fallback=|| view! { <p class="empty-state">"Your list is empty."</p> }
            >
                <For
                    each=move || list.get().map(|list| list.items).unwrap_or_default()
                    key=|item| (item.id.clone(), item.name.clone(), item.quantity, item.completed)
                    children=move |item| view! {
                        <ItemRow list_id=id.get_value() item=item draft=draft />
                    }
                />
            </Show>
        </div>

        <ItemModal list_id=list_id draft=draft />

        {move || {
            if !editing_info.get() {
                return None;
            }
            list.get().map(|current| view! {
                <ListSettingsModal list=current on_close=move |_| set_editing_info.set(false) />
            })
        }}
    }
}
