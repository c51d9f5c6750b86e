//! List Overview Component
//!
//! Form for new lists and a card per stored list.

use leptos::prelude::*;

use crate::components::{ListCard, NewListForm};
use crate::store::{store_lists, use_app_store};

#[component]
pub fn ListOverview() -> impl IntoView {
    let store = use_app_store();
    let lists = move || store_lists(&store);

    view! {
        <NewListForm />
        <Show
            when=move || !lists().is_empty()
            fallback=|| view! { <p class="empty-state">"No lists yet. Create one above."</p> }
        >
            <div class="list-grid">
                <For
                    each=lists
                    key=|list| (list.id.clone(), list.name.clone(), list.created_at, list.completed, list.items.len(), list.completed_count())
                    children=move |list| view! { <ListCard list=list /> }
                />
            </div>
        </Show>
    }
}
