//! New List Form Component
//!
//! Name plus an optional date; today is used when no date is picked.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::format::parse_date_input;
use crate::store::{store_add_list, use_app_store};

#[component]
pub fn NewListForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(String::new());

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        if text.trim().is_empty() {
            return;
        }
        match commands::create_list(&text, parse_date_input(&date.get())) {
            Ok(list) => {
                store_add_list(&store, list);
                set_name.set(String::new());
                set_date.set(String::new());
            }
            Err(e) => ctx.error(e),
        }
    };

    view! {
        <form class="new-list-form" on:submit=create_list>
            <input
                type="text"
                placeholder="New list name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="date"
                title="List date (defaults to today)"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>
    }
}
