//! Shopping List Frontend App
//!
//! Switches between the list overview and a single list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BackupBar, ListDetail, ListOverview, ToastHost};
use crate::context::{AppContext, Screen};
use crate::store::{store_set_lists, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load lists on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let loaded = commands::list_lists();
        log::debug!("loaded {} lists, trigger={}", loaded.len(), trigger);
        store_set_lists(&store, loaded);
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                {move || match ctx.screen.get() {
                    Screen::Overview => view! {
                        <h1>"Shopping Lists"</h1>
                        <BackupBar />
                        <ListOverview />
                    }.into_any(),
                    Screen::List(list_id) => view! { <ListDetail list_id=list_id /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}
