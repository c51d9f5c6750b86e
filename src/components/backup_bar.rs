//! Backup Bar Component
//!
//! Export all lists to CSV, or restore them from a CSV backup.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shopping_list_core::backup::ExportOutcome;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn BackupBar() -> impl IntoView {
    let ctx = use_app_context();
    let (importing, set_importing) = signal(false);

    let export_all = move |_| match commands::export_all() {
        Ok(ExportOutcome::Saved { filename, .. }) => ctx.success(format!("Backup saved as {}", filename)),
        Ok(ExportOutcome::NothingToExport) => ctx.info("There are no lists to export yet"),
        Err(e) => ctx.error(e),
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Let the same file be picked again later
        input.set_value("");

        set_importing.set(true);
        spawn_local(async move {
            match commands::import_file(file).await {
                Ok(lists) => {
                    ctx.success(format!("Restored {} lists", lists.len()));
                    ctx.reload();
                }
                Err(e) => ctx.error(e),
            }
            set_importing.set(false);
        });
    };

    view! {
        <div class="backup-bar">
            <button type="button" class="backup-btn" on:click=export_all>"Export CSV"</button>
            <label class=move || if importing.get() { "backup-btn busy" } else { "backup-btn" }>
                "Import CSV"
                <input
                    type="file"
                    accept=".csv,text/csv"
                    class="hidden-file-input"
                    disabled=move || importing.get()
                    on:change=on_file
                />
            </label>
        </div>
    }
}
