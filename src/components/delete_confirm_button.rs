//! Delete Confirm Button Component
//!
//! Inline delete button that asks for confirmation before acting.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows `prompt` with Yes/No buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `prompt` - Question shown while confirming (e.g. "Remove item?")
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
