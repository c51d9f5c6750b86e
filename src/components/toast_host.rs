//! Toast Host Component
//!
//! Renders the notifications pushed through `AppContext::notify`.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Info => "toast info",
                        ToastKind::Error => "toast error",
                    };
                    view! { <div class=class role="status">{toast.message}</div> }
                }
            />
        </div>
    }
}
