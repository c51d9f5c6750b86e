//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

/// Which screen is shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Overview,
    List(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

const TOAST_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from storage - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current screen
    pub screen: RwSignal<Screen>,
    /// Visible notifications
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            screen: RwSignal::new(Screen::Overview),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
        }
    }

    /// Trigger a reload of lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_list(&self, list_id: String) {
        self.screen.set(Screen::List(list_id));
    }

    pub fn go_home(&self) {
        self.screen.set(Screen::Overview);
    }

    /// Show a toast that disappears after a few seconds
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message: message.into() }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
