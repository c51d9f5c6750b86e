//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod toast_host;
mod backup_bar;
mod new_list_form;
mod list_card;
mod list_overview;
mod list_detail;
mod item_row;
mod item_modal;
mod list_settings_modal;

pub use delete_confirm_button::DeleteConfirmButton;
pub use toast_host::ToastHost;
pub use backup_bar::BackupBar;
pub use new_list_form::NewListForm;
pub use list_card::ListCard;
pub use list_overview::ListOverview;
pub use list_detail::ListDetail;
pub use item_row::ItemRow;
pub use item_modal::{ItemDraft, ItemModal};
pub use list_settings_modal::ListSettingsModal;
