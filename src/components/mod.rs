//! UI Components
//!
//! Reusable Leptos components.

mod login_form;
mod dashboard;
mod catalogue_table;
mod catalogue_map;
mod edit_location_dialog;
mod toast_stack;

pub use login_form::LoginForm;
pub use dashboard::Dashboard;
pub use catalogue_table::CatalogueTable;
pub use catalogue_map::CatalogueMap;
pub use edit_location_dialog::EditLocationDialog;
pub use toast_stack::{Notifications, ToastStack};
