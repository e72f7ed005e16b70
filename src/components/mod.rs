//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod add_column_dialog;
mod role_menu;
mod toast_stack;

pub use add_column_dialog::AddColumnDialog;
pub use role_menu::RoleMenuItems;
pub use toast_stack::ToastStack;
