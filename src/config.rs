//! Page Configuration
//!
//! Selectors, storage keys and timings the frontend relies on, plus the
//! per-page values read from server-rendered markup.

use crate::dom;

// ========================
// Markup contract
// ========================

pub const BOARD_ROOT_ID: &str = "kanban-board";
pub const COLUMN_CLASS: &str = "kanban-column";
pub const TASK_LIST_CLASS: &str = "task-list";
pub const TASK_CARD_CLASS: &str = "task-card";
pub const ADD_COLUMN_BUTTON_ID: &str = "add-column-btn";
pub const CSRF_META_SELECTOR: &str = r#"meta[name="csrf-token"]"#;

pub const TOAST_CONTAINER_ID: &str = "toast-container";

pub const DARK_THEME_LINK_ID: &str = "dark-theme-css";
pub const DARK_MODE_ICON_ID: &str = "dark-mode-icon";
pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";

pub const SIDEBAR_ID: &str = "sidebar-wrapper";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";
pub const CONTENT_WRAPPER_SELECTOR: &str = ".content-wrapper";

pub const ROLE_TRIGGER_ID: &str = "roleSwitchDropdown";
pub const ROLE_DROPDOWN_ID: &str = "role-switch-dropdown";
pub const ROLE_MENU_SELECTOR: &str = "#role-switch-dropdown .dropdown-menu";
pub const CURRENT_ROLE_DISPLAY_ID: &str = "current-role-display";
pub const PROFILE_ROLE_DISPLAY_ID: &str = "profile-role-display";

// ========================
// Behaviour
// ========================

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "dhaniya-theme";

pub const TOAST_DEFAULT_MS: u32 = 4000;
pub const TOAST_SHORT_MS: u32 = 2000;
pub const TOAST_ERROR_MS: u32 = 3000;
pub const TOAST_BRIEF_MS: u32 = 1000;
/// Time a dismissed toast spends sliding out before removal
pub const TOAST_LEAVE_MS: u32 = 300;

/// Values the server renders into the page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageConfig {
    /// Project shown on this page, present only on board pages
    pub project_id: Option<String>,
    /// Anti-forgery token, empty when the page has none
    pub csrf_token: String,
}

impl PageConfig {
    pub fn from_document(document: &web_sys::Document) -> Self {
        let project_id = document
            .get_element_by_id(BOARD_ROOT_ID)
            .and_then(|root| root.get_attribute("data-project-id"))
            .filter(|id| !id.is_empty());
        Self {
            project_id,
            csrf_token: dom::csrf_token(document),
        }
    }
}
