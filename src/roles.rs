//! Role Switching
//!
//! Server-driven role menu: the user's roles come from the backend, the
//! menu is derived from them and switching is a navigation the server
//! answers with a redirect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_dragdrop::Subscription;
use web_sys::{Document, Element, HtmlElement};

use crate::app::MountHandle;
use crate::commands::{self, HttpClient};
use crate::components::RoleMenuItems;
use crate::config::{
    CURRENT_ROLE_DISPLAY_ID, PROFILE_ROLE_DISPLAY_ID, ROLE_DROPDOWN_ID, ROLE_MENU_SELECTOR, ROLE_TRIGGER_ID,
    TOAST_BRIEF_MS, TOAST_DEFAULT_MS,
};
use crate::dom;
use crate::models::UserRoles;
use crate::toast::{ToastKind, Toasts};

/// Bootstrap fires this on the trigger before the menu opens
const DROPDOWN_SHOW_EVENT: &str = "show.bs.dropdown";

/// "manager" -> "Manager"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn role_icon(role_name: &str) -> &'static str {
    match role_name {
        "admin" => "fa-crown text-danger",
        "manager" => "fa-users-cog text-warning",
        "developer" => "fa-code text-primary",
        "client" => "fa-handshake text-info",
        "viewer" => "fa-eye text-secondary",
        "pending" => "fa-clock text-muted",
        _ => "fa-user",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleEntry {
    pub name: String,
    pub label: String,
    pub icon: &'static str,
    pub active: bool,
    pub primary: bool,
    pub href: String,
}

/// What the role dropdown lists
#[derive(Debug, Clone, PartialEq)]
pub enum RoleMenu {
    Empty,
    /// Only one role, nothing to switch to
    Single(String),
    Choices(Vec<RoleEntry>),
}

impl RoleMenu {
    pub fn from_roles(roles: &UserRoles) -> Self {
        match roles.roles.as_slice() {
            [] => RoleMenu::Empty,
            [only] => RoleMenu::Single(capitalize(&only.role_name)),
            all => RoleMenu::Choices(
                all.iter()
                    .map(|role| RoleEntry {
                        name: role.role_name.clone(),
                        label: capitalize(&role.role_name),
                        icon: role_icon(&role.role_name),
                        active: roles.active_role.as_deref() == Some(role.role_name.as_str()),
                        primary: role.is_primary,
                        href: commands::switch_role_url(&role.role_name),
                    })
                    .collect(),
            ),
        }
    }
}

impl RoleMenu {
    /// Visibility the role dropdown should take; only a real choice of
    /// roles touches it
    pub fn dropdown_shown(&self, can_switch: bool) -> Option<bool> {
        match self {
            RoleMenu::Choices(_) => Some(can_switch),
            RoleMenu::Empty | RoleMenu::Single(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchPlan {
    AlreadyActive,
    Navigate(String),
}

pub fn plan_switch(roles: Option<&UserRoles>, role_name: &str) -> SwitchPlan {
    let active = roles.and_then(|r| r.active_role.as_deref());
    if active == Some(role_name) {
        SwitchPlan::AlreadyActive
    } else {
        SwitchPlan::Navigate(commands::switch_role_url(role_name))
    }
}

/// Role state shared by the dropdown and the page labels
#[derive(Clone, Copy)]
pub struct RoleSwitcher {
    roles: RwSignal<Option<UserRoles>>,
    client: StoredValue<HttpClient>,
    toasts: Toasts,
}

impl RoleSwitcher {
    pub fn new(client: HttpClient, toasts: Toasts) -> Self {
        Self {
            roles: RwSignal::new(None),
            client: StoredValue::new(client),
            toasts,
        }
    }

    /// Menu for the roles loaded so far, `None` before the first load
    pub fn menu(&self) -> Option<RoleMenu> {
        self.roles.with(|roles| roles.as_ref().map(RoleMenu::from_roles))
    }

    pub async fn load(self) {
        let client = self.client.get_value();
        match commands::get_user_roles(&client).await {
            Ok(roles) => {
                log::info!("[ROLES] Loaded {} roles, active {:?}", roles.roles.len(), roles.active_role);
                self.refresh_page_labels(&roles);
                self.roles.set(Some(roles));
            }
            Err(e) => {
                log::error!("[ROLES] Error loading user roles: {}", e);
                self.toasts.show("Failed to load user roles", ToastKind::Error, TOAST_DEFAULT_MS);
            }
        }
    }

    pub fn switch_role(&self, role_name: &str) {
        match plan_switch(self.roles.get_untracked().as_ref(), role_name) {
            SwitchPlan::AlreadyActive => {
                self.toasts.show("Already using this role", ToastKind::Info, TOAST_DEFAULT_MS);
            }
            SwitchPlan::Navigate(href) => {
                log::info!("[ROLES] Switching to {}", role_name);
                self.toasts.show("Switching role...", ToastKind::Info, TOAST_BRIEF_MS);
                dom::navigate(&href);
            }
        }
    }

    fn refresh_page_labels(&self, roles: &UserRoles) {
        let Some(document) = dom::document() else {
            return;
        };
        if let Some(active) = &roles.active_role {
            let label = capitalize(active);
            for id in [CURRENT_ROLE_DISPLAY_ID, PROFILE_ROLE_DISPLAY_ID] {
                if let Some(display) = dom::by_id(&document, id) {
                    display.set_text_content(Some(&label));
                }
            }
        }
        if let Some(shown) = RoleMenu::from_roles(roles).dropdown_shown(roles.can_switch) {
            if let Some(dropdown) = dom::by_id(&document, ROLE_DROPDOWN_ID) {
                dom::set_shown(&dropdown, shown);
            }
        }
    }

    /// Render the menu, reload roles whenever it opens and do a first load.
    /// Pages without role markup are left alone.
    pub fn mount(self, document: &Document) -> (Subscription, Option<MountHandle>) {
        let mut subscription = Subscription::new();
        let menu = dom::query(document, ROLE_MENU_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let trigger = dom::by_id(document, ROLE_TRIGGER_ID);
        if menu.is_none() && trigger.is_none() {
            return (subscription, None);
        }

        let view = menu.map(|menu| {
            clear_menu_items(&menu);
            let handle = leptos::mount::mount_to(menu, move || view! { <RoleMenuItems switcher=self /> });
            Box::new(handle) as MountHandle
        });
        if let Some(trigger) = trigger {
            subscription.listen(trigger.as_ref(), DROPDOWN_SHOW_EVENT, move |_| spawn_local(self.load()));
        }
        spawn_local(self.load());
        (subscription, view)
    }
}

/// Drop server-rendered items from the menu, keeping its header and divider
fn clear_menu_items(menu: &HtmlElement) {
    let children = menu.children();
    let stale: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| !is_menu_chrome(&child.class_name()) && !holds_menu_chrome(child))
        .collect();
    for child in stale {
        child.remove();
    }
}

fn holds_menu_chrome(item: &Element) -> bool {
    matches!(item.query_selector(".dropdown-header, .dropdown-divider"), Ok(Some(_)))
}

/// Header and divider entries survive a menu rebuild
fn is_menu_chrome(class_name: &str) -> bool {
    class_name
        .split_whitespace()
        .any(|class| class == "dropdown-header" || class == "dropdown-divider")
}
