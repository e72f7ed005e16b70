//! Theme Manager
//!
//! Dark/light switching through the dark stylesheet link, remembered in
//! localStorage between visits.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlLinkElement};

use crate::config::{DARK_MODE_ICON_ID, DARK_THEME_LINK_ID, THEME_STORAGE_KEY};
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit "dark" restores dark mode
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle icon shows the theme a click switches to
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Key/value persistence for user preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Browser localStorage
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        web_sys::window()?.local_storage().ok()??.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        storage.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

pub struct ThemeManager<S> {
    store: S,
    stylesheet: Option<HtmlLinkElement>,
    icon: Option<Element>,
    current: Cell<Theme>,
}

impl ThemeManager<BrowserStorage> {
    pub fn from_document(document: &Document) -> Self {
        let stylesheet = dom::by_id(document, DARK_THEME_LINK_ID).and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());
        if stylesheet.is_none() {
            log::error!("[THEME] Dark theme stylesheet #{} not found", DARK_THEME_LINK_ID);
        }
        let icon = dom::by_id(document, DARK_MODE_ICON_ID);
        if icon.is_none() {
            log::warn!("[THEME] Dark mode icon #{} not found", DARK_MODE_ICON_ID);
        }
        Self::new(BrowserStorage, stylesheet, icon)
    }
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Restores the saved theme right away
    pub fn new(store: S, stylesheet: Option<HtmlLinkElement>, icon: Option<Element>) -> Self {
        let saved = store.load(THEME_STORAGE_KEY);
        let theme = Theme::from_saved(saved.as_deref());
        let manager = Self {
            store,
            stylesheet,
            icon,
            current: Cell::new(theme),
        };
        manager.apply(theme);
        log::info!("[THEME] Restored {} theme", theme.as_str());
        manager
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        next
    }

    /// Show `theme` and remember it
    pub fn apply(&self, theme: Theme) {
        if let Some(link) = &self.stylesheet {
            link.set_disabled(theme == Theme::Light);
        }
        if let Some(icon) = &self.icon {
            icon.set_class_name(theme.icon_class());
        }
        self.current.set(theme);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[THEME] Could not save preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), String> {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_restores_saved_dark() {
        let manager = ThemeManager::new(MemoryStore::with(THEME_STORAGE_KEY, "dark"), None, None);
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn test_defaults_to_light_and_persists() {
        let manager = ThemeManager::new(MemoryStore::with(THEME_STORAGE_KEY, "sepia"), None, None);
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_round_trip() {
        let manager = ThemeManager::new(MemoryStore::default(), None, None);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
