//! Sidebar Manager
//!
//! Collapses the navigation sidebar and widens the content area with it.

use std::cell::Cell;

use web_sys::{Document, Element};

use crate::config::{CONTENT_WRAPPER_SELECTOR, SIDEBAR_ID};
use crate::dom;

const SIDEBAR_COLLAPSED: &str = "collapsed";
const CONTENT_COLLAPSED: &str = "sidebar-collapsed";

pub struct SidebarManager {
    sidebar: Option<Element>,
    content: Option<Element>,
    collapsed: Cell<bool>,
}

impl SidebarManager {
    pub fn new(sidebar: Option<Element>, content: Option<Element>) -> Self {
        let collapsed = sidebar
            .as_ref()
            .map(|el| el.class_list().contains(SIDEBAR_COLLAPSED))
            .unwrap_or(false);
        Self {
            sidebar,
            content,
            collapsed: Cell::new(collapsed),
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self::new(
            dom::by_id(document, SIDEBAR_ID),
            dom::query(document, CONTENT_WRAPPER_SELECTOR),
        )
    }

    /// Flip the sidebar; returns the new collapsed state
    pub fn toggle(&self) -> bool {
        let collapsed = !self.collapsed.get();
        if let Some(sidebar) = &self.sidebar {
            let _ = sidebar.class_list().toggle_with_force(SIDEBAR_COLLAPSED, collapsed);
        }
        if let Some(content) = &self.content {
            let _ = content.class_list().toggle_with_force(CONTENT_COLLAPSED, collapsed);
        }
        self.collapsed.set(collapsed);
        collapsed
    }
}
