//! Page Shell
//!
//! The single place the frontend is put together. Managers are built in
//! dependency order (toasts first, everything else may notify) and every
//! listener and mounted view they create is owned by the returned `Page`.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_dragdrop::Subscription;
use web_sys::Document;

use crate::board::{self, PageBoard};
use crate::commands::HttpClient;
use crate::components::AddColumnDialog;
use crate::config::{PageConfig, ADD_COLUMN_BUTTON_ID, DARK_MODE_TOGGLE_ID, SIDEBAR_TOGGLE_ID};
use crate::dom;
use crate::dropdown;
use crate::roles::RoleSwitcher;
use crate::sidebar::SidebarManager;
use crate::theme::ThemeManager;
use crate::toast::{self, Toasts};

/// Keeps a mounted Leptos view alive; dropping it unmounts the view
pub type MountHandle = Box<dyn Any>;

/// Everything wired on the current page. Dropping it unbinds all listeners
/// and unmounts every view.
pub struct Page {
    subscription: Subscription,
    mounts: Vec<MountHandle>,
}

impl Page {
    pub fn mount(document: &Document) -> Self {
        let config = PageConfig::from_document(document);
        let client = HttpClient::new(config.csrf_token.clone());
        if config.csrf_token.is_empty() {
            log::warn!("[APP] No CSRF token on page, state-changing requests will likely be refused");
        }

        let toasts = Toasts::new();
        let mut mounts: Vec<MountHandle> = toast::mount_stack(document, toasts).into_iter().collect();

        let mut subscription = Subscription::new();

        let theme = ThemeManager::from_document(document);
        if let Some(toggle) = dom::by_id(document, DARK_MODE_TOGGLE_ID) {
            subscription.listen(toggle.as_ref(), "click", move |_| {
                let theme = theme.toggle();
                log::info!("[THEME] Switched to {}", theme.as_str());
            });
        }

        let sidebar = SidebarManager::from_document(document);
        if let Some(toggle) = dom::by_id(document, SIDEBAR_TOGGLE_ID) {
            subscription.listen(toggle.as_ref(), "click", move |_| {
                let collapsed = sidebar.toggle();
                log::debug!("[SIDEBAR] collapsed={}", collapsed);
            });
        }

        subscription.absorb(dropdown::bind(document));
        let (roles, role_menu) = RoleSwitcher::new(client.clone(), toasts).mount(document);
        subscription.absorb(roles);
        mounts.extend(role_menu);

        if let Some(project_id) = config.project_id {
            log::info!("[APP] Board for project {}", project_id);
            let (board, board_subscription) = board::mount(document, project_id, client, toasts);
            subscription.absorb(board_subscription);
            if let Some((trigger, dialog)) = mount_add_column(document, &board) {
                subscription.absorb(trigger);
                mounts.push(dialog);
            }
        }

        log::info!("[APP] Page ready, {} listeners bound, {} views mounted", subscription.len(), mounts.len());
        Self { subscription, mounts }
    }

    pub fn listener_count(&self) -> usize {
        self.subscription.len()
    }

    pub fn view_count(&self) -> usize {
        self.mounts.len()
    }
}

/// The live page across `pagehide` events
pub struct PageSlot<P> {
    page: RefCell<Option<P>>,
}

impl<P> PageSlot<P> {
    pub const fn new() -> Self {
        Self { page: RefCell::new(None) }
    }

    /// Hold `page`, dropping whatever was held before
    pub fn install(&self, page: P) {
        let previous = self.page.replace(Some(page));
        drop(previous);
    }

    /// Release the page on `pagehide`. A page entering the back/forward
    /// cache keeps its wiring so it works again when restored.
    pub fn release_on_hide(&self, persisted: bool) -> Option<P> {
        if persisted {
            return None;
        }
        self.page.borrow_mut().take()
    }

    pub fn is_installed(&self) -> bool {
        self.page.borrow().is_some()
    }
}

/// Mount the add-column dialog and open it from its trigger, if the page has one
fn mount_add_column(document: &Document, board: &Rc<PageBoard>) -> Option<(Subscription, MountHandle)> {
    let trigger = dom::by_id(document, ADD_COLUMN_BUTTON_ID)?;
    let body = document.body()?;

    let open = RwSignal::new(false);
    let board = StoredValue::new_local(board.clone());
    let dialog = leptos::mount::mount_to(body, move || view! { <AddColumnDialog open=open board=board /> });

    let mut subscription = Subscription::new();
    subscription.listen(trigger.as_ref(), "click", move |_| open.set(true));
    Some((subscription, Box::new(dialog) as MountHandle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts how often it has been torn down
    struct Wiring {
        dropped: Rc<Cell<usize>>,
    }

    impl Drop for Wiring {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    fn wiring() -> (Wiring, Rc<Cell<usize>>) {
        let dropped = Rc::new(Cell::new(0));
        (Wiring { dropped: dropped.clone() }, dropped)
    }

    #[test]
    fn test_cached_page_keeps_its_wiring() {
        let slot = PageSlot::new();
        let (page, dropped) = wiring();
        slot.install(page);

        assert!(slot.release_on_hide(true).is_none());
        assert!(slot.is_installed());
        assert_eq!(dropped.get(), 0);

        // restored from the cache, then left for good
        let released = slot.release_on_hide(false);
        assert!(released.is_some());
        drop(released);
        assert!(!slot.is_installed());
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_unload_releases_once() {
        let slot = PageSlot::new();
        let (page, dropped) = wiring();
        slot.install(page);
        drop(slot.release_on_hide(false));
        assert!(slot.release_on_hide(false).is_none());
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_install_replaces_previous_page() {
        let slot = PageSlot::new();
        let (first, first_dropped) = wiring();
        let (second, second_dropped) = wiring();
        slot.install(first);
        slot.install(second);
        assert_eq!(first_dropped.get(), 1);
        assert_eq!(second_dropped.get(), 0);
    }
}
