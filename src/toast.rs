//! Toast Notifications
//!
//! A page-wide stack of transient messages. `Toasts` is a cheap `Copy`
//! handle over a reactive store; the stack itself is a Leptos component
//! mounted into `#toast-container`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::app::MountHandle;
use crate::config::{TOAST_CONTAINER_ID, TOAST_LEAVE_MS};
use crate::components::ToastStack;
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted but not yet slid in
    Entering,
    Shown,
    /// Sliding out, removed shortly
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class(&self) -> String {
        let mut c = format!("toast-notification toast-{}", self.kind.as_str());
        if self.phase == ToastPhase::Shown {
            c.push_str(" show");
        }
        c
    }
}

/// Toast stack state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

// ========================
// Queue operations
// ========================

/// Move an entering toast to shown
pub fn reveal(toasts: &mut [Toast], id: u64) {
    if let Some(toast) = toasts.iter_mut().find(|t| t.id == id && t.phase == ToastPhase::Entering) {
        toast.phase = ToastPhase::Shown;
    }
}

/// Start removing a toast; false when it is unknown or already leaving
pub fn begin_leave(toasts: &mut [Toast], id: u64) -> bool {
    match toasts.iter_mut().find(|t| t.id == id) {
        Some(toast) if toast.phase != ToastPhase::Leaving => {
            toast.phase = ToastPhase::Leaving;
            true
        }
        _ => false,
    }
}

pub fn remove(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|t| t.id != id);
}

/// Anything that can surface a message to the user
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind, duration_ms: u32);
}

/// Handle to the page's toast stack
#[derive(Clone, Copy)]
pub struct Toasts {
    store: Store<ToastState>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            store: Store::new(ToastState::default()),
        }
    }

    /// Show a toast; a zero duration keeps it until dismissed
    pub fn show(&self, message: &str, kind: ToastKind, duration_ms: u32) -> u64 {
        let id = {
            let next_id = self.store.next_id();
            let mut next = next_id.write();
            *next += 1;
            *next
        };
        self.store.toasts().write().push(Toast {
            id,
            message: message.to_string(),
            kind,
            phase: ToastPhase::Entering,
        });

        let store = self.store;
        request_animation_frame(move || reveal(&mut store.toasts().write(), id));

        if duration_ms > 0 {
            let toasts = *self;
            Timeout::new(duration_ms, move || toasts.dismiss(id)).forget();
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        if !begin_leave(&mut self.store.toasts().write(), id) {
            return;
        }
        let store = self.store;
        Timeout::new(TOAST_LEAVE_MS, move || remove(&mut store.toasts().write(), id)).forget();
    }

    pub fn items(&self) -> Vec<Toast> {
        self.store.toasts().get()
    }

    /// Current class of a toast; tracked, so it follows phase changes
    pub fn class_of(&self, id: u64) -> String {
        self.store
            .toasts()
            .with(|toasts| toasts.iter().find(|t| t.id == id).map(Toast::class))
            .unwrap_or_default()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, kind: ToastKind, duration_ms: u32) {
        self.show(message, kind, duration_ms);
    }
}

/// Mount the stack into `#toast-container`, creating it under `<body>` if needed
pub fn mount_stack(document: &Document, toasts: Toasts) -> Option<MountHandle> {
    let container = dom::html_by_id(document, TOAST_CONTAINER_ID).or_else(|| {
        let container = document.create_element("div").ok()?;
        container.set_id(TOAST_CONTAINER_ID);
        container.set_class_name("toast-container position-fixed end-0 p-3");
        document.body()?.append_child(&container).ok()?;
        container.dyn_into::<HtmlElement>().ok()
    });

    match container {
        Some(container) => {
            let handle = leptos::mount::mount_to(container, move || view! { <ToastStack toasts=toasts /> });
            Some(Box::new(handle) as MountHandle)
        }
        None => {
            log::error!("[TOAST] No container for notifications");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, phase: ToastPhase) -> Toast {
        Toast {
            id,
            message: format!("Toast {}", id),
            kind: ToastKind::Info,
            phase,
        }
    }

    #[test]
    fn test_reveal_only_entering() {
        let mut toasts = vec![toast(1, ToastPhase::Entering), toast(2, ToastPhase::Leaving)];
        reveal(&mut toasts, 1);
        reveal(&mut toasts, 2);
        assert_eq!(toasts[0].phase, ToastPhase::Shown);
        assert_eq!(toasts[1].phase, ToastPhase::Leaving);
    }

    #[test]
    fn test_dismiss_unknown_or_twice() {
        let mut toasts = vec![toast(1, ToastPhase::Shown)];
        assert!(!begin_leave(&mut toasts, 9));
        assert!(begin_leave(&mut toasts, 1));
        assert!(!begin_leave(&mut toasts, 1));
        remove(&mut toasts, 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_class_and_icon() {
        let mut t = toast(3, ToastPhase::Entering);
        t.kind = ToastKind::Error;
        assert_eq!(t.class(), "toast-notification toast-error");
        t.phase = ToastPhase::Shown;
        assert_eq!(t.class(), "toast-notification toast-error show");
        assert_eq!(ToastKind::Warning.icon(), "fa-exclamation-triangle");
    }
}
