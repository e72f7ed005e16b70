//! Web DragDrop Utilities
//!
//! HTML5 drag-and-drop helpers on top of web-sys.
//! Listeners are owned by a `Subscription` and unbound when it is dropped,
//! so a page can tear down all of its wiring in one place.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, EventTarget, Node};

/// MIME type the dragged id travels under
pub const PAYLOAD_MIME: &str = "text/plain";

/// Drop effect used for every board move
const MOVE_EFFECT: &str = "move";

// ========================
// Listener subscriptions
// ========================

/// A single listener bound to an event target, removed on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn bind<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listeners sharing one lifetime
#[derive(Default)]
pub struct Subscription {
    listeners: Vec<Listener>,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a plain event handler
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::bind(target, event, handler));
    }

    /// Bind a handler that only sees drag events
    pub fn listen_drag<F>(&mut self, target: &EventTarget, event: &'static str, mut handler: F)
    where
        F: FnMut(DragEvent) + 'static,
    {
        self.listen(target, event, move |ev: Event| {
            if let Ok(drag) = ev.dyn_into::<DragEvent>() {
                handler(drag);
            }
        });
    }

    /// Take over the listeners of another subscription
    pub fn absorb(&mut self, other: Subscription) {
        self.listeners.extend(other.listeners);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

// ========================
// Drag payload
// ========================

/// Start a move drag carrying `payload`
pub fn begin_drag(ev: &DragEvent, payload: &str) {
    if let Some(transfer) = ev.data_transfer() {
        let _ = transfer.set_data(PAYLOAD_MIME, payload);
        transfer.set_effect_allowed(MOVE_EFFECT);
    }
}

/// Permit dropping on the current target
pub fn accept_drop(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect(MOVE_EFFECT);
    }
}

/// Read the dragged payload, `None` when missing or empty
pub fn read_payload(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()?
        .get_data(PAYLOAD_MIME)
        .ok()
        .filter(|payload| !payload.is_empty())
}

// ========================
// Targets
// ========================

/// Containment between positions in a tree
pub trait Subtree {
    /// True when `other` is `self` or lies below it
    fn holds(&self, other: &Self) -> bool;
}

impl Subtree for Node {
    fn holds(&self, other: &Self) -> bool {
        self.contains(Some(other))
    }
}

/// True when the pointer moved somewhere outside `container`'s subtree.
/// Crossing into a child element also fires dragleave; those are ignored.
/// No related target means the pointer left the document.
pub fn pointer_left<T: Subtree>(container: &T, related: Option<&T>) -> bool {
    match related {
        Some(node) => !container.holds(node),
        None => true,
    }
}

/// Node the pointer moved onto, for enter/leave events
pub fn related_node(ev: &DragEvent) -> Option<Node> {
    ev.related_target()?.dyn_into::<Node>().ok()
}

/// Event target as an element bearing `class`, if it is one
pub fn target_with_class(target: Option<EventTarget>, class: &str) -> Option<Element> {
    let element = target?.dyn_into::<Element>().ok()?;
    if element.class_list().contains(class) {
        Some(element)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slash-separated path standing in for a DOM position
    struct Path(&'static str);

    impl Subtree for Path {
        fn holds(&self, other: &Self) -> bool {
            other.0 == self.0 || other.0.starts_with(&format!("{}/", self.0))
        }
    }

    #[test]
    fn test_moving_onto_a_child_stays_inside() {
        let column = Path("board/todo");
        assert!(!pointer_left(&column, Some(&Path("board/todo/list/card-1"))));
        assert!(!pointer_left(&column, Some(&Path("board/todo"))));
    }

    #[test]
    fn test_moving_elsewhere_leaves() {
        let column = Path("board/todo");
        assert!(pointer_left(&column, Some(&Path("board/done/list"))));
        assert!(pointer_left(&column, Some(&Path("board/todo-later"))));
        assert!(pointer_left(&column, Some(&Path("board"))));
    }

    #[test]
    fn test_no_related_target_leaves() {
        assert!(pointer_left(&Path("board/todo"), None));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn node_holds_its_descendants_only() {
        let document = web_sys::window().unwrap().document().unwrap();
        let column = document.create_element("div").unwrap();
        let list = document.create_element("div").unwrap();
        let card = document.create_element("div").unwrap();
        let elsewhere = document.create_element("div").unwrap();
        list.append_child(&card).unwrap();
        column.append_child(&list).unwrap();

        let column: Node = column.into();
        assert!(!pointer_left(&column, Some(&Node::from(card))));
        assert!(!pointer_left(&column, Some(&column.clone())));
        assert!(pointer_left(&column, Some(&Node::from(elsewhere))));
        assert!(pointer_left(&column, None));
    }
}
