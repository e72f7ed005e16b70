//! Dropdown Manager
//!
//! Closes open dropdown menus when the user clicks anywhere else.

use wasm_bindgen::JsCast;
use web_dragdrop::Subscription;
use web_sys::{Document, Element};

use crate::dom;

const OPEN_MENU_SELECTOR: &str = ".dropdown-menu.show";
const DROPDOWN_SELECTOR: &str = ".dropdown";

pub fn close_open_menus(document: &Document) {
    for menu in dom::query_all(document, OPEN_MENU_SELECTOR) {
        let _ = menu.class_list().remove_1("show");
    }
}

pub fn bind(document: &Document) -> Subscription {
    let mut subscription = Subscription::new();
    let doc = document.clone();
    subscription.listen(document.as_ref(), "click", move |ev| {
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(DROPDOWN_SELECTOR).ok().flatten())
            .is_some();
        if !inside {
            close_open_menus(&doc);
        }
    });
    subscription
}
