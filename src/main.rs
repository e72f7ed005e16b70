//! Task Board Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod config;
mod dom;
mod dropdown;
mod models;
mod roles;
mod sidebar;
mod theme;
mod toast;

use std::panic;

use app::{Page, PageSlot};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

thread_local! {
    /// The mounted page; released on a pagehide that really unloads it
    static PAGE: PageSlot<Page> = const { PageSlot::new() };
}

fn main() {
    panic::set_hook(Box::new(|info| {
        if let Some(report) = rolling_logger::recent_report() {
            web_sys::console::error_1(&report.into());
        }
        console_error_panic_hook::hook(info);
    }));
    if let Err(e) = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(start);
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        start();
    }
}

fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let page = Page::mount(&document);
    PAGE.with(|slot| slot.install(page));

    let on_hide = Closure::<dyn FnMut(PageTransitionEvent)>::new(move |ev: PageTransitionEvent| {
        if ev.persisted() {
            log::debug!("[APP] Page cached, wiring kept: {}", PAGE.with(|slot| slot.is_installed()));
        }
        if let Some(page) = PAGE.with(|slot| slot.release_on_hide(ev.persisted())) {
            log::info!(
                "[APP] Page unloading, unbinding {} listeners and {} views",
                page.listener_count(),
                page.view_count()
            );
        }
    });
    let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();
}
