//! Add Column Dialog
//!
//! Modal form asking for a column name and status key. A created column
//! reloads the page so the server renders it.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{ColumnOutcome, PageBoard};
use crate::dom;

#[component]
pub fn AddColumnDialog(
    /// Whether the dialog is visible
    open: RwSignal<bool>,
    board: StoredValue<Rc<PageBoard>, LocalStorage>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let close = move || {
        open.set(false);
        set_name.set(String::new());
        set_status.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let board = board.get_value();
        let name = name.get_untracked();
        let status = status.get_untracked();

        spawn_local(async move {
            if board.add_column(&name, &status).await == ColumnOutcome::Created {
                dom::reload_page();
            }
        });
    };

    view! {
        <div
            class=move || if open.get() { "modal show d-block" } else { "modal" }
            tabindex="-1"
            role="dialog"
        >
            <div class="modal-dialog">
                <form class="modal-content" id="add-column-form" on:submit=submit>
                    <div class="modal-header">
                        <h5 class="modal-title">"Add New Column"</h5>
                        <button type="button" class="btn-close" on:click=move |_| close()></button>
                    </div>
                    <div class="modal-body">
                        <div class="mb-3">
                            <label for="column-name" class="form-label">"Column Name"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="column-name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label for="column-status" class="form-label">"Status Value"</label>
                            <input
                                type="text"
                                class="form-control"
                                id="column-status"
                                prop:value=move || status.get()
                                on:input=move |ev| set_status.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="btn btn-primary">"Add Column"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
