//! Toast Stack Component
//!
//! Renders the page's toasts; each has a close button.

use leptos::prelude::*;

use crate::toast::Toasts;

#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <For
            each=move || toasts.items()
            key=|toast| toast.id
            children=move |toast| {
                let id = toast.id;
                let icon = format!("fas {}", toast.kind.icon());
                view! {
                    <div class=move || toasts.class_of(id) role="alert">
                        <i class=icon></i>
                        <div class="toast-message">{toast.message}</div>
                        <button
                            type="button"
                            class="toast-close"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                }
            }
        />
    }
}
