//! Role Menu Component
//!
//! Items of the role switch dropdown, rendered after any server-provided
//! header and divider.

use leptos::prelude::*;

use crate::roles::{RoleEntry, RoleMenu, RoleSwitcher};

#[component]
fn RoleLink(entry: RoleEntry, switcher: RoleSwitcher) -> impl IntoView {
    let name = entry.name.clone();
    let class = if entry.active { "dropdown-item active" } else { "dropdown-item" };

    view! {
        <li>
            <a
                class=class
                href=entry.href
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    switcher.switch_role(&name);
                }
            >
                <i class=format!("fas {} me-2", entry.icon)></i>
                {entry.primary.then(|| view! {
                    <i class="fas fa-star text-warning me-1" title="Primary Role"></i>
                })}
                {entry.label}
                {entry.active.then(|| view! { <i class="fas fa-check text-success ms-2"></i> })}
            </a>
        </li>
    }
}

#[component]
pub fn RoleMenuItems(switcher: RoleSwitcher) -> impl IntoView {
    move || match switcher.menu() {
        None => ().into_any(),
        Some(RoleMenu::Empty) => view! {
            <li><span class="dropdown-item-text text-muted">"No roles assigned"</span></li>
        }
        .into_any(),
        Some(RoleMenu::Single(label)) => view! {
            <li><span class="dropdown-item-text text-muted">{format!("Single role: {}", label)}</span></li>
        }
        .into_any(),
        Some(RoleMenu::Choices(entries)) => entries
            .into_iter()
            .map(|entry| view! { <RoleLink entry=entry switcher=switcher /> })
            .collect_view()
            .into_any(),
    }
}
