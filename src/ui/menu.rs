//! The navigation menu pane.
//!
//! One line per database, with the expanded database listed first and its
//! tables indented beneath it. Entry names are rendered as text nodes and
//! handed to the click handlers as plain strings, so hostile names stay
//! data instead of markup.

use leptos::prelude::*;
use leptos::web_sys;

use crate::core::{MenuEntry, MenuEntryKind};
use crate::ui::frames::use_nav_context;

#[component]
pub fn MenuPane() -> impl IntoView {
    let ctx = use_nav_context();

    view! {
        <nav class="menu">
            <a
                href="#"
                class="menu-link home-link"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.go_home();
                }
            >
                "Home"
            </a>
            {move || {
                ctx.nav
                    .get()
                    .menu_entries()
                    .into_iter()
                    .map(|entry| view! { <MenuLine entry=entry/> })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn MenuLine(entry: MenuEntry) -> impl IntoView {
    let ctx = use_nav_context();
    let MenuEntry { kind, name, indent } = entry;
    let label = name.clone();
    let class = match kind {
        MenuEntryKind::Database => "menu-link db-link",
        MenuEntryKind::Table => "menu-link table-link",
    };

    view! {
        <a
            href="#"
            class=class
            style=format!("margin-left: {}rem;", indent)
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                match kind {
                    MenuEntryKind::Database => ctx.select_database(&name),
                    MenuEntryKind::Table => ctx.select_table(&name),
                }
            }
        >
            {label}
        </a>
    }
}
