//! The detail pane: renders whatever the server decided to show for the
//! last submission.

use leptos::prelude::*;
use leptos::web_sys;

use crate::core::protocol::PanePayload;
use crate::core::SettingsUpdate;
use crate::ui::frames::use_nav_context;

#[component]
pub fn DetailPane() -> impl IntoView {
    let ctx = use_nav_context();

    view! {
        <section class="detail">
            {move || match ctx.right.get() {
                PanePayload::Blank => view! { <div class="blank"></div> }.into_any(),
                PanePayload::Welcome { version } => {
                    view! { <WelcomeView version=version/> }.into_any()
                }
                PanePayload::DatabaseDetails { database, tables } => {
                    view! { <DatabaseDetailsView database=database tables=tables/> }.into_any()
                }
                PanePayload::TableProperties { table, columns } => {
                    view! { <TablePropertiesView table=table columns=columns/> }.into_any()
                }
                PanePayload::SelectResult { table, columns, selectwhere, startpos, numrows } => {
                    view! {
                        <SelectResultView
                            table=table
                            columns=columns
                            selectwhere=selectwhere
                            startpos=startpos
                            numrows=numrows
                        />
                    }
                        .into_any()
                }
                PanePayload::ProductInfo { product, description } => {
                    view! {
                        <div class="product-info">
                            <h2>{product}</h2>
                            <p>{description}</p>
                        </div>
                    }
                        .into_any()
                }
                PanePayload::Options { fkeyrows, usemultiline } => {
                    view! { <OptionsView fkeyrows=fkeyrows usemultiline=usemultiline/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn WelcomeView(version: String) -> impl IntoView {
    view! {
        <div class="welcome">
            <span class="header">"Welcome to dbhelm " {version}</span>
            <p>"Pick a database product above to start administering it."</p>
        </div>
    }
}

#[component]
fn DatabaseDetailsView(database: String, tables: Vec<String>) -> impl IntoView {
    let ctx = use_nav_context();
    let table_count = tables.len();

    view! {
        <div class="db-details">
            <h2>{database}</h2>
            <p>{table_count} " tables"</p>
            <ul>
                {tables
                    .into_iter()
                    .map(|table| {
                        let label = table.clone();
                        view! {
                            <li>
                                <a
                                    href="#"
                                    class="table-link"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        ctx.select_table(&table);
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="danger" on:click=move |_| ctx.drop_database()>
                "Drop Database"
            </button>
        </div>
    }
}

#[component]
fn TablePropertiesView(table: String, columns: Vec<String>) -> impl IntoView {
    let ctx = use_nav_context();
    let browse_table = table.clone();
    let drop_table = table.clone();

    view! {
        <div class="table-properties">
            <h2>{table}</h2>
            <table class="columns">
                <tbody>
                    {columns
                        .into_iter()
                        .map(|column| {
                            let label = column.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a
                                            href="#"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.prevent_default();
                                                ctx.set_column(&column);
                                            }
                                        >
                                            {label}
                                        </a>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <button on:click=move |_| ctx.browse_table(&browse_table)>"Browse Rows"</button>
            <button class="danger" on:click=move |_| ctx.drop_table(&drop_table)>
                "Drop Table"
            </button>
        </div>
    }
}

#[component]
fn SelectResultView(
    table: String,
    columns: Vec<String>,
    selectwhere: String,
    startpos: u64,
    numrows: u32,
) -> impl IntoView {
    let ctx = use_nav_context();
    let prev_pos = startpos.saturating_sub(u64::from(numrows));
    let next_pos = startpos + u64::from(numrows);

    view! {
        <div class="select-result">
            <h2>"SELECT from " {table}</h2>
            {(!selectwhere.is_empty())
                .then(|| view! { <p class="clause">"WHERE " {selectwhere}</p> })}
            <table class="columns">
                <thead>
                    <tr>
                        {columns
                            .into_iter()
                            .map(|column| view! { <th>{column}</th> })
                            .collect_view()}
                    </tr>
                </thead>
            </table>
            <div class="paging">
                <button on:click=move |_| ctx.page_to(prev_pos)>"Prev"</button>
                <span>"rows " {startpos} " to " {next_pos}</span>
                <button on:click=move |_| ctx.page_to(next_pos)>"Next"</button>
                <label>
                    "Rows per page:"
                    <input
                        type="text"
                        size="4"
                        prop:value=numrows.to_string()
                        on:change=move |ev| {
                            if let Ok(rows) = event_target_value(&ev).parse() {
                                ctx.set_num_rows(rows);
                            }
                        }
                    />
                </label>
            </div>
        </div>
    }
}

#[component]
fn OptionsView(fkeyrows: u32, usemultiline: bool) -> impl IntoView {
    let ctx = use_nav_context();
    let (rows, set_rows) = signal(fkeyrows.to_string());
    let (multiline, set_multiline) = signal(usemultiline);

    let update = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let newfkeyrows = rows.get_untracked().parse().unwrap_or(fkeyrows);
        ctx.update_settings(SettingsUpdate {
            newfkeyrows,
            newusemultiline: multiline.get_untracked(),
        });
    };

    view! {
        <div class="options">
            <h2>"Advanced Options"</h2>
            <label>
                "Maximum foreign key rows:"
                <input
                    type="text"
                    name="newfkeyrows"
                    prop:value=move || rows.get()
                    on:input=move |ev| set_rows.set(event_target_value(&ev))
                />
            </label>
            <label>
                <input
                    type="checkbox"
                    name="newusemultiline"
                    prop:checked=move || multiline.get()
                    on:change=move |ev| set_multiline.set(event_target_checked(&ev))
                />
                " Use multiline textareas as default for text data types."
            </label>
            <button on:click=update>"Update Settings"</button>
        </div>
    }
}
