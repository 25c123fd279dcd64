//! The top status pane.
//!
//! While no session is connected it shows the product connect form; once
//! connected it shows the product banner with the info/options/change
//! links that drive the shared form.

use leptos::prelude::*;
use leptos::web_sys;

use crate::core::protocol::ProductSummary;
use crate::core::ConnectSettings;
use crate::ui::frames::use_nav_context;

#[component]
pub fn ToolbarPane() -> impl IntoView {
    let ctx = use_nav_context();
    let connected = Memo::new(move |_| ctx.form.with(|form| form.is_connected()));

    view! {
        <header class="toolbar">
            <div class="banner">
                <span class="title">"dbhelm"</span>
                <span class="version">{concat!("version ", env!("CARGO_PKG_VERSION"))}</span>
            </div>
            {move || {
                if connected.get() {
                    view! { <StatusLine/> }.into_any()
                } else {
                    view! { <ConnectForm/> }.into_any()
                }
            }}
        </header>
    }
}

#[component]
fn StatusLine() -> impl IntoView {
    let ctx = use_nav_context();

    // Ask the server for the product banner when the status line appears.
    Effect::new(move |_| {
        if ctx.product_info.get().is_none() {
            ctx.reload_menu();
        }
    });

    let endpoint = move || {
        ctx.form.with(|form| match form.port {
            Some(port) => format!("{}:{}", form.hostname, port),
            None => form.hostname.clone(),
        })
    };

    view! {
        <div class="status">
            <b>{move || ctx.form.with(|form| form.dbproduct.clone())}</b>
            " running on "
            {endpoint}
            {move || {
                ctx.product_info
                    .get()
                    .map(|description| view! { <span class="product-desc">" (" {description} ")"</span> })
            }}
            <span class="status-links">
                <a
                    href="#"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.show_info();
                    }
                >
                    "More Info"
                </a>
                " | "
                <a
                    href="#"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.change_product();
                    }
                >
                    "Change Product"
                </a>
                " | "
                <a
                    href="#"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.show_options();
                    }
                >
                    "Advanced Options"
                </a>
            </span>
        </div>
    }
}

#[component]
fn ConnectForm() -> impl IntoView {
    let ctx = use_nav_context();
    let products = RwSignal::new(Vec::<ProductSummary>::new());
    let (dbproduct, set_dbproduct) = signal(String::new());
    let (hostname, set_hostname) = signal(String::new());
    let (port, set_port) = signal(String::new());
    let (ssl, set_ssl) = signal(false);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (database, set_database) = signal(String::new());

    // Load the product list once the pane is on screen.
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                use gloo_net::http::Request;

                if let Ok(response) = Request::get("/api/nav/products").send().await {
                    if response.ok() {
                        if let Ok(list) = response.json::<Vec<ProductSummary>>().await {
                            products.set(list);
                        }
                    }
                }
            }
        });
    });

    let pick_product = move |ev: web_sys::Event| {
        let name = event_target_value(&ev);
        let default_port = products.with_untracked(|list| {
            list.iter()
                .find(|product| product.name == name)
                .map(|product| product.default_port)
        });
        if port.get_untracked().is_empty() {
            if let Some(default_port) = default_port {
                set_port.set(default_port.to_string());
            }
        }
        set_dbproduct.set(name);
    };

    let login = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.connect(ConnectSettings {
            dbproduct: dbproduct.get_untracked(),
            hostname: hostname.get_untracked(),
            port: port.get_untracked().parse().ok(),
            ssl: ssl.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            database: database.get_untracked(),
        });
    };

    view! {
        <form class="connect-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
            <label>
                "Product:"
                <select on:change=pick_product>
                    <option value="">"Select product..."</option>
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <option value=product.name.clone()>
                                        {product.description.clone()}
                                        " ("
                                        {product.name.clone()}
                                        ")"
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <label>
                "Hostname:"
                <input
                    type="text"
                    size="16"
                    prop:value=move || hostname.get()
                    on:input=move |ev| set_hostname.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Port:"
                <input
                    type="text"
                    size="5"
                    prop:value=move || port.get()
                    on:input=move |ev| set_port.set(event_target_value(&ev))
                />
            </label>
            <label>
                "SSL:"
                <input
                    type="checkbox"
                    prop:checked=move || ssl.get()
                    on:change=move |ev| set_ssl.set(event_target_checked(&ev))
                />
            </label>
            <label>
                "Username:"
                <input
                    type="text"
                    size="16"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password:"
                <input
                    type="password"
                    size="16"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Database:"
                <input
                    type="text"
                    size="16"
                    prop:value=move || database.get()
                    on:input=move |ev| set_database.set(event_target_value(&ev))
                />
            </label>
            <button on:click=login>" Login "</button>
        </form>
    }
}
