use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::ui::{AdminMenuPane, DetailPane, LeftView, MenuPane, ToolbarPane, provide_nav_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/dbhelm.css"/>

        // sets the document title
        <Title text="dbhelm - Database Admin"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=AdminHome/>
            </Routes>
        </Router>
    }
}

/// The admin screen: status bar on top, menu on the left, details on the
/// right. The pane split mirrors the frameset of old-school admin tools.
#[component]
fn AdminHome() -> impl IntoView {
    let ctx = provide_nav_context();

    view! {
        <div class="layout">
            <ToolbarPane/>
            <div class="panes">
                <aside class="left-pane">
                    {move || match ctx.left.get() {
                        LeftView::AdminMenu => view! { <AdminMenuPane/> }.into_any(),
                        LeftView::Menu => view! { <MenuPane/> }.into_any(),
                    }}
                </aside>
                <main class="right-pane">
                    <DetailPane/>
                </main>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Nothing to administer here."</p>
            <a href="/">"Back to the admin"</a>
        </div>
    }
}
