//! The static admin menu, shown while no session is connected.

use leptos::prelude::*;

/// Where bug reports go.
const BUG_REPORT_ADDRESS: &str = "bugs@dbhelm.dev";

#[component]
pub fn AdminMenuPane() -> impl IntoView {
    view! {
        <nav class="menu admin-menu">
            <b>"Admin menu"</b>
            <br/>
            <br/>
            <a href=format!("mailto:{BUG_REPORT_ADDRESS}")>"Report Bugs"</a>
        </nav>
    }
}
