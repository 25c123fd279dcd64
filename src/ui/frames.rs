//! Named panes and the navigation controller shared across them.
//!
//! The original frameset becomes three named panes (top status bar, left
//! menu, right detail view). Cross-pane calls go through one controller
//! context instead of global frame lookups, and every submission runs the
//! same pipeline: mutate a draft of the shared form, validate, then post it
//! and route the response to the targeted pane.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::protocol::PanePayload;
#[cfg(not(feature = "ssr"))]
use crate::core::protocol::SubmitResponse;
use crate::core::{
    actions, AdminRequest, ConnectSettings, Frame, GuardError, NavState, SettingsUpdate,
    Submission,
};

/// What the menu pane is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftView {
    /// The static admin menu, shown while no session is connected.
    AdminMenu,
    /// The database/table navigation menu.
    Menu,
}

/// Shared navigation controller: the one admin form, the menu state, and
/// the named panes every component renders from.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub form: RwSignal<AdminRequest>,
    pub nav: RwSignal<NavState>,
    pub left: RwSignal<LeftView>,
    pub right: RwSignal<PanePayload>,
    /// Status-pane description of the connected product, when known.
    pub product_info: RwSignal<Option<String>>,
    /// Previous detail payload, for returning from the options panel.
    last_right: RwSignal<Option<PanePayload>>,
}

/// Provide the navigation controller to the component tree
pub fn provide_nav_context() -> NavContext {
    let ctx = NavContext {
        form: RwSignal::new(AdminRequest::new()),
        nav: RwSignal::new(NavState::new()),
        left: RwSignal::new(LeftView::AdminMenu),
        right: RwSignal::new(welcome_pane()),
        product_info: RwSignal::new(None),
        last_right: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

/// Use the navigation controller from the component tree
pub fn use_nav_context() -> NavContext {
    expect_context::<NavContext>()
}

fn welcome_pane() -> PanePayload {
    PanePayload::Welcome {
        version: env!("CARGO_PKG_VERSION").to_owned(),
    }
}

impl NavContext {
    /// Runs one form action through the pipeline: the mutation is applied
    /// to a draft, guard failures alert and discard it, successes commit
    /// the draft and submit it.
    pub fn run(&self, op: impl FnOnce(&mut AdminRequest) -> Result<Submission, GuardError>) {
        let mut draft = self.form.get_untracked();
        match op(&mut draft) {
            Ok(submission) => {
                self.form.set(draft.clone());
                match submission {
                    Submission::ReloadAll => self.reset(),
                    Submission::Replace(target) => self.submit(draft, target),
                }
            }
            Err(err) => alert(&err.to_string()),
        }
    }

    /// Drops all session state and returns to the connect screen.
    fn reset(&self) {
        self.nav.set(NavState::new());
        self.left.set(LeftView::AdminMenu);
        self.product_info.set(None);
        self.last_right.set(None);
        self.right.set(welcome_pane());
    }

    fn submit(&self, req: AdminRequest, target: Frame) {
        let ctx = *self;
        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                let Some(resp) = post_submit(&req).await else {
                    return;
                };
                ctx.apply(&req, target, resp);
                // A menu refresh is followed by the detail view for the
                // freshly selected database, like the generated menu page
                // of the original did.
                if target == Frame::Left && req.action == actions::DB_DETAILS {
                    let mut follow = ctx.form.get_untracked();
                    follow.frame = Frame::Right;
                    ctx.form.set(follow.clone());
                    if let Some(resp) = post_submit(&follow).await {
                        ctx.apply(&follow, Frame::Right, resp);
                    }
                }
            }
            #[cfg(feature = "ssr")]
            {
                let _ = (req, target, ctx);
            }
        });
    }

    /// Routes one server response to the pane the submission targeted.
    #[cfg(not(feature = "ssr"))]
    fn apply(&self, req: &AdminRequest, target: Frame, resp: SubmitResponse) {
        if let Some(refresh) = resp.nav {
            self.nav.update(|nav| {
                nav.set_databases(refresh.databases);
                nav.set_tables(refresh.tables);
                nav.set_parent(refresh.parent);
            });
            self.left.set(LeftView::Menu);
        }
        if let Some(pane) = resp.pane {
            match target {
                Frame::Right => {
                    self.last_right.set(Some(self.right.get_untracked()));
                    self.right.set(pane);
                }
                Frame::Top => {
                    if let PanePayload::ProductInfo { description, .. } = pane {
                        self.product_info.set(Some(description));
                    }
                }
                Frame::Left => {}
            }
        }
        // Drops mutate the menu state locally as well.
        match req.action.as_str() {
            actions::DODROP_TABLE => {
                let table = req.table.clone();
                self.nav.update(|nav| nav.delete_table(&table));
                self.form.update(|form| form.table.clear());
            }
            actions::DODROP_DATABASE => {
                let database = req.database.clone();
                self.nav.update(|nav| nav.delete_database(&database));
                self.form.update(|form| form.database.clear());
            }
            _ => {}
        }
    }

    // ========================================================================
    // User-facing operations
    // ========================================================================

    pub fn go_home(&self) {
        self.run(|form| Ok(form.go_home()));
    }

    pub fn select_database(&self, database: &str) {
        let database = database.to_owned();
        self.run(move |form| form.select_database(&database));
    }

    pub fn select_table(&self, table: &str) {
        let table = table.to_owned();
        self.run(move |form| form.select_table(&table, actions::PROPERTIES));
    }

    pub fn select_action(&self, action: &str) {
        let action = action.to_owned();
        self.run(move |form| Ok(form.select_action(&action)));
    }

    /// Runs an unconstrained select over `table`.
    pub fn browse_table(&self, table: &str) {
        let table = table.to_owned();
        self.run(move |form| form.select(&table, ""));
    }

    pub fn show_info(&self) {
        self.run(|form| Ok(form.show_info()));
    }

    pub fn show_options(&self) {
        self.run(|form| Ok(form.show_options()));
    }

    pub fn change_product(&self) {
        self.run(|form| Ok(form.change_product()));
    }

    pub fn reload_menu(&self) {
        self.run(|form| Ok(form.reload_menu()));
    }

    pub fn connect(&self, settings: ConnectSettings) {
        self.run(move |form| form.connect(&settings));
    }

    pub fn set_column(&self, column: &str) {
        let column = column.to_owned();
        self.form.update(|form| form.set_column(&column));
    }

    pub fn set_num_rows(&self, rows: u32) {
        self.form.update(|form| form.set_num_rows(rows));
    }

    /// Re-runs the current select from a new pagination offset.
    pub fn page_to(&self, startpos: u64) {
        self.run(move |form| {
            form.set_start_pos(startpos);
            Ok(form.select_action(actions::DOSELECT))
        });
    }

    pub fn drop_table(&self, table: &str) {
        if !confirm(&format!("Drop table {table}?")) {
            return;
        }
        let table = table.to_owned();
        self.run(move |form| form.select_table(&table, actions::DODROP_TABLE));
    }

    pub fn drop_database(&self) {
        let database = self.form.with_untracked(|form| form.database.clone());
        if !confirm(&format!("Drop database {database}?")) {
            return;
        }
        self.run(|form| Ok(form.select_action(actions::DODROP_DATABASE)));
    }

    /// Applies the options panel and returns the detail pane to what it
    /// showed before the panel opened.
    pub fn update_settings(&self, update: SettingsUpdate) {
        self.form.update(|form| form.apply_settings(&update));
        if let Some(previous) = self.last_right.get_untracked() {
            self.right.set(previous);
            self.last_right.set(None);
        }
    }
}

fn alert(message: &str) {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = leptos::web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(feature = "ssr")]
    let _ = message;
}

fn confirm(message: &str) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        leptos::web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
        false
    }
}

#[cfg(not(feature = "ssr"))]
async fn post_submit(req: &AdminRequest) -> Option<SubmitResponse> {
    use gloo_net::http::Request;

    let response = Request::post("/api/nav/submit")
        .header("Content-Type", "application/json")
        .json(req)
        .ok()?
        .send()
        .await
        .ok()?;
    if !response.ok() {
        if let Ok(body) = response.text().await {
            leptos::logging::log!("submit failed: {body}");
        }
        return None;
    }
    response.json().await.ok()
}
