//! The shared admin form and the actions that submit it.
//!
//! Every user-facing action runs the same pipeline: guard checks, a fixed
//! sequence of field assignments, then a submission targeting one pane. The
//! field names are the wire contract with the server and never change.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target pane of a submission; serialized as the `frame` form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    Top,
    Left,
    #[default]
    Right,
}

impl Frame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Top => "top",
            Frame::Left => "left",
            Frame::Right => "right",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server action identifiers with dedicated handling.
pub mod actions {
    pub const DB_DETAILS: &str = "db_details";
    pub const PROPERTIES: &str = "properties";
    pub const DOSELECT: &str = "doselect";
    pub const SHOW_INFO: &str = "show_info";
    pub const SHOW_OPTIONS: &str = "show_options";
    pub const RELOAD: &str = "reload";
    pub const DODROP_TABLE: &str = "dodrop_table";
    pub const DODROP_DATABASE: &str = "dodrop_database";
}

/// A precondition failure: something required has not been selected yet.
///
/// Surfaced to the user as a blocking alert; the attempted action is
/// aborted with no field mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("No database product selected!")]
    NoProduct,
    #[error("No database selected!")]
    NoDatabase,
}

/// What should happen once the fields are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Submit the form; the response replaces the given pane.
    Replace(Frame),
    /// Rebuild the whole pane set without a round trip (product change).
    ReloadAll,
}

/// Connection settings gathered from the product connect form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectSettings {
    pub dbproduct: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub ssl: bool,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Inputs of the Advanced Options panel. The field names are part of the
/// wire contract (`newfkeyrows` / `newusemultiline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub newfkeyrows: u32,
    pub newusemultiline: bool,
}

/// The one shared form every admin action submits. Field names are the
/// wire contract with the server side and match it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminRequest {
    /// Selected database product/driver; empty means none chosen yet.
    pub dbproduct: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub ssl: bool,
    pub username: String,
    pub password: String,
    /// Selected database name; empty means none chosen yet.
    pub database: String,
    pub table: String,
    pub column: String,
    /// Server action identifier; empty means "root view".
    pub action: String,
    pub frame: Frame,
    /// Free-form constraint/filter expression, when one has been set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Paired name/value selectors identifying a row.
    pub primarykeys: String,
    pub values: String,
    pub indexname: String,
    pub sortcolumn: String,
    pub sortorder: String,
    pub startpos: u64,
    pub numrows: u32,
    pub fkeyrows: u32,
    pub usemultiline: bool,
    /// Deferred action identifier for multi-step flows.
    pub nextaction: String,
    pub selectcols: String,
    pub selectwhere: String,
}

impl Default for AdminRequest {
    fn default() -> Self {
        Self {
            dbproduct: String::new(),
            hostname: String::new(),
            port: None,
            ssl: false,
            username: String::new(),
            password: String::new(),
            database: String::new(),
            table: String::new(),
            column: String::new(),
            action: String::new(),
            frame: Frame::Right,
            constraint: None,
            primarykeys: String::new(),
            values: String::new(),
            indexname: String::new(),
            sortcolumn: String::new(),
            sortorder: String::new(),
            startpos: 0,
            numrows: 30,
            fkeyrows: 100,
            usemultiline: true,
            nextaction: String::new(),
            selectcols: String::new(),
            selectwhere: String::new(),
        }
    }
}

impl AdminRequest {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Guards
    // ========================================================================

    pub fn check_database_product(&self) -> Result<(), GuardError> {
        if self.dbproduct.is_empty() {
            Err(GuardError::NoProduct)
        } else {
            Ok(())
        }
    }

    pub fn check_database(&self) -> Result<(), GuardError> {
        if self.database.is_empty() {
            Err(GuardError::NoDatabase)
        } else {
            Ok(())
        }
    }

    /// Whether enough connection settings are present for the server side
    /// to act on the session.
    pub fn is_connected(&self) -> bool {
        !self.dbproduct.is_empty()
            && !self.hostname.is_empty()
            && self.port.is_some()
            && !self.username.is_empty()
            && !self.database.is_empty()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Selects a table in the current database and runs `action` on it.
    /// Sort state and pagination reset to their defaults first.
    pub fn select_table(&mut self, table: &str, action: &str) -> Result<Submission, GuardError> {
        self.check_database_product()?;
        self.check_database()?;
        self.sortcolumn.clear();
        self.sortorder.clear();
        self.startpos = 0;
        self.table = table.to_owned();
        self.frame = Frame::Right;
        self.action = action.to_owned();
        Ok(Submission::Replace(Frame::Right))
    }

    /// Selects a database. Switching to a different database refreshes the
    /// menu pane first; re-selecting the current one goes straight to the
    /// detail view.
    pub fn select_database(&mut self, database: &str) -> Result<Submission, GuardError> {
        self.check_database_product()?;
        if self.database != database {
            self.database = database.to_owned();
            self.frame = Frame::Left;
            self.action = actions::DB_DETAILS.to_owned();
            Ok(Submission::Replace(Frame::Left))
        } else {
            self.frame = Frame::Right;
            self.action = actions::DB_DETAILS.to_owned();
            Ok(Submission::Replace(Frame::Right))
        }
    }

    /// Routes an arbitrary server action to the detail pane.
    pub fn select_action(&mut self, action: &str) -> Submission {
        self.frame = Frame::Right;
        self.action = action.to_owned();
        Submission::Replace(Frame::Right)
    }

    /// Runs an ad hoc select on `table`, clearing the projection and
    /// pagination before delegating to [`AdminRequest::select_table`].
    pub fn select(&mut self, table: &str, selectwhere: &str) -> Result<Submission, GuardError> {
        self.selectcols.clear();
        self.startpos = 0;
        self.selectwhere = selectwhere.to_owned();
        self.select_table(table, actions::DOSELECT)
    }

    /// Drops the product selection and every selection hanging off it,
    /// sending the user back to the connect screen.
    pub fn change_product(&mut self) -> Submission {
        self.dbproduct.clear();
        self.table.clear();
        self.column.clear();
        self.action.clear();
        self.frame = Frame::Top;
        Submission::ReloadAll
    }

    /// Clears the table/column selection and requests the root detail view.
    pub fn go_home(&mut self) -> Submission {
        self.table.clear();
        self.column.clear();
        self.action.clear();
        self.frame = Frame::Right;
        Submission::Replace(Frame::Right)
    }

    /// Requests a refresh of the status pane.
    pub fn reload_menu(&mut self) -> Submission {
        self.frame = Frame::Top;
        self.action = actions::RELOAD.to_owned();
        Submission::Replace(Frame::Top)
    }

    pub fn show_info(&mut self) -> Submission {
        self.frame = Frame::Right;
        self.action = actions::SHOW_INFO.to_owned();
        Submission::Replace(Frame::Right)
    }

    pub fn show_options(&mut self) -> Submission {
        self.frame = Frame::Right;
        self.action = actions::SHOW_OPTIONS.to_owned();
        Submission::Replace(Frame::Right)
    }

    /// Applies the connect form and requests the menu for its database.
    pub fn connect(&mut self, settings: &ConnectSettings) -> Result<Submission, GuardError> {
        if settings.dbproduct.is_empty() {
            return Err(GuardError::NoProduct);
        }
        if settings.database.is_empty() {
            return Err(GuardError::NoDatabase);
        }
        self.dbproduct = settings.dbproduct.clone();
        self.database = settings.database.clone();
        self.hostname = settings.hostname.clone();
        self.port = settings.port;
        self.ssl = settings.ssl;
        self.username = settings.username.clone();
        self.password = settings.password.clone();
        self.table.clear();
        self.column.clear();
        self.frame = Frame::Left;
        self.action = actions::DB_DETAILS.to_owned();
        Ok(Submission::Replace(Frame::Left))
    }

    // ========================================================================
    // Field setters
    // ========================================================================

    pub fn set_constraint(&mut self, constraint: &str) {
        self.constraint = Some(constraint.to_owned());
    }

    pub fn set_next_action(&mut self, action: &str) {
        self.nextaction = action.to_owned();
    }

    pub fn set_primary_keys(&mut self, names: &str, values: &str) {
        self.primarykeys = names.to_owned();
        self.values = values.to_owned();
    }

    pub fn set_index_name(&mut self, name: &str) {
        self.indexname = name.to_owned();
    }

    pub fn set_column(&mut self, name: &str) {
        self.column = name.to_owned();
    }

    /// Changing the sort column also rewinds pagination.
    pub fn set_sort_column(&mut self, name: &str) {
        self.sortcolumn = name.to_owned();
        self.startpos = 0;
    }

    pub fn set_sort_order(&mut self, order: &str) {
        self.sortorder = order.to_owned();
    }

    pub fn set_start_pos(&mut self, pos: u64) {
        self.startpos = pos;
    }

    pub fn set_num_rows(&mut self, rows: u32) {
        self.numrows = rows;
    }

    /// Applies the Advanced Options panel inputs.
    pub fn apply_settings(&mut self, update: &SettingsUpdate) {
        self.fkeyrows = update.newfkeyrows;
        self.usemultiline = update.newusemultiline;
    }
}
