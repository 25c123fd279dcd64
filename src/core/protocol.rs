//! DTOs shared between the WASM client and the `/api/nav` endpoint.
//!
//! A submission is answered with an optional navigation refresh (menu-pane
//! submissions) and an optional pane payload (everything else). The server
//! decides which from the `frame` and `action` fields of the request.

use serde::{Deserialize, Serialize};

/// Replacement navigation state pushed back after a menu-pane submission:
/// the product's databases, the selected database's tables, and the
/// position of that database in the list (none when it is not listed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRefresh {
    pub databases: Vec<String>,
    pub tables: Vec<String>,
    pub parent: Option<usize>,
}

/// One product offered on the connect screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub description: String,
    pub default_port: u16,
}

/// Content of a pane render, as decided by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanePayload {
    Blank,
    /// The root view shown before anything is selected.
    Welcome { version: String },
    /// Summary of one database and its tables.
    DatabaseDetails {
        database: String,
        tables: Vec<String>,
    },
    /// Properties of one table.
    TableProperties {
        table: String,
        columns: Vec<String>,
    },
    /// Echo of an ad hoc select over a table.
    SelectResult {
        table: String,
        columns: Vec<String>,
        selectwhere: String,
        startpos: u64,
        numrows: u32,
    },
    /// Description of the connected product, for the status pane and the
    /// "more info" view.
    ProductInfo {
        product: String,
        description: String,
    },
    /// Current values of the tunable settings.
    Options { fkeyrows: u32, usemultiline: bool },
}

/// Response to a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// New navigation state, present for menu-pane submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavRefresh>,
    /// Pane content, present when a pane should re-render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane: Option<PanePayload>,
}
