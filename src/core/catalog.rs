//! In-memory catalog backing the `/api/nav` endpoint.
//!
//! The real multi-database backend (drivers, pools, query execution) is out
//! of scope for this tool; this catalog only answers "which products,
//! databases, tables and columns exist" so the navigation pipeline has a
//! live server to submit to. It never opens a connection to anything.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::protocol::{NavRefresh, PanePayload, ProductSummary, SubmitResponse};
use crate::core::request::{actions, AdminRequest, Frame, GuardError};

/// One table and its column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// One database and its tables, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

/// One database product the tool can administer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_port: u16,
    #[serde(default)]
    pub databases: Vec<DatabaseEntry>,
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Nav API error types.
#[derive(Debug, thiserror::Error)]
pub enum NavApiError {
    #[error("Unknown database product: {0}")]
    UnknownProduct(String),

    #[error("Unknown database: {0}")]
    UnknownDatabase(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    Guard(#[from] GuardError),
}

impl IntoResponse for NavApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            NavApiError::UnknownProduct(_) => (StatusCode::NOT_FOUND, "UNKNOWN_PRODUCT"),
            NavApiError::UnknownDatabase(_) => (StatusCode::NOT_FOUND, "UNKNOWN_DATABASE"),
            NavApiError::UnknownTable(_) => (StatusCode::NOT_FOUND, "UNKNOWN_TABLE"),
            NavApiError::UnknownAction(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_ACTION"),
            NavApiError::Guard(_) => (StatusCode::BAD_REQUEST, "GUARD_FAILED"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Shared catalog state for the nav API router.
#[derive(Clone, Default)]
pub struct CatalogState {
    products: Arc<DashMap<String, Product>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON array of [`Product`] entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let state = Self::new();
        for product in products {
            state.insert_product(product);
        }
        Ok(state)
    }

    /// A small built-in catalog so the tool is usable out of the box.
    pub fn with_demo_data() -> Self {
        let state = Self::new();
        state.insert_product(Product {
            name: "mysql".into(),
            description: "MySQL".into(),
            default_port: 3306,
            databases: vec![
                DatabaseEntry {
                    name: "storefront".into(),
                    tables: vec![
                        TableEntry {
                            name: "customers".into(),
                            columns: vec!["id".into(), "name".into(), "email".into()],
                        },
                        TableEntry {
                            name: "orders".into(),
                            columns: vec![
                                "id".into(),
                                "customer_id".into(),
                                "total".into(),
                                "placed_at".into(),
                            ],
                        },
                        TableEntry {
                            name: "order_items".into(),
                            columns: vec![
                                "order_id".into(),
                                "product_id".into(),
                                "quantity".into(),
                            ],
                        },
                    ],
                },
                DatabaseEntry {
                    name: "analytics".into(),
                    tables: vec![
                        TableEntry {
                            name: "events".into(),
                            columns: vec!["id".into(), "name".into(), "recorded_at".into()],
                        },
                        TableEntry {
                            name: "sessions".into(),
                            columns: vec!["id".into(), "started_at".into(), "ended_at".into()],
                        },
                    ],
                },
            ],
        });
        state.insert_product(Product {
            name: "postgresql".into(),
            description: "PostgreSQL".into(),
            default_port: 5432,
            databases: vec![DatabaseEntry {
                name: "inventory".into(),
                tables: vec![
                    TableEntry {
                        name: "warehouses".into(),
                        columns: vec!["id".into(), "city".into()],
                    },
                    TableEntry {
                        name: "stock_levels".into(),
                        columns: vec!["warehouse_id".into(), "sku".into(), "on_hand".into()],
                    },
                ],
            }],
        });
        state
    }

    pub fn insert_product(&self, product: Product) {
        self.products.insert(product.name.clone(), product);
    }

    /// Products in name order, for the connect screen.
    pub fn product_summaries(&self) -> Vec<ProductSummary> {
        let mut summaries: Vec<ProductSummary> = self
            .products
            .iter()
            .map(|entry| ProductSummary {
                name: entry.name.clone(),
                description: entry.description.clone(),
                default_port: entry.default_port,
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    fn product(&self, name: &str) -> Result<Product, NavApiError> {
        self.products
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| NavApiError::UnknownProduct(name.to_owned()))
    }

    fn database(&self, product: &str, name: &str) -> Result<DatabaseEntry, NavApiError> {
        self.product(product)?
            .databases
            .into_iter()
            .find(|db| db.name == name)
            .ok_or_else(|| NavApiError::UnknownDatabase(name.to_owned()))
    }

    fn table(&self, product: &str, database: &str, name: &str) -> Result<TableEntry, NavApiError> {
        self.database(product, database)?
            .tables
            .into_iter()
            .find(|table| table.name == name)
            .ok_or_else(|| NavApiError::UnknownTable(name.to_owned()))
    }

    fn drop_table(&self, product: &str, database: &str, name: &str) -> Result<(), NavApiError> {
        let mut entry = self
            .products
            .get_mut(product)
            .ok_or_else(|| NavApiError::UnknownProduct(product.to_owned()))?;
        let db = entry
            .databases
            .iter_mut()
            .find(|db| db.name == database)
            .ok_or_else(|| NavApiError::UnknownDatabase(database.to_owned()))?;
        let before = db.tables.len();
        db.tables.retain(|table| table.name != name);
        if db.tables.len() == before {
            return Err(NavApiError::UnknownTable(name.to_owned()));
        }
        tracing::info!("dropped table {database}.{name} from {product}");
        Ok(())
    }

    fn drop_database(&self, product: &str, name: &str) -> Result<(), NavApiError> {
        let mut entry = self
            .products
            .get_mut(product)
            .ok_or_else(|| NavApiError::UnknownProduct(product.to_owned()))?;
        let before = entry.databases.len();
        entry.databases.retain(|db| db.name != name);
        if entry.databases.len() == before {
            return Err(NavApiError::UnknownDatabase(name.to_owned()));
        }
        tracing::info!("dropped database {name} from {product}");
        Ok(())
    }

    /// The menu refresh for a product/database pair: database list, table
    /// list, and the position of the database in the list.
    fn nav_refresh(&self, req: &AdminRequest) -> Result<NavRefresh, NavApiError> {
        let product = self.product(&req.dbproduct)?;
        let databases: Vec<String> = product.databases.iter().map(|db| db.name.clone()).collect();
        let tables = self
            .database(&req.dbproduct, &req.database)?
            .tables
            .into_iter()
            .map(|table| table.name)
            .collect();
        let parent = databases.iter().position(|db| db == &req.database);
        Ok(NavRefresh {
            databases,
            tables,
            parent,
        })
    }

    fn product_info(&self, req: &AdminRequest) -> Result<PanePayload, NavApiError> {
        let product = self.product(&req.dbproduct)?;
        Ok(PanePayload::ProductInfo {
            product: product.name,
            description: product.description,
        })
    }

    fn database_details(&self, req: &AdminRequest) -> Result<PanePayload, NavApiError> {
        let db = self.database(&req.dbproduct, &req.database)?;
        Ok(PanePayload::DatabaseDetails {
            database: db.name,
            tables: db.tables.into_iter().map(|table| table.name).collect(),
        })
    }

    /// Decides the response for one submission from its `frame` and
    /// `action` fields, mirroring the per-frame dispatch of the original
    /// servlet.
    pub fn dispatch(&self, req: &AdminRequest) -> Result<SubmitResponse, NavApiError> {
        match req.frame {
            Frame::Left => {
                req.check_database_product()?;
                req.check_database()?;
                Ok(SubmitResponse {
                    nav: Some(self.nav_refresh(req)?),
                    pane: None,
                })
            }
            Frame::Top => {
                req.check_database_product()?;
                Ok(SubmitResponse {
                    nav: None,
                    pane: Some(self.product_info(req)?),
                })
            }
            Frame::Right => {
                let pane = match req.action.as_str() {
                    "" => PanePayload::Welcome {
                        version: env!("CARGO_PKG_VERSION").to_owned(),
                    },
                    actions::SHOW_INFO => {
                        req.check_database_product()?;
                        self.product_info(req)?
                    }
                    actions::SHOW_OPTIONS => PanePayload::Options {
                        fkeyrows: req.fkeyrows,
                        usemultiline: req.usemultiline,
                    },
                    actions::DB_DETAILS => {
                        req.check_database_product()?;
                        req.check_database()?;
                        self.database_details(req)?
                    }
                    actions::PROPERTIES => {
                        req.check_database_product()?;
                        req.check_database()?;
                        let table = self.table(&req.dbproduct, &req.database, &req.table)?;
                        PanePayload::TableProperties {
                            table: table.name,
                            columns: table.columns,
                        }
                    }
                    actions::DOSELECT => {
                        req.check_database_product()?;
                        req.check_database()?;
                        let table = self.table(&req.dbproduct, &req.database, &req.table)?;
                        PanePayload::SelectResult {
                            table: table.name,
                            columns: table.columns,
                            selectwhere: req.selectwhere.clone(),
                            startpos: req.startpos,
                            numrows: req.numrows,
                        }
                    }
                    actions::DODROP_TABLE => {
                        req.check_database_product()?;
                        req.check_database()?;
                        self.drop_table(&req.dbproduct, &req.database, &req.table)?;
                        self.database_details(req)?
                    }
                    actions::DODROP_DATABASE => {
                        req.check_database_product()?;
                        req.check_database()?;
                        self.drop_database(&req.dbproduct, &req.database)?;
                        PanePayload::Welcome {
                            version: env!("CARGO_PKG_VERSION").to_owned(),
                        }
                    }
                    other => return Err(NavApiError::UnknownAction(other.to_owned())),
                };
                Ok(SubmitResponse {
                    nav: None,
                    pane: Some(pane),
                })
            }
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Builds the nav API router.
pub fn nav_api_router(state: CatalogState) -> Router {
    Router::new()
        .route("/api/nav/products", get(list_products))
        .route("/api/nav/submit", post(submit))
        .with_state(state)
}

async fn list_products(State(state): State<CatalogState>) -> Json<Vec<ProductSummary>> {
    Json(state.product_summaries())
}

async fn submit(
    State(state): State<CatalogState>,
    Json(req): Json<AdminRequest>,
) -> Result<Json<SubmitResponse>, NavApiError> {
    state.dispatch(&req).map(Json)
}
