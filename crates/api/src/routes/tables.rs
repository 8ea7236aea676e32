//! Route definitions for the `/tables` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tables;
use crate::state::AppState;

/// ```text
/// GET /tables                -> list_tables
/// GET /tables/{table}        -> get_table_rows
/// GET /tables/{table}/{id}   -> get_row
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tables", get(tables::list_tables))
        .route("/tables/{table}", get(tables::get_table_rows))
        .route("/tables/{table}/{id}", get(tables::get_row))
}
