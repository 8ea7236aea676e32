//! Handlers for the `/tables` resource.
//!
//! Every handler that reads a named table re-resolves the name against the
//! live table list first, in the same request, before any row query runs.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use staffdesk_core::error::CoreError;
use staffdesk_core::limits::MAX_TABLE_ROWS;
use staffdesk_core::types::Row;
use staffdesk_db::models::table::LiveTable;
use staffdesk_db::repositories::TableRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct RowResponse {
    pub row: Row,
}

/// GET /api/tables
pub async fn list_tables(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<TablesResponse>> {
    let tables = TableRepo::list(&state.pool, &state.config.db.schema).await?;
    tracing::debug!(user = %user.username, count = tables.len(), "Listed tables");
    Ok(Json(TablesResponse { tables }))
}

/// GET /api/tables/{table}
///
/// Returns at most [`MAX_TABLE_ROWS`] rows with every column, including any
/// sensitive ones such as `staff.password_hash`.
pub async fn get_table_rows(
    user: AuthUser,
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> AppResult<Json<RowsResponse>> {
    let table = resolve_live_table(&state, &table).await?;
    let rows = TableRepo::fetch_rows(&state.pool, &table, MAX_TABLE_ROWS).await?;
    tracing::debug!(user = %user.username, table = table.name(), count = rows.len(), "Read table rows");
    Ok(Json(RowsResponse { rows }))
}

/// GET /api/tables/{table}/{id}
pub async fn get_row(
    user: AuthUser,
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> AppResult<Json<RowResponse>> {
    let table = resolve_live_table(&state, &table).await?;
    let row = TableRepo::fetch_row(&state.pool, &table, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: table.name().to_string(),
                id: id.clone(),
            })
        })?;
    tracing::debug!(user = %user.username, table = table.name(), id = %id, "Read row");
    Ok(Json(RowResponse { row }))
}

/// Confirm `name` against a freshly fetched table list, or fail with 400.
async fn resolve_live_table(state: &AppState, name: &str) -> AppResult<LiveTable> {
    TableRepo::resolve(&state.pool, &state.config.db.schema, name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid table".into())))
}
