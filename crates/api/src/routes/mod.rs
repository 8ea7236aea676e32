pub mod auth;
pub mod health;
pub mod tables;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /login                     login (public)
/// /tables                    list tables (auth required)
/// /tables/{table}            up to 500 rows (auth required)
/// /tables/{table}/{id}       single row by id (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(tables::router())
}
