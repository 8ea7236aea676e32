use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup. Cloning is cheap: the pool is reference-counted and
/// the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: staffdesk_db::DbPool,
    /// Server configuration, including the token signing secret and schema.
    pub config: Arc<ServerConfig>,
}
