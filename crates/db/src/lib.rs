//! Postgres access for the staff admin panel.
//!
//! - [`repositories::StaffRepo`] -- the credential store (`staff` table).
//! - [`repositories::TableRepo`] -- live table introspection and capped row reads.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection settings for the target database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Full connection URL. When present it wins over the individual parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Schema whose tables are exposed by the table browser.
    pub schema: String,
    /// Upper bound on pooled connections; further callers wait for a free one.
    pub max_connections: u32,
    /// How long a caller waits for a free connection before giving up.
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Build the Postgres connect options described by this config.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

/// Create a connection pool from the given config.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(config.connect_options()?)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
