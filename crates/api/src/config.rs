use std::str::FromStr;

use axum::http::HeaderValue;
use staffdesk_db::DbConfig;

use crate::auth::jwt::JwtConfig;

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// Everything except `JWT_SECRET` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token signing configuration.
    pub jwt: JwtConfig,
    /// Target database and pool settings.
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT`                 | `3000`       |
    /// | `CORS_ORIGINS`         | `*`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    /// | `JWT_SECRET`           | **required** |
    ///
    /// Database variables are listed on [`db_config_from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000_u16, "port number")?;
        let cors_origins = parse_cors_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()),
        )?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30_u64, "u64")?;

        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::new(secret),
            db: db_config_from_lookup(&lookup)?,
        })
    }
}

/// Load database settings from the process environment.
pub fn db_config_from_env() -> Result<DbConfig, ConfigError> {
    db_config_from_lookup(|key| std::env::var(key).ok())
}

/// Load database settings through an arbitrary key lookup.
///
/// | Env Var                   | Default     |
/// |---------------------------|-------------|
/// | `DATABASE_URL`            | unset       |
/// | `DB_HOST`                 | `localhost` |
/// | `DB_PORT`                 | `5432`      |
/// | `DB_USER`                 | `postgres`  |
/// | `DB_PASS`                 | empty       |
/// | `DB_NAME`                 | `library`   |
/// | `DB_SCHEMA`               | `public`    |
/// | `DB_MAX_CONNECTIONS`      | `10`        |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`        |
pub fn db_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DbConfig, ConfigError> {
    Ok(DbConfig {
        url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
        host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
        port: parse_or(&lookup, "DB_PORT", 5432_u16, "port number")?,
        user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
        password: lookup("DB_PASS").unwrap_or_default(),
        database: lookup("DB_NAME").unwrap_or_else(|| "library".into()),
        schema: lookup("DB_SCHEMA").unwrap_or_else(|| "public".into()),
        max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10_u32, "u32")?,
        acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30_u64, "u64")?,
    })
}

/// Initial admin account written by the `seed-admin` binary.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// | Env Var     | Default         |
    /// |-------------|-----------------|
    /// | `SEED_USER` | `libadmin`      |
    /// | `SEED_PASS` | **required**    |
    /// | `SEED_NAME` | `Library Admin` |
    /// | `SEED_ROLE` | `librarian`     |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            username: lookup("SEED_USER").unwrap_or_else(|| "libadmin".into()),
            password: lookup("SEED_PASS")
                .filter(|s| !s.is_empty())
                .ok_or(ConfigError::Missing("SEED_PASS"))?,
            name: lookup("SEED_NAME").unwrap_or_else(|| "Library Admin".into()),
            role: lookup("SEED_ROLE").unwrap_or_else(|| "librarian".into()),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            origin.parse().map_err(|_| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                expected: "origin",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
