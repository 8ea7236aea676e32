//! Live table introspection and capped row reads.
//!
//! Table identifiers cannot be bound as query parameters, so they are
//! interpolated into SQL text. That is only done for a [`LiveTable`], which
//! [`TableRepo::resolve`] hands out after re-reading the live table list.
//!
//! Rows are serialized by Postgres with `row_to_json` over `ROW_ALIAS.*`.
//! The explicit `.*` keeps a column that happens to share the alias name
//! from being picked up instead of the whole row.

use sqlx::types::Json;
use sqlx::PgPool;
use staffdesk_core::types::Row;

use crate::models::table::LiveTable;

const ROW_ALIAS: &str = "__staffdesk_row";

/// Read-only access to arbitrary tables of one schema.
pub struct TableRepo;

impl TableRepo {
    /// List the base tables the database currently reports for `schema`.
    pub async fn list(pool: &PgPool, schema: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT table_name::text
             FROM information_schema.tables
             WHERE table_schema = $1
               AND table_type = 'BASE TABLE'
             ORDER BY table_name",
        )
        .bind(schema)
        .fetch_all(pool)
        .await
    }

    /// Confirm `name` against a freshly fetched table list.
    ///
    /// Returns `None` when the table is not present right now, even if it
    /// existed on an earlier call.
    pub async fn resolve(
        pool: &PgPool,
        schema: &str,
        name: &str,
    ) -> Result<Option<LiveTable>, sqlx::Error> {
        let tables = Self::list(pool, schema).await?;
        if tables.iter().any(|t| t == name) {
            Ok(Some(LiveTable::new(schema, name)))
        } else {
            tracing::debug!(schema, table = name, "Table not in live list");
            Ok(None)
        }
    }

    /// Select all columns of up to `limit` rows, in the database's natural order.
    pub async fn fetch_rows(
        pool: &PgPool,
        table: &LiveTable,
        limit: i64,
    ) -> Result<Vec<Row>, sqlx::Error> {
        let query = format!(
            "SELECT row_to_json({ROW_ALIAS}.*) FROM (SELECT * FROM {} LIMIT $1) AS {ROW_ALIAS}",
            table.qualified_ident()
        );
        let rows = sqlx::query_scalar::<_, Json<Row>>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }

    /// Select the first row whose `id` column matches `id`.
    ///
    /// The id is compared as text, exactly as provided by the caller. The
    /// cast means an index on `id` is not used, so the lookup scans the table.
    pub async fn fetch_row(
        pool: &PgPool,
        table: &LiveTable,
        id: &str,
    ) -> Result<Option<Row>, sqlx::Error> {
        let query = format!(
            "SELECT row_to_json({ROW_ALIAS}.*) \
             FROM (SELECT * FROM {} WHERE id::text = $1 LIMIT 1) AS {ROW_ALIAS}",
            table.qualified_ident()
        );
        let row = sqlx::query_scalar::<_, Json<Row>>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|Json(row)| row))
    }
}
