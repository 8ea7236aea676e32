//! Repository for the `staff` table.

use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, name, role";

/// Lookups and seeding for staff credentials.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (username, password_hash, name, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a staff record by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE username = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
