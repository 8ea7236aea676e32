//! Staff entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::DbId;

/// Full row from the `staff` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`StaffInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
}

/// Public-safe staff representation (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub role: String,
}

impl From<&Staff> for StaffInfo {
    fn from(staff: &Staff) -> Self {
        Self {
            id: staff.id,
            username: staff.username.clone(),
            name: staff.name.clone(),
            role: staff.role.clone(),
        }
    }
}

/// DTO for inserting a staff record.
#[derive(Debug)]
pub struct CreateStaff {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
}
