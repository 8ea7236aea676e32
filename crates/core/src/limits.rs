//! Fixed limits of the table browser and session issuer.

/// Maximum number of rows returned by a table listing.
pub const MAX_TABLE_ROWS: i64 = 500;

/// Lifetime of a session token in hours.
pub const SESSION_TTL_HOURS: i64 = 8;
