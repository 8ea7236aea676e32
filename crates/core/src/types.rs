/// Staff primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// A single table row with whatever columns the table happens to have.
///
/// Kept untyped because the set of browsable tables is arbitrary.
pub type Row = serde_json::Map<String, serde_json::Value>;
