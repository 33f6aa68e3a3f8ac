// Database models (internal, may differ from public DTOs)

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub odds: Decimal,
    pub deadline: NaiveDateTime,
    /// Stored as the display label text, e.g. "незавершённое"
    pub status: String,
}

/// Insert payload. Status is deliberately absent: the insert itself
/// assigns the uncompleted label, so callers cannot choose it.
#[derive(Debug, Clone)]
pub struct CreateEventRow {
    pub name: String,
    pub odds: Decimal,
    pub deadline: NaiveDateTime,
}
