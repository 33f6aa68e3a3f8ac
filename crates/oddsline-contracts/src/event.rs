// Event DTOs (betting events with a deadline and a three-way outcome)

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Outcome status of an event
///
/// The serialized form is the human-readable label, never the variant
/// name; clients and storage both exchange the exact label text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum EventStatus {
    #[default]
    #[serde(rename = "незавершённое")]
    #[strum(serialize = "незавершённое")]
    Uncompleted,
    #[serde(rename = "завершено выигрышем первой команды")]
    #[strum(serialize = "завершено выигрышем первой команды")]
    Team1Won,
    #[serde(rename = "завершено выигрышем второй команды")]
    #[strum(serialize = "завершено выигрышем второй команды")]
    Team2Won,
}

/// Event record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Storage-assigned identifier, immutable after creation
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Example Event")]
    pub name: String,
    #[schema(example = "1.25")]
    pub odds: Decimal,
    /// Minute-precision deadline, rendered as `YYYY-MM-DD HH:MM`
    #[serde(with = "deadline_format")]
    #[schema(value_type = String, example = "2024-07-25 08:10")]
    pub deadline: NaiveDateTime,
    pub status: EventStatus,
}

/// Request to create a new event
///
/// There is no status field: new events always start uncompleted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Example Event")]
    pub name: String,
    /// Strictly positive, at most 5 digits with 2 decimal places
    #[validate(custom(function = "validate_odds"))]
    #[schema(example = "1.25")]
    pub odds: Decimal,
    #[serde(with = "deadline_format")]
    #[schema(value_type = String, example = "2024-07-25 08:10")]
    pub deadline: NaiveDateTime,
}

/// Request to update an event's status
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventStatusRequest {
    pub status: EventStatus,
}

fn validate_odds(odds: &Decimal) -> Result<(), ValidationError> {
    if odds.is_sign_negative() || odds.is_zero() {
        return Err(ValidationError::new("odds_not_positive"));
    }
    // Scale is taken as written, so "1.250" carries three decimal
    // places even though it equals 1.25.
    if odds.scale() > 2 {
        return Err(ValidationError::new("odds_too_many_decimal_places"));
    }
    if *odds > Decimal::new(99_999, 2) {
        return Err(ValidationError::new("odds_out_of_range"));
    }
    Ok(())
}

/// Serde adapter pinning the deadline wire format to `YYYY-MM-DD HH:MM`.
///
/// Parsing consumes the whole string, so any trailing seconds component
/// is rejected rather than truncated.
pub mod deadline_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(deadline: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&deadline.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
