use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert unix seconds into a UTC timestamp, rejecting out-of-range values.
#[track_caller]
pub fn parse_timestamp(seconds: i64, field: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| CoreError::Validation {
        message: format!("Invalid {} timestamp: {}", field, seconds),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
