use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The unit marker carried by every computed `Percent`.
pub const PERCENT_UNIT: &str = "%";

/// A single priced observation in a sparse time series.
///
/// Only the calendar date of `date` is semantically meaningful to the
/// year-over-year calculation; a time-of-day component is tolerated and
/// enters only the millisecond-distance comparison when falling back to the
/// nearest available sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub date: DateTime<Utc>,

    /// The observed magnitude (a price). Non-negative by domain convention;
    /// the calculation engine does not enforce this, callers own validation.
    pub value: Decimal,
}

impl DatedRecord {
    pub fn new(date: DateTime<Utc>, value: Decimal) -> Self {
        Self { date, value }
    }

    /// Parses a record from raw text: an RFC 3339 timestamp and a decimal
    /// string. This is the only place malformed input can enter the system;
    /// failures surface as `CoreError::InvalidInput` and are never coerced
    /// to a default.
    pub fn parse(date: &str, value: &str) -> Result<Self, CoreError> {
        let date = DateTime::parse_from_rfc3339(date)
            .map_err(|e| CoreError::InvalidInput("date".to_string(), e.to_string()))?
            .with_timezone(&Utc);
        let value = Decimal::from_str(value)
            .map_err(|e| CoreError::InvalidInput("value".to_string(), e.to_string()))?;
        Ok(Self { date, value })
    }
}

/// A signed percentage change, rounded to two decimal places.
///
/// Produced only by the analytics engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percent {
    /// Always [`PERCENT_UNIT`].
    pub unit: String,

    /// Positive for an increase, negative for a decrease.
    pub value: Decimal,
}

impl Percent {
    pub fn new(value: Decimal) -> Self {
        Self {
            unit: PERCENT_UNIT.to_string(),
            value,
        }
    }
}
