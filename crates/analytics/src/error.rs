use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Cannot derive a date one year before {0}: outside the representable range")]
    DateOutOfRange(DateTime<Utc>),
}
