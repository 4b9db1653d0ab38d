use chrono::{DateTime, Utc};
use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid date window: start={start}, end={end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}
