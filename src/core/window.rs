use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// A visible date window mapping calendar dates onto a normalized
/// 0–100 position axis.
///
/// Construction rejects degenerate and inverted windows, so the mapping
/// methods are total. Positions are deliberately unclamped: dates outside
/// the window map to values outside [0, 100], which callers use to detect
/// off-screen events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TimelineResult<Self> {
        if end <= start {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Callers must guarantee `start < end`.
    pub(crate) fn from_bounds_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// Window midpoint, the pivot for zoom transitions.
    #[must_use]
    pub fn center(self) -> DateTime<Utc> {
        self.start + TimeDelta::milliseconds(self.span_milliseconds() / 2)
    }

    #[must_use]
    pub fn span_milliseconds(self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Whole-day span, floored (Euclidean, so sub-day remainders never
    /// round a span upward).
    #[must_use]
    pub fn span_days(self) -> i64 {
        self.span_milliseconds().div_euclid(MILLIS_PER_DAY)
    }

    #[must_use]
    pub fn contains(self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }

    /// Maps a date to its normalized position within the window.
    #[must_use]
    pub fn date_to_position(self, date: DateTime<Utc>) -> f64 {
        let total = self.span_milliseconds() as f64;
        let current = (date - self.start).num_milliseconds() as f64;
        current / total * 100.0
    }

    /// Inverse of [`date_to_position`](Self::date_to_position), rounded to
    /// the nearest millisecond. Accepts positions outside [0, 100].
    #[must_use]
    pub fn position_to_date(self, position: f64) -> DateTime<Utc> {
        let total = self.span_milliseconds() as f64;
        let offset = (position / 100.0 * total).round() as i64;
        self.start
            .checked_add_signed(TimeDelta::milliseconds(offset))
            .unwrap_or(if offset < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }
}
