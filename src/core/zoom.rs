use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::window::{MILLIS_PER_DAY, TimeWindow};

/// Representative spans wider than this are capped before picking a
/// midpoint, so the open-ended decade level stays near two decades.
const MAX_REPRESENTATIVE_DAYS: i64 = 7300;

/// Discrete timeline granularity, ordered coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomLevel {
    Decade,
    MultiYear,
    Years,
    Year,
    Months,
    Month,
    Weeks,
    Days,
}

/// Half-open day-count range owning one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevelSpan {
    pub level: ZoomLevel,
    pub min_days: i64,
    /// `None` = unbounded (the decade level).
    pub max_days: Option<i64>,
    pub label: &'static str,
}

pub const ZOOM_LEVELS: [ZoomLevelSpan; 8] = [
    ZoomLevelSpan { level: ZoomLevel::Decade, min_days: 3650, max_days: None, label: "10+ Years" },
    ZoomLevelSpan { level: ZoomLevel::MultiYear, min_days: 1825, max_days: Some(3650), label: "5-10 Years" },
    ZoomLevelSpan { level: ZoomLevel::Years, min_days: 730, max_days: Some(1825), label: "2-5 Years" },
    ZoomLevelSpan { level: ZoomLevel::Year, min_days: 365, max_days: Some(730), label: "1-2 Years" },
    ZoomLevelSpan { level: ZoomLevel::Months, min_days: 180, max_days: Some(365), label: "6-12 Months" },
    ZoomLevelSpan { level: ZoomLevel::Month, min_days: 90, max_days: Some(180), label: "3-6 Months" },
    ZoomLevelSpan { level: ZoomLevel::Weeks, min_days: 30, max_days: Some(90), label: "1-3 Months" },
    ZoomLevelSpan { level: ZoomLevel::Days, min_days: 0, max_days: Some(30), label: "< 1 Month" },
];

impl ZoomLevel {
    /// Classifies a date span into its zoom level.
    ///
    /// Degenerate and inverted spans fall back to [`ZoomLevel::Decade`].
    #[must_use]
    pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let days = (end - start).num_milliseconds().div_euclid(MILLIS_PER_DAY);

        for span in ZOOM_LEVELS {
            if days >= span.min_days && span.max_days.is_none_or(|max| days < max) {
                return span.level;
            }
        }
        Self::Decade
    }

    /// Stable 0–7 ordering, coarsest first. Backs the host's zoom slider.
    #[must_use]
    pub fn index(self) -> usize {
        ZOOM_LEVELS
            .iter()
            .position(|span| span.level == self)
            .unwrap_or(0)
    }

    /// Level at a slider index, clamped into range.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        ZOOM_LEVELS[index.min(ZOOM_LEVELS.len() - 1)].level
    }

    /// The next, more detailed level, or `None` at the finest.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        ZOOM_LEVELS.get(self.index() + 1).map(|span| span.level)
    }

    /// The previous, coarser level, or `None` at the coarsest.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .map(|index| ZOOM_LEVELS[index].level)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        ZOOM_LEVELS[self.index()].label
    }

    fn span(self) -> ZoomLevelSpan {
        ZOOM_LEVELS[self.index()]
    }
}

/// Computes the date window for a zoom level centered on a date.
///
/// The span is the midpoint of the level's day range (capped at
/// [`MAX_REPRESENTATIVE_DAYS`]). When the nominal window would reach past
/// `today` it is shifted backward so `end == today` exactly; the span is
/// preserved, never shrunk.
#[must_use]
pub fn range_for_level(center: DateTime<Utc>, level: ZoomLevel, today: DateTime<Utc>) -> TimeWindow {
    let span = level.span();
    let capped_max = span
        .max_days
        .unwrap_or(MAX_REPRESENTATIVE_DAYS)
        .min(MAX_REPRESENTATIVE_DAYS);
    let target_days = (span.min_days + capped_max) / 2;
    let half_span = TimeDelta::milliseconds(
        (target_days as f64 / 2.0 * MILLIS_PER_DAY as f64) as i64,
    );

    let start = center - half_span;
    let end = center + half_span;

    if end > today {
        let overflow = end - today;
        TimeWindow::from_bounds_unchecked(start - overflow, today)
    } else {
        TimeWindow::from_bounds_unchecked(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoomLevel, range_for_level};
    use chrono::{DateTime, TimeDelta, Utc};

    fn at(days_from_epoch: i64) -> DateTime<Utc> {
        DateTime::UNIX_EPOCH + TimeDelta::days(days_from_epoch)
    }

    #[test]
    fn classify_picks_half_open_ranges() {
        let start = at(0);
        assert_eq!(ZoomLevel::classify(start, at(29)), ZoomLevel::Days);
        assert_eq!(ZoomLevel::classify(start, at(30)), ZoomLevel::Weeks);
        assert_eq!(ZoomLevel::classify(start, at(365)), ZoomLevel::Year);
        assert_eq!(ZoomLevel::classify(start, at(3650)), ZoomLevel::Decade);
    }

    #[test]
    fn classify_falls_back_to_decade_for_inverted_spans() {
        assert_eq!(ZoomLevel::classify(at(10), at(3)), ZoomLevel::Decade);
    }

    #[test]
    fn adjacent_levels_stop_at_the_extremes() {
        assert_eq!(ZoomLevel::Decade.previous(), None);
        assert_eq!(ZoomLevel::Days.next(), None);
        assert_eq!(ZoomLevel::Decade.next(), Some(ZoomLevel::MultiYear));
        assert_eq!(ZoomLevel::Days.previous(), Some(ZoomLevel::Weeks));
    }

    #[test]
    fn range_for_level_preserves_span_under_the_future_clamp() {
        let today = at(20_000);
        let clamped = range_for_level(today, ZoomLevel::Decade, today);
        let free = range_for_level(at(0), ZoomLevel::Decade, today);

        assert_eq!(clamped.end(), today);
        assert_eq!(clamped.span_milliseconds(), free.span_milliseconds());
    }
}
