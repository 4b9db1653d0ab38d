use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::window::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

/// One axis tick, positioned against the window it was generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMarker {
    pub date: DateTime<Utc>,
    pub position: f64,
    pub label: String,
    pub kind: MarkerKind,
    pub is_minor: bool,
}

/// Generates axis markers for a visible window.
///
/// Granularity follows the window's whole-day span directly (not a stored
/// zoom level), so markers stay consistent with whatever range the host
/// last adopted. Recomputed fresh on every call; inclusion is inclusive on
/// both window bounds.
#[must_use]
pub fn generate_timeline_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let days = window.span_days();

    // The decade (>= 3650) and multi-year (>= 1825) tiers both render
    // yearly ticks only.
    if days >= 1825 {
        yearly_markers(window)
    } else if days >= 730 {
        yearly_and_quarterly_markers(window)
    } else if days >= 365 {
        monthly_markers_with_year_upgrade(window)
    } else if days >= 180 {
        monthly_markers(window)
    } else if days >= 90 {
        weekly_markers(window)
    } else if days >= 30 {
        daily_markers(window)
    } else {
        calendar_day_markers(window)
    }
}

fn yearly_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    for year in window.start().year()..=window.end().year() {
        let date = midnight(month_start(year, 1));
        if window.contains(date) {
            markers.push(marker(window, date, year.to_string(), MarkerKind::Year, false));
        }
    }
    markers
}

fn yearly_and_quarterly_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    for year in window.start().year()..=window.end().year() {
        let year_date = midnight(month_start(year, 1));
        if window.contains(year_date) {
            markers.push(marker(window, year_date, year.to_string(), MarkerKind::Year, false));
        }

        // Q1 coincides with the year tick and is skipped.
        for quarter in 2..=4u32 {
            let date = midnight(month_start(year, (quarter - 1) * 3 + 1));
            if window.contains(date) {
                markers.push(marker(window, date, format!("Q{quarter}"), MarkerKind::Quarter, true));
            }
        }
    }
    markers
}

fn monthly_markers_with_year_upgrade(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    for_each_month(window, |current, date| {
        if current.month() == 1 {
            markers.push(marker(window, date, current.year().to_string(), MarkerKind::Year, false));
        } else {
            markers.push(marker(
                window,
                date,
                current.format("%b").to_string(),
                MarkerKind::Month,
                true,
            ));
        }
    });
    markers
}

fn monthly_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    for_each_month(window, |current, date| {
        markers.push(marker(
            window,
            date,
            current.format("%b %Y").to_string(),
            MarkerKind::Month,
            false,
        ));
    });
    markers
}

fn weekly_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    let start_day = window.start().date_naive();
    // Align to Monday; a Sunday start rolls forward to the Monday after it.
    let offset = 1 - i64::from(start_day.weekday().num_days_from_sunday());
    let mut current = start_day + TimeDelta::days(offset);

    while midnight(current) <= window.end() {
        let date = midnight(current);
        if date >= window.start() {
            if current.day() <= 7 {
                markers.push(marker(
                    window,
                    date,
                    current.format("%b %-d").to_string(),
                    MarkerKind::Month,
                    false,
                ));
            } else {
                markers.push(marker(window, date, current.day().to_string(), MarkerKind::Week, true));
            }
        }
        current = current + TimeDelta::days(7);
    }
    markers
}

fn daily_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    let mut current = window.start().date_naive();

    while midnight(current) <= window.end() {
        let date = midnight(current);
        if date >= window.start() {
            let is_week_start = current.weekday() == Weekday::Mon;
            let is_month_start = current.day() == 1;
            let label = if is_month_start {
                current.format("%b %-d").to_string()
            } else {
                current.day().to_string()
            };
            let kind = if is_week_start { MarkerKind::Week } else { MarkerKind::Day };
            markers.push(marker(window, date, label, kind, !is_week_start && !is_month_start));
        }
        current = current + TimeDelta::days(1);
    }
    markers
}

fn calendar_day_markers(window: TimeWindow) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();
    let mut current = window.start().date_naive();

    while midnight(current) <= window.end() {
        let date = midnight(current);
        if date >= window.start() {
            let label = if current.day() == 1 {
                current.format("%b %-d").to_string()
            } else {
                format!("{} {}", current.day(), current.format("%a"))
            };
            markers.push(marker(window, date, label, MarkerKind::Day, false));
        }
        current = current + TimeDelta::days(1);
    }
    markers
}

fn for_each_month(window: TimeWindow, mut visit: impl FnMut(NaiveDate, DateTime<Utc>)) {
    let mut current = month_start(window.start().year(), window.start().month());
    let last = month_start(window.end().year(), window.end().month());

    while current <= last {
        let date = midnight(current);
        if window.contains(date) {
            visit(current, date);
        }
        current = next_month(current);
    }
}

fn marker(
    window: TimeWindow,
    date: DateTime<Utc>,
    label: String,
    kind: MarkerKind,
    is_minor: bool,
) -> TimelineMarker {
    TimelineMarker {
        date,
        position: window.date_to_position(date),
        label,
        kind,
        is_minor,
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date")
}

fn next_month(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        month_start(date.year() + 1, 1)
    } else {
        month_start(date.year(), date.month() + 1)
    }
}
