use cgt_timeline::core::{ZOOM_LEVELS, ZoomLevel, range_for_level};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn span_of(days: i64) -> ZoomLevel {
    let start = date(2000, 1, 1);
    ZoomLevel::classify(start, start + TimeDelta::days(days))
}

#[test]
fn classification_covers_every_boundary() {
    assert_eq!(span_of(0), ZoomLevel::Days);
    assert_eq!(span_of(29), ZoomLevel::Days);
    assert_eq!(span_of(30), ZoomLevel::Weeks);
    assert_eq!(span_of(89), ZoomLevel::Weeks);
    assert_eq!(span_of(90), ZoomLevel::Month);
    assert_eq!(span_of(179), ZoomLevel::Month);
    assert_eq!(span_of(180), ZoomLevel::Months);
    assert_eq!(span_of(364), ZoomLevel::Months);
    assert_eq!(span_of(365), ZoomLevel::Year);
    assert_eq!(span_of(729), ZoomLevel::Year);
    assert_eq!(span_of(730), ZoomLevel::Years);
    assert_eq!(span_of(1824), ZoomLevel::Years);
    assert_eq!(span_of(1825), ZoomLevel::MultiYear);
    assert_eq!(span_of(3649), ZoomLevel::MultiYear);
    assert_eq!(span_of(3650), ZoomLevel::Decade);
    assert_eq!(span_of(50_000), ZoomLevel::Decade);
}

#[test]
fn sub_day_spans_classify_as_days() {
    let start = date(2020, 1, 1);
    assert_eq!(
        ZoomLevel::classify(start, start + TimeDelta::hours(5)),
        ZoomLevel::Days
    );
}

#[test]
fn indexes_round_trip_and_clamp() {
    for (index, span) in ZOOM_LEVELS.iter().enumerate() {
        assert_eq!(span.level.index(), index);
        assert_eq!(ZoomLevel::from_index(index), span.level);
    }
    assert_eq!(ZoomLevel::from_index(99), ZoomLevel::Days);
}

#[test]
fn labels_match_the_slider_captions() {
    assert_eq!(ZoomLevel::Decade.label(), "10+ Years");
    assert_eq!(ZoomLevel::Days.label(), "< 1 Month");
}

#[test]
fn range_for_level_is_centered_when_clear_of_today() {
    let today = date(2024, 6, 15);
    let center = date(2010, 1, 1);

    let window = range_for_level(center, ZoomLevel::Years, today);

    // Representative span is the midpoint of [730, 1825).
    assert_eq!(window.span_days(), 1277);
    assert_eq!(
        (center - window.start()).num_milliseconds(),
        (window.end() - center).num_milliseconds()
    );
}

#[test]
fn range_for_level_clamps_to_today_without_shrinking() {
    let today = date(2024, 6, 15);

    let window = range_for_level(today, ZoomLevel::Decade, today);

    assert_eq!(window.end(), today);
    assert_eq!(window.span_days(), 5475);
}

#[test]
fn range_for_level_near_today_shifts_backward() {
    let today = date(2024, 6, 15);
    let center = today - TimeDelta::days(3);

    let window = range_for_level(center, ZoomLevel::Days, today);

    // Half of the 15-day representative span passes today, so the window
    // slides back and keeps its length.
    assert_eq!(window.end(), today);
    assert_eq!(window.span_days(), 15);
}
