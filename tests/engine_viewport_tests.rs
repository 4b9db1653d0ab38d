use cgt_timeline::core::ZoomLevel;
use cgt_timeline::{TimelineEngine, TimelineEngineConfig};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn today() -> DateTime<Utc> {
    date(2024, 6, 15)
}

fn engine() -> TimelineEngine {
    TimelineEngine::new(TimelineEngineConfig::new(today())).expect("engine init")
}

#[test]
fn defaults_classify_the_initial_window() {
    let engine = engine();

    assert_eq!(engine.timeline_start(), date(2020, 1, 1));
    assert_eq!(engine.timeline_end(), today());
    assert_eq!(engine.absolute_start(), date(1900, 1, 1));
    assert_eq!(engine.absolute_end(), today());
    // 2020-01-01..2024-06-15 spans 1627 days.
    assert_eq!(engine.zoom_level(), ZoomLevel::Years);
    assert_eq!(engine.center_date(), engine.visible_window().center());
}

#[test]
fn degenerate_config_windows_are_rejected() {
    let config = TimelineEngineConfig::new(today()).with_visible_range(today(), today());
    assert!(TimelineEngine::new(config).is_err());
}

#[test]
fn set_timeline_range_reclassifies_and_recenters() {
    let mut engine = engine();

    engine
        .set_timeline_range(date(2021, 1, 1), date(2021, 3, 1))
        .expect("valid range");

    assert_eq!(engine.timeline_start(), date(2021, 1, 1));
    assert_eq!(engine.timeline_end(), date(2021, 3, 1));
    assert_eq!(engine.zoom_level(), ZoomLevel::Weeks);
    assert_eq!(engine.center_date(), engine.visible_window().center());
}

#[test]
fn set_timeline_range_widens_absolute_bounds_monotonically() {
    let mut engine = engine();

    engine
        .set_timeline_range(date(1890, 1, 1), date(1900, 1, 2))
        .expect("valid range");
    assert_eq!(engine.absolute_start(), date(1890, 1, 1));
    assert_eq!(engine.absolute_end(), today());
    assert_eq!(engine.zoom_level(), ZoomLevel::Decade);

    // A narrower range afterwards never shrinks the bounds back.
    engine
        .set_timeline_range(date(2020, 1, 1), date(2021, 1, 1))
        .expect("valid range");
    assert_eq!(engine.absolute_start(), date(1890, 1, 1));
    assert_eq!(engine.absolute_end(), today());
}

#[test]
fn set_timeline_range_rejects_degenerate_windows_untouched() {
    let mut engine = engine();
    let before = engine.state().clone();

    assert!(engine.set_timeline_range(date(2021, 1, 1), date(2021, 1, 1)).is_err());
    assert!(engine.set_timeline_range(date(2022, 1, 1), date(2021, 1, 1)).is_err());
    assert_eq!(engine.state(), &before);
}

#[test]
fn zoom_in_steps_one_level_and_keeps_the_center_date() {
    let mut engine = engine();
    let center = engine.center_date();

    engine.zoom_in();

    assert_eq!(engine.zoom_level(), ZoomLevel::Year);
    assert_eq!(engine.center_date(), center);
    // Representative span for the year level: (365 + 730) / 2.
    assert_eq!(engine.visible_window().span_days(), 547);
}

#[test]
fn zoom_out_clamps_the_window_to_today() {
    let mut engine = engine();

    engine.zoom_out();

    assert_eq!(engine.zoom_level(), ZoomLevel::MultiYear);
    assert_eq!(engine.timeline_end(), today());
    assert_eq!(engine.visible_window().span_days(), 2737);
}

#[test]
fn zoom_is_a_no_op_at_the_extremes() {
    let mut engine = engine();

    engine.set_zoom_by_index(7);
    assert_eq!(engine.zoom_level(), ZoomLevel::Days);
    let window = engine.visible_window();
    engine.zoom_in();
    assert_eq!(engine.zoom_level(), ZoomLevel::Days);
    assert_eq!(engine.visible_window(), window);

    engine.set_zoom_by_index(0);
    assert_eq!(engine.zoom_level(), ZoomLevel::Decade);
    let window = engine.visible_window();
    engine.zoom_out();
    assert_eq!(engine.zoom_level(), ZoomLevel::Decade);
    assert_eq!(engine.visible_window(), window);
}

#[test]
fn set_zoom_by_index_is_a_no_op_on_the_current_level() {
    let mut engine = engine();
    let window = engine.visible_window();

    engine.set_zoom_by_index(engine.zoom_level_index());

    assert_eq!(engine.visible_window(), window);
}

#[test]
fn set_zoom_by_index_clamps_out_of_range_indexes() {
    let mut engine = engine();

    engine.set_zoom_by_index(42);

    assert_eq!(engine.zoom_level(), ZoomLevel::Days);
}

#[test]
fn pan_to_zero_centers_at_the_absolute_start() {
    let mut engine = engine();

    engine.pan_to_position(0.0);

    assert_eq!(engine.center_date(), engine.absolute_start());
    let window = engine.visible_window();
    assert_eq!(
        (engine.center_date() - window.start()).num_milliseconds(),
        (window.end() - engine.center_date()).num_milliseconds()
    );
    // Span and granularity are held fixed while panning.
    assert_eq!(engine.zoom_level(), ZoomLevel::Years);
    assert_eq!(window.span_days(), 1277);
}

#[test]
fn pan_to_one_hundred_centers_at_the_absolute_end_clamped() {
    let mut engine = engine();

    engine.pan_to_position(100.0);

    assert_eq!(engine.center_date(), engine.absolute_end());
    assert_eq!(engine.timeline_end(), today());
    assert_eq!(engine.visible_window().span_days(), 1277);
}

#[test]
fn pan_clamps_out_of_range_percentages() {
    let mut panned = engine();
    panned.pan_to_position(250.0);

    let mut reference = engine();
    reference.pan_to_position(100.0);

    assert_eq!(reference.visible_window(), panned.visible_window());
    assert_eq!(reference.center_date(), panned.center_date());
}

#[test]
fn no_transition_ever_looks_past_today() {
    let mut engine = engine();

    for index in 0..8 {
        engine.set_zoom_by_index(index);
        assert!(engine.timeline_end() <= today());
    }
    for position in [0.0, 25.0, 75.0, 100.0, 180.0] {
        engine.pan_to_position(position);
        assert!(engine.timeline_end() <= today());
    }
    engine.zoom_out();
    engine.zoom_out();
    assert!(engine.timeline_end() <= today());
}

#[test]
fn set_center_date_moves_only_the_pivot() {
    let mut engine = engine();
    let window = engine.visible_window();

    engine.set_center_date(date(2010, 5, 5));

    assert_eq!(engine.center_date(), date(2010, 5, 5));
    assert_eq!(engine.visible_window(), window);
}
