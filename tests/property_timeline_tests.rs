use cgt_timeline::core::{
    EventType, TimeWindow, TimelineEvent, ZoomLevel, calculate_status_periods,
};
use cgt_timeline::extensions::{LabelLayoutConfig, assign_label_tiers};
use cgt_timeline::{TimelineEngine, TimelineEngineConfig};
use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;

fn at_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).expect("in-range timestamp")
}

fn event_type_from(tag: u8) -> EventType {
    match tag % 9 {
        0 => EventType::Purchase,
        1 => EventType::MoveIn,
        2 => EventType::MoveOut,
        3 => EventType::RentStart,
        4 => EventType::RentEnd,
        5 => EventType::Sale,
        6 => EventType::Improvement,
        7 => EventType::Refinance,
        _ => EventType::StatusChange,
    }
}

fn events_from(days_and_tags: &[(u16, u8)]) -> Vec<TimelineEvent> {
    let mut seen = std::collections::HashSet::new();
    days_and_tags
        .iter()
        .filter(|(day, _)| seen.insert(*day))
        .enumerate()
        .map(|(index, (day, tag))| {
            TimelineEvent::new(
                format!("event-{index}"),
                "prop-1",
                event_type_from(*tag),
                DateTime::UNIX_EPOCH + TimeDelta::days(i64::from(*day)),
                "Event",
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn position_round_trips_within_one_millisecond(
        start_millis in -1_000_000_000_000i64..1_000_000_000_000,
        span_millis in 1i64..2_000_000_000_000,
        offset_ratio in 0.0f64..1.0
    ) {
        let start = at_millis(start_millis);
        let end = at_millis(start_millis + span_millis);
        let window = TimeWindow::new(start, end).expect("valid window");

        let original = at_millis(start_millis + (span_millis as f64 * offset_ratio) as i64);
        let recovered = window.position_to_date(window.date_to_position(original));

        prop_assert!((recovered - original).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn classification_is_monotonic_over_span_length(
        shorter in 0i64..20_000,
        extra in 1i64..20_000
    ) {
        let start = DateTime::UNIX_EPOCH;
        let narrow = ZoomLevel::classify(start, start + TimeDelta::days(shorter));
        let wide = ZoomLevel::classify(start, start + TimeDelta::days(shorter + extra));

        // Coarser levels sit at lower indexes; a wider span never
        // classifies finer than a narrower one.
        prop_assert!(wide.index() <= narrow.index());
    }

    #[test]
    fn status_periods_are_idempotent_and_order_invariant(
        days_and_tags in proptest::collection::vec((0u16..3650, 0u8..9), 0..20)
    ) {
        let events = events_from(&days_and_tags);

        let forward = calculate_status_periods(&events);
        prop_assert_eq!(&forward, &calculate_status_periods(&events));

        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &calculate_status_periods(&reversed));
    }

    #[test]
    fn status_periods_never_overlap_and_end_open(
        days_and_tags in proptest::collection::vec((0u16..3650, 0u8..9), 1..20)
    ) {
        let events = events_from(&days_and_tags);
        let periods = calculate_status_periods(&events);

        for pair in periods.windows(2) {
            prop_assert_eq!(pair[0].end_date, Some(pair[1].start_date));
            prop_assert!(pair[0].status != pair[1].status);
        }
        if let Some(last) = periods.last() {
            prop_assert_eq!(last.end_date, None);
        }
    }

    #[test]
    fn label_tiers_stay_under_the_cap_and_are_deterministic(
        placements in proptest::collection::vec((0u16..3650, 1usize..40), 0..25)
    ) {
        let window = TimeWindow::new(
            DateTime::UNIX_EPOCH,
            DateTime::UNIX_EPOCH + TimeDelta::days(3650),
        ).expect("valid window");

        let events: Vec<TimelineEvent> = placements
            .iter()
            .enumerate()
            .map(|(index, (day, title_len))| {
                TimelineEvent::new(
                    format!("event-{index}"),
                    "prop-1",
                    EventType::Improvement,
                    DateTime::UNIX_EPOCH + TimeDelta::days(i64::from(*day)),
                    "x".repeat(*title_len),
                )
            })
            .collect();

        let config = LabelLayoutConfig::default();
        let first = assign_label_tiers(&events, window, config).expect("valid layout");
        let second = assign_label_tiers(&events, window, config).expect("valid layout");

        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|t| t.tier < config.max_tiers));
    }

    #[test]
    fn viewport_transitions_never_look_past_today(
        zoom_index in 0usize..8,
        pan_position in -50.0f64..150.0
    ) {
        let today = at_millis(1_718_409_600_000); // 2024-06-15
        let mut engine = TimelineEngine::new(TimelineEngineConfig::new(today))
            .expect("engine init");

        engine.set_zoom_by_index(zoom_index);
        prop_assert!(engine.timeline_end() <= today);

        engine.pan_to_position(pan_position);
        prop_assert!(engine.timeline_end() <= today);
        prop_assert!(engine.visible_window().span_days() >= 0);
    }
}
