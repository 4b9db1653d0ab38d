use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Property, TimelineEvent};
use crate::core::window::TimeWindow;
use crate::core::zoom::ZoomLevel;

/// Viewport portion of the application state.
///
/// Invariants: `visible.end()` never passes `absolute_end` through zoom or
/// pan transitions, and the absolute bounds only ever widen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub visible: TimeWindow,
    /// Earliest representable date.
    pub absolute_start: DateTime<Utc>,
    /// "Today": the latest representable date.
    pub absolute_end: DateTime<Utc>,
    /// Pivot for zoom transitions; the visible window's conceptual middle.
    pub center_date: DateTime<Utc>,
    pub zoom_level: ZoomLevel,
}

impl ViewportState {
    pub(crate) fn new(visible: TimeWindow, absolute_start: DateTime<Utc>, today: DateTime<Utc>) -> Self {
        Self {
            visible,
            absolute_start: absolute_start.min(visible.start()),
            absolute_end: today.max(visible.end()),
            center_date: visible.center(),
            zoom_level: ZoomLevel::classify(visible.start(), visible.end()),
        }
    }
}

/// The whole in-memory session: properties, events, selection, viewport.
///
/// An owned value; every mutation goes through the pure reducer in
/// [`crate::api::reduce`], which returns a fresh state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    /// Keyed by property id; iteration order is creation order, which is
    /// what branch indices are assigned from.
    pub properties: IndexMap<String, Property>,
    /// Keyed by event id; iteration order is insertion order, the
    /// tie-break for same-date status flips.
    pub events: IndexMap<String, TimelineEvent>,
    pub selected_property: Option<String>,
    pub selected_event: Option<String>,
    /// Last selected, edited, or added event.
    pub last_interacted_event: Option<String>,
    pub viewport: ViewportState,
    pub(crate) next_property_seq: u64,
    pub(crate) next_event_seq: u64,
}

impl TimelineState {
    pub(crate) fn new(viewport: ViewportState) -> Self {
        Self {
            properties: IndexMap::new(),
            events: IndexMap::new(),
            selected_property: None,
            selected_event: None,
            last_interacted_event: None,
            viewport,
            next_property_seq: 1,
            next_event_seq: 1,
        }
    }

    /// A property's events in chronological order (stable on ties).
    #[must_use]
    pub fn events_for_property(&self, property_id: &str) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self
            .events
            .values()
            .filter(|event| event.property_id == property_id)
            .collect();
        events.sort_by_key(|event| event.date);
        events
    }
}
