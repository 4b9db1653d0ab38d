mod actions;
mod demo_data;
mod json_contract;
mod reducer;
mod state;
mod viewport;

pub use actions::{EventDraft, EventPatch, PropertyDraft, PropertyPatch, TimelineAction};
pub use json_contract::{ExportDocument, ExportHistoryEntry, ExportProperty};
pub use reducer::reduce;
pub use state::{TimelineState, ViewportState};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::core::markers::{TimelineMarker, generate_timeline_markers};
use crate::core::status::{StatusPeriod, calculate_status_periods};
use crate::core::types::{Property, TimelineEvent};
use crate::core::window::TimeWindow;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::labels::{LabelLayoutConfig, TieredEvent, assign_label_tiers};
use crate::interaction::{DragGesture, InteractionMode, InteractionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEngineConfig {
    /// The latest representable date; zoom and pan never look past it.
    pub today: DateTime<Utc>,
    pub visible_start: Option<DateTime<Utc>>,
    pub visible_end: Option<DateTime<Utc>>,
    pub absolute_start: Option<DateTime<Utc>>,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(today: DateTime<Utc>) -> Self {
        Self {
            today,
            visible_start: None,
            visible_end: None,
            absolute_start: None,
        }
    }

    #[must_use]
    pub fn with_visible_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.visible_start = Some(start);
        self.visible_end = Some(end);
        self
    }

    #[must_use]
    pub fn with_absolute_start(mut self, start: DateTime<Utc>) -> Self {
        self.absolute_start = Some(start);
        self
    }
}

/// The engine a host UI drives: an owned [`TimelineState`], the drag
/// gesture state, and the explicit "today" bound.
///
/// Every mutation dispatches through the pure reducer; reads are plain
/// accessors or derived pure-function queries.
pub struct TimelineEngine {
    state: TimelineState,
    interaction: InteractionState,
    today: DateTime<Utc>,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        let visible_end = config.visible_end.unwrap_or(config.today);
        let visible_start = config.visible_start.unwrap_or_else(default_visible_start);
        let visible = TimeWindow::new(visible_start, visible_end)?;
        let absolute_start = config.absolute_start.unwrap_or_else(default_absolute_start);

        Ok(Self {
            state: TimelineState::new(ViewportState::new(visible, absolute_start, config.today)),
            interaction: InteractionState::default(),
            today: config.today,
        })
    }

    /// Applies an action through the reducer, replacing the owned state.
    pub fn dispatch(&mut self, action: TimelineAction) {
        self.state = reduce(&self.state, action, self.today);
    }

    #[must_use]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    #[must_use]
    pub fn today(&self) -> DateTime<Utc> {
        self.today
    }

    // --- property / event store operations ---

    /// Creates a property and returns its assigned id.
    pub fn add_property(&mut self, draft: PropertyDraft) -> String {
        let id = format!("prop-{}", self.state.next_property_seq);
        self.dispatch(TimelineAction::AddProperty(draft));
        id
    }

    pub fn update_property(&mut self, id: impl Into<String>, patch: PropertyPatch) {
        self.dispatch(TimelineAction::UpdateProperty { id: id.into(), patch });
    }

    /// Deletes a property and cascades to all of its events.
    pub fn delete_property(&mut self, id: impl Into<String>) {
        self.dispatch(TimelineAction::DeleteProperty { id: id.into() });
    }

    /// Creates an event and returns its assigned id. Re-centers the
    /// viewport on the event date.
    pub fn add_event(&mut self, draft: EventDraft) -> String {
        let id = format!("event-{}", self.state.next_event_seq);
        self.dispatch(TimelineAction::AddEvent(draft));
        id
    }

    pub fn update_event(&mut self, id: impl Into<String>, patch: EventPatch) {
        self.dispatch(TimelineAction::UpdateEvent { id: id.into(), patch });
    }

    pub fn delete_event(&mut self, id: impl Into<String>) {
        self.dispatch(TimelineAction::DeleteEvent { id: id.into() });
    }

    /// Reinterprets a visible-window position as the event's new date.
    pub fn move_event(&mut self, id: impl Into<String>, position: f64) {
        self.dispatch(TimelineAction::MoveEvent { id: id.into(), position });
    }

    pub fn select_property(&mut self, id: Option<String>) {
        self.dispatch(TimelineAction::SelectProperty(id));
    }

    pub fn select_event(&mut self, id: Option<String>) {
        self.dispatch(TimelineAction::SelectEvent(id));
    }

    pub fn load_demo_data(&mut self) {
        self.dispatch(TimelineAction::LoadDemoData);
    }

    pub fn clear_all_data(&mut self) {
        self.dispatch(TimelineAction::ClearAllData);
    }

    // --- reads and derived queries ---

    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.state.properties.get(id)
    }

    /// Properties in creation (branch) order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.state.properties.values()
    }

    #[must_use]
    pub fn event(&self, id: &str) -> Option<&TimelineEvent> {
        self.state.events.get(id)
    }

    pub fn events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.state.events.values()
    }

    /// A property's events in chronological order.
    #[must_use]
    pub fn events_for_property(&self, property_id: &str) -> Vec<&TimelineEvent> {
        self.state.events_for_property(property_id)
    }

    /// Axis markers for the current visible window.
    #[must_use]
    pub fn timeline_markers(&self) -> Vec<TimelineMarker> {
        generate_timeline_markers(self.state.viewport.visible)
    }

    /// Derived status periods for one property.
    #[must_use]
    pub fn status_periods_for_property(&self, property_id: &str) -> Vec<StatusPeriod> {
        let events: Vec<TimelineEvent> = self
            .state
            .events
            .values()
            .filter(|event| event.property_id == property_id)
            .cloned()
            .collect();
        calculate_status_periods(&events)
    }

    /// A property's events with positions and label tiers for the current
    /// window, using the default layout tuning.
    pub fn labeled_events_for_property(
        &self,
        property_id: &str,
    ) -> TimelineResult<Vec<TieredEvent>> {
        let events: Vec<TimelineEvent> = self
            .state
            .events
            .values()
            .filter(|event| event.property_id == property_id)
            .cloned()
            .collect();
        assign_label_tiers(
            &events,
            self.state.viewport.visible,
            LabelLayoutConfig::default(),
        )
    }

    // --- drag gesture ---

    /// Starts dragging an event. Fails when the event does not exist.
    pub fn begin_event_drag(&mut self, event_id: &str, position: f64) -> TimelineResult<()> {
        if !self.state.events.contains_key(event_id) {
            return Err(TimelineError::UnknownEvent(event_id.to_owned()));
        }
        self.interaction.begin_event_drag(event_id, position);
        Ok(())
    }

    /// Moves the dragged event to a new position. No-op while idle or when
    /// the event was deleted mid-gesture.
    pub fn drag_event_to(&mut self, position: f64) {
        let Some(event_id) = self
            .interaction
            .on_drag_move(position)
            .map(|gesture| gesture.event_id.clone())
        else {
            return;
        };
        self.dispatch(TimelineAction::MoveEvent {
            id: event_id,
            position,
        });
    }

    /// Ends the drag. Always restores the idle mode, on every release
    /// path; safe to call without an active gesture.
    pub fn release_event_drag(&mut self) -> Option<DragGesture> {
        self.interaction.on_release()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }
}

fn default_visible_start() -> DateTime<Utc> {
    utc_midnight(2020, 1, 1)
}

fn default_absolute_start() -> DateTime<Utc> {
    utc_midnight(1900, 1, 1)
}

fn utc_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("default bounds are valid dates")
        .and_time(NaiveTime::MIN)
        .and_utc()
}
