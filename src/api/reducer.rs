use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use crate::core::types::{PROPERTY_COLOR_PALETTE, Property, TimelineEvent};
use crate::core::window::TimeWindow;
use crate::core::zoom::{ZoomLevel, range_for_level};

use super::actions::{EventDraft, EventPatch, PropertyDraft, PropertyPatch, TimelineAction};
use super::demo_data;
use super::state::TimelineState;

/// Applies one action to a state, producing the next state.
///
/// Pure: the input state is never mutated and equal inputs yield equal
/// outputs. `today` is the future bound for zoom and pan clamping.
/// Transitions are total; out-of-range inputs are clamped and unknown ids
/// are logged no-ops.
#[must_use]
pub fn reduce(state: &TimelineState, action: TimelineAction, today: DateTime<Utc>) -> TimelineState {
    let mut next = state.clone();

    match action {
        TimelineAction::AddProperty(draft) => add_property(&mut next, draft),
        TimelineAction::UpdateProperty { id, patch } => update_property(&mut next, &id, patch),
        TimelineAction::DeleteProperty { id } => delete_property(&mut next, &id),
        TimelineAction::AddEvent(draft) => add_event(&mut next, draft),
        TimelineAction::UpdateEvent { id, patch } => update_event(&mut next, &id, patch),
        TimelineAction::DeleteEvent { id } => {
            next.events.shift_remove(&id);
        }
        TimelineAction::MoveEvent { id, position } => move_event(&mut next, &id, position),
        TimelineAction::SelectProperty(id) => next.selected_property = id,
        TimelineAction::SelectEvent(id) => select_event(&mut next, id),
        TimelineAction::SetTimelineRange { start, end } => set_timeline_range(&mut next, start, end),
        TimelineAction::ZoomIn => {
            if let Some(level) = next.viewport.zoom_level.next() {
                apply_zoom_level(&mut next, level, today);
            }
        }
        TimelineAction::ZoomOut => {
            if let Some(level) = next.viewport.zoom_level.previous() {
                apply_zoom_level(&mut next, level, today);
            }
        }
        TimelineAction::SetZoomByIndex(index) => {
            let level = ZoomLevel::from_index(index);
            if level != next.viewport.zoom_level {
                apply_zoom_level(&mut next, level, today);
            }
        }
        TimelineAction::SetCenterDate(date) => next.viewport.center_date = date,
        TimelineAction::PanToPosition(position) => pan_to_position(&mut next, position, today),
        TimelineAction::LoadDemoData => demo_data::load(&mut next, today),
        TimelineAction::ClearAllData => clear_all_data(&mut next),
    }

    next
}

fn add_property(state: &mut TimelineState, draft: PropertyDraft) {
    let seq = state.next_property_seq;
    state.next_property_seq += 1;
    let id = format!("prop-{seq}");

    let color = draft.color.unwrap_or_else(|| {
        PROPERTY_COLOR_PALETTE[state.properties.len() % PROPERTY_COLOR_PALETTE.len()].to_owned()
    });

    let property = Property {
        id: id.clone(),
        name: draft.name,
        address: draft.address,
        color,
        purchase_price: draft.purchase_price,
        purchase_date: draft.purchase_date,
        current_value: draft.current_value,
        sale_price: draft.sale_price,
        sale_date: draft.sale_date,
        current_status: draft.current_status,
        // Branch = count of currently-held properties. Deleted branches are
        // not compacted, so after a deletion a new branch can collide with a
        // surviving one; see DESIGN.md.
        branch: state.properties.len(),
        is_rental: draft.is_rental,
    };
    state.properties.insert(id, property);
}

fn update_property(state: &mut TimelineState, id: &str, patch: PropertyPatch) {
    let Some(property) = state.properties.get_mut(id) else {
        debug!(property_id = id, "ignoring update for unknown property");
        return;
    };

    if let Some(name) = patch.name {
        property.name = name;
    }
    if let Some(address) = patch.address {
        property.address = Some(address);
    }
    if let Some(color) = patch.color {
        property.color = color;
    }
    if let Some(price) = patch.purchase_price {
        property.purchase_price = Some(price);
    }
    if let Some(date) = patch.purchase_date {
        property.purchase_date = Some(date);
    }
    if let Some(value) = patch.current_value {
        property.current_value = Some(value);
    }
    if let Some(price) = patch.sale_price {
        property.sale_price = Some(price);
    }
    if let Some(date) = patch.sale_date {
        property.sale_date = Some(date);
    }
    if let Some(status) = patch.current_status {
        property.current_status = Some(status);
    }
    if let Some(is_rental) = patch.is_rental {
        property.is_rental = is_rental;
    }
}

fn delete_property(state: &mut TimelineState, id: &str) {
    state.properties.shift_remove(id);
    state.events.retain(|_, event| event.property_id != id);
}

fn add_event(state: &mut TimelineState, draft: EventDraft) {
    if !state.properties.contains_key(&draft.property_id) {
        debug!(property_id = %draft.property_id, "adding event for unknown property");
    }

    let seq = state.next_event_seq;
    state.next_event_seq += 1;
    let id = format!("event-{seq}");

    let color = draft
        .color
        .unwrap_or_else(|| draft.event_type.default_color().to_owned());

    let event = TimelineEvent {
        id: id.clone(),
        property_id: draft.property_id,
        event_type: draft.event_type,
        date: draft.date,
        title: draft.title,
        amount: draft.amount,
        description: draft.description,
        color,
        contract_date: draft.contract_date,
        settlement_date: draft.settlement_date,
        new_status: draft.new_status,
        is_ppr: draft.is_ppr,
    };

    state.viewport.center_date = event.date;
    state.events.insert(id.clone(), event);
    state.last_interacted_event = Some(id);
}

fn update_event(state: &mut TimelineState, id: &str, patch: EventPatch) {
    let Some(event) = state.events.get_mut(id) else {
        debug!(event_id = id, "ignoring update for unknown event");
        return;
    };

    if let Some(event_type) = patch.event_type {
        event.event_type = event_type;
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(title) = patch.title {
        event.title = title;
    }
    if let Some(amount) = patch.amount {
        event.amount = Some(amount);
    }
    if let Some(description) = patch.description {
        event.description = Some(description);
    }
    if let Some(color) = patch.color {
        event.color = color;
    }
    if let Some(date) = patch.contract_date {
        event.contract_date = Some(date);
    }
    if let Some(date) = patch.settlement_date {
        event.settlement_date = Some(date);
    }
    if let Some(status) = patch.new_status {
        event.new_status = Some(status);
    }
    if let Some(is_ppr) = patch.is_ppr {
        event.is_ppr = is_ppr;
    }

    state.viewport.center_date = event.date;
    state.last_interacted_event = Some(id.to_owned());
}

fn move_event(state: &mut TimelineState, id: &str, position: f64) {
    let date = state.viewport.visible.position_to_date(position);
    let Some(event) = state.events.get_mut(id) else {
        debug!(event_id = id, "ignoring move for unknown event");
        return;
    };
    event.date = date;
}

fn select_event(state: &mut TimelineState, id: Option<String>) {
    if let Some(event) = id.as_deref().and_then(|id| state.events.get(id)) {
        state.viewport.center_date = event.date;
    }
    state.selected_event = id.clone();
    state.last_interacted_event = id;
}

fn set_timeline_range(state: &mut TimelineState, start: DateTime<Utc>, end: DateTime<Utc>) {
    if end <= start {
        warn!(%start, %end, "ignoring degenerate timeline range");
        return;
    }

    let window = TimeWindow::from_bounds_unchecked(start, end);
    state.viewport.visible = window;
    state.viewport.center_date = window.center();
    state.viewport.zoom_level = ZoomLevel::classify(start, end);
    // Absolute bounds only grow, never shrink.
    state.viewport.absolute_start = state.viewport.absolute_start.min(start);
    state.viewport.absolute_end = state.viewport.absolute_end.max(end);
}

fn apply_zoom_level(state: &mut TimelineState, level: ZoomLevel, today: DateTime<Utc>) {
    // The center date itself stays put; the future clamp may still shift
    // the adopted window off-center.
    state.viewport.visible = range_for_level(state.viewport.center_date, level, today);
    state.viewport.zoom_level = level;
}

fn pan_to_position(state: &mut TimelineState, position: f64, today: DateTime<Utc>) {
    let position = position.clamp(0.0, 100.0);
    let range_millis =
        (state.viewport.absolute_end - state.viewport.absolute_start).num_milliseconds();
    let offset = (position / 100.0 * range_millis as f64).round() as i64;
    let center = state.viewport.absolute_start + TimeDelta::milliseconds(offset);

    // Same range computation as zoom, holding the level fixed: the window
    // relocates without changing span or granularity.
    state.viewport.visible = range_for_level(center, state.viewport.zoom_level, today);
    state.viewport.center_date = center;
}

fn clear_all_data(state: &mut TimelineState) {
    state.properties.clear();
    state.events.clear();
    state.selected_property = None;
    state.selected_event = None;
    state.last_interacted_event = None;
}
