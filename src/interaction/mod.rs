use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    DraggingEvent,
}

/// An in-flight drag of a timeline event along the position axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub event_id: String,
    pub origin_position: f64,
    pub latest_position: f64,
}

/// Gesture state machine for event drags.
///
/// A drag is scoped: it begins with [`begin_event_drag`] and every release
/// path ends it. [`on_release`] is idempotent and always restores
/// [`InteractionMode::Idle`], including when the dragged event disappeared
/// mid-gesture, so no gesture state leaks across repeated drags.
///
/// [`begin_event_drag`]: Self::begin_event_drag
/// [`on_release`]: Self::on_release
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    drag: Option<DragGesture>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::DraggingEvent
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn active_drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    /// Starts a drag, replacing any gesture a missed release left behind.
    pub fn begin_event_drag(&mut self, event_id: impl Into<String>, position: f64) {
        let event_id = event_id.into();
        self.drag = Some(DragGesture {
            event_id,
            origin_position: position,
            latest_position: position,
        });
    }

    /// Advances the active gesture; returns it, or `None` while idle.
    pub fn on_drag_move(&mut self, position: f64) -> Option<&DragGesture> {
        let gesture = self.drag.as_mut()?;
        gesture.latest_position = position;
        Some(&*gesture)
    }

    /// Ends the gesture and returns it. Always leaves the state idle.
    pub fn on_release(&mut self) -> Option<DragGesture> {
        self.drag.take()
    }
}
