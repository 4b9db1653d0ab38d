use chrono::{DateTime, Utc};

use crate::core::window::TimeWindow;
use crate::core::zoom::ZoomLevel;
use crate::error::{TimelineError, TimelineResult};

use super::{TimelineAction, TimelineEngine};

impl TimelineEngine {
    /// Adopts a visible window directly, reclassifying the zoom level and
    /// widening the absolute bounds when the range exceeds them.
    ///
    /// Degenerate and inverted ranges are rejected without touching state.
    pub fn set_timeline_range(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TimelineResult<()> {
        if end <= start {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        self.dispatch(TimelineAction::SetTimelineRange { start, end });
        Ok(())
    }

    /// Steps to the next, more detailed zoom level. No-op at the finest.
    pub fn zoom_in(&mut self) {
        self.dispatch(TimelineAction::ZoomIn);
    }

    /// Steps to the previous, coarser zoom level. No-op at the coarsest.
    pub fn zoom_out(&mut self) {
        self.dispatch(TimelineAction::ZoomOut);
    }

    /// Jumps to the zoom level at a slider index (clamped to 0–7).
    pub fn set_zoom_by_index(&mut self, index: usize) {
        self.dispatch(TimelineAction::SetZoomByIndex(index));
    }

    /// Centers the window at a percentage of the absolute range, holding
    /// span and granularity fixed. The percentage is clamped to [0, 100].
    pub fn pan_to_position(&mut self, position: f64) {
        self.dispatch(TimelineAction::PanToPosition(position));
    }

    pub fn set_center_date(&mut self, date: DateTime<Utc>) {
        self.dispatch(TimelineAction::SetCenterDate(date));
    }

    #[must_use]
    pub fn visible_window(&self) -> TimeWindow {
        self.state().viewport.visible
    }

    #[must_use]
    pub fn timeline_start(&self) -> DateTime<Utc> {
        self.state().viewport.visible.start()
    }

    #[must_use]
    pub fn timeline_end(&self) -> DateTime<Utc> {
        self.state().viewport.visible.end()
    }

    #[must_use]
    pub fn absolute_start(&self) -> DateTime<Utc> {
        self.state().viewport.absolute_start
    }

    #[must_use]
    pub fn absolute_end(&self) -> DateTime<Utc> {
        self.state().viewport.absolute_end
    }

    #[must_use]
    pub fn center_date(&self) -> DateTime<Utc> {
        self.state().viewport.center_date
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.state().viewport.zoom_level
    }

    /// Current zoom level as its 0–7 slider index.
    #[must_use]
    pub fn zoom_level_index(&self) -> usize {
        self.state().viewport.zoom_level.index()
    }
}
