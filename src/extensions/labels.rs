use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::TimelineEvent;
use crate::core::window::TimeWindow;
use crate::error::{TimelineError, TimelineResult};

/// Tuning for label extent estimation and tier packing.
///
/// All widths and gaps are in percentage points of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayoutConfig {
    /// Minimum horizontal gap between labels sharing a tier.
    pub min_spacing_pct: f64,
    /// Estimated width contributed per title character.
    pub char_width_pct: f64,
    /// Cap on a single label's estimated width.
    pub max_label_width_pct: f64,
    /// Hard cap on stacked tiers; past it, labels fall back to tier 0.
    pub max_tiers: usize,
}

impl Default for LabelLayoutConfig {
    fn default() -> Self {
        Self {
            min_spacing_pct: 8.0,
            char_width_pct: 0.5,
            max_label_width_pct: 12.0,
            max_tiers: 4,
        }
    }
}

impl LabelLayoutConfig {
    fn validate(self) -> TimelineResult<Self> {
        for (value, name) in [
            (self.min_spacing_pct, "min_spacing_pct"),
            (self.char_width_pct, "char_width_pct"),
            (self.max_label_width_pct, "max_label_width_pct"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "label layout `{name}` must be finite and > 0"
                )));
            }
        }

        if self.max_tiers == 0 {
            return Err(TimelineError::InvalidData(
                "label layout `max_tiers` must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// An event enriched with its computed window position and assigned tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredEvent {
    pub event: TimelineEvent,
    pub position: f64,
    pub tier: usize,
}

#[derive(Debug, Clone, Copy)]
struct PlacedLabel {
    start_pos: f64,
    end_pos: f64,
    tier: usize,
}

/// Assigns vertical tiers so that estimated label extents within one tier
/// never overlap, up to `max_tiers`.
///
/// Events are processed in chronological order (stable on same-date ties)
/// against a placed-label arena built per call, so the assignment is a
/// deterministic function of the input: same events, same window, same
/// tiers. Greedy and order-dependent, not globally optimal. When every
/// tier collides the event falls back to tier 0 and overlap is accepted.
pub fn assign_label_tiers(
    events: &[TimelineEvent],
    window: TimeWindow,
    config: LabelLayoutConfig,
) -> TimelineResult<Vec<TieredEvent>> {
    let config = config.validate()?;
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered: Vec<&TimelineEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.date);

    let mut placed: SmallVec<[PlacedLabel; 8]> = SmallVec::new();
    let mut tiered = Vec::with_capacity(ordered.len());

    for event in ordered {
        let position = window.date_to_position(event.date);
        let estimated_width = (event.title.chars().count() as f64 * config.char_width_pct)
            .min(config.max_label_width_pct);
        let start_pos = position - estimated_width / 2.0;
        let end_pos = position + estimated_width / 2.0;

        let mut assigned = 0;
        for tier in 0..config.max_tiers {
            let collides = placed
                .iter()
                .filter(|label| label.tier == tier)
                .any(|label| {
                    !(end_pos + config.min_spacing_pct < label.start_pos
                        || start_pos - config.min_spacing_pct > label.end_pos)
                });

            if !collides {
                assigned = tier;
                break;
            }
        }

        placed.push(PlacedLabel {
            start_pos,
            end_pos,
            tier: assigned,
        });
        tiered.push(TieredEvent {
            event: event.clone(),
            position,
            tier: assigned,
        });
    }

    Ok(tiered)
}
