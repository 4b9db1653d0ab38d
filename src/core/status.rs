use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{EventType, PropertyStatus, TimelineEvent};

/// A derived interval during which a property held one usage
/// classification. Never stored; always recomputed from the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPeriod {
    pub status: PropertyStatus,
    pub start_date: DateTime<Utc>,
    /// `None` = ongoing.
    pub end_date: Option<DateTime<Utc>>,
}

/// The status a single event implies, independent of any running state.
///
/// Improvements and refinances carry no occupancy implication; a
/// status_change without an explicit target is a no-op.
#[must_use]
pub fn implied_status(event: &TimelineEvent) -> Option<PropertyStatus> {
    match event.event_type {
        EventType::Purchase => Some(if event.is_ppr {
            PropertyStatus::Ppr
        } else {
            PropertyStatus::Rental
        }),
        EventType::MoveIn => Some(PropertyStatus::Ppr),
        EventType::MoveOut => Some(PropertyStatus::Vacant),
        EventType::RentStart => Some(PropertyStatus::Rental),
        EventType::RentEnd => Some(PropertyStatus::Vacant),
        EventType::Sale => Some(PropertyStatus::Sold),
        EventType::StatusChange => event.new_status,
        EventType::Improvement | EventType::Refinance => None,
    }
}

/// Derives the ordered, non-overlapping status periods for one property's
/// events.
///
/// Events are sorted ascending by date with a stable sort, so same-day
/// status flips resolve in input order. The final period is open-ended.
/// Pure and idempotent: the same event set yields the same output
/// regardless of input ordering (up to same-date ties).
#[must_use]
pub fn calculate_status_periods(events: &[TimelineEvent]) -> Vec<StatusPeriod> {
    let mut ordered: Vec<&TimelineEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.date);

    let mut periods = Vec::new();
    let mut current: Option<(PropertyStatus, DateTime<Utc>)> = None;

    for event in ordered {
        let Some(candidate) = implied_status(event) else {
            continue;
        };

        match current {
            Some((status, _)) if status == candidate => {}
            _ => {
                if let Some((status, start_date)) = current {
                    periods.push(StatusPeriod {
                        status,
                        start_date,
                        end_date: Some(event.date),
                    });
                }
                current = Some((candidate, event.date));
            }
        }
    }

    if let Some((status, start_date)) = current {
        periods.push(StatusPeriod {
            status,
            start_date,
            end_date: None,
        });
    }

    periods
}
