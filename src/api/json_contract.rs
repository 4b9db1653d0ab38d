use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::EventType;
use crate::error::{TimelineError, TimelineResult};

use super::TimelineEngine;

/// The exported snapshot: a derived view of the session, not the
/// canonical in-memory shape.
///
/// Decoding fails closed: unrecognized fields at any level reject the
/// whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportDocument {
    pub properties: Vec<ExportProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportProperty {
    pub address: String,
    pub property_history: Vec<ExportHistoryEntry>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportHistoryEntry {
    /// Serialized as `yyyy-MM-dd`.
    pub date: NaiveDate,
    pub event: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize export document: {e}"))
        })
    }

    /// Strict parse of the export shape.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse export document: {e}"))
        })
    }
}

impl TimelineEngine {
    /// Derives the export view from the current state, properties in
    /// branch order and each history in chronological order.
    #[must_use]
    pub fn export_document(&self) -> ExportDocument {
        let properties = self
            .state()
            .properties
            .values()
            .map(|property| ExportProperty {
                address: property
                    .address
                    .clone()
                    .unwrap_or_else(|| property.name.clone()),
                property_history: self
                    .events_for_property(&property.id)
                    .into_iter()
                    .map(|event| ExportHistoryEntry {
                        date: event.date.date_naive(),
                        event: event.event_type,
                        price: event.amount,
                    })
                    .collect(),
                notes: property.name.clone(),
            })
            .collect();

        ExportDocument { properties }
    }

    pub fn export_json_pretty(&self) -> TimelineResult<String> {
        self.export_document().to_json_pretty()
    }

    /// Parses and validates an import document.
    ///
    /// Import stays a collaborator boundary: the typed document is
    /// returned to the host, rejection is logged, and engine state is
    /// never mutated on either path.
    pub fn import_json(&self, input: &str) -> TimelineResult<ExportDocument> {
        ExportDocument::from_json_str(input).inspect_err(|e| {
            warn!("rejected import document: {e}");
        })
    }
}
