use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::types::{EventType, PropertyStatus};

/// Inputs for creating a property. The reducer assigns id, branch index,
/// and a palette color when none is given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub name: String,
    pub address: Option<String>,
    pub color: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub current_value: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub sale_date: Option<DateTime<Utc>>,
    pub current_status: Option<PropertyStatus>,
    pub is_rental: bool,
}

/// Field-level property update; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub color: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub current_value: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub sale_date: Option<DateTime<Utc>>,
    pub current_status: Option<PropertyStatus>,
    pub is_rental: Option<bool>,
}

/// Inputs for creating an event. The reducer assigns the id and defaults
/// the color from the event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub property_id: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub title: String,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub contract_date: Option<DateTime<Utc>>,
    pub settlement_date: Option<DateTime<Utc>>,
    pub new_status: Option<PropertyStatus>,
    pub is_ppr: bool,
}

impl EventDraft {
    #[must_use]
    pub fn new(
        property_id: impl Into<String>,
        event_type: EventType,
        date: DateTime<Utc>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            event_type,
            date,
            title: title.into(),
            amount: None,
            description: None,
            color: None,
            contract_date: None,
            settlement_date: None,
            new_status: None,
            is_ppr: false,
        }
    }
}

/// Field-level event update; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub event_type: Option<EventType>,
    pub date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub contract_date: Option<DateTime<Utc>>,
    pub settlement_date: Option<DateTime<Utc>>,
    pub new_status: Option<PropertyStatus>,
    pub is_ppr: Option<bool>,
}

/// Every state transition the engine can dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineAction {
    AddProperty(PropertyDraft),
    UpdateProperty { id: String, patch: PropertyPatch },
    DeleteProperty { id: String },
    AddEvent(EventDraft),
    UpdateEvent { id: String, patch: EventPatch },
    DeleteEvent { id: String },
    /// Drag support: reinterprets a visible-window position as the event's
    /// new date.
    MoveEvent { id: String, position: f64 },
    SelectProperty(Option<String>),
    SelectEvent(Option<String>),
    SetTimelineRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    ZoomIn,
    ZoomOut,
    SetZoomByIndex(usize),
    SetCenterDate(DateTime<Utc>),
    PanToPosition(f64),
    LoadDemoData,
    ClearAllData,
}
