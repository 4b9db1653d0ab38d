use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Palette cycled by creation order when a property is added without an
/// explicit color.
pub const PROPERTY_COLOR_PALETTE: [&str; 6] = [
    "#3B82F6", // Blue
    "#8B5CF6", // Purple
    "#10B981", // Green
    "#F59E0B", // Amber
    "#EC4899", // Pink
    "#14B8A6", // Teal
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Purchase,
    MoveIn,
    MoveOut,
    RentStart,
    RentEnd,
    Sale,
    Improvement,
    Refinance,
    StatusChange,
}

impl EventType {
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Purchase => "#3B82F6",
            Self::MoveIn => "#10B981",
            Self::MoveOut => "#EF4444",
            Self::RentStart => "#F59E0B",
            Self::RentEnd => "#F97316",
            Self::Sale => "#8B5CF6",
            Self::Improvement => "#06B6D4",
            Self::Refinance => "#6366F1",
            Self::StatusChange => "#A855F7",
        }
    }
}

/// Usage classification a property holds over a status period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Principal Place of Residence.
    Ppr,
    Rental,
    Vacant,
    Construction,
    Sold,
}

impl PropertyStatus {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Ppr => "#10B981",
            Self::Rental => "#3B82F6",
            Self::Vacant => "#94A3B8",
            Self::Construction => "#F59E0B",
            Self::Sold => "#8B5CF6",
        }
    }
}

/// A held (or previously held) property occupying one timeline branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub color: String,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub current_value: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub sale_date: Option<DateTime<Utc>>,
    pub current_status: Option<PropertyStatus>,
    /// Vertical branch slot, assigned at creation time. Indices keep their
    /// gaps after deletions; they are never compacted.
    pub branch: usize,
    /// A rental the owner lives in without holding title.
    pub is_rental: bool,
}

impl Property {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>, branch: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            color: color.into(),
            purchase_price: None,
            purchase_date: None,
            current_value: None,
            sale_price: None,
            sale_date: None,
            current_status: None,
            branch,
            is_rental: false,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_purchase(mut self, price: Decimal, date: DateTime<Utc>) -> Self {
        self.purchase_price = Some(price);
        self.purchase_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_sale(mut self, price: Decimal, date: DateTime<Utc>) -> Self {
        self.sale_price = Some(price);
        self.sale_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_current_status(mut self, status: PropertyStatus) -> Self {
        self.current_status = Some(status);
        self
    }
}

/// A dated event attached to exactly one property.
///
/// `date` is the sole authority for timeline placement; horizontal
/// positions are recomputed from it on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub property_id: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub title: String,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub color: String,
    /// For sales: contract date, distinct from settlement.
    pub contract_date: Option<DateTime<Utc>>,
    pub settlement_date: Option<DateTime<Utc>>,
    /// Only meaningful when `event_type` is [`EventType::StatusChange`].
    pub new_status: Option<PropertyStatus>,
    #[serde(default)]
    pub is_ppr: bool,
}

impl TimelineEvent {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        property_id: impl Into<String>,
        event_type: EventType,
        date: DateTime<Utc>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            property_id: property_id.into(),
            event_type,
            date,
            title: title.into(),
            amount: None,
            description: None,
            color: event_type.default_color().to_owned(),
            contract_date: None,
            settlement_date: None,
            new_status: None,
            is_ppr: false,
        }
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_contract_date(mut self, date: DateTime<Utc>) -> Self {
        self.contract_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_settlement_date(mut self, date: DateTime<Utc>) -> Self {
        self.settlement_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_new_status(mut self, status: PropertyStatus) -> Self {
        self.new_status = Some(status);
        self
    }

    #[must_use]
    pub fn as_ppr(mut self) -> Self {
        self.is_ppr = true;
        self
    }
}
