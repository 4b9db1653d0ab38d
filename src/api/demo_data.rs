//! The walkthrough dataset: four properties covering a PPR-to-rental sale,
//! a straight investment, a renovated PPR, and a tenancy.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::core::types::{
    EventType, PROPERTY_COLOR_PALETTE, Property, PropertyStatus, TimelineEvent,
};
use crate::core::window::TimeWindow;
use crate::core::zoom::ZoomLevel;

use super::state::TimelineState;

pub(crate) fn load(state: &mut TimelineState, today: DateTime<Utc>) {
    let mut properties = Vec::new();
    let mut events = Vec::new();

    // 45 Collard Road, Humpty Doo: bought and lived in as PPR, rented out,
    // then sold.
    let humpty_doo = Property::new("demo-prop-1", "Humpty Doo, NT 0836", PROPERTY_COLOR_PALETTE[0], 0)
        .with_address("45 Collard Road")
        .with_purchase(Decimal::from(106_000), date(2003, 1, 1))
        .with_sale(Decimal::from(450_000), date(2023, 7, 14))
        .with_current_status(PropertyStatus::Sold);
    events.push(
        TimelineEvent::new("demo-event-1-1", &humpty_doo.id, EventType::Purchase, date(2003, 1, 1), "Purchase")
            .with_amount(Decimal::from(106_000))
            .as_ppr(),
    );
    events.push(
        TimelineEvent::new("demo-event-1-2", &humpty_doo.id, EventType::MoveIn, date(2003, 1, 1), "Move In")
            .as_ppr(),
    );
    events.push(TimelineEvent::new(
        "demo-event-1-3",
        &humpty_doo.id,
        EventType::RentStart,
        date(2020, 1, 1),
        "Start Rent",
    ));
    events.push(
        TimelineEvent::new("demo-event-1-4", &humpty_doo.id, EventType::Sale, date(2023, 7, 14), "Sold as PPR")
            .with_amount(Decimal::from(450_000))
            .with_contract_date(date(2023, 7, 14))
            .as_ppr(),
    );
    properties.push(humpty_doo);

    // 50 Flynn Circuit, Bellamack: investment property, rented from the
    // start.
    let bellamack = Property::new("demo-prop-2", "Bellamack, NT 0832", PROPERTY_COLOR_PALETTE[1], 1)
        .with_address("50 Flynn Circuit")
        .with_purchase(Decimal::from(705_000), date(2014, 6, 5))
        .with_current_status(PropertyStatus::Rental);
    events.push(
        TimelineEvent::new("demo-event-2-1", &bellamack.id, EventType::Purchase, date(2014, 6, 5), "Purchase")
            .with_amount(Decimal::from(705_000)),
    );
    events.push(TimelineEvent::new(
        "demo-event-2-2",
        &bellamack.id,
        EventType::RentStart,
        date(2014, 6, 20),
        "Start Rent",
    ));
    properties.push(bellamack);

    // 5 Wanda Dr, Boyne Island: current PPR with a major improvement.
    let boyne = Property::new("demo-prop-3", "Boyne Island, Qld 4680", PROPERTY_COLOR_PALETTE[2], 2)
        .with_address("5 Wanda Dr")
        .with_purchase(Decimal::from(530_000), date(2021, 9, 30))
        .with_current_status(PropertyStatus::Ppr);
    events.push(
        TimelineEvent::new("demo-event-3-1", &boyne.id, EventType::Purchase, date(2021, 9, 30), "Purchase")
            .with_amount(Decimal::from(530_000))
            .as_ppr(),
    );
    events.push(
        TimelineEvent::new("demo-event-3-2", &boyne.id, EventType::MoveIn, date(2021, 9, 30), "Move In")
            .as_ppr(),
    );
    events.push(
        TimelineEvent::new("demo-event-3-3", &boyne.id, EventType::Improvement, date(2022, 4, 15), "Renovation")
            .with_amount(Decimal::from(45_000))
            .with_description("Kitchen and bathroom renovation"),
    );
    properties.push(boyne);

    // A rental lived in as tenant, tracked for main-residence overlap.
    let boyne_rental = Property::new(
        "demo-prop-4",
        "Boyne Island Rental, Qld 4680",
        PROPERTY_COLOR_PALETTE[3],
        3,
    )
    .with_address("Rental Property")
    .with_current_status(PropertyStatus::Rental);
    events.push(
        TimelineEvent::new("demo-event-4-1", &boyne_rental.id, EventType::MoveIn, date(2020, 1, 1), "Living in Rental")
            .with_description("Living in a rental property"),
    );
    properties.push(boyne_rental);

    state.properties = properties
        .into_iter()
        .map(|property| (property.id.clone(), property))
        .collect();
    state.events = events
        .into_iter()
        .map(|event| (event.id.clone(), event))
        .collect();

    let start = date(2003, 1, 1);
    if today > start {
        state.viewport.visible = TimeWindow::from_bounds_unchecked(start, today);
        state.viewport.absolute_start = start;
        state.viewport.absolute_end = today;
        state.viewport.center_date = date(2013, 1, 1);
        state.viewport.zoom_level = ZoomLevel::Decade;
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("demo dates are valid")
        .and_time(NaiveTime::MIN)
        .and_utc()
}
