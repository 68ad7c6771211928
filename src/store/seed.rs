//! Mock data the store starts with.

use chrono::NaiveDate;

use crate::domain::{ExpenseItem, SettlementAggregate};

use super::StoreState;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default()
}

/// Builds the initial state: three loose expenses, one settlement under review,
/// and one draft dated `today`.
pub fn seeded_state(today: NaiveDate) -> StoreState {
    let expenses = vec![
        ExpenseItem::new("1", "travel", 4500.0, jan(20))
            .with_remarks("Flight to Mumbai")
            .with_receipt("receipt1.jpg")
            .for_request("TR-2025-001"),
        ExpenseItem::new("2", "lodging", 4000.0, jan(21))
            .with_remarks("Hotel stay")
            .with_receipt("receipt2.jpg")
            .for_request("TR-2025-001"),
        ExpenseItem::new("3", "meals", 1200.0, jan(21))
            .with_remarks("Dinner with client")
            .for_request("TR-2025-002"),
    ];

    let under_review = SettlementAggregate::under_review(
        "TR-2025-002",
        vec![
            ExpenseItem::new("9", "meals", 1200.0, jan(21))
                .with_remarks("Dinner with client")
                .for_request("TR-2025-002"),
            ExpenseItem::new("10", "meals", 1500.0, jan(22))
                .with_remarks("Team lunch meeting")
                .with_receipt("lunch_receipt.jpg")
                .for_request("TR-2025-002"),
            ExpenseItem::new("11", "conveyance", 3500.0, jan(23))
                .with_remarks("Local transport and taxi")
                .with_receipt("transport_receipt.jpg")
                .for_request("TR-2025-002"),
        ],
        jan(26),
    )
    .with_reviewer("Priya Sharma");

    let draft = SettlementAggregate::draft(
        "TR-2025-003",
        vec![
            ExpenseItem::new("4", "travel", 2800.0, jan(23))
                .with_remarks("Train ticket to Chennai")
                .for_request("TR-2025-003"),
            ExpenseItem::new("5", "lodging", 2000.0, jan(23))
                .with_remarks("Hotel accommodation Chennai")
                .for_request("TR-2025-003"),
        ],
        today,
    );

    StoreState {
        expenses,
        settlements: vec![under_review],
        draft_settlements: vec![draft],
    }
}
