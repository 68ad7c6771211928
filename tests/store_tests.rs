mod common;

use common::{expense, TODAY};
use travel_settlement::{
    domain::{SettlementAggregate, SettlementStatus},
    store::{Action, DispatchOutcome, Store},
};

fn ids(store: &Store) -> Vec<&str> {
    store.expenses().iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn interleaved_adds_and_deletes_keep_relative_order() {
    let mut store = Store::default();
    store.dispatch(Action::AddExpense(expense("a", "travel", 1.0)));
    store.dispatch(Action::AddExpense(expense("b", "meals", 2.0)));
    store.dispatch(Action::DeleteExpense("a".into()));
    store.dispatch(Action::AddExpense(expense("c", "hotel", 3.0)));
    store.dispatch(Action::AddExpense(expense("d", "taxi", 4.0)));
    store.dispatch(Action::DeleteExpense("c".into()));
    assert_eq!(ids(&store), vec!["b", "d"]);
}

#[test]
fn deleting_unknown_id_is_unchanged() {
    let mut store = Store::default();
    store.dispatch(Action::AddExpense(expense("a", "travel", 1.0)));
    assert_eq!(
        store.dispatch(Action::DeleteExpense("zzz".into())),
        DispatchOutcome::Unchanged
    );
    assert_eq!(ids(&store), vec!["a"]);
}

#[test]
fn set_expenses_replaces_wholesale() {
    let mut store = Store::seeded(*TODAY);
    store.dispatch(Action::SetExpenses(vec![expense("x", "meals", 9.0)]));
    assert_eq!(ids(&store), vec!["x"]);
    assert_eq!(store.settlements().len(), 1);
}

#[test]
fn promotion_moves_draft_once() {
    let mut store = Store::seeded(*TODAY);
    assert_eq!(
        store.dispatch(Action::PromoteDraft("TR-2025-003".into())),
        DispatchOutcome::Applied
    );
    let promoted = store.find_settlement("TR-2025-003").expect("promoted");
    assert!(!promoted.is_draft);
    assert_eq!(promoted.status, SettlementStatus::UnderReview);
    assert!(store.find_draft("TR-2025-003").is_none());

    let before = store.state().clone();
    assert_eq!(
        store.dispatch(Action::PromoteDraft("TR-2025-003".into())),
        DispatchOutcome::Unchanged
    );
    assert_eq!(store.state(), &before);
}

#[test]
fn add_draft_forces_draft_flag() {
    let mut store = Store::default();
    let mut aggregate =
        SettlementAggregate::under_review("TR-2025-001", vec![expense("a", "travel", 10.0)], *TODAY);
    aggregate.is_draft = false;
    store.dispatch(Action::AddDraftSettlement(aggregate));
    assert!(store.draft_settlements()[0].is_draft);
    assert!(store.settlements().is_empty());
}

#[test]
fn replace_expense_moves_record_to_the_end() {
    let mut store = Store::seeded(*TODAY);
    let updated = expense("1", "travel", 5000.0);
    assert_eq!(store.replace_expense("1", updated), DispatchOutcome::Applied);
    assert_eq!(ids(&store), vec!["2", "3", "1"]);
    assert_eq!(store.find_expense("1").map(|item| item.amount), Some(5000.0));
    assert_eq!(
        store.replace_expense("missing", expense("missing", "x", 1.0)),
        DispatchOutcome::Unchanged
    );
}

#[test]
fn state_round_trips_through_json() {
    let store = Store::seeded(*TODAY);
    let json = serde_json::to_string(store.state()).expect("encode");
    assert!(json.contains("\"draftSettlements\""));
    assert!(json.contains("\"type\""));
    let decoded: travel_settlement::store::StoreState = serde_json::from_str(&json).expect("decode");
    assert_eq!(&decoded, store.state());
}
