//! Pure state transitions for the settlement store.

use crate::domain::SettlementStatus;

use super::{action::Action, StoreState};

/// Derives the next state from `state` and `action`.
///
/// Never fails: actions aimed at missing targets return an equal state.
pub fn reduce(state: &StoreState, action: Action) -> StoreState {
    let mut next = state.clone();
    match action {
        Action::AddExpense(item) => {
            next.expenses.push(item);
        }
        Action::DeleteExpense(id) => {
            if let Some(pos) = next.expenses.iter().position(|item| item.id == id) {
                next.expenses.remove(pos);
            }
        }
        Action::SetExpenses(items) => {
            next.expenses = items;
        }
        Action::AddSettlement(aggregate) => {
            next.settlements.push(aggregate);
        }
        Action::AddDraftSettlement(mut aggregate) => {
            aggregate.is_draft = true;
            next.draft_settlements.push(aggregate);
        }
        Action::PromoteDraft(request_number) => {
            let Some(draft) = next
                .draft_settlements
                .iter()
                .find(|draft| draft.request_number == request_number)
                .cloned()
            else {
                return next;
            };
            next.draft_settlements
                .retain(|draft| draft.request_number != request_number);
            let mut promoted = draft;
            promoted.is_draft = false;
            promoted.status = SettlementStatus::UnderReview;
            next.settlements.push(promoted);
        }
        Action::SubmitSettlement(mut aggregate) => {
            next.draft_settlements
                .retain(|draft| draft.request_number != aggregate.request_number);
            aggregate.is_draft = false;
            next.settlements.push(aggregate);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{ExpenseItem, SettlementAggregate};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn expense(id: &str) -> ExpenseItem {
        ExpenseItem::new(id, "meals", 100.0, day(1))
    }

    #[test]
    fn delete_removes_only_the_first_match() {
        let mut state = StoreState::default();
        state.expenses = vec![expense("1"), expense("2"), expense("1")];
        let next = reduce(&state, Action::DeleteExpense("1".into()));
        let ids: Vec<&str> = next.expenses.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn add_draft_forces_draft_flag() {
        let mut aggregate = SettlementAggregate::under_review("TR-1", vec![], day(2));
        aggregate.is_draft = false;
        let next = reduce(&StoreState::default(), Action::AddDraftSettlement(aggregate));
        assert!(next.draft_settlements[0].is_draft);
        assert!(next.settlements.is_empty());
    }

    #[test]
    fn add_settlement_appends_as_given() {
        let settlement = SettlementAggregate::under_review("TR-5", vec![expense("1")], day(2));
        let next = reduce(&StoreState::default(), Action::AddSettlement(settlement.clone()));
        assert_eq!(next.settlements, vec![settlement]);
        assert!(next.draft_settlements.is_empty());
    }

    #[test]
    fn promote_missing_draft_leaves_state_equal() {
        let state = StoreState::default();
        let next = reduce(&state, Action::PromoteDraft("TR-404".into()));
        assert_eq!(next, state);
    }

    #[test]
    fn submit_replaces_draft_with_same_request() {
        let mut state = StoreState::default();
        state
            .draft_settlements
            .push(SettlementAggregate::draft("TR-9", vec![expense("1")], day(3)));
        let submitted = SettlementAggregate::under_review("TR-9", vec![expense("2")], day(4));
        let next = reduce(&state, Action::SubmitSettlement(submitted));
        assert!(next.draft_settlements.is_empty());
        assert_eq!(next.settlements.len(), 1);
        assert_eq!(next.settlements[0].expenses[0].id, "2");
        assert!(!next.settlements[0].is_draft);
    }
}
