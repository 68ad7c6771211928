//! Single in-memory state container for expenses and settlements.
//!
//! All mutation goes through [`Store::dispatch`]; the store performs no business
//! validation of its own, so callers run their checks before dispatching.

pub mod action;
pub mod reducer;
pub mod seed;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{find_by_id, ExpenseItem, SettlementAggregate};

pub use action::Action;
pub use reducer::reduce;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub expenses: Vec<ExpenseItem>,
    pub settlements: Vec<SettlementAggregate>,
    pub draft_settlements: Vec<SettlementAggregate>,
}

/// Whether a dispatch changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Applied,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    state: StoreState,
}

impl Store {
    pub fn new(state: StoreState) -> Self {
        Self { state }
    }

    /// Store preloaded with the mock data set.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed::seeded_state(today))
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        let name = action.name();
        let target = action.target().map(str::to_string);
        let next = reduce(&self.state, action);

        if next == self.state {
            if name == "promote_draft" {
                tracing::warn!(
                    request = target.as_deref().unwrap_or_default(),
                    "promotion ignored: no draft with that request number"
                );
            } else {
                tracing::debug!(action = name, "dispatch left state unchanged");
            }
            return DispatchOutcome::Unchanged;
        }

        tracing::debug!(action = name, target = target.as_deref(), "dispatch applied");
        self.state = next;
        DispatchOutcome::Applied
    }

    /// Edit flow: the old record is deleted and the replacement appended.
    pub fn replace_expense(&mut self, id: &str, replacement: ExpenseItem) -> DispatchOutcome {
        if self.find_expense(id).is_none() {
            return DispatchOutcome::Unchanged;
        }
        self.dispatch(Action::DeleteExpense(id.to_string()));
        self.dispatch(Action::AddExpense(replacement))
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn expenses(&self) -> &[ExpenseItem] {
        &self.state.expenses
    }

    pub fn settlements(&self) -> &[SettlementAggregate] {
        &self.state.settlements
    }

    pub fn draft_settlements(&self) -> &[SettlementAggregate] {
        &self.state.draft_settlements
    }

    pub fn find_expense(&self, id: &str) -> Option<&ExpenseItem> {
        find_by_id(&self.state.expenses, id)
    }

    pub fn find_settlement(&self, request_number: &str) -> Option<&SettlementAggregate> {
        find_by_id(&self.state.settlements, request_number)
    }

    pub fn find_draft(&self, request_number: &str) -> Option<&SettlementAggregate> {
        find_by_id(&self.state.draft_settlements, request_number)
    }

    /// Request-number lookups for typed input: trimmed, ASCII case ignored.
    pub fn find_settlement_any_case(&self, request_number: &str) -> Option<&SettlementAggregate> {
        find_request(&self.state.settlements, request_number)
    }

    pub fn find_draft_any_case(&self, request_number: &str) -> Option<&SettlementAggregate> {
        find_request(&self.state.draft_settlements, request_number)
    }
}

fn find_request<'a>(
    bucket: &'a [SettlementAggregate],
    request_number: &str,
) -> Option<&'a SettlementAggregate> {
    let needle = request_number.trim();
    bucket
        .iter()
        .find(|settlement| settlement.request_number.eq_ignore_ascii_case(needle))
}
