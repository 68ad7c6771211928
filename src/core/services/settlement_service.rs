//! In-progress settlement editing: request selection, imported expenses, and
//! the save-as-draft / submit transitions.

use std::collections::BTreeMap;

use crate::core::{
    clock::Clock,
    errors::{Result, SettlementError},
    scratch::ScratchSpace,
};
use crate::domain::{
    common::total_of, group_by_category, ExpenseCategory, ExpenseItem, SettlementAggregate,
    SettlementSummary,
};
use crate::store::{Action, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Empty,
    Editing,
    SavedAsDraft,
    Submitted,
}

/// Page-local settlement being prepared. Nothing here reaches the store until
/// [`SettlementEditor::save_draft`] or [`SettlementEditor::submit`] succeeds.
#[derive(Debug, Clone, Default)]
pub struct SettlementEditor {
    state: EditorState,
    travel_request: Option<String>,
    selected: Vec<ExpenseItem>,
}

impl SettlementEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn travel_request(&self) -> Option<&str> {
        self.travel_request.as_deref()
    }

    pub fn selected_expenses(&self) -> &[ExpenseItem] {
        &self.selected
    }

    /// Blank input clears the selection.
    pub fn select_travel_request(&mut self, request_number: &str) {
        let trimmed = request_number.trim();
        self.travel_request = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.touch();
    }

    /// Adds `items`, skipping ids already present. Returns how many were added.
    pub fn import(&mut self, items: Vec<ExpenseItem>) -> usize {
        let mut added = 0;
        for item in items {
            if self.selected.iter().any(|existing| existing.id == item.id) {
                continue;
            }
            self.selected.push(item);
            added += 1;
        }
        if added > 0 {
            self.touch();
        }
        added
    }

    /// Imports whatever the capture flow staged; the staging slot is consumed.
    pub fn load_staged(&mut self, scratch: &mut ScratchSpace) -> Result<usize> {
        let staged = scratch.take_staged_expenses()?;
        let count = self.import(staged);
        tracing::info!(count, "staged expenses loaded");
        Ok(count)
    }

    pub fn remove_expense(&mut self, id: &str) -> Result<ExpenseItem> {
        let pos = self
            .selected
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| SettlementError::UnknownExpense(id.to_string()))?;
        let removed = self.selected.remove(pos);
        self.touch();
        Ok(removed)
    }

    pub fn grouped(&self) -> BTreeMap<ExpenseCategory, Vec<&ExpenseItem>> {
        group_by_category(&self.selected)
    }

    pub fn total(&self) -> f64 {
        total_of(self.selected.iter().map(|item| &item.amount))
    }

    pub fn summary(&self, allocated: f64) -> SettlementSummary {
        SettlementSummary::new(self.total(), allocated)
    }

    /// Saves the current selection as a draft; the claimed total is fixed now.
    pub fn save_draft(&mut self, store: &mut Store, clock: &dyn Clock) -> Result<SettlementAggregate> {
        let request_number = self.require_request()?;
        if store.find_settlement(&request_number).is_some() {
            return Err(SettlementError::AlreadySubmitted(request_number));
        }

        let draft =
            SettlementAggregate::draft(request_number, self.selected.clone(), clock.today());
        store.dispatch(Action::AddDraftSettlement(draft.clone()));
        self.state = EditorState::SavedAsDraft;
        tracing::info!(
            request = %draft.request_number,
            total = draft.total_claimed,
            "draft saved"
        );
        Ok(draft)
    }

    /// Files the settlement for review and clears the selection.
    pub fn submit(&mut self, store: &mut Store, clock: &dyn Clock) -> Result<SettlementAggregate> {
        let request_number = self.require_request()?;
        if self.selected.is_empty() {
            return Err(SettlementError::NoExpensesSelected);
        }
        if store.find_settlement(&request_number).is_some() {
            return Err(SettlementError::AlreadySubmitted(request_number));
        }

        let expenses = std::mem::take(&mut self.selected);
        let settlement = SettlementAggregate::under_review(request_number, expenses, clock.today());
        store.dispatch(Action::SubmitSettlement(settlement.clone()));
        self.state = EditorState::Submitted;
        tracing::info!(
            request = %settlement.request_number,
            total = settlement.total_claimed,
            "settlement submitted"
        );
        Ok(settlement)
    }

    /// Starts over with an empty editor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn require_request(&self) -> Result<String> {
        self.travel_request
            .clone()
            .filter(|value| !value.trim().is_empty())
            .ok_or(SettlementError::MissingTravelRequest)
    }

    fn touch(&mut self) {
        self.state = if self.travel_request.is_none() && self.selected.is_empty() {
            EditorState::Empty
        } else {
            EditorState::Editing
        };
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::SettlementStatus;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
    }

    fn item(id: &str, label: &str, amount: f64) -> ExpenseItem {
        ExpenseItem::new(id, label, amount, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    }

    #[test]
    fn editor_moves_from_empty_to_editing() {
        let mut editor = SettlementEditor::new();
        assert_eq!(editor.state(), EditorState::Empty);
        editor.select_travel_request("TR-2025-001");
        assert_eq!(editor.state(), EditorState::Editing);
        editor.select_travel_request("   ");
        assert_eq!(editor.state(), EditorState::Empty);
        assert!(editor.travel_request().is_none());
    }

    #[test]
    fn import_skips_duplicate_ids() {
        let mut editor = SettlementEditor::new();
        assert_eq!(editor.import(vec![item("1", "travel", 10.0), item("2", "meals", 5.0)]), 2);
        assert_eq!(editor.import(vec![item("2", "meals", 5.0), item("3", "taxi", 1.0)]), 1);
        assert_eq!(editor.selected_expenses().len(), 3);
        assert_eq!(editor.total(), 16.0);
    }

    #[test]
    fn save_draft_without_request_changes_nothing() {
        let mut store = Store::default();
        let mut editor = SettlementEditor::new();
        editor.import(vec![item("1", "travel", 10.0)]);
        let err = editor.save_draft(&mut store, &clock()).expect_err("request required");
        assert!(matches!(err, SettlementError::MissingTravelRequest));
        assert!(store.draft_settlements().is_empty());
        assert_eq!(editor.state(), EditorState::Editing);
    }

    #[test]
    fn submit_skips_draft_bucket_and_clears_selection() {
        let mut store = Store::default();
        let mut editor = SettlementEditor::new();
        editor.select_travel_request("TR-2025-001");
        editor.import(vec![item("1", "travel", 4500.0)]);
        let settlement = editor.submit(&mut store, &clock()).expect("submitted");
        assert_eq!(settlement.status, SettlementStatus::UnderReview);
        assert_eq!(settlement.review_date, clock().today());
        assert!(store.draft_settlements().is_empty());
        assert_eq!(store.settlements().len(), 1);
        assert!(editor.selected_expenses().is_empty());
        assert_eq!(editor.state(), EditorState::Submitted);
    }

    #[test]
    fn submit_requires_expenses() {
        let mut store = Store::default();
        let mut editor = SettlementEditor::new();
        editor.select_travel_request("TR-2025-001");
        let err = editor.submit(&mut store, &clock()).expect_err("no expenses");
        assert!(matches!(err, SettlementError::NoExpensesSelected));
        assert!(store.settlements().is_empty());
    }

    #[test]
    fn drafts_cannot_shadow_submitted_settlements() {
        let mut store = Store::seeded(clock().today());
        let mut editor = SettlementEditor::new();
        editor.select_travel_request("TR-2025-002");
        let err = editor.save_draft(&mut store, &clock()).expect_err("already submitted");
        assert!(matches!(err, SettlementError::AlreadySubmitted(ref number) if number == "TR-2025-002"));
        assert!(store.find_draft("TR-2025-002").is_none());
    }
}
