use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{total_of, Displayable, Identifiable},
    expense::ExpenseItem,
};

pub const UNASSIGNED_REVIEWER: &str = "Not Assigned";

const DRIFT_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementStatus {
    Draft,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Rejected,
}

impl SettlementStatus {
    pub fn label(self) -> &'static str {
        match self {
            SettlementStatus::Draft => "Draft",
            SettlementStatus::UnderReview => "Under Review",
            SettlementStatus::Approved => "Approved",
            SettlementStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bundle of expense records submitted (or about to be) for reimbursement.
///
/// Totals are stored snapshots taken when the aggregate was built; they are not
/// kept in sync with later edits. Use [`SettlementAggregate::has_drifted`] to spot
/// divergence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementAggregate {
    pub request_number: String,
    pub status: SettlementStatus,
    pub total_claimed: f64,
    pub total_approved: f64,
    pub total_paid: f64,
    pub finance_reviewer: String,
    pub review_date: NaiveDate,
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    #[serde(default)]
    pub is_draft: bool,
}

impl SettlementAggregate {
    /// Builds a draft whose claimed total is the sum of `expenses` right now.
    pub fn draft(
        request_number: impl Into<String>,
        expenses: Vec<ExpenseItem>,
        review_date: NaiveDate,
    ) -> Self {
        Self::build(request_number, SettlementStatus::Draft, expenses, review_date)
    }

    /// Builds an aggregate that goes straight to review, skipping the draft bucket.
    pub fn under_review(
        request_number: impl Into<String>,
        expenses: Vec<ExpenseItem>,
        review_date: NaiveDate,
    ) -> Self {
        Self::build(
            request_number,
            SettlementStatus::UnderReview,
            expenses,
            review_date,
        )
    }

    fn build(
        request_number: impl Into<String>,
        status: SettlementStatus,
        expenses: Vec<ExpenseItem>,
        review_date: NaiveDate,
    ) -> Self {
        let total_claimed = total_of(expenses.iter().map(|item| &item.amount));
        Self {
            request_number: request_number.into(),
            status,
            total_claimed,
            total_approved: 0.0,
            total_paid: 0.0,
            finance_reviewer: UNASSIGNED_REVIEWER.into(),
            review_date,
            expenses,
            is_draft: status == SettlementStatus::Draft,
        }
    }

    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.finance_reviewer = reviewer.into();
        self
    }

    /// Sum of the current expense amounts.
    pub fn expenses_total(&self) -> f64 {
        total_of(self.expenses.iter().map(|item| &item.amount))
    }

    /// Whether the stored claimed total no longer matches the expenses.
    pub fn has_drifted(&self) -> bool {
        (self.total_claimed - self.expenses_total()).abs() > DRIFT_TOLERANCE
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}

impl Identifiable for SettlementAggregate {
    fn id(&self) -> &str {
        &self.request_number
    }
}

impl Displayable for SettlementAggregate {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.request_number, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn draft_totals_are_snapshotted() {
        let mut draft = SettlementAggregate::draft(
            "TR-2025-010",
            vec![
                ExpenseItem::new("a", "travel", 1200.0, day(5)),
                ExpenseItem::new("b", "meals", 800.0, day(6)),
            ],
            day(7),
        );
        assert_eq!(draft.total_claimed, 2000.0);
        assert_eq!(draft.status, SettlementStatus::Draft);
        assert!(draft.is_draft);
        assert!(!draft.has_drifted());

        draft.expenses.pop();
        assert_eq!(draft.total_claimed, 2000.0);
        assert!(draft.has_drifted());
    }

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        let json = serde_json::to_string(&SettlementStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");
    }
}
