use crate::domain::{ExpenseItem, SettlementAggregate};

/// The closed set of mutations the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddExpense(ExpenseItem),
    DeleteExpense(String),
    SetExpenses(Vec<ExpenseItem>),
    AddSettlement(SettlementAggregate),
    AddDraftSettlement(SettlementAggregate),
    /// Moves a draft into the submitted bucket as Under Review.
    PromoteDraft(String),
    /// Files an aggregate for review, dropping any draft with the same request number.
    SubmitSettlement(SettlementAggregate),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddExpense(_) => "add_expense",
            Action::DeleteExpense(_) => "delete_expense",
            Action::SetExpenses(_) => "set_expenses",
            Action::AddSettlement(_) => "add_settlement",
            Action::AddDraftSettlement(_) => "add_draft_settlement",
            Action::PromoteDraft(_) => "promote_draft",
            Action::SubmitSettlement(_) => "submit_settlement",
        }
    }

    /// The id or request number the action targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Action::AddExpense(item) => Some(&item.id),
            Action::DeleteExpense(id) | Action::PromoteDraft(id) => Some(id),
            Action::AddSettlement(aggregate)
            | Action::AddDraftSettlement(aggregate)
            | Action::SubmitSettlement(aggregate) => Some(&aggregate.request_number),
            Action::SetExpenses(_) => None,
        }
    }
}
