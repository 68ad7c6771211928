use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::ExpenseCategory;

/// Validation failures raised by the capture, import, and submission flows.
///
/// None of these are fatal; callers surface them as transient notices and the
/// flow state is left exactly as it was.
#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Please fill all required fields: {0} is missing")]
    MissingField(&'static str),
    #[error("Please select a travel request number")]
    MissingTravelRequest,
    #[error("Please add at least one expense before submitting")]
    NoExpensesSelected,
    #[error("Cannot mix expense types: selection holds {selected}, attempted {attempted}")]
    MixedCategories {
        selected: ExpenseCategory,
        attempted: ExpenseCategory,
    },
    #[error("Choose a single expense type filter before selecting all")]
    FilterRequired,
    #[error("No saved expenses found")]
    NoStagedExpenses,
    #[error("No expenses to sync")]
    NothingToSync,
    #[error("Settlement {0} has already been submitted")]
    AlreadySubmitted(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unsupported receipt file `{0}`; attach an image or PDF")]
    UnsupportedAttachment(String),
    #[error("Expense {0} not found")]
    UnknownExpense(String),
    #[error("Staged expenses could not be read: {0}")]
    Staging(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, SettlementError>;
