//! Receipt capture form: builds expense records one at a time and syncs them
//! into the store and the staging slot.

use std::path::Path;

use chrono::NaiveDate;

use crate::core::{
    clock::Clock,
    errors::{Result, SettlementError},
    ids::IdGenerator,
    scratch::ScratchSpace,
};
use crate::domain::ExpenseItem;
use crate::store::{Action, Store};

/// Amount the mocked OCR "extracts" from every receipt.
pub const MOCK_CAPTURE_AMOUNT: f64 = 1250.0;
pub const MOCK_RECEIPT_NAME: &str = "receipt-placeholder.jpg";

const RECEIPT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "bmp", "pdf"];

/// Fields of the expense currently being entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub label: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub remarks: String,
    pub image: Option<String>,
    pub travel_request_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureForm {
    current: ExpenseDraft,
    saved: Vec<ExpenseItem>,
}

impl CaptureForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &ExpenseDraft {
        &self.current
    }

    pub fn saved(&self) -> &[ExpenseItem] {
        &self.saved
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.current.label = label.into();
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        self.current.amount = amount;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.current.date = Some(date);
    }

    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.current.remarks = remarks.into();
    }

    pub fn set_travel_request(&mut self, request_number: Option<String>) {
        self.current.travel_request_number = request_number.filter(|value| !value.trim().is_empty());
    }

    /// Mock OCR: fills amount, date, and receipt; keeps type and remarks.
    pub fn capture_receipt(&mut self, clock: &dyn Clock) {
        self.current.amount = MOCK_CAPTURE_AMOUNT;
        self.current.date = Some(clock.today());
        self.current.image = Some(MOCK_RECEIPT_NAME.to_string());
        tracing::info!("receipt captured, details extracted");
    }

    /// Keeps only the file name; the file itself is never read.
    pub fn attach_receipt(&mut self, path: &str) -> Result<()> {
        let file_name = receipt_file_name(path)?;
        self.current.image = Some(file_name);
        Ok(())
    }

    pub fn clear_receipt(&mut self) {
        self.current.image = None;
    }

    /// Validates the current draft, stores it locally, and resets the form.
    pub fn save(&mut self, ids: &dyn IdGenerator, clock: &dyn Clock) -> Result<ExpenseItem> {
        let label = self.current.label.trim();
        if label.is_empty() {
            return Err(SettlementError::MissingField("expense type"));
        }
        if self.current.amount == 0.0 {
            return Err(SettlementError::MissingField("amount"));
        }
        validate_amount(self.current.amount)?;

        let draft = std::mem::take(&mut self.current);
        let mut item = ExpenseItem::new(
            ids.next_id(),
            draft.label.trim(),
            draft.amount,
            draft.date.unwrap_or_else(|| clock.today()),
        )
        .with_remarks(draft.remarks);
        item.image = draft.image;
        item.travel_request_number = draft.travel_request_number;

        tracing::info!(id = %item.id, category = item.category.slug(), "expense saved locally");
        self.saved.push(item.clone());
        Ok(item)
    }

    pub fn delete(&mut self, id: &str) -> Result<ExpenseItem> {
        let pos = self
            .saved
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| SettlementError::UnknownExpense(id.to_string()))?;
        Ok(self.saved.remove(pos))
    }

    /// Pushes every saved expense into the store and stages a copy for the
    /// settlement editor. The local list is cleared on success.
    pub fn sync(&mut self, store: &mut Store, scratch: &mut ScratchSpace) -> Result<usize> {
        if self.saved.is_empty() {
            return Err(SettlementError::NothingToSync);
        }
        scratch.stage_expenses(&self.saved)?;
        let items = std::mem::take(&mut self.saved);
        let count = items.len();
        for item in items {
            store.dispatch(Action::AddExpense(item));
        }
        tracing::info!(count, "captured expenses synced");
        Ok(count)
    }
}

/// Parses a user-entered amount.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SettlementError::InvalidAmount(raw.to_string()))?;
    validate_amount(amount)?;
    Ok(amount)
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SettlementError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

/// Whether the picker would accept the file (image or PDF).
pub fn is_supported_receipt(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| RECEIPT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn receipt_file_name(path: &str) -> Result<String> {
    if !is_supported_receipt(path) {
        return Err(SettlementError::UnsupportedAttachment(path.to_string()));
    }
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| SettlementError::UnsupportedAttachment(path.to_string()))
}
