//! Ephemeral key-value slots shared between the capture and settlement flows.

use std::collections::HashMap;

use crate::core::errors::{Result, SettlementError};
use crate::domain::ExpenseItem;

/// Slot the capture flow stages its expenses under.
pub const STAGED_EXPENSES_KEY: &str = "savedExpenses";

/// In-memory string slots; values are JSON-encoded by the helpers below.
#[derive(Debug, Clone, Default)]
pub struct ScratchSpace {
    slots: HashMap<String, String>,
}

impl ScratchSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.slots.remove(key)
    }

    /// Appends `items` to whatever is already staged.
    pub fn stage_expenses(&mut self, items: &[ExpenseItem]) -> Result<usize> {
        let mut staged = match self.get(STAGED_EXPENSES_KEY) {
            Some(raw) => serde_json::from_str::<Vec<ExpenseItem>>(raw)?,
            None => Vec::new(),
        };
        staged.extend(items.iter().cloned());
        let encoded = serde_json::to_string(&staged)?;
        self.set(STAGED_EXPENSES_KEY, encoded);
        Ok(staged.len())
    }

    pub fn staged_count(&self) -> usize {
        self.get(STAGED_EXPENSES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<ExpenseItem>>(raw).ok())
            .map(|items| items.len())
            .unwrap_or(0)
    }

    /// Reads and clears the staged expenses. The slot is consumed even when it
    /// holds an empty array.
    pub fn take_staged_expenses(&mut self) -> Result<Vec<ExpenseItem>> {
        let raw = self
            .remove(STAGED_EXPENSES_KEY)
            .ok_or(SettlementError::NoStagedExpenses)?;
        let items: Vec<ExpenseItem> = serde_json::from_str(&raw)?;
        if items.is_empty() {
            return Err(SettlementError::NoStagedExpenses);
        }
        Ok(items)
    }
}
