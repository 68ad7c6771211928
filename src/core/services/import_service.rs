//! Selection dialog used to pull captured expenses or whole drafts into a
//! settlement.

use std::fmt;

use crate::core::errors::{Result, SettlementError};
use crate::domain::{
    common::total_of, find_by_id, ExpenseCategory, ExpenseItem, SettlementAggregate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportTab {
    #[default]
    Expenses,
    Drafts,
}

impl fmt::Display for ImportTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportTab::Expenses => f.write_str("expenses"),
            ImportTab::Drafts => f.write_str("drafts"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ExpenseCategory),
}

impl TypeFilter {
    pub fn matches(self, item: &ExpenseItem) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(category) => item.category == category,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(category) => f.write_str(category.slug()),
        }
    }
}

/// Import dialog state.
///
/// Invariant: every selected ad-hoc expense shares one category. Selections
/// hold ids only; categories are read from the live expense list, so records
/// deleted or re-typed while the dialog is open are pruned before each check.
#[derive(Debug, Clone, Default)]
pub struct ImportDialog {
    open: bool,
    tab: ImportTab,
    filter: TypeFilter,
    selected_expenses: Vec<String>,
    selected_drafts: Vec<String>,
}

impl ImportDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog with empty selections regardless of earlier sessions.
    pub fn open(&mut self) {
        self.clear_selections();
        self.open = true;
    }

    pub fn cancel(&mut self) {
        self.clear_selections();
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tab(&self) -> ImportTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ImportTab) {
        self.tab = tab;
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    pub fn selected_expense_ids(&self) -> &[String] {
        &self.selected_expenses
    }

    pub fn selected_draft_numbers(&self) -> &[String] {
        &self.selected_drafts
    }

    /// Category of the first selected expense still present in `expenses`.
    pub fn selected_category(&self, expenses: &[ExpenseItem]) -> Option<ExpenseCategory> {
        self.selected_expenses
            .iter()
            .find_map(|id| find_by_id(expenses, id))
            .map(|item| item.category)
    }

    pub fn is_expense_selected(&self, id: &str) -> bool {
        self.selected_expenses.iter().any(|selected| selected == id)
    }

    pub fn visible_expenses<'a>(&self, expenses: &'a [ExpenseItem]) -> Vec<&'a ExpenseItem> {
        expenses
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Drops selections whose expense is gone, or whose category no longer
    /// matches the first remaining selection.
    pub fn sync_with(&mut self, expenses: &[ExpenseItem]) {
        let mut kept: Option<ExpenseCategory> = None;
        self.selected_expenses
            .retain(|id| match (find_by_id(expenses, id), kept) {
                (None, _) => false,
                (Some(item), None) => {
                    kept = Some(item.category);
                    true
                }
                (Some(item), Some(category)) => item.category == category,
            });
    }

    /// Deselects `id` if selected; otherwise selects it unless that would mix
    /// categories.
    pub fn toggle_expense(&mut self, id: &str, expenses: &[ExpenseItem]) -> Result<()> {
        self.sync_with(expenses);
        if let Some(pos) = self.selected_expenses.iter().position(|selected| selected == id) {
            self.selected_expenses.remove(pos);
            return Ok(());
        }

        let item = find_by_id(expenses, id)
            .ok_or_else(|| SettlementError::UnknownExpense(id.to_string()))?;
        self.ensure_compatible(item.category, expenses)?;
        self.selected_expenses.push(item.id.clone());
        Ok(())
    }

    /// Applies every toggle or none of them.
    pub fn toggle_expenses(&mut self, ids: &[&str], expenses: &[ExpenseItem]) -> Result<()> {
        let mut trial = self.clone();
        for id in ids {
            trial.toggle_expense(id, expenses)?;
        }
        *self = trial;
        Ok(())
    }

    pub fn toggle_draft(&mut self, request_number: &str) {
        if let Some(pos) = self
            .selected_drafts
            .iter()
            .position(|selected| selected == request_number)
        {
            self.selected_drafts.remove(pos);
        } else {
            self.selected_drafts.push(request_number.to_string());
        }
    }

    /// Selects every visible expense of the filtered category.
    ///
    /// Only allowed while a single concrete type filter is active.
    pub fn select_all(&mut self, expenses: &[ExpenseItem]) -> Result<usize> {
        let TypeFilter::Only(category) = self.filter else {
            return Err(SettlementError::FilterRequired);
        };
        self.sync_with(expenses);
        self.ensure_compatible(category, expenses)?;

        let mut added = 0;
        for item in expenses.iter().filter(|item| item.category == category) {
            if !self.is_expense_selected(&item.id) {
                self.selected_expenses.push(item.id.clone());
                added += 1;
            }
        }
        Ok(added)
    }

    /// Sum of the currently selected ad-hoc expenses.
    pub fn selection_total(&self, expenses: &[ExpenseItem]) -> f64 {
        total_of(
            expenses
                .iter()
                .filter(|item| self.is_expense_selected(&item.id))
                .map(|item| &item.amount),
        )
    }

    /// Hands back the active tab's selection, then clears and closes.
    ///
    /// Expenses come back in selection order; drafts contribute their own
    /// expenses, draft by draft.
    pub fn confirm(
        &mut self,
        expenses: &[ExpenseItem],
        drafts: &[SettlementAggregate],
    ) -> Vec<ExpenseItem> {
        let imported: Vec<ExpenseItem> = match self.tab {
            ImportTab::Expenses => self
                .selected_expenses
                .iter()
                .filter_map(|id| find_by_id(expenses, id))
                .cloned()
                .collect(),
            ImportTab::Drafts => self
                .selected_drafts
                .iter()
                .filter_map(|number| find_by_id(drafts, number))
                .flat_map(|draft| draft.expenses.iter().cloned())
                .collect(),
        };
        tracing::info!(tab = %self.tab, count = imported.len(), "import confirmed");
        self.cancel();
        imported
    }

    fn ensure_compatible(&self, attempted: ExpenseCategory, expenses: &[ExpenseItem]) -> Result<()> {
        match self.selected_category(expenses) {
            Some(selected) if selected != attempted => {
                Err(SettlementError::MixedCategories {
                    selected,
                    attempted,
                })
            }
            _ => Ok(()),
        }
    }

    fn clear_selections(&mut self) {
        self.selected_expenses.clear();
        self.selected_drafts.clear();
    }
}
