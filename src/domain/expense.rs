use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::ExpenseCategory,
    common::{Displayable, Identifiable},
};

/// One line-item spend claim.
///
/// The category is resolved from the label when the item is built or decoded,
/// so every item carries exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExpenseRecord", into = "ExpenseRecord")]
pub struct ExpenseItem {
    pub id: String,
    pub label: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub remarks: String,
    pub image: Option<String>,
    pub travel_request_number: Option<String>,
}

impl ExpenseItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            category: ExpenseCategory::resolve(&label),
            label,
            amount,
            date,
            remarks: String::new(),
            image: None,
            travel_request_number: None,
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    pub fn with_receipt(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn for_request(mut self, request_number: impl Into<String>) -> Self {
        self.travel_request_number = Some(request_number.into());
        self
    }

    pub fn has_receipt(&self) -> bool {
        self.image.is_some()
    }
}

impl Identifiable for ExpenseItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for ExpenseItem {
    fn display_label(&self) -> String {
        format!("{} [{}] {:.2} on {}", self.id, self.category.slug(), self.amount, self.date)
    }
}

/// Wire shape of an expense as exchanged through staging slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    amount: f64,
    date: NaiveDate,
    #[serde(default)]
    remarks: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    travel_request_number: Option<String>,
}

impl From<ExpenseRecord> for ExpenseItem {
    fn from(record: ExpenseRecord) -> Self {
        Self {
            id: record.id,
            category: ExpenseCategory::resolve(&record.kind),
            label: record.kind,
            amount: record.amount,
            date: record.date,
            remarks: record.remarks,
            image: record.image,
            travel_request_number: record.travel_request_number,
        }
    }
}

impl From<ExpenseItem> for ExpenseRecord {
    fn from(item: ExpenseItem) -> Self {
        Self {
            id: item.id,
            kind: item.label,
            amount: item.amount,
            date: item.date,
            remarks: item.remarks,
            image: item.image,
            travel_request_number: item.travel_request_number,
        }
    }
}

/// Buckets expenses by category, preserving relative order inside each bucket.
pub fn group_by_category<'a>(
    items: impl IntoIterator<Item = &'a ExpenseItem>,
) -> BTreeMap<ExpenseCategory, Vec<&'a ExpenseItem>> {
    let mut groups: BTreeMap<ExpenseCategory, Vec<&ExpenseItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.category).or_default().push(item);
    }
    groups
}
