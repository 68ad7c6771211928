//! Expense categories and the rules that map free-text labels onto them.

use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six display buckets an expense can fall into.
///
/// Declaration order is the tab order of the settlement editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    FlatAllowance,
    Travel,
    Lodging,
    Conveyance,
    Meals,
    Others,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::FlatAllowance,
        ExpenseCategory::Travel,
        ExpenseCategory::Lodging,
        ExpenseCategory::Conveyance,
        ExpenseCategory::Meals,
        ExpenseCategory::Others,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ExpenseCategory::FlatAllowance => "flat-allowance",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Lodging => "lodging",
            ExpenseCategory::Conveyance => "conveyance",
            ExpenseCategory::Meals => "meals",
            ExpenseCategory::Others => "others",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExpenseCategory::FlatAllowance => "Flat Allowance",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Lodging => "Lodging",
            ExpenseCategory::Conveyance => "Conveyance",
            ExpenseCategory::Meals => "Meals",
            ExpenseCategory::Others => "Others",
        }
    }

    /// Resolves a raw label at an import boundary.
    ///
    /// Known labels are looked up in the mapping table first; anything else
    /// goes through [`classify`].
    pub fn resolve(label: &str) -> ExpenseCategory {
        let normalized = normalize(label);
        LABEL_TABLE
            .get(normalized.as_str())
            .copied()
            .unwrap_or_else(|| classify(label))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown expense category `{0}`")]
pub struct CategoryParseError(pub String);

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    /// Strict parse: accepts slugs and display names only.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(value);
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| {
                category.slug() == normalized
                    || category.display_name().to_ascii_lowercase() == normalized
            })
            .ok_or_else(|| CategoryParseError(value.to_string()))
    }
}

/// Assigns a free-text label to exactly one bucket.
///
/// Case-insensitive substring tests, first match wins:
/// allowance, travel, lodging/hotel, conveyance/transport, meals/food, else others.
pub fn classify(label: &str) -> ExpenseCategory {
    let lowered = label.to_lowercase();
    let has = |needle: &str| lowered.contains(needle);

    if has("allowance") {
        ExpenseCategory::FlatAllowance
    } else if has("travel") {
        ExpenseCategory::Travel
    } else if has("lodging") || has("hotel") {
        ExpenseCategory::Lodging
    } else if has("conveyance") || has("transport") {
        ExpenseCategory::Conveyance
    } else if has("meals") || has("food") {
        ExpenseCategory::Meals
    } else {
        ExpenseCategory::Others
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

static LABEL_TABLE: Lazy<HashMap<&'static str, ExpenseCategory>> = Lazy::new(|| {
    use ExpenseCategory::*;

    [
        ("flat-allowance", FlatAllowance),
        ("flat allowance", FlatAllowance),
        ("allowance", FlatAllowance),
        ("daily allowance", FlatAllowance),
        ("per diem", FlatAllowance),
        ("travel", Travel),
        ("flight", Travel),
        ("air", Travel),
        ("train", Travel),
        ("bus", Travel),
        ("lodging", Lodging),
        ("hotel", Lodging),
        ("accommodation", Lodging),
        ("conveyance", Conveyance),
        ("transport", Conveyance),
        ("local transport", Conveyance),
        ("taxi", Conveyance),
        ("cab", Conveyance),
        ("meals", Meals),
        ("meal", Meals),
        ("food", Meals),
        ("breakfast", Meals),
        ("lunch", Meals),
        ("dinner", Meals),
        ("others", Others),
        ("other", Others),
        ("misc", Others),
        ("miscellaneous", Others),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_priority_order() {
        assert_eq!(classify("Flight Allowance"), ExpenseCategory::FlatAllowance);
        assert_eq!(classify("Hotel stay"), ExpenseCategory::Lodging);
        assert_eq!(classify("Travel hotel"), ExpenseCategory::Travel);
        assert_eq!(classify("Local TRANSPORT"), ExpenseCategory::Conveyance);
        assert_eq!(classify("Street food"), ExpenseCategory::Meals);
        assert_eq!(classify(""), ExpenseCategory::Others);
        assert_eq!(classify("stationery"), ExpenseCategory::Others);
    }

    #[test]
    fn resolve_prefers_mapping_table() {
        assert_eq!(ExpenseCategory::resolve("Taxi"), ExpenseCategory::Conveyance);
        assert_eq!(ExpenseCategory::resolve(" lunch "), ExpenseCategory::Meals);
        assert_eq!(ExpenseCategory::resolve("Flight"), ExpenseCategory::Travel);
        // Not in the table: falls back to substring matching.
        assert_eq!(
            ExpenseCategory::resolve("Hotel accommodation Chennai"),
            ExpenseCategory::Lodging
        );
    }

    #[test]
    fn strict_parse_rejects_unknown_labels() {
        assert_eq!(
            "flat-allowance".parse::<ExpenseCategory>(),
            Ok(ExpenseCategory::FlatAllowance)
        );
        assert_eq!("Meals".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Meals));
        let err = "hotel".parse::<ExpenseCategory>().expect_err("not a slug");
        assert_eq!(err, CategoryParseError("hotel".into()));
    }
}
