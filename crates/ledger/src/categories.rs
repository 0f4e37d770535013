//! Expense categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag on an expense, used for aggregate reporting.
///
/// The set is closed on purpose: anything the ledger does not recognise is
/// folded into [`Category::Other`] so per-category totals always add up to
/// the overall total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Entertainment,
    Travel,
    Study,
    Utilities,
    Electronics,
    Other,
}

impl Category {
    /// Every known category, in reporting order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Entertainment,
        Category::Travel,
        Category::Study,
        Category::Utilities,
        Category::Electronics,
        Category::Other,
    ];

    /// Resolves a user-supplied category name, case-insensitively.
    ///
    /// Unknown names map to [`Category::Other`] rather than failing, so a
    /// client extending the category set still gets consistent totals.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "food" => Category::Food,
            "entertainment" => Category::Entertainment,
            "travel" => Category::Travel,
            "study" => Category::Study,
            "utilities" => Category::Utilities,
            "electronics" => Category::Electronics,
            _ => Category::Other,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Travel => "travel",
            Category::Study => "study",
            Category::Utilities => "utilities",
            Category::Electronics => "electronics",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Category::from_name("Food"), Category::Food);
        assert_eq!(Category::from_name("UTILITIES"), Category::Utilities);
        assert_eq!(Category::from_name(" travel "), Category::Travel);
    }

    #[test]
    fn unknown_names_fold_to_other() {
        assert_eq!(Category::from_name("groceries"), Category::Other);
        assert_eq!(Category::from_name(""), Category::Other);
    }

    #[test]
    fn all_contains_every_variant_once() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
