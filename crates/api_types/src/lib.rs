//! Request and response payloads shared by the server and its clients.
//!
//! All monetary fields travel as **integer minor units** (cents); clients
//! format them for display. Dates are ISO calendar dates (`"2024-01-01"`),
//! timestamps RFC3339 UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod wallet {
    use super::*;

    /// Current wallet state.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct WalletView {
        pub balance_minor: i64,
    }

    /// Request body for adding income to the wallet.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        /// Must be > 0.
        pub amount_minor: i64,
    }
}

pub mod expense {
    use super::*;

    /// A stored expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u64,
        pub title: String,
        pub amount_minor: i64,
        /// Canonical lowercase category name.
        pub category: String,
        pub date: NaiveDate,
        pub created_at: DateTime<Utc>,
    }

    /// Request body for creating an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub title: String,
        /// Must be > 0.
        pub amount_minor: i64,
        /// Matched case-insensitively; unknown names count as `other`.
        pub category: String,
        pub date: NaiveDate,
    }

    /// Request body for partially updating an expense.
    ///
    /// Absent fields are left unchanged; the wallet balance moves only when
    /// `amount_minor` is present.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub title: Option<String>,
        pub amount_minor: Option<i64>,
        pub category: Option<String>,
        pub date: Option<NaiveDate>,
    }
}

pub mod budget {
    use super::*;

    /// Budget settings, both for reading and replacing.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSettingsView {
        pub monthly_budget_minor: i64,
        pub savings_goal_minor: i64,
    }
}

pub mod summary {
    use std::collections::BTreeMap;

    use super::*;

    /// Aggregate report over the current expense list.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryView {
        pub balance_minor: i64,
        pub total_expenses_minor: i64,
        /// Every known category is present, zero-filled when unused.
        pub category_totals_minor: BTreeMap<String, i64>,
    }
}
