//! The module contains the `Expense` record and its input shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, MoneyCents};

/// Identifier of an [`Expense`].
///
/// Allocated by the ledger, strictly increasing, never reused for the
/// lifetime of a ledger (restored ledgers keep counting above the highest
/// persisted id).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded outflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    /// Always strictly positive.
    pub amount: MoneyCents,
    pub category: Category,
    /// Calendar date the expense refers to, as entered by the user.
    pub date: NaiveDate,
    /// Set once at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an expense. The ledger validates it and assigns the
/// id and creation timestamp.
#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: MoneyCents,
    pub category: Category,
    pub date: NaiveDate,
}

/// Partial update for an expense.
///
/// Each field is applied only when present, so the balance-delta logic in
/// the ledger can tell "amount unchanged" apart from "amount set to the
/// same value".
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub amount: Option<MoneyCents>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}
