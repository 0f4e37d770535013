//! In-memory expense ledger.
//!
//! A [`Ledger`] owns one [`Wallet`] and a collection of [`Expense`] records
//! and keeps the two consistent: after every operation the balance equals
//! the initial balance, plus every income added, minus the amounts of the
//! expenses currently stored. Creations and amount-increasing updates that
//! would drive the balance negative are rejected with
//! [`LedgerError::InsufficientFunds`] before anything is mutated.
//!
//! Every mutating operation takes `&mut self`, so the balance check and the
//! balance update are a single indivisible step; hosts serving concurrent
//! requests wrap the ledger in a single lock.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

pub use categories::Category;
pub use error::LedgerError;
pub use expense::{Expense, ExpenseDraft, ExpenseId, ExpensePatch};
pub use money::MoneyCents;
pub use snapshot::{JsonFileStore, Snapshot, SnapshotStore};
pub use wallet::{BudgetSettings, Wallet};

mod categories;
mod error;
mod expense;
mod money;
mod snapshot;
mod wallet;

type ResultLedger<T> = Result<T, LedgerError>;

/// Balance a fresh ledger starts with when the host does not configure one.
pub const DEFAULT_INITIAL_BALANCE: MoneyCents = MoneyCents::new(5_000_00);

#[derive(Debug)]
pub struct Ledger {
    wallet: Wallet,
    expenses: HashMap<ExpenseId, Expense>,
    budget_settings: BudgetSettings,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_BALANCE)
    }
}

impl Ledger {
    /// Creates an empty ledger with the given starting balance.
    #[must_use]
    pub fn new(initial_balance: MoneyCents) -> Self {
        Self {
            wallet: Wallet::new(initial_balance),
            expenses: HashMap::new(),
            budget_settings: BudgetSettings::default(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from a persisted snapshot.
    ///
    /// Id allocation continues above the highest persisted id, so restored
    /// ledgers never hand out an id twice.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let next_id = snapshot
            .expenses
            .iter()
            .map(|expense| expense.id.0)
            .max()
            .map_or(1, |max| max + 1);

        Self {
            wallet: snapshot.wallet,
            expenses: snapshot
                .expenses
                .into_iter()
                .map(|expense| (expense.id, expense))
                .collect(),
            budget_settings: snapshot.budget_settings,
            next_id,
        }
    }

    /// Captures the current state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            wallet: self.wallet,
            expenses: self.expenses_sorted(),
            budget_settings: self.budget_settings,
        }
    }

    /// Returns the current wallet. Never fails.
    #[must_use]
    pub fn wallet(&self) -> Wallet {
        self.wallet
    }

    /// Adds income to the wallet and returns the updated wallet.
    ///
    /// The amount must be strictly positive; there is no upper bound on the
    /// balance short of `i64` overflow.
    pub fn add_income(&mut self, amount: MoneyCents) -> ResultLedger<Wallet> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidInput(
                "income amount must be positive".to_string(),
            ));
        }

        self.wallet.balance = self
            .wallet
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::InvalidInput("income amount too large".to_string()))?;
        Ok(self.wallet)
    }

    /// Returns all expenses, most recent date first, ties broken by
    /// descending id so the order is stable within a snapshot.
    #[must_use]
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses_sorted()
    }

    /// Returns a single expense by id.
    pub fn expense(&self, id: ExpenseId) -> ResultLedger<Expense> {
        self.expenses
            .get(&id)
            .cloned()
            .ok_or(LedgerError::NotFound(id.0))
    }

    /// Records a new expense, consuming wallet balance.
    ///
    /// Validates the draft, checks the wallet can cover the amount, then
    /// assigns a fresh id and creation timestamp. A failing call leaves the
    /// wallet and the expense set untouched.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> ResultLedger<Expense> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(LedgerError::InvalidInput("title must not be empty".to_string()));
        }
        if !draft.amount.is_positive() {
            return Err(LedgerError::InvalidInput(
                "amount must be a positive number".to_string(),
            ));
        }
        if self.wallet.balance < draft.amount {
            return Err(LedgerError::InsufficientFunds(format!(
                "balance {} cannot cover {}",
                self.wallet.balance, draft.amount
            )));
        }

        let expense = Expense {
            id: self.allocate_id(),
            title: title.to_string(),
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            created_at: Utc::now(),
        };

        self.wallet.balance -= expense.amount;
        self.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Applies a partial update to an expense.
    ///
    /// When the patch carries an amount, the positivity rule is re-enforced
    /// and the wallet moves by the delta: spending more requires the balance
    /// to cover the difference, spending less credits it back. `id` and
    /// `created_at` never change. A failing call applies nothing.
    pub fn update_expense(&mut self, id: ExpenseId, patch: ExpensePatch) -> ResultLedger<Expense> {
        let old_amount = self.expenses.get(&id).ok_or(LedgerError::NotFound(id.0))?.amount;

        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(LedgerError::InvalidInput("title must not be empty".to_string()));
            }
        }
        if let Some(new_amount) = patch.amount {
            if !new_amount.is_positive() {
                return Err(LedgerError::InvalidInput(
                    "amount must be a positive number".to_string(),
                ));
            }
            let delta = new_amount - old_amount;
            if delta.is_positive() && self.wallet.balance < delta {
                return Err(LedgerError::InsufficientFunds(format!(
                    "balance {} cannot cover an increase of {}",
                    self.wallet.balance, delta
                )));
            }
        }

        // All checks passed, nothing below can fail.
        let expense = match self.expenses.get_mut(&id) {
            Some(expense) => expense,
            None => return Err(LedgerError::NotFound(id.0)),
        };
        if let Some(title) = patch.title {
            expense.title = title.trim().to_string();
        }
        if let Some(new_amount) = patch.amount {
            self.wallet.balance -= new_amount - old_amount;
            expense.amount = new_amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }

        Ok(expense.clone())
    }

    /// Removes an expense, releasing its amount back to the wallet.
    pub fn delete_expense(&mut self, id: ExpenseId) -> ResultLedger<Expense> {
        let expense = self.expenses.remove(&id).ok_or(LedgerError::NotFound(id.0))?;
        self.wallet.balance += expense.amount;
        Ok(expense)
    }

    /// Returns the current budget settings.
    #[must_use]
    pub fn budget_settings(&self) -> BudgetSettings {
        self.budget_settings
    }

    /// Replaces the budget settings. Both values must be positive.
    pub fn set_budget_settings(&mut self, settings: BudgetSettings) -> ResultLedger<BudgetSettings> {
        if !settings.monthly_budget.is_positive() || !settings.savings_goal.is_positive() {
            return Err(LedgerError::InvalidInput(
                "budget values must be positive".to_string(),
            ));
        }

        self.budget_settings = settings;
        Ok(self.budget_settings)
    }

    fn allocate_id(&mut self) -> ExpenseId {
        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        id
    }

    fn expenses_sorted(&self) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = self.expenses.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        expenses
    }
}

/// Sum of all expense amounts in the slice.
#[must_use]
pub fn total_expenses(expenses: &[Expense]) -> MoneyCents {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Summed amount per category.
///
/// Every known category is present in the result, zero-filled when unused,
/// so the per-category totals always add up to [`total_expenses`].
#[must_use]
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<Category, MoneyCents> {
    let mut totals: BTreeMap<Category, MoneyCents> = Category::ALL
        .iter()
        .map(|category| (*category, MoneyCents::ZERO))
        .collect();

    for expense in expenses {
        if let Some(total) = totals.get_mut(&expense.category) {
            *total += expense.amount;
        }
    }

    totals
}
