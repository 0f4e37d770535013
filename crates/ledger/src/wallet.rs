//! The module contains the `Wallet` singleton and the budget settings.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// The single wallet backing a ledger.
///
/// There is exactly one wallet per ledger. It is never created or destroyed
/// outside ledger initialisation, and its balance moves only through ledger
/// operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: MoneyCents,
}

impl Wallet {
    #[must_use]
    pub const fn new(balance: MoneyCents) -> Self {
        Self { balance }
    }
}

/// User-tunable budget settings, carried in the snapshot alongside the
/// wallet and the expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSettings {
    pub monthly_budget: MoneyCents,
    pub savings_goal: MoneyCents,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            monthly_budget: MoneyCents::new(8_000_00),
            savings_goal: MoneyCents::new(15_000_00),
        }
    }
}
