//! Aggregate report endpoint.

use api_types::summary::SummaryView;
use axum::{Json, extract::State};
use ledger::{category_totals, total_expenses};

use crate::server::ServerState;

/// Current balance plus total and per-category expense sums.
pub async fn summary(State(state): State<ServerState>) -> Json<SummaryView> {
    let ledger = state.ledger.read().await;
    let expenses = ledger.expenses();

    let totals = category_totals(&expenses)
        .into_iter()
        .map(|(category, total)| (category.name().to_string(), total.cents()))
        .collect();

    Json(SummaryView {
        balance_minor: ledger.wallet().balance.cents(),
        total_expenses_minor: total_expenses(&expenses).cents(),
        category_totals_minor: totals,
    })
}
