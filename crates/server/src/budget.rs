//! Budget settings endpoints.

use api_types::budget::BudgetSettingsView;
use axum::{Json, extract::State};
use ledger::{BudgetSettings, MoneyCents};

use crate::{ServerError, server::ServerState};

fn view(settings: BudgetSettings) -> BudgetSettingsView {
    BudgetSettingsView {
        monthly_budget_minor: settings.monthly_budget.cents(),
        savings_goal_minor: settings.savings_goal.cents(),
    }
}

pub async fn get(State(state): State<ServerState>) -> Json<BudgetSettingsView> {
    let ledger = state.ledger.read().await;
    Json(view(ledger.budget_settings()))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetSettingsView>,
) -> Result<Json<BudgetSettingsView>, ServerError> {
    let mut ledger = state.ledger.write().await;
    let settings = ledger.set_budget_settings(BudgetSettings {
        monthly_budget: MoneyCents::new(payload.monthly_budget_minor),
        savings_goal: MoneyCents::new(payload.savings_goal_minor),
    })?;
    state.persist(&ledger);

    Ok(Json(view(settings)))
}
