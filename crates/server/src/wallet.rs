//! Wallet API endpoints.

use api_types::wallet::{IncomeNew, WalletView};
use axum::{Json, extract::State};
use ledger::{MoneyCents, Wallet};

use crate::{ServerError, server::ServerState};

fn view(wallet: Wallet) -> WalletView {
    WalletView {
        balance_minor: wallet.balance.cents(),
    }
}

pub async fn get(State(state): State<ServerState>) -> Json<WalletView> {
    let ledger = state.ledger.read().await;
    Json(view(ledger.wallet()))
}

pub async fn income(
    State(state): State<ServerState>,
    Json(payload): Json<IncomeNew>,
) -> Result<Json<WalletView>, ServerError> {
    let mut ledger = state.ledger.write().await;
    let wallet = ledger.add_income(MoneyCents::new(payload.amount_minor))?;
    state.persist(&ledger);

    Ok(Json(view(wallet)))
}
