//! Expense CRUD endpoints.

use api_types::expense::{ExpenseNew, ExpenseUpdate, ExpenseView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ledger::{Category, Expense, ExpenseDraft, ExpenseId, ExpensePatch, MoneyCents};

use crate::{ServerError, server::ServerState};

fn view(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id.0,
        title: expense.title,
        amount_minor: expense.amount.cents(),
        category: expense.category.name().to_string(),
        date: expense.date,
        created_at: expense.created_at,
    }
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<ExpenseView>> {
    let ledger = state.ledger.read().await;
    Json(ledger.expenses().into_iter().map(view).collect())
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<ExpenseView>, ServerError> {
    let ledger = state.ledger.read().await;
    let expense = ledger.expense(ExpenseId(id))?;
    Ok(Json(view(expense)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    if payload.category.trim().is_empty() {
        return Err(ServerError::Generic("category is required".to_string()));
    }

    let draft = ExpenseDraft {
        title: payload.title,
        amount: MoneyCents::new(payload.amount_minor),
        category: Category::from_name(&payload.category),
        date: payload.date,
    };

    let mut ledger = state.ledger.write().await;
    let expense = ledger.add_expense(draft)?;
    state.persist(&ledger);

    Ok((StatusCode::CREATED, Json(view(expense))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseView>, ServerError> {
    if let Some(category) = payload.category.as_deref() {
        if category.trim().is_empty() {
            return Err(ServerError::Generic("category must not be empty".to_string()));
        }
    }

    let patch = ExpensePatch {
        title: payload.title,
        amount: payload.amount_minor.map(MoneyCents::new),
        category: payload.category.as_deref().map(Category::from_name),
        date: payload.date,
    };

    let mut ledger = state.ledger.write().await;
    let expense = ledger.update_expense(ExpenseId(id), patch)?;
    state.persist(&ledger);

    Ok(Json(view(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    let mut ledger = state.ledger.write().await;
    ledger.delete_expense(ExpenseId(id))?;
    state.persist(&ledger);

    Ok(StatusCode::NO_CONTENT)
}
