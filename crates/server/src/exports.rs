//! CSV export of the expense list.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use csv::Writer;
use serde::Serialize;

use crate::{ServerError, server::ServerState};

#[derive(Serialize)]
struct ExportRow {
    id: u64,
    title: String,
    amount: String,
    category: &'static str,
    date: String,
    created_at: String,
}

/// Returns all expenses as a CSV attachment, newest first.
pub async fn expenses_csv(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let expenses = {
        let ledger = state.ledger.read().await;
        ledger.expenses()
    };

    let mut writer = Writer::from_writer(vec![]);
    for expense in expenses {
        writer
            .serialize(ExportRow {
                id: expense.id.0,
                title: expense.title,
                amount: expense.amount.to_string(),
                category: expense.category.name(),
                date: expense.date.to_string(),
                created_at: expense.created_at.to_rfc3339(),
            })
            .map_err(|err| ServerError::Internal(format!("failed to serialize export row: {err}")))?;
    }

    let data = writer
        .into_inner()
        .map_err(|err| ServerError::Internal(format!("failed to finalize export: {err}")))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        data,
    ))
}
