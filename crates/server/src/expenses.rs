//! Expense API endpoints

use api_types::expense::{ExpenseCreated, ExpenseList, ExpenseNew, ExpenseView};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use engine::RecordedExpense;

use crate::{ServerError, server::ServerState};

fn map_expense(recorded: RecordedExpense) -> ExpenseView {
    ExpenseView {
        id: recorded.id,
        amount: recorded.expense.amount,
        paid_by: recorded.expense.paid_by,
        split_between: recorded.expense.split_between,
        description: recorded.description,
        created_at: recorded.created_at,
    }
}

/// Handle requests for recording an expense
pub async fn expense_new(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<Json<ExpenseCreated>, ServerError> {
    let Json(payload) = payload?;
    let added = state
        .engine
        .add_expense(
            &trip_id,
            engine::ExpenseNew {
                amount: payload.amount,
                paid_by: payload.paid_by,
                split_between: payload.split_between,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(ExpenseCreated {
        ok: true,
        expense: map_expense(added.record),
        total_spent: added.total_spent,
    }))
}

/// Handle requests for listing the expenses of a trip
pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<ExpenseList>, ServerError> {
    let trip = state.engine.trip(&trip_id).await?;
    let total_spent = trip.total_spent()?;

    Ok(Json(ExpenseList {
        expenses: trip.expenses.into_iter().map(map_expense).collect(),
        total_spent,
    }))
}
