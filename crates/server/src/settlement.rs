//! Settlement API endpoint

use api_types::settlement::{SettlementResponse, TransferView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

/// Handle requests for settling a trip
pub async fn settle(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<SettlementResponse>, ServerError> {
    let settlement = state.engine.settle(&trip_id).await?;
    tracing::debug!(
        "trip {trip_id}: {} transfers for {} spent",
        settlement.transfers.len(),
        settlement.total_expenses
    );

    Ok(Json(SettlementResponse {
        trip_id: settlement.trip_id,
        transfers: settlement
            .transfers
            .into_iter()
            .map(|transfer| TransferView {
                amount: transfer.amount.to_decimal(),
                from_person: transfer.from_person,
                to_person: transfer.to_person,
            })
            .collect(),
        total_expenses: settlement.total_expenses,
        summary: settlement.summary,
    }))
}
