//! Trip API endpoints

use api_types::trip::{TripCreated, TripNew, TripUpdate, TripUpdated, TripView};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for creating a new trip
pub async fn trip_new(
    State(state): State<ServerState>,
    payload: Result<Json<TripNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TripCreated>), ServerError> {
    let Json(payload) = payload?;
    let trip = state.engine.new_trip(payload.title.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(TripCreated {
            invite_link: format!("{}/join/{}", state.public_url, trip.id),
            trip_id: trip.id,
            title: trip.title,
            created_at: trip.created_at,
        }),
    ))
}

/// Handle requests for a trip overview
pub async fn get(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripView>, ServerError> {
    let trip = state.engine.trip(&trip_id).await?;

    Ok(Json(TripView {
        total_spent: trip.total_spent()?,
        expense_count: trip.expenses.len(),
        trip_id: trip.id,
        title: trip.title,
    }))
}

/// Handle requests for renaming a trip
pub async fn update(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<TripUpdate>, JsonRejection>,
) -> Result<Json<TripUpdated>, ServerError> {
    let Json(payload) = payload?;
    let trip = state.engine.rename_trip(&trip_id, &payload.title).await?;

    Ok(Json(TripUpdated {
        ok: true,
        title: trip.title,
    }))
}
