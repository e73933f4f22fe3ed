use std::sync::{Arc, atomic::Ordering};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use trip_planner_lib::trip_request::TripRequest;

use crate::{error::AppError, server_state::ServerState};

pub const ACKNOWLEDGEMENT: &str = "Trip details received. An email will be sent shortly.";

/// Shape of every JSON answer from this server, success or not.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

pub async fn submit_trip(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::warn!("Rejected trip request: {}", rejection.body_text());
    })?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("Rejected trip request, missing {:?}", missing);
        return Err(AppError::MissingFields(missing));
    }

    let number = state.trips_received.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info!("Trip request #{number}: {} -> {}", request.origin, request.destination);
    tracing::debug!("Trip request #{number}: {}", request.summary());

    Ok(Json(MessageBody {
        message: ACKNOWLEDGEMENT.to_owned(),
    }))
}
