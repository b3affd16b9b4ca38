use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::parking::use_cases::get_vehicle::handler::{find_vehicle, vehicle_events};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(license_plate): Path<String>) -> impl IntoResponse {
    match find_vehicle(state.vehicles.as_ref(), state.spots.as_ref(), &license_plate).await {
        Ok(Some(vehicle)) => Json(vehicle).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("vehicle {license_plate} not found")),
        Err(error) => {
            tracing::error!(%error, "vehicle lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

pub async fn handle_events(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
) -> impl IntoResponse {
    match vehicle_events(state.vehicles.as_ref(), state.events.as_ref(), &license_plate).await {
        Ok(Some(events)) => Json(events).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("vehicle {license_plate} not found")),
        Err(error) => {
            tracing::error!(%error, "vehicle history lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
