use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::parking::use_cases::check_in::command::CheckIn;
use crate::modules::parking::use_cases::check_in::decision::CheckInError;
use crate::modules::parking::use_cases::check_in::handler::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckInVehicleBody {
    pub license_plate: String,
    pub brand: String,
    pub color: String,
    pub owner: String,
}

#[derive(Deserialize)]
pub struct CheckInSpotBody {
    pub floor: i32,
    pub spot: i32,
}

#[derive(Deserialize)]
pub struct CheckInBody {
    pub vehicle: CheckInVehicleBody,
    pub spot: CheckInSpotBody,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub vehicle_id: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::RestrictedVehicle { .. } => StatusCode::FORBIDDEN,
        ApplicationError::Rejected(CheckInError::SpotNotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Rejected(_) => StatusCode::CONFLICT,
        ApplicationError::Verification(_) => StatusCode::BAD_GATEWAY,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CheckInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let command = CheckIn {
        license_plate: body.vehicle.license_plate,
        brand: body.vehicle.brand,
        color: body.vehicle.color,
        owner: body.vehicle.owner,
        floor: body.spot.floor,
        spot: body.spot.spot,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state.check_in_handler.handle(command).await {
        Ok(vehicle_id) => (StatusCode::CREATED, Json(CheckInResponse { vehicle_id })).into_response(),
        Err(error) => error_response(status_for(&error), error.to_string()),
    }
}
