use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::parking::use_cases::list_free_spots::handler::list_free_spots;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match list_free_spots(state.spots.as_ref()).await {
        Ok(spots) => Json(spots).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing free spots failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
