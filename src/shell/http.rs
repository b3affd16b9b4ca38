use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::parking::use_cases::check_in::inbound::http as check_in_http;
use crate::modules::parking::use_cases::check_out::inbound::http as check_out_http;
use crate::modules::parking::use_cases::get_vehicle::inbound::http as get_vehicle_http;
use crate::modules::parking::use_cases::list_free_spots::inbound::http as free_spots_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
        status: status.as_u16(),
    };
    (status, Json(body)).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/check-in", post(check_in_http::handle))
        .route("/check-out", post(check_out_http::handle))
        .route("/free-spots", get(free_spots_http::handle))
        .route("/vehicles/{license_plate}", get(get_vehicle_http::handle))
        .route("/vehicles/{license_plate}/events", get(get_vehicle_http::handle_events))
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
