use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::parking::use_cases::check_out::command::CheckOut;
use crate::modules::parking::use_cases::check_out::decision::CheckOutError;
use crate::modules::parking::use_cases::check_out::handler::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckOutSpotBody {
    pub floor: i32,
    pub spot: i32,
}

#[derive(Deserialize)]
pub struct CheckOutBody {
    pub license_plate: String,
    pub spot: CheckOutSpotBody,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Rejected(CheckOutError::VehicleNotFound | CheckOutError::SpotInvalid) => {
            StatusCode::NOT_FOUND
        }
        ApplicationError::Rejected(_) => StatusCode::CONFLICT,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CheckOutBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    let command = CheckOut {
        license_plate: body.license_plate,
        floor: body.spot.floor,
        spot: body.spot.spot,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state.check_out_handler.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(status_for(&error), error.to_string()),
    }
}

#[cfg(test)]
mod check_out_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
    use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
    use crate::tests::fixtures::state::make_state;
    use crate::tests::fixtures::stores::{InMemoryStores, in_memory_stores};
    use crate::tests::fixtures::vehicles::make_vehicle;

    use super::handle;

    fn app(stores: &InMemoryStores) -> Router {
        Router::new()
            .route("/check-out", post(handle))
            .with_state(make_state(stores))
    }

    fn check_out_request(license_plate: &str, floor: i32, spot: i32) -> Request<Body> {
        let body = format!(
            r#"{{"license_plate":"{license_plate}","spot":{{"floor":{floor},"spot":{spot}}}}}"#
        );
        Request::post("/check-out")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn park(stores: &InMemoryStores, license_plate: &str, floor: i32, spot: i32) {
        stores
            .vehicles
            .create_if_not_exists(make_vehicle(license_plate))
            .await
            .unwrap();
        let target = stores.spots.find_by_coordinates(floor, spot).await.unwrap().unwrap();
        stores.spots.claim(target.id, license_plate).await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_204_on_check_out(#[future] in_memory_stores: InMemoryStores) {
        let stores = in_memory_stores.await;
        park(&stores, "ABC123", 1, 5).await;

        let response = app(&stores).oneshot(check_out_request("ABC123", 1, 5)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[case("NOPE", 1, 5, StatusCode::NOT_FOUND)]
    #[case("ABC123", 99, 1, StatusCode::NOT_FOUND)]
    #[case("ABC123", 1, 6, StatusCode::CONFLICT)]
    #[case("ABC123", 2, 2, StatusCode::CONFLICT)]
    #[tokio::test]
    async fn it_should_map_rejections_to_status_codes(
        #[future] in_memory_stores: InMemoryStores,
        #[case] license_plate: &str,
        #[case] floor: i32,
        #[case] spot: i32,
        #[case] expected: StatusCode,
    ) {
        let stores = in_memory_stores.await;
        park(&stores, "ABC123", 1, 5).await;
        park(&stores, "XYZ999", 2, 2).await;

        let response = app(&stores)
            .oneshot(check_out_request(license_plate, floor, spot))
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_422_on_invalid_json(#[future] in_memory_stores: InMemoryStores) {
        let stores = in_memory_stores.await;
        let response = app(&stores)
            .oneshot(
                Request::post("/check-out")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"license_plate":"ABC123"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
