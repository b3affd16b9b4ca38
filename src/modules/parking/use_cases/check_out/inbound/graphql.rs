use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::parking::use_cases::check_out::command::CheckOut;
use crate::modules::parking::use_cases::check_out::decision::CheckOutError;
use crate::modules::parking::use_cases::check_out::handler::ApplicationError;
use crate::shell::state::AppState;

fn error_code(error: &ApplicationError) -> &'static str {
    match error {
        ApplicationError::Rejected(CheckOutError::VehicleNotFound) => "VEHICLE_NOT_FOUND",
        ApplicationError::Rejected(CheckOutError::SpotInvalid) => "SPOT_INVALID",
        ApplicationError::Rejected(CheckOutError::SpotEmpty) => "SPOT_EMPTY",
        ApplicationError::Rejected(CheckOutError::SpotMismatch) => "SPOT_MISMATCH",
        ApplicationError::Store(_) => "INTERNAL",
    }
}

#[derive(Default)]
pub struct CheckOutMutation;

#[Object]
impl CheckOutMutation {
    async fn check_out(
        &self,
        context: &Context<'_>,
        license_plate: String,
        floor: i32,
        spot: i32,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();

        let command = CheckOut {
            license_plate,
            floor,
            spot,
            occurred_at: Utc::now().timestamp_millis(),
        };

        state.check_out_handler.handle(command).await.map_err(|e| {
            let code = error_code(&e);
            async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", code))
        })?;

        Ok(true)
    }
}
