use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::parking::use_cases::check_in::command::CheckIn;
use crate::modules::parking::use_cases::check_in::decision::CheckInError;
use crate::modules::parking::use_cases::check_in::handler::ApplicationError;
use crate::shell::state::AppState;

fn error_code(error: &ApplicationError) -> &'static str {
    match error {
        ApplicationError::RestrictedVehicle { .. } => "RESTRICTED_VEHICLE",
        ApplicationError::Rejected(CheckInError::AlreadyParked { .. }) => "ALREADY_PARKED",
        ApplicationError::Rejected(CheckInError::SpotNotFound { .. }) => "SPOT_NOT_FOUND",
        ApplicationError::Rejected(CheckInError::SpotUnavailable { .. }) => "SPOT_UNAVAILABLE",
        ApplicationError::Verification(_) => "VERIFICATION_UNAVAILABLE",
        ApplicationError::Store(_) => "INTERNAL",
    }
}

#[derive(Default)]
pub struct CheckInMutation;

#[Object]
impl CheckInMutation {
    #[allow(clippy::too_many_arguments)]
    async fn check_in(
        &self,
        context: &Context<'_>,
        license_plate: String,
        brand: String,
        color: String,
        owner: String,
        floor: i32,
        spot: i32,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = CheckIn {
            license_plate,
            brand,
            color,
            owner,
            floor,
            spot,
            occurred_at: Utc::now().timestamp_millis(),
        };

        let vehicle_id = state.check_in_handler.handle(command).await.map_err(|e| {
            let code = error_code(&e);
            async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", code))
        })?;

        Ok(ID(vehicle_id))
    }
}
