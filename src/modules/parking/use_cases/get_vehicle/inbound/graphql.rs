use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::parking::use_cases::get_vehicle::handler::{find_vehicle, vehicle_events};
use crate::modules::parking::use_cases::get_vehicle::projection::{ParkingEventView, VehicleView};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct VehicleQuery;

#[Object]
impl VehicleQuery {
    async fn vehicle(&self, context: &Context<'_>, license_plate: String) -> GqlResult<Option<VehicleView>> {
        let state = context.data_unchecked::<AppState>();
        find_vehicle(state.vehicles.as_ref(), state.spots.as_ref(), &license_plate)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }

    async fn vehicle_events(
        &self,
        context: &Context<'_>,
        license_plate: String,
    ) -> GqlResult<Option<Vec<ParkingEventView>>> {
        let state = context.data_unchecked::<AppState>();
        vehicle_events(state.vehicles.as_ref(), state.events.as_ref(), &license_plate)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
