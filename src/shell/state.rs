use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_verification::VehicleVerification;
use crate::modules::parking::use_cases::check_in::handler::CheckInHandler;
use crate::modules::parking::use_cases::check_out::handler::CheckOutHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_in_handler: Arc<CheckInHandler>,
    pub check_out_handler: Arc<CheckOutHandler>,
    pub vehicles: Arc<dyn VehicleStore>,
    pub spots: Arc<dyn ParkingSpotStore>,
    pub events: Arc<dyn ParkingEventStore>,
}

impl AppState {
    pub fn new(
        vehicles: Arc<dyn VehicleStore>,
        spots: Arc<dyn ParkingSpotStore>,
        events: Arc<dyn ParkingEventStore>,
        verification: Arc<dyn VehicleVerification>,
    ) -> Self {
        let check_in_handler = Arc::new(CheckInHandler::new(
            vehicles.clone(),
            spots.clone(),
            events.clone(),
            verification,
        ));
        let check_out_handler = Arc::new(CheckOutHandler::new(
            vehicles.clone(),
            spots.clone(),
            events.clone(),
        ));
        Self {
            check_in_handler,
            check_out_handler,
            vehicles,
            spots,
            events,
        }
    }
}
