use crate::modules::parking::core::events::ParkingSpotEvent;
use crate::modules::parking::core::vehicle::Vehicle;
use crate::modules::parking::use_cases::list_free_spots::projection::SpotView;
use async_graphql::SimpleObject;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct VehicleView {
    pub license_plate: String,
    pub brand: String,
    pub color: String,
    pub owner: String,
    pub parked_at: Option<SpotView>,
}

impl VehicleView {
    pub fn new(vehicle: Vehicle, parked_at: Option<SpotView>) -> Self {
        Self {
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            color: vehicle.color,
            owner: vehicle.owner,
            parked_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct ParkingEventView {
    pub event_id: Uuid,
    pub parking_spot_id: i64,
    pub kind: String,
    pub created_at: i64,
}

impl From<ParkingSpotEvent> for ParkingEventView {
    fn from(event: ParkingSpotEvent) -> Self {
        Self {
            event_id: event.event_id,
            parking_spot_id: event.parking_spot_id,
            kind: event.kind.as_str().to_string(),
            created_at: event.created_at,
        }
    }
}
