// In memory stores seeded with floors 1..=2 and spots 1..=10.

use crate::modules::parking::adapters::outbound::parking_event_store::in_memory::InMemoryParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::in_memory::InMemoryParkingSpotStore;
use crate::modules::parking::adapters::outbound::vehicle_store::in_memory::InMemoryVehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_verification::in_memory::InMemoryVehicleVerification;
use rstest::fixture;
use std::sync::Arc;

pub struct InMemoryStores {
    pub vehicles: Arc<InMemoryVehicleStore>,
    pub spots: Arc<InMemoryParkingSpotStore>,
    pub events: Arc<InMemoryParkingEventStore>,
    pub verification: Arc<InMemoryVehicleVerification>,
}

#[allow(dead_code)]
impl InMemoryStores {
    // Only valid before the stores are handed to a handler.
    pub fn take_vehicles_offline(&mut self) {
        Arc::get_mut(&mut self.vehicles).unwrap().toggle_offline();
    }

    pub fn take_spots_offline(&mut self) {
        Arc::get_mut(&mut self.spots).unwrap().toggle_offline();
    }

    pub fn take_events_offline(&mut self) {
        Arc::get_mut(&mut self.events).unwrap().toggle_offline();
    }

    pub fn take_verification_offline(&mut self) {
        Arc::get_mut(&mut self.verification).unwrap().toggle_offline();
    }
}

#[fixture]
pub async fn in_memory_stores() -> InMemoryStores {
    let spots = InMemoryParkingSpotStore::new();
    for floor in 1..=2 {
        for spot in 1..=10 {
            spots.register(floor, spot).await.unwrap();
        }
    }
    InMemoryStores {
        vehicles: Arc::new(InMemoryVehicleStore::new()),
        spots: Arc::new(spots),
        events: Arc::new(InMemoryParkingEventStore::new()),
        verification: Arc::new(InMemoryVehicleVerification::new()),
    }
}
