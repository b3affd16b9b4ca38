// In memory implementation of the ParkingEventStore port.
//
// Responsibilities
// - Collect appended events in a list for inspection.

use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::core::events::ParkingSpotEvent;
use crate::shared::infrastructure::store::StoreError;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryParkingEventStore {
    pub rows: Mutex<Vec<ParkingSpotEvent>>,
    is_offline: bool,
}

impl InMemoryParkingEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ParkingEventStore for InMemoryParkingEventStore {
    async fn append(&self, event: ParkingSpotEvent) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Parking event store offline".into()));
        }

        self.rows.lock().await.push(event);
        Ok(())
    }

    async fn list_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ParkingSpotEvent>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Parking event store offline".into()));
        }

        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .filter(|e| e.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }
}
