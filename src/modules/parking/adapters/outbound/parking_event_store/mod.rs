pub mod in_memory;
pub mod postgres;

use crate::modules::parking::core::events::ParkingSpotEvent;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait ParkingEventStore: Send + Sync {
    async fn append(&self, event: ParkingSpotEvent) -> Result<(), StoreError>;

    /// Events of one vehicle in the order they were appended.
    async fn list_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ParkingSpotEvent>, StoreError>;
}
