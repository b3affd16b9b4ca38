// In memory implementation of the ParkingSpotStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep spots ordered by coordinates so list_free needs no sorting.
// - Run every conditional update under a single write lock.

use crate::modules::parking::adapters::outbound::parking_spot_store::{ClaimOutcome, ParkingSpotStore};
use crate::modules::parking::core::parking_spot::ParkingSpot;
use crate::shared::infrastructure::store::StoreError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryParkingSpotStore {
    spots: RwLock<BTreeMap<(i32, i32), ParkingSpot>>,
    is_offline: bool,
}

impl InMemoryParkingSpotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Parking spot store offline".into()));
        }
        Ok(())
    }
}

fn spot_by_id(spots: &mut BTreeMap<(i32, i32), ParkingSpot>, spot_id: i64) -> Result<&mut ParkingSpot, StoreError> {
    spots
        .values_mut()
        .find(|s| s.id == spot_id)
        .ok_or_else(|| StoreError::NotFound(format!("parking spot {spot_id}")))
}

#[async_trait::async_trait]
impl ParkingSpotStore for InMemoryParkingSpotStore {
    async fn find_by_coordinates(&self, floor: i32, spot: i32) -> Result<Option<ParkingSpot>, StoreError> {
        self.ensure_online()?;
        Ok(self.spots.read().await.get(&(floor, spot)).cloned())
    }

    async fn find_by_occupant(&self, vehicle_id: &str) -> Result<Option<ParkingSpot>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .spots
            .read()
            .await
            .values()
            .find(|s| s.is_occupied_by(vehicle_id))
            .cloned())
    }

    async fn register(&self, floor: i32, spot: i32) -> Result<ParkingSpot, StoreError> {
        self.ensure_online()?;
        let mut guard = self.spots.write().await;
        let next_id = guard.values().map(|s| s.id).max().unwrap_or(0) + 1;
        let stored = guard.entry((floor, spot)).or_insert(ParkingSpot {
            id: next_id,
            floor,
            spot,
            occupied_by: None,
        });
        Ok(stored.clone())
    }

    async fn save(&self, spot: &ParkingSpot) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.spots.write().await;
        let stored = spot_by_id(&mut guard, spot.id)?;
        stored.occupied_by = spot.occupied_by.clone();
        Ok(())
    }

    async fn claim(&self, spot_id: i64, vehicle_id: &str) -> Result<ClaimOutcome, StoreError> {
        self.ensure_online()?;
        let mut guard = self.spots.write().await;
        if guard.values().any(|s| s.is_occupied_by(vehicle_id)) {
            return Ok(ClaimOutcome::VehicleParkedElsewhere);
        }
        let stored = spot_by_id(&mut guard, spot_id)?;
        if stored.is_occupied() {
            return Ok(ClaimOutcome::SpotTaken);
        }
        stored.occupied_by = Some(vehicle_id.to_string());
        Ok(ClaimOutcome::Claimed(stored.clone()))
    }

    async fn release(&self, spot_id: i64, vehicle_id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.spots.write().await;
        let stored = spot_by_id(&mut guard, spot_id)?;
        if !stored.is_occupied_by(vehicle_id) {
            return Ok(false);
        }
        stored.occupied_by = None;
        Ok(true)
    }

    async fn list_free(&self) -> Result<Vec<ParkingSpot>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .spots
            .read()
            .await
            .values()
            .filter(|s| !s.is_occupied())
            .cloned()
            .collect())
    }
}
