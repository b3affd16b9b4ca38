use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::core::vehicle::Vehicle;
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: RwLock<HashMap<String, Vehicle>>,
    is_offline: bool,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.vehicles.read().await.len()
    }
}

#[async_trait::async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn create_if_not_exists(&self, vehicle: Vehicle) -> Result<Vehicle, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Vehicle store offline".into()));
        }

        let mut guard = self.vehicles.write().await;
        let stored = guard
            .entry(vehicle.license_plate.clone())
            .or_insert(vehicle);
        Ok(stored.clone())
    }

    async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Vehicle store offline".into()));
        }

        Ok(self.vehicles.read().await.get(license_plate).cloned())
    }
}
