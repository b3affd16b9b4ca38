pub mod in_memory;
pub mod postgres;

use crate::modules::parking::core::vehicle::Vehicle;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Returns the stored vehicle when the license plate is already known,
    /// leaving the existing record untouched.
    async fn create_if_not_exists(&self, vehicle: Vehicle) -> Result<Vehicle, StoreError>;

    async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>, StoreError>;
}
