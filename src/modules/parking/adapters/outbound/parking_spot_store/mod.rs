// Persistence port for parking spots.
//
// Purpose
// - Look spots up by coordinates or by occupant, and change who occupies them.
//
// Concurrency
// - claim and release are atomic conditional updates. Two requests racing for the
//   same spot cannot both win, and a vehicle never ends up holding two spots.
// - save is a plain overwrite and must not be used to take a spot on behalf of a request.

pub mod in_memory;
pub mod postgres;

use crate::modules::parking::core::parking_spot::ParkingSpot;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed(ParkingSpot),
    SpotTaken,
    VehicleParkedElsewhere,
}

#[async_trait]
pub trait ParkingSpotStore: Send + Sync {
    async fn find_by_coordinates(&self, floor: i32, spot: i32) -> Result<Option<ParkingSpot>, StoreError>;

    async fn find_by_occupant(&self, vehicle_id: &str) -> Result<Option<ParkingSpot>, StoreError>;

    /// Creates the spot when the coordinates are new, otherwise returns the existing one.
    async fn register(&self, floor: i32, spot: i32) -> Result<ParkingSpot, StoreError>;

    /// Overwrites the stored occupancy of an existing spot.
    async fn save(&self, spot: &ParkingSpot) -> Result<(), StoreError>;

    /// Sets occupied_by only while the spot is still free.
    async fn claim(&self, spot_id: i64, vehicle_id: &str) -> Result<ClaimOutcome, StoreError>;

    /// Clears occupied_by only while the given vehicle still holds the spot.
    async fn release(&self, spot_id: i64, vehicle_id: &str) -> Result<bool, StoreError>;

    /// Free spots ordered by floor, then spot.
    async fn list_free(&self) -> Result<Vec<ParkingSpot>, StoreError>;
}
