// A numbered parking spot and its current occupant.
//
// Invariants
// - (floor, spot) is unique across the garage.
// - occupied_by is Some iff a vehicle currently holds the spot.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParkingSpot {
    pub id: i64,
    pub floor: i32,
    pub spot: i32,
    pub occupied_by: Option<String>,
}

impl ParkingSpot {
    pub fn is_occupied(&self) -> bool {
        self.occupied_by.is_some()
    }

    pub fn is_occupied_by(&self, vehicle_id: &str) -> bool {
        self.occupied_by.as_deref() == Some(vehicle_id)
    }

    pub fn coordinates(&self) -> (i32, i32) {
        (self.floor, self.spot)
    }
}
