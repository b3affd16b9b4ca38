// Command data type for checking a vehicle into a spot.
//
// Responsibilities
// - Carry the vehicle attributes and target coordinates, independent of HTTP or GraphQL.
// - occurred_at is epoch milliseconds, stamped by the inbound adapter.

use crate::modules::parking::core::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub license_plate: String,
    pub brand: String,
    pub color: String,
    pub owner: String,
    pub floor: i32,
    pub spot: i32,
    pub occurred_at: i64,
}

impl CheckIn {
    pub fn vehicle(&self) -> Vehicle {
        Vehicle {
            license_plate: self.license_plate.clone(),
            brand: self.brand.clone(),
            color: self.color.clone(),
            owner: self.owner.clone(),
        }
    }
}
