// Vehicle known to the parking garage.
//
// Purpose
// - Hold the attributes captured on first check-in.
//
// Notes
// - The license plate doubles as the vehicle id. Every occupancy comparison uses it.
// - Vehicles are never mutated after creation.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Vehicle {
    pub license_plate: String,
    pub brand: String,
    pub color: String,
    pub owner: String,
}

impl Vehicle {
    pub fn id(&self) -> &str {
        &self.license_plate
    }
}
