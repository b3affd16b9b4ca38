use crate::modules::parking::core::vehicle::Vehicle;

pub fn make_vehicle(license_plate: &str) -> Vehicle {
    Vehicle {
        license_plate: license_plate.to_string(),
        brand: "Fiat".to_string(),
        color: "Red".to_string(),
        owner: "Ana Souza".to_string(),
    }
}
