use crate::modules::parking::core::parking_spot::ParkingSpot;

pub fn free_spot(floor: i32, spot: i32) -> ParkingSpot {
    ParkingSpot {
        id: i64::from(floor * 100 + spot),
        floor,
        spot,
        occupied_by: None,
    }
}

pub fn occupied_spot(floor: i32, spot: i32, vehicle_id: &str) -> ParkingSpot {
    ParkingSpot {
        occupied_by: Some(vehicle_id.to_string()),
        ..free_spot(floor, spot)
    }
}
