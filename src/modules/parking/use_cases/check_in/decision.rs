use crate::modules::parking::core::parking_spot::ParkingSpot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckInError {
    #[error("car already parked in spot {spot} on floor {floor}")]
    AlreadyParked { floor: i32, spot: i32 },

    #[error("spot {spot} on floor {floor} not found")]
    SpotNotFound { floor: i32, spot: i32 },

    #[error("spot {spot} on floor {floor} is not available")]
    SpotUnavailable { floor: i32, spot: i32 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { spot: ParkingSpot },
    Rejected { reason: CheckInError },
}
