use crate::modules::parking::core::parking_spot::ParkingSpot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckOutError {
    #[error("vehicle not found, please check in first")]
    VehicleNotFound,

    #[error("invalid parking spot or it does not exist")]
    SpotInvalid,

    #[error("there are no vehicles at this spot")]
    SpotEmpty,

    #[error("spot does not correspond to this vehicle's location")]
    SpotMismatch,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { spot: ParkingSpot },
    Rejected { reason: CheckOutError },
}
