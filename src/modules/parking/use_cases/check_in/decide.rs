// Pure decision functions for check-in.
//
// Responsibilities
// - A vehicle holds at most one spot.
// - The target spot must exist and be free.
// - Never perform input or output. The handler looks things up and calls these in order.

use crate::modules::parking::core::parking_spot::ParkingSpot;
use crate::modules::parking::use_cases::check_in::command::CheckIn;
use crate::modules::parking::use_cases::check_in::decision::{CheckInError, Decision};

pub fn reject_if_parked(parked_at: Option<&ParkingSpot>) -> Result<(), CheckInError> {
    match parked_at {
        Some(spot) => Err(CheckInError::AlreadyParked {
            floor: spot.floor,
            spot: spot.spot,
        }),
        None => Ok(()),
    }
}

pub fn decide_check_in(command: &CheckIn, target: Option<ParkingSpot>) -> Decision {
    match target {
        None => Decision::Rejected {
            reason: CheckInError::SpotNotFound {
                floor: command.floor,
                spot: command.spot,
            },
        },
        Some(spot) if spot.is_occupied() => Decision::Rejected {
            reason: CheckInError::SpotUnavailable {
                floor: spot.floor,
                spot: spot.spot,
            },
        },
        Some(spot) => Decision::Accepted { spot },
    }
}
