// Pure decision function for check-out.
//
// Responsibilities
// - The spot must exist, be occupied, and be occupied by the requesting vehicle.
// - Checks run in that order so each failure is reported distinctly.

use crate::modules::parking::core::parking_spot::ParkingSpot;
use crate::modules::parking::use_cases::check_out::decision::{CheckOutError, Decision};

pub fn decide_check_out(vehicle_id: &str, spot: Option<ParkingSpot>) -> Decision {
    let reason = match spot {
        None => CheckOutError::SpotInvalid,
        Some(ref s) if !s.is_occupied() => CheckOutError::SpotEmpty,
        Some(ref s) if !s.is_occupied_by(vehicle_id) => CheckOutError::SpotMismatch,
        Some(spot) => return Decision::Accepted { spot },
    };
    Decision::Rejected { reason }
}

#[cfg(test)]
mod check_out_decide_tests {
    use super::*;
    use crate::tests::fixtures::spots::{free_spot, occupied_spot};
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_the_occupant() {
        let spot = occupied_spot(1, 5, "ABC123");
        assert_eq!(
            decide_check_out("ABC123", Some(spot.clone())),
            Decision::Accepted { spot }
        );
    }

    #[rstest]
    #[case(None, CheckOutError::SpotInvalid)]
    #[case(Some(free_spot(1, 5)), CheckOutError::SpotEmpty)]
    #[case(Some(occupied_spot(1, 5, "XYZ999")), CheckOutError::SpotMismatch)]
    fn it_should_reject(#[case] spot: Option<ParkingSpot>, #[case] reason: CheckOutError) {
        assert_eq!(decide_check_out("ABC123", spot), Decision::Rejected { reason });
    }
}
