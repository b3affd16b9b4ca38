use crate::modules::parking::use_cases::check_out::command::CheckOut;

pub fn make_check_out(license_plate: &str, floor: i32, spot: i32) -> CheckOut {
    CheckOut {
        license_plate: license_plate.to_string(),
        floor,
        spot,
        occurred_at: 1_700_000_360_000,
    }
}
