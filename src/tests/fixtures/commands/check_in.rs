// Shared test fixture for the CheckIn command.

use crate::modules::parking::use_cases::check_in::command::CheckIn;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInDto {
    pub license_plate: String,
    pub brand: String,
    pub color: String,
    pub owner: String,
    pub floor: i32,
    pub spot: i32,
}

pub struct CheckInBuilder {
    inner: CheckIn,
}

impl Default for CheckInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CheckInBuilder {
    pub fn new() -> Self {
        let dto: CheckInDto = serde_json::from_str(include_str!("json/check_in.json")).unwrap();

        Self {
            inner: CheckIn {
                license_plate: dto.license_plate,
                brand: dto.brand,
                color: dto.color,
                owner: dto.owner,
                floor: dto.floor,
                spot: dto.spot,
                occurred_at: 1_700_000_000_000,
            },
        }
    }

    pub fn license_plate(mut self, v: impl Into<String>) -> Self {
        self.inner.license_plate = v.into();
        self
    }

    pub fn color(mut self, v: impl Into<String>) -> Self {
        self.inner.color = v.into();
        self
    }

    pub fn floor(mut self, v: i32) -> Self {
        self.inner.floor = v;
        self
    }

    pub fn spot(mut self, v: i32) -> Self {
        self.inner.spot = v;
        self
    }

    pub fn occurred_at(mut self, v: i64) -> Self {
        self.inner.occurred_at = v;
        self
    }

    pub fn build(self) -> CheckIn {
        self.inner
    }
}

#[cfg(test)]
mod check_in_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CheckInBuilder::default().build();
        assert_eq!(built.license_plate, "ABC123");
        assert_eq!(built.brand, "Fiat");
        assert_eq!(built.color, "Red");
        assert_eq!(built.owner, "Ana Souza");
        assert_eq!((built.floor, built.spot), (1, 5));
        assert_eq!(built.occurred_at, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = CheckInBuilder::new()
            .license_plate("XYZ999")
            .color("Blue")
            .floor(3)
            .spot(9)
            .occurred_at(42)
            .build();
        assert_eq!(built.license_plate, "XYZ999");
        assert_eq!(built.color, "Blue");
        assert_eq!((built.floor, built.spot), (3, 9));
        assert_eq!(built.occurred_at, 42);
    }
}
