use crate::modules::parking::core::parking_spot::ParkingSpot;
use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct SpotView {
    pub floor: i32,
    pub spot: i32,
}

impl From<ParkingSpot> for SpotView {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            floor: spot.floor,
            spot: spot.spot,
        }
    }
}
