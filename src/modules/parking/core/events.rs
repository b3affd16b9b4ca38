// Audit trail rows written on every successful check-in and check-out.
//
// Purpose
// - Record which vehicle entered or left which spot, and when.
//
// Boundaries
// - Rows are append only. Nothing reads them back to validate a request.
//
// Timestamps
// - created_at is epoch milliseconds, taken from the request being processed.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ParkingEventKind {
    #[serde(rename = "check-in")]
    CheckIn,
    #[serde(rename = "check-out")]
    CheckOut,
}

impl ParkingEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParkingEventKind::CheckIn => "check-in",
            ParkingEventKind::CheckOut => "check-out",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "check-in" => Some(ParkingEventKind::CheckIn),
            "check-out" => Some(ParkingEventKind::CheckOut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParkingSpotEvent {
    pub event_id: Uuid,
    pub parking_spot_id: i64,
    pub vehicle_id: String,
    pub kind: ParkingEventKind,
    pub created_at: i64,
}

impl ParkingSpotEvent {
    pub fn checked_in(parking_spot_id: i64, vehicle_id: impl Into<String>, created_at: i64) -> Self {
        Self::new(ParkingEventKind::CheckIn, parking_spot_id, vehicle_id, created_at)
    }

    pub fn checked_out(parking_spot_id: i64, vehicle_id: impl Into<String>, created_at: i64) -> Self {
        Self::new(ParkingEventKind::CheckOut, parking_spot_id, vehicle_id, created_at)
    }

    fn new(
        kind: ParkingEventKind,
        parking_spot_id: i64,
        vehicle_id: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            parking_spot_id,
            vehicle_id: vehicle_id.into(),
            kind,
            created_at,
        }
    }
}
