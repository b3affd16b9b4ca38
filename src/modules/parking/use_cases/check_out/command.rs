#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOut {
    pub license_plate: String,
    pub floor: i32,
    pub spot: i32,
    pub occurred_at: i64,
}
