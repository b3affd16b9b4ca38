#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Clear,
    Restricted,
}

/// Status codes the verification provider uses to flag a vehicle.
const RESTRICTED_CODES: [&str; 2] = ["RESTRICAO", "RESTRICTED"];

impl VerificationStatus {
    pub fn is_restricted(&self) -> bool {
        matches!(self, VerificationStatus::Restricted)
    }

    /// Any status other than `RESTRICAO` or `RESTRICTED` lets the vehicle park.
    pub fn from_status_code(code: &str) -> Self {
        let code = code.trim();
        if RESTRICTED_CODES.iter().any(|marker| code.eq_ignore_ascii_case(marker)) {
            VerificationStatus::Restricted
        } else {
            VerificationStatus::Clear
        }
    }
}
