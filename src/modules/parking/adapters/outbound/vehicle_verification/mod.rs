// Port to the external service that flags vehicles not allowed to park.

pub mod http;
pub mod in_memory;

use crate::modules::parking::core::verification::VerificationStatus;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("vehicle verification unavailable: {0}")]
    Unavailable(String),

    #[error("vehicle verification returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait VehicleVerification: Send + Sync {
    async fn verify(&self, license_plate: &str) -> Result<VerificationStatus, VerificationError>;
}
