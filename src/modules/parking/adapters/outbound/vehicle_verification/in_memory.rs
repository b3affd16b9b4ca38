use crate::modules::parking::adapters::outbound::vehicle_verification::{VehicleVerification, VerificationError};
use crate::modules::parking::core::verification::VerificationStatus;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Flags a fixed set of license plates as restricted. Used when no
/// verification service is configured, and in tests.
#[derive(Default)]
pub struct InMemoryVehicleVerification {
    restricted: RwLock<HashSet<String>>,
    is_offline: bool,
}

impl InMemoryVehicleVerification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restricted<I, S>(plates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            restricted: RwLock::new(plates.into_iter().map(Into::into).collect()),
            is_offline: false,
        }
    }

    pub async fn restrict(&self, license_plate: &str) {
        self.restricted.write().await.insert(license_plate.to_string());
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl VehicleVerification for InMemoryVehicleVerification {
    async fn verify(&self, license_plate: &str) -> Result<VerificationStatus, VerificationError> {
        if self.is_offline {
            return Err(VerificationError::Unavailable("Vehicle verification offline".into()));
        }

        if self.restricted.read().await.contains(license_plate) {
            Ok(VerificationStatus::Restricted)
        } else {
            Ok(VerificationStatus::Clear)
        }
    }
}
