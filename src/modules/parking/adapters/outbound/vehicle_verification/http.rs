// HTTP client for the vehicle verification service.
//
// Contract
// - GET {base_url}/vehicles/{license_plate}/verification, the plate sent as one escaped path segment.
// - 200 with {"status": "<code>"}. RESTRICAO (or RESTRICTED) marks the vehicle as restricted.

use crate::modules::parking::adapters::outbound::vehicle_verification::{VehicleVerification, VerificationError};
use crate::modules::parking::core::verification::VerificationStatus;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct VerificationResponse {
    status: String,
}

#[derive(Debug, Clone)]
pub struct HttpVehicleVerification {
    client: Client,
    base_url: Url,
}

impl HttpVehicleVerification {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, VerificationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerificationError::Unavailable(e.to_string()))?;
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| VerificationError::Unavailable(format!("invalid base url {base_url:?}")))?;
        Ok(Self { client, base_url })
    }

    fn verification_url(&self, license_plate: &str) -> Result<Url, VerificationError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VerificationError::Unavailable(format!("invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(["vehicles", license_plate, "verification"]);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl VehicleVerification for HttpVehicleVerification {
    async fn verify(&self, license_plate: &str) -> Result<VerificationStatus, VerificationError> {
        let response = self
            .client
            .get(self.verification_url(license_plate)?)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| VerificationError::Unavailable(e.to_string()))?;

        let body: VerificationResponse = response
            .json()
            .await
            .map_err(|e| VerificationError::InvalidResponse(e.to_string()))?;

        Ok(VerificationStatus::from_status_code(&body.status))
    }
}
