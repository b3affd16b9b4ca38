// Check-in command handler orchestrates the write flow.
//
// Responsibilities
// - Register the vehicle, then verify it is not restricted.
// - Run the pure check-in decisions against the looked up spots.
// - Claim the spot atomically and append a check-in event.
// - Release the claim again when the event cannot be appended.
//
// Notes
// - Vehicle registration is kept even when the check-in is rejected later on.

use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::{ClaimOutcome, ParkingSpotStore};
use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_verification::{VehicleVerification, VerificationError};
use crate::modules::parking::core::events::ParkingSpotEvent;
use crate::modules::parking::use_cases::check_in::command::CheckIn;
use crate::modules::parking::use_cases::check_in::decide::{decide_check_in, reject_if_parked};
use crate::modules::parking::use_cases::check_in::decision::{CheckInError, Decision};
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("vehicle {license_plate} is restricted")]
    RestrictedVehicle { license_plate: String },

    #[error("check-in rejected: {0}")]
    Rejected(#[from] CheckInError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub struct CheckInHandler {
    vehicles: Arc<dyn VehicleStore>,
    spots: Arc<dyn ParkingSpotStore>,
    events: Arc<dyn ParkingEventStore>,
    verification: Arc<dyn VehicleVerification>,
}

impl CheckInHandler {
    pub fn new(
        vehicles: Arc<dyn VehicleStore>,
        spots: Arc<dyn ParkingSpotStore>,
        events: Arc<dyn ParkingEventStore>,
        verification: Arc<dyn VehicleVerification>,
    ) -> Self {
        Self {
            vehicles,
            spots,
            events,
            verification,
        }
    }

    /// Returns the id of the checked in vehicle, which is its license plate.
    #[tracing::instrument(
        name = "check_in",
        skip(self, command),
        fields(license_plate = %command.license_plate, floor = command.floor, spot = command.spot)
    )]
    pub async fn handle(&self, command: CheckIn) -> Result<String, ApplicationError> {
        self.check_in(command).await.inspect_err(|error| match error {
            ApplicationError::RestrictedVehicle { .. } | ApplicationError::Rejected(_) => {
                tracing::warn!(%error, "check-in rejected")
            }
            _ => tracing::error!(%error, "check-in failed"),
        })
    }

    async fn check_in(&self, command: CheckIn) -> Result<String, ApplicationError> {
        let vehicle = self.vehicles.create_if_not_exists(command.vehicle()).await?;

        let status = self.verification.verify(vehicle.id()).await?;
        if status.is_restricted() {
            return Err(ApplicationError::RestrictedVehicle {
                license_plate: vehicle.license_plate,
            });
        }

        let parked_at = self.spots.find_by_occupant(vehicle.id()).await?;
        reject_if_parked(parked_at.as_ref())?;

        let target = self
            .spots
            .find_by_coordinates(command.floor, command.spot)
            .await?;
        let spot = match decide_check_in(&command, target) {
            Decision::Accepted { spot } => spot,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        let claimed = match self.spots.claim(spot.id, vehicle.id()).await? {
            ClaimOutcome::Claimed(claimed) => claimed,
            ClaimOutcome::SpotTaken => {
                return Err(CheckInError::SpotUnavailable {
                    floor: spot.floor,
                    spot: spot.spot,
                }
                .into());
            }
            ClaimOutcome::VehicleParkedElsewhere => {
                // Lost a race against another check-in of the same vehicle.
                let parked_at = self.spots.find_by_occupant(vehicle.id()).await?;
                reject_if_parked(parked_at.as_ref())?;
                return Err(CheckInError::SpotUnavailable {
                    floor: spot.floor,
                    spot: spot.spot,
                }
                .into());
            }
        };

        let event = ParkingSpotEvent::checked_in(claimed.id, vehicle.id(), command.occurred_at);
        if let Err(error) = self.events.append(event).await {
            // No event, no occupancy: hand the spot back before failing.
            match self.spots.release(claimed.id, vehicle.id()).await {
                Ok(true) => {}
                Ok(false) => tracing::error!(parking_spot_id = claimed.id, "spot changed hands before it was released"),
                Err(release_error) => {
                    tracing::error!(%release_error, parking_spot_id = claimed.id, "failed to release unrecorded spot")
                }
            }
            return Err(error.into());
        }

        tracing::info!(parking_spot_id = claimed.id, "vehicle checked in");
        Ok(vehicle.license_plate)
    }
}
