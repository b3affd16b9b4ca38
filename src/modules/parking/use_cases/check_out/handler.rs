use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::{ClaimOutcome, ParkingSpotStore};
use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::core::events::ParkingSpotEvent;
use crate::modules::parking::use_cases::check_out::command::CheckOut;
use crate::modules::parking::use_cases::check_out::decide::decide_check_out;
use crate::modules::parking::use_cases::check_out::decision::{CheckOutError, Decision};
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("check-out rejected: {0}")]
    Rejected(#[from] CheckOutError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CheckOutHandler {
    vehicles: Arc<dyn VehicleStore>,
    spots: Arc<dyn ParkingSpotStore>,
    events: Arc<dyn ParkingEventStore>,
}

impl CheckOutHandler {
    pub fn new(
        vehicles: Arc<dyn VehicleStore>,
        spots: Arc<dyn ParkingSpotStore>,
        events: Arc<dyn ParkingEventStore>,
    ) -> Self {
        Self {
            vehicles,
            spots,
            events,
        }
    }

    #[tracing::instrument(
        name = "check_out",
        skip(self, command),
        fields(license_plate = %command.license_plate, floor = command.floor, spot = command.spot)
    )]
    pub async fn handle(&self, command: CheckOut) -> Result<(), ApplicationError> {
        self.check_out(command).await.inspect_err(|error| match error {
            ApplicationError::Rejected(_) => tracing::warn!(%error, "check-out rejected"),
            ApplicationError::Store(_) => tracing::error!(%error, "check-out failed"),
        })
    }

    async fn check_out(&self, command: CheckOut) -> Result<(), ApplicationError> {
        let vehicle = self
            .vehicles
            .find_by_license_plate(&command.license_plate)
            .await?
            .ok_or(CheckOutError::VehicleNotFound)?;

        let spot = self
            .spots
            .find_by_coordinates(command.floor, command.spot)
            .await?;
        let spot = match decide_check_out(vehicle.id(), spot) {
            Decision::Accepted { spot } => spot,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        // The occupant may have changed since the lookup.
        if !self.spots.release(spot.id, vehicle.id()).await? {
            return Err(CheckOutError::SpotMismatch.into());
        }

        let event = ParkingSpotEvent::checked_out(spot.id, vehicle.id(), command.occurred_at);
        if let Err(error) = self.events.append(event).await {
            // No event, no release: park the vehicle back before failing.
            match self.spots.claim(spot.id, vehicle.id()).await {
                Ok(ClaimOutcome::Claimed(_)) => {}
                Ok(outcome) => {
                    tracing::error!(?outcome, parking_spot_id = spot.id, "spot changed hands before it was reclaimed")
                }
                Err(claim_error) => {
                    tracing::error!(%claim_error, parking_spot_id = spot.id, "failed to reclaim unrecorded spot")
                }
            }
            return Err(error.into());
        }

        tracing::info!(parking_spot_id = spot.id, "vehicle checked out");
        Ok(())
    }
}
