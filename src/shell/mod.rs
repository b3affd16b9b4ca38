// Composition root for the parking bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations (Postgres or in memory).
// - Seed the configured floors and spots.
// - Wire implementations into use case handlers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_event_store::in_memory::InMemoryParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_event_store::postgres::PostgresParkingEventStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::ParkingSpotStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::in_memory::InMemoryParkingSpotStore;
use crate::modules::parking::adapters::outbound::parking_spot_store::postgres::PostgresParkingSpotStore;
use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_store::in_memory::InMemoryVehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_store::postgres::PostgresVehicleStore;
use crate::modules::parking::adapters::outbound::vehicle_verification::VehicleVerification;
use crate::modules::parking::adapters::outbound::vehicle_verification::http::HttpVehicleVerification;
use crate::modules::parking::adapters::outbound::vehicle_verification::in_memory::InMemoryVehicleVerification;
use crate::shared::infrastructure::postgres;
use crate::shared::infrastructure::store::StoreError;
use crate::shell::config::Config;
use crate::shell::state::AppState;

const VERIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let (vehicles, spots, events): (
        Arc<dyn VehicleStore>,
        Arc<dyn ParkingSpotStore>,
        Arc<dyn ParkingEventStore>,
    ) = match &config.database_url {
        Some(database_url) => {
            let pool = postgres::connect(database_url).await?;
            tracing::info!("connected to database");
            (
                Arc::new(PostgresVehicleStore::new(pool.clone())),
                Arc::new(PostgresParkingSpotStore::new(pool.clone())),
                Arc::new(PostgresParkingEventStore::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, state is kept in memory");
            (
                Arc::new(InMemoryVehicleStore::new()),
                Arc::new(InMemoryParkingSpotStore::new()),
                Arc::new(InMemoryParkingEventStore::new()),
            )
        }
    };

    let verification: Arc<dyn VehicleVerification> = match &config.vehicle_verification_url {
        Some(url) => Arc::new(HttpVehicleVerification::new(url.clone(), VERIFICATION_TIMEOUT)?),
        None => {
            tracing::warn!(
                restricted = config.restricted_plates.len(),
                "VEHICLE_VERIFICATION_URL not set, using the configured restricted plates"
            );
            Arc::new(InMemoryVehicleVerification::with_restricted(
                config.restricted_plates.iter().cloned(),
            ))
        }
    };

    let seeded = seed_spots(spots.as_ref(), config.parking_floors, config.spots_per_floor).await?;
    tracing::info!(seeded, "parking spots ready");

    Ok(AppState::new(vehicles, spots, events, verification))
}

/// Registers floors 1..=floors with spots 1..=spots_per_floor. Existing spots are kept as they are.
pub async fn seed_spots(
    spots: &dyn ParkingSpotStore,
    floors: i32,
    spots_per_floor: i32,
) -> Result<usize, StoreError> {
    let mut seeded = 0;
    for floor in 1..=floors {
        for spot in 1..=spots_per_floor {
            spots.register(floor, spot).await?;
            seeded += 1;
        }
    }
    Ok(seeded)
}
