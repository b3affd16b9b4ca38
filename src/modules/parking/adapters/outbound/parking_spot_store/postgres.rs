use crate::modules::parking::adapters::outbound::parking_spot_store::{ClaimOutcome, ParkingSpotStore};
use crate::modules::parking::core::parking_spot::ParkingSpot;
use crate::shared::infrastructure::store::StoreError;
use sqlx::PgPool;

const SPOT_COLUMNS: &str = "id, floor, spot, occupied_by";

#[derive(sqlx::FromRow)]
struct ParkingSpotRow {
    id: i64,
    floor: i32,
    spot: i32,
    occupied_by: Option<String>,
}

impl From<ParkingSpotRow> for ParkingSpot {
    fn from(row: ParkingSpotRow) -> Self {
        ParkingSpot {
            id: row.id,
            floor: row.floor,
            spot: row.spot,
            occupied_by: row.occupied_by,
        }
    }
}

#[derive(Clone)]
pub struct PostgresParkingSpotStore {
    pool: PgPool,
}

impl PostgresParkingSpotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ParkingSpotStore for PostgresParkingSpotStore {
    async fn find_by_coordinates(&self, floor: i32, spot: i32) -> Result<Option<ParkingSpot>, StoreError> {
        let row = sqlx::query_as::<_, ParkingSpotRow>(&format!(
            "SELECT {SPOT_COLUMNS} FROM parking_spots WHERE floor = $1 AND spot = $2"
        ))
        .bind(floor)
        .bind(spot)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ParkingSpot::from))
    }

    async fn find_by_occupant(&self, vehicle_id: &str) -> Result<Option<ParkingSpot>, StoreError> {
        let row = sqlx::query_as::<_, ParkingSpotRow>(&format!(
            "SELECT {SPOT_COLUMNS} FROM parking_spots WHERE occupied_by = $1"
        ))
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ParkingSpot::from))
    }

    async fn register(&self, floor: i32, spot: i32) -> Result<ParkingSpot, StoreError> {
        sqlx::query("INSERT INTO parking_spots (floor, spot) VALUES ($1, $2) ON CONFLICT (floor, spot) DO NOTHING")
            .bind(floor)
            .bind(spot)
            .execute(&self.pool)
            .await?;

        self.find_by_coordinates(floor, spot)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("parking spot {spot} on floor {floor}")))
    }

    async fn save(&self, spot: &ParkingSpot) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE parking_spots SET occupied_by = $1 WHERE id = $2")
            .bind(&spot.occupied_by)
            .bind(spot.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("parking spot {}", spot.id)));
        }
        Ok(())
    }

    async fn claim(&self, spot_id: i64, vehicle_id: &str) -> Result<ClaimOutcome, StoreError> {
        let claimed = sqlx::query_as::<_, ParkingSpotRow>(&format!(
            "UPDATE parking_spots SET occupied_by = $2 WHERE id = $1 AND occupied_by IS NULL RETURNING {SPOT_COLUMNS}"
        ))
        .bind(spot_id)
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await;

        match claimed {
            Ok(Some(row)) => Ok(ClaimOutcome::Claimed(row.into())),
            Ok(None) => Ok(ClaimOutcome::SpotTaken),
            // parking_spots_occupied_by_key: one spot per vehicle
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(ClaimOutcome::VehicleParkedElsewhere),
            Err(e) => Err(e.into()),
        }
    }

    async fn release(&self, spot_id: i64, vehicle_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE parking_spots SET occupied_by = NULL WHERE id = $1 AND occupied_by = $2")
            .bind(spot_id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn list_free(&self) -> Result<Vec<ParkingSpot>, StoreError> {
        let rows = sqlx::query_as::<_, ParkingSpotRow>(&format!(
            "SELECT {SPOT_COLUMNS} FROM parking_spots WHERE occupied_by IS NULL ORDER BY floor, spot"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ParkingSpot::from).collect())
    }
}
