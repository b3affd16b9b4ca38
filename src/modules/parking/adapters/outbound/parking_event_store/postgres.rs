use crate::modules::parking::adapters::outbound::parking_event_store::ParkingEventStore;
use crate::modules::parking::core::events::{ParkingEventKind, ParkingSpotEvent};
use crate::shared::infrastructure::store::StoreError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ParkingSpotEventRow {
    event_id: Uuid,
    parking_spot_id: i64,
    vehicle_id: String,
    event: String,
    created_at: i64,
}

impl TryFrom<ParkingSpotEventRow> for ParkingSpotEvent {
    type Error = StoreError;

    fn try_from(row: ParkingSpotEventRow) -> Result<Self, Self::Error> {
        let kind = ParkingEventKind::parse(&row.event)
            .ok_or_else(|| StoreError::Backend(format!("unknown parking event kind: {}", row.event)))?;
        Ok(ParkingSpotEvent {
            event_id: row.event_id,
            parking_spot_id: row.parking_spot_id,
            vehicle_id: row.vehicle_id,
            kind,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresParkingEventStore {
    pool: PgPool,
}

impl PostgresParkingEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ParkingEventStore for PostgresParkingEventStore {
    async fn append(&self, event: ParkingSpotEvent) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO parking_spot_events (event_id, parking_spot_id, vehicle_id, event, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(event.event_id)
        .bind(event.parking_spot_id)
        .bind(&event.vehicle_id)
        .bind(event.kind.as_str())
        .bind(event.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ParkingSpotEvent>, StoreError> {
        let rows = sqlx::query_as::<_, ParkingSpotEventRow>(
            "SELECT event_id, parking_spot_id, vehicle_id, event, created_at FROM parking_spot_events \
             WHERE vehicle_id = $1 ORDER BY seq",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ParkingSpotEvent::try_from).collect()
    }
}
