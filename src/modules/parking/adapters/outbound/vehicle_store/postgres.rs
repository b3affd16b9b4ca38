use crate::modules::parking::adapters::outbound::vehicle_store::VehicleStore;
use crate::modules::parking::core::vehicle::Vehicle;
use crate::shared::infrastructure::store::StoreError;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct VehicleRow {
    license_plate: String,
    brand: String,
    color: String,
    owner: String,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            license_plate: row.license_plate,
            brand: row.brand,
            color: row.color,
            owner: row.owner,
        }
    }
}

#[derive(Clone)]
pub struct PostgresVehicleStore {
    pool: PgPool,
}

impl PostgresVehicleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl VehicleStore for PostgresVehicleStore {
    async fn create_if_not_exists(&self, vehicle: Vehicle) -> Result<Vehicle, StoreError> {
        sqlx::query(
            "INSERT INTO vehicles (license_plate, brand, color, owner) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (license_plate) DO NOTHING",
        )
        .bind(&vehicle.license_plate)
        .bind(&vehicle.brand)
        .bind(&vehicle.color)
        .bind(&vehicle.owner)
        .execute(&self.pool)
        .await?;

        self.find_by_license_plate(&vehicle.license_plate)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("vehicle {}", vehicle.license_plate)))
    }

    async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>, StoreError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT license_plate, brand, color, owner FROM vehicles WHERE license_plate = $1",
        )
        .bind(license_plate)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Vehicle::from))
    }
}
