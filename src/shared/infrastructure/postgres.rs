use crate::shared::infrastructure::store::StoreError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connects and applies the embedded migrations from `migrations/`.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Backend(format!("migration failed: {e}")))?;

    Ok(pool)
}
