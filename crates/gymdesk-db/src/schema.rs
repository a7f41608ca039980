use anyhow::Result;
use sqlx::Executor;

use crate::Connection;

/// Install the database schema.
pub async fn install(db: &Connection) -> Result<()> {
    let mut conn = db.acquire().await?;
    let schema_data = include_str!("../db/schema.sql");
    tracing::info!("installing database schema");
    (*conn).execute(schema_data).await?;
    Ok(())
}
