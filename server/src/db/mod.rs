// server/src/db/mod.rs

//! PostgreSQL adapters for the ordering ports, plus pool setup, schema bootstrap and seeding.

pub mod catalog;
pub mod orders;
pub mod seed;
pub mod sessions;
pub mod users;

pub use catalog::PgMenuCatalog;
pub use orders::PgOrderStore;
pub use sessions::PgSessionStore;
pub use users::PgUserStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::errors::Result;

const SCHEMA_SQL: &str = include_str!("../../schema.sql");

#[instrument(name = "db::connect", skip(database_url), err(Display))]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(max_connections)
    .connect(database_url)
    .await?;
  info!(max_connections, "Connected to PostgreSQL.");
  Ok(pool)
}

/// Runs the bundled schema. Every statement is `IF NOT EXISTS`, so repeated runs are harmless.
#[instrument(name = "db::apply_schema", skip(pool), err(Display))]
pub async fn apply_schema(pool: &PgPool) -> Result<()> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  info!("Database schema applied.");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn schema_holds_any_cart_quantity_and_large_totals() {
    assert!(SCHEMA_SQL.contains("quantity     BIGINT"));
    assert!(SCHEMA_SQL.contains("total_amount  NUMERIC(28,2)"));
    assert!(SCHEMA_SQL.contains("ALTER TABLE order_items ALTER COLUMN quantity TYPE BIGINT;"));
  }
}
