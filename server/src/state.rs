// server/src/state.rs

use crate::config::{AppConfig, StorageBackend};
use crate::db::{self, seed, PgMenuCatalog, PgOrderStore, PgSessionStore, PgUserStore};
use crate::errors::{AppError, Result};
use std::sync::Arc;
use tiffin::Platform;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
  pub platform: Platform,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Wires the platform onto the configured backend, applying schema and seed data as asked.
  pub async fn build(config: AppConfig) -> Result<Self> {
    let config = Arc::new(config);
    let platform = match config.storage_backend {
      StorageBackend::Postgres => {
        let database_url = config
          .database_url
          .as_deref()
          .ok_or_else(|| AppError::Config("DATABASE_URL is required for the postgres backend".to_string()))?;
        let pool = db::connect(database_url, config.db_max_connections).await?;
        if config.apply_schema {
          db::apply_schema(&pool).await?;
        }
        let platform = Platform::new(
          Arc::new(PgMenuCatalog::new(pool.clone())),
          Arc::new(PgOrderStore::new(pool.clone())),
          Arc::new(PgUserStore::new(pool.clone())),
          Arc::new(PgSessionStore::new(pool.clone())),
          config.status_transitions,
        );
        if config.seed_db {
          seed::seed_postgres(&pool, &platform, &config).await?;
        }
        platform
      }
      StorageBackend::Memory => {
        let (platform, catalog, _orders) = Platform::in_memory(config.status_transitions);
        if config.seed_db {
          seed::seed_memory(&catalog, &platform, &config).await?;
        }
        platform
      }
    };
    info!(backend = ?config.storage_backend, policy = ?config.status_transitions, "Platform ready.");
    Ok(AppState { platform, config })
  }
}
