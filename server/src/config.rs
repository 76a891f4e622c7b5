// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tiffin::TransitionPolicy;

/// Where the ports are backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  /// Everything in process memory; lost on restart.
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(raw: &str) -> Result<Self> {
    match raw.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!("Invalid STORAGE_BACKEND: {}", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  /// Required when `storage_backend` is Postgres.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub apply_schema: bool,
  pub seed_db: bool,
  pub seed_admin_email: String,
  pub seed_admin_password: String,
  pub order_status_poll_ms: u64,
  pub status_transitions: TransitionPolicy,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };
    let parse_env = |var_name: &str, default: &str| get_env(var_name).unwrap_or_else(|_| default.to_string());

    let server_host = parse_env("SERVER_HOST", "127.0.0.1");
    let server_port = parse_env("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = parse_env("STORAGE_BACKEND", "postgres").parse::<StorageBackend>()?;
    let database_url = match storage_backend {
      StorageBackend::Postgres => Some(get_env("DATABASE_URL")?),
      StorageBackend::Memory => get_env("DATABASE_URL").ok(),
    };
    let db_max_connections = parse_env("DB_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;

    let apply_schema = parse_env("APPLY_SCHEMA", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid APPLY_SCHEMA value: {}", e)))?;
    let seed_db = parse_env("SEED_DB", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;
    let seed_admin_email = parse_env("SEED_ADMIN_EMAIL", "admin@example.com");
    let seed_admin_password = parse_env("SEED_ADMIN_PASSWORD", "admin123");

    let order_status_poll_ms = parse_env("ORDER_STATUS_POLL_MS", "5000")
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid ORDER_STATUS_POLL_MS: {}", e)))?;
    let status_transitions = parse_env("STATUS_TRANSITIONS", "unrestricted")
      .parse::<TransitionPolicy>()
      .map_err(|e| AppError::Config(format!("Invalid STATUS_TRANSITIONS: {}", e)))?;

    let log_format = match parse_env("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
      "text" => LogFormat::Text,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT: {}", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      db_max_connections,
      apply_schema,
      seed_db,
      seed_admin_email,
      seed_admin_password,
      order_status_poll_ms,
      status_transitions,
      log_format,
    })
  }

  /// In-memory configuration used by tests and local demos.
  pub fn in_memory() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      storage_backend: StorageBackend::Memory,
      database_url: None,
      db_max_connections: 5,
      apply_schema: false,
      seed_db: true,
      seed_admin_email: "admin@example.com".to_string(),
      seed_admin_password: "admin123".to_string(),
      order_status_poll_ms: 5000,
      status_transitions: TransitionPolicy::Unrestricted,
      log_format: LogFormat::Text,
    }
  }
}
