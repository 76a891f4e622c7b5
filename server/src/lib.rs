// server/src/lib.rs

//! HTTP front end for the Tiffin ordering core: configuration, PostgreSQL adapters,
//! accounts and sessions, and the actix-web routes.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
