// server/src/services/mod.rs

pub mod accounts;
pub mod auth_service;
