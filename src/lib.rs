pub mod auth;
pub mod config;
pub mod domain;
pub mod forms;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;

/// Session key that marks an authenticated admin.
pub const ADMIN_SESSION_KEY: &str = "admin_session";

/// Fallback admin password used when `ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
