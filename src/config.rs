use std::env;
use std::path::PathBuf;

use crate::DEFAULT_ADMIN_PASSWORD;

/// Server configuration shared with the route handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared admin password checked by the login endpoint.
    pub admin_password: String,
    /// Public base URL the storefront is served under.
    pub public_base_url: String,
    /// Directory uploaded images are written to and served from.
    pub uploads_dir: PathBuf,
}

impl ServerConfig {
    /// Build the configuration from environment variables, falling back to
    /// development defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            uploads_dir: env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "public/uploads".to_string())
                .into(),
        }
    }
}
