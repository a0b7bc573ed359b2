use serde::Deserialize;

/// JSON payload accepted by the admin login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Shared admin password.
    pub password: String,
}
