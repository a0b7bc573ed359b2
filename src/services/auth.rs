use crate::config::ServerConfig;
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

/// Checks the shared admin password by exact string comparison.
///
/// One shared secret, no accounts and no lockout on repeated failures; the
/// session cookie issued by the route is the only credential afterwards.
pub fn verify_password(config: &ServerConfig, form: &LoginForm) -> ServiceResult<()> {
    if form.password == config.admin_password {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            admin_password: "letmein".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
            uploads_dir: "public/uploads".into(),
        }
    }

    #[test]
    fn correct_password_is_accepted() {
        let form = LoginForm {
            password: "letmein".to_string(),
        };

        assert!(verify_password(&config(), &form).is_ok());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let form = LoginForm {
            password: "wrong".to_string(),
        };

        assert!(matches!(
            verify_password(&config(), &form),
            Err(ServiceError::Unauthorized)
        ));
    }
}
