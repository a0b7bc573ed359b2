use actix_session::Session;
use actix_web::{HttpResponse, Responder, delete, post, web};
use serde_json::json;

use crate::ADMIN_SESSION_KEY;
use crate::config::ServerConfig;
use crate::forms::auth::LoginForm;
use crate::services::auth::verify_password;

#[post("/api/admin/login")]
/// Exchange the shared admin password for a 24-hour session cookie.
pub async fn login(
    session: Session,
    config: web::Data<ServerConfig>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    if verify_password(config.get_ref(), &form).is_err() {
        return HttpResponse::Unauthorized().json(json!({ "error": "Invalid password" }));
    }

    if let Err(err) = session.insert(ADMIN_SESSION_KEY, true) {
        log::error!("Failed to store admin session: {err}");
        return HttpResponse::InternalServerError().json(json!({ "error": "Login failed" }));
    }
    session.renew();

    HttpResponse::Ok().json(json!({ "success": true }))
}

#[delete("/api/admin/login")]
pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    HttpResponse::Ok().json(json!({ "success": true }))
}
