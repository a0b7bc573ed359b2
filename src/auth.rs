use std::future::{Ready, ready};

use actix_session::SessionExt;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use serde_json::json;

use crate::ADMIN_SESSION_KEY;

/// Marker extractor proving the request carries a valid admin session.
///
/// The gate is a boolean capability check, not a user identity: one shared
/// secret unlocks it and the session cookie holds a single flag.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        match session.get::<bool>(ADMIN_SESSION_KEY) {
            Ok(Some(true)) => ready(Ok(AdminUser)),
            _ => ready(Err(unauthorized())),
        }
    }
}

fn unauthorized() -> Error {
    let response = HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" }));
    InternalError::from_response("missing admin session", response).into()
}
