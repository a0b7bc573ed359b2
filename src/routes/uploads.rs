use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::auth::AdminUser;
use crate::config::ServerConfig;
use crate::forms::upload::UploadImageForm;
use crate::services::ServiceError;
use crate::services::uploads::save_image;

#[post("/api/upload")]
/// Store an uploaded image and return its public `/uploads/...` path.
pub async fn upload_image(
    _admin: AdminUser,
    config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    match save_image(&config.uploads_dir, form) {
        Ok(filename) => HttpResponse::Ok().json(json!({ "success": true, "filename": filename })),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to store upload: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to upload file" }))
        }
    }
}
