use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;

/// Multipart payload accepted by the image upload endpoint.
#[derive(Debug, MultipartForm)]
pub struct UploadImageForm {
    /// Uploaded file; must carry an `image/*` content type.
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}
