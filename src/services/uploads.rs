use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::forms::upload::UploadImageForm;
use crate::repository::RepositoryError;
use crate::services::{ServiceError, ServiceResult};

/// Stores an uploaded image under `uploads_dir` with a generated unique name
/// and returns the public `/uploads/...` path for the stored file.
pub fn save_image(uploads_dir: &Path, form: UploadImageForm) -> ServiceResult<String> {
    if form.file.size == 0 {
        return Err(ServiceError::Validation("No file uploaded".to_string()));
    }

    let is_image = form
        .file
        .content_type
        .as_ref()
        .is_some_and(|content_type| content_type.type_() == mime::IMAGE);

    if !is_image {
        return Err(ServiceError::Validation(
            "File must be an image".to_string(),
        ));
    }

    let filename = match original_extension(form.file.file_name.as_deref()) {
        Some(extension) => format!("{}.{extension}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    };

    fs::create_dir_all(uploads_dir).map_err(io_error)?;
    fs::copy(form.file.file.path(), uploads_dir.join(&filename)).map_err(io_error)?;

    Ok(format!("/uploads/{filename}"))
}

fn original_extension(file_name: Option<&str>) -> Option<String> {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .filter(|extension| !extension.is_empty())
}

fn io_error(err: std::io::Error) -> ServiceError {
    ServiceError::Repository(RepositoryError::Io(err))
}
