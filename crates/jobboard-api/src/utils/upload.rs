//! Multipart extraction for application submissions

use axum::extract::Multipart;
use jobboard_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;
use crate::services::UploadCandidate;

/// Field names accepted for the CV part
const FILE_FIELDS: [&str; 2] = ["cv", "file"];

/// Raw fields of a submission form. Text fields are kept as sent and parsed by the caller.
#[derive(Debug, Default)]
pub struct ApplicationForm {
    pub user_id: Option<String>,
    pub job_role_id: Option<String>,
    pub file: Option<UploadCandidate>,
}

/// Read `userId`, `jobRoleId` and a single file part from the form.
///
/// A file part without a filename or without content counts as absent. Unknown
/// fields are ignored.
pub async fn extract_application_form(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<ApplicationForm, HttpAppError> {
    let mut form = ApplicationForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "userId" => form.user_id = Some(field.text().await?.trim().to_string()),
            "jobRoleId" => form.job_role_id = Some(field.text().await?.trim().to_string()),
            name if FILE_FIELDS.contains(&name) => {
                if form.file.is_some() {
                    return Err(HttpAppError(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one CV file"
                            .to_string(),
                    )));
                }

                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                validate_filename(&filename)?;
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await?;

                validate_file_size(data.len(), max_file_size)?;

                if !filename.is_empty() && !data.is_empty() {
                    form.file = Some(UploadCandidate {
                        filename,
                        content_type,
                        data: data.to_vec(),
                    });
                }
            }
            _ => {
                tracing::debug!(field = %field_name, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

/// A CV filename becomes the last segment of its storage key, so it must not
/// carry path separators or NUL.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.contains(['/', '\\', '\0']) {
        return Err(AppError::InvalidInput(
            "File name must not contain path separators".to_string(),
        ));
    }
    Ok(())
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Parse a required UUID form field
pub fn parse_uuid_field(value: Option<&str>, field: &str) -> Result<Uuid, AppError> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("{} is required", field)))?;
    Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidInput(format!("{} must be a valid UUID", field)))
}
