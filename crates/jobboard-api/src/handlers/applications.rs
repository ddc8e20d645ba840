//! Application submission and review
//!
//! Submission order: multipart extraction → file presence → validation gate →
//! form ids → authorization → job-role lookup → submission workflow. Nothing is
//! uploaded until every check before the workflow has passed.

use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::{SubmissionError, SubmissionService};
use crate::state::{AppState, DbState, UploadConfig};
use crate::utils::upload::{extract_application_form, parse_uuid_field};
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::QueryRejection, Multipart, Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use jobboard_core::models::{
    Application, ApplicationFilter, UpdateApplicationStatusRequest,
};
use jobboard_core::AppError;
use jobboard_storage::application_cv_key_from_location;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ApplicationQuery {
    /// Only applications for this job role
    pub job_role_id: Option<Uuid>,
}

fn not_found() -> AppError {
    AppError::NotFound("Application not found".to_string())
}

/// Load an application the caller may see. Other users' applications are reported
/// as missing rather than forbidden.
async fn load_visible(
    db: &DbState,
    auth: &AuthContext,
    id: Uuid,
) -> Result<Application, AppError> {
    match db.applications.get_application(id).await? {
        Some(application) if auth.can_act_for(application.user_id) => Ok(application),
        _ => Err(not_found()),
    }
}

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "applications",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Fields: userId (defaults to the caller), jobRoleId, and one CV file part named `cv` or `file`"),
    responses(
        (status = 201, description = "Application submitted", body = Application),
        (status = 400, description = "Missing CV, disallowed file type or extension, or invalid ids", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Submitting on behalf of another user", body = ErrorResponse),
        (status = 404, description = "Job role or user not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Application>), HttpAppError> {
    let form = extract_application_form(multipart?, state.upload.max_file_size).await?;

    let file = form.file.ok_or(SubmissionError::FileMissing)?;
    state.upload.gate.check(&file.content_type, &file.filename)?;

    let user_id = match form.user_id.as_deref() {
        Some(raw) if !raw.is_empty() => parse_uuid_field(Some(raw), "userId")?,
        _ => auth.user_id,
    };
    let job_role_id = parse_uuid_field(form.job_role_id.as_deref(), "jobRoleId")?;

    if !auth.can_act_for(user_id) {
        return Err(AppError::Forbidden(
            "You can only submit applications for yourself".to_string(),
        )
        .into());
    }
    if user_id != auth.user_id && state.db.users.find_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()).into());
    }
    if !state.db.job_roles.job_role_exists(job_role_id).await? {
        return Err(AppError::NotFound("Job role not found".to_string()).into());
    }

    let application = SubmissionService::from_state(&state)
        .submit(user_id, job_role_id, file)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "applications",
    params(ApplicationQuery),
    responses(
        (status = 200, description = "Applications, newest first. Applicants only see their own.", body = Vec<Application>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn list_applications(
    State(db): State<DbState>,
    auth: AuthContext,
    query: Result<Query<ApplicationQuery>, QueryRejection>,
) -> Result<Json<Vec<Application>>, HttpAppError> {
    let Query(query) = query?;
    let filter = ApplicationFilter {
        user_id: (!auth.is_admin()).then_some(auth.user_id),
        job_role_id: query.job_role_id,
    };
    Ok(Json(db.applications.list_applications(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = "applications",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application", body = Application),
        (status = 404, description = "Application not found", body = ErrorResponse)
    )
)]
pub async fn get_application(
    State(db): State<DbState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Application>, HttpAppError> {
    Ok(Json(load_visible(&db, &auth, id).await?))
}

/// Stream the stored CV back to its owner or an admin
#[utoipa::path(
    get,
    path = "/api/applications/{id}/cv",
    tag = "applications",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "CV file", content_type = "application/octet-stream"),
        (status = 404, description = "Application or CV not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn download_cv(
    State(db): State<DbState>,
    State(upload): State<UploadConfig>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let application = load_visible(&db, &auth, id).await?;

    let key = application_cv_key_from_location(&application.cv_url, &application.id.to_string())
        .ok_or_else(|| {
            AppError::Internal(format!(
                "CV location for application {} does not contain its storage key",
                application.id
            ))
        })?;
    let data = upload.storage.download(&key).await?;

    let filename = key.rsplit('/').next().unwrap_or(&key);
    Ok((
        [
            (header::CONTENT_TYPE, content_type_for(filename).to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename.replace('"', "")),
            ),
        ],
        data,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    tag = "applications",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Application),
        (status = 400, description = "Status must be ACCEPTED or REJECTED", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse)
    )
)]
pub async fn update_application_status(
    State(db): State<DbState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateApplicationStatusRequest>,
) -> Result<Json<Application>, HttpAppError> {
    auth.require_admin()?;

    if !request.status.is_decision() {
        return Err(AppError::InvalidInput(
            "Status must be ACCEPTED or REJECTED".to_string(),
        )
        .into());
    }

    let application = db
        .applications
        .update_application_status(id, request.status)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        application_id = %application.id,
        status = %application.status,
        reviewer_id = %auth.user_id,
        "Application status updated"
    );
    Ok(Json(application))
}

fn content_type_for(filename: &str) -> &'static str {
    let lowered = filename.to_lowercase();
    if lowered.ends_with(".pdf") {
        "application/pdf"
    } else if lowered.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lowered.ends_with(".doc") {
        "application/msword"
    } else {
        "application/octet-stream"
    }
}
