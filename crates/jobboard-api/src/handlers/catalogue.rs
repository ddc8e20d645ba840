//! Reference data: capabilities, bands and job-role statuses

use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::DbState;
use axum::{extract::State, http::StatusCode, Json};
use jobboard_core::models::{
    Band, Capability, CreateBandRequest, CreateCapabilityRequest, JobRoleStatus,
};
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/capabilities",
    tag = "catalogue",
    responses(
        (status = 200, description = "All capabilities ordered by name", body = Vec<Capability>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn list_capabilities(
    State(db): State<DbState>,
) -> Result<Json<Vec<Capability>>, HttpAppError> {
    Ok(Json(db.catalogue.list_capabilities().await?))
}

#[utoipa::path(
    post,
    path = "/api/capabilities",
    tag = "catalogue",
    request_body = CreateCapabilityRequest,
    responses(
        (status = 201, description = "Capability created", body = Capability),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub async fn create_capability(
    State(db): State<DbState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateCapabilityRequest>,
) -> Result<(StatusCode, Json<Capability>), HttpAppError> {
    auth.require_admin()?;
    let request = request.trimmed();
    request.validate().map_err(jobboard_core::AppError::from)?;

    let capability = db.catalogue.create_capability(&request.name).await?;
    tracing::info!(capability_id = %capability.id, name = %capability.name, "Capability created");
    Ok((StatusCode::CREATED, Json(capability)))
}

#[utoipa::path(
    get,
    path = "/api/bands",
    tag = "catalogue",
    responses(
        (status = 200, description = "All bands ordered by level", body = Vec<Band>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn list_bands(State(db): State<DbState>) -> Result<Json<Vec<Band>>, HttpAppError> {
    Ok(Json(db.catalogue.list_bands().await?))
}

#[utoipa::path(
    post,
    path = "/api/bands",
    tag = "catalogue",
    request_body = CreateBandRequest,
    responses(
        (status = 201, description = "Band created", body = Band),
        (status = 400, description = "Invalid name or level", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse)
    )
)]
pub async fn create_band(
    State(db): State<DbState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<CreateBandRequest>,
) -> Result<(StatusCode, Json<Band>), HttpAppError> {
    auth.require_admin()?;
    let request = request.trimmed();
    request.validate().map_err(jobboard_core::AppError::from)?;

    let band = db.catalogue.create_band(&request.name, request.level).await?;
    tracing::info!(band_id = %band.id, level = band.level, "Band created");
    Ok((StatusCode::CREATED, Json(band)))
}

#[utoipa::path(
    get,
    path = "/api/job-role-statuses",
    tag = "catalogue",
    responses(
        (status = 200, description = "All job-role statuses", body = Vec<JobRoleStatus>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn list_job_role_statuses(
    State(db): State<DbState>,
) -> Result<Json<Vec<JobRoleStatus>>, HttpAppError> {
    Ok(Json(db.catalogue.list_job_role_statuses().await?))
}
