use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::DbState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use jobboard_core::models::{JobRoleFilter, JobRoleRequest, JobRoleSummary};
use jobboard_core::AppError;
use uuid::Uuid;
use validator::Validate;

fn not_found() -> AppError {
    AppError::NotFound("Job role not found".to_string())
}

#[utoipa::path(
    get,
    path = "/api/job-roles",
    tag = "job-roles",
    params(
        ("capabilityId" = Option<Uuid>, Query, description = "Only roles in this capability"),
        ("bandId" = Option<Uuid>, Query, description = "Only roles in this band"),
        ("open" = Option<bool>, Query, description = "true: only open roles, false: only roles that are not open")
    ),
    responses(
        (status = 200, description = "Job roles ordered by closing date", body = Vec<JobRoleSummary>),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn list_job_roles(
    State(db): State<DbState>,
    filter: Result<Query<JobRoleFilter>, QueryRejection>,
) -> Result<Json<Vec<JobRoleSummary>>, HttpAppError> {
    let Query(filter) = filter?;
    Ok(Json(db.job_roles.list_job_roles(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/job-roles/{id}",
    tag = "job-roles",
    params(("id" = Uuid, Path, description = "Job role ID")),
    responses(
        (status = 200, description = "Job role", body = JobRoleSummary),
        (status = 404, description = "Job role not found", body = ErrorResponse)
    )
)]
pub async fn get_job_role(
    State(db): State<DbState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRoleSummary>, HttpAppError> {
    let role = db.job_roles.get_job_role(id).await?.ok_or_else(not_found)?;
    Ok(Json(role))
}

#[utoipa::path(
    post,
    path = "/api/job-roles",
    tag = "job-roles",
    request_body = JobRoleRequest,
    responses(
        (status = 201, description = "Job role created", body = JobRoleSummary),
        (status = 400, description = "Invalid fields or unknown capability, band or status", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn create_job_role(
    State(db): State<DbState>,
    auth: AuthContext,
    ValidatedJson(request): ValidatedJson<JobRoleRequest>,
) -> Result<(StatusCode, Json<JobRoleSummary>), HttpAppError> {
    auth.require_admin()?;
    let request = request.trimmed();
    request.validate().map_err(AppError::from)?;

    let role = db.job_roles.create_job_role(&request).await?;
    tracing::info!(job_role_id = %role.id, role_name = %role.role_name, "Job role created");
    Ok((StatusCode::CREATED, Json(role)))
}

#[utoipa::path(
    put,
    path = "/api/job-roles/{id}",
    tag = "job-roles",
    params(("id" = Uuid, Path, description = "Job role ID")),
    request_body = JobRoleRequest,
    responses(
        (status = 200, description = "Job role replaced", body = JobRoleSummary),
        (status = 400, description = "Invalid fields or unknown capability, band or status", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Job role not found", body = ErrorResponse)
    )
)]
pub async fn update_job_role(
    State(db): State<DbState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<JobRoleRequest>,
) -> Result<Json<JobRoleSummary>, HttpAppError> {
    auth.require_admin()?;
    let request = request.trimmed();
    request.validate().map_err(AppError::from)?;

    let role = db
        .job_roles
        .update_job_role(id, &request)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(job_role_id = %role.id, "Job role updated");
    Ok(Json(role))
}

#[utoipa::path(
    delete,
    path = "/api/job-roles/{id}",
    tag = "job-roles",
    params(("id" = Uuid, Path, description = "Job role ID")),
    responses(
        (status = 204, description = "Job role deleted"),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Job role not found", body = ErrorResponse),
        (status = 409, description = "Job role has applications", body = ErrorResponse)
    )
)]
pub async fn delete_job_role(
    State(db): State<DbState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HttpAppError> {
    auth.require_admin()?;

    if !db.job_roles.delete_job_role(id).await? {
        return Err(not_found().into());
    }
    tracing::info!(job_role_id = %id, "Job role deleted");
    Ok(StatusCode::NO_CONTENT)
}
