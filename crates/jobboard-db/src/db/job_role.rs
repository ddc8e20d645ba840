use async_trait::async_trait;
use jobboard_core::models::{JobRoleFilter, JobRoleRequest, JobRoleSummary};
use jobboard_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::constraint::map_write_error;
use crate::store_traits::JobRoleStore;

const SUMMARY_SELECT: &str = r#"
    SELECT jr.id, jr.role_name, jr.description, jr.responsibilities, jr.job_spec_url,
           jr.location, jr.capability_id, c.name AS capability_name,
           jr.band_id, b.name AS band_name, b.level AS band_level,
           jr.status_id, s.name AS status_name,
           jr.closing_date, jr.number_of_open_positions, jr.created_at, jr.updated_at
    FROM job_roles jr
    JOIN capabilities c ON c.id = jr.capability_id
    JOIN bands b ON b.id = jr.band_id
    JOIN job_role_statuses s ON s.id = jr.status_id
"#;

const UNKNOWN_REFERENCE: &str = "Referenced capability, band or status does not exist";

/// Repository for job roles
#[derive(Clone)]
pub struct JobRoleRepository {
    pool: PgPool,
}

impl JobRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_summary(&self, id: Uuid) -> Result<Option<JobRoleSummary>, AppError> {
        let query = format!("{} WHERE jr.id = $1", SUMMARY_SELECT);
        let role = sqlx::query_as::<Postgres, JobRoleSummary>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    async fn require_summary(&self, id: Uuid) -> Result<JobRoleSummary, AppError> {
        self.fetch_summary(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Job role {} vanished after write", id)))
    }
}

#[async_trait]
impl JobRoleStore for JobRoleRepository {
    #[tracing::instrument(skip(self), fields(db.table = "job_roles", db.operation = "select"))]
    async fn list_job_roles(
        &self,
        filter: &JobRoleFilter,
    ) -> Result<Vec<JobRoleSummary>, AppError> {
        let query = format!(
            r#"{}
            WHERE ($1::uuid IS NULL OR jr.capability_id = $1)
              AND ($2::uuid IS NULL OR jr.band_id = $2)
              AND ($3::boolean IS NULL OR (lower(s.name) = 'open') = $3)
            ORDER BY jr.closing_date ASC, jr.role_name ASC
            "#,
            SUMMARY_SELECT
        );

        let roles = sqlx::query_as::<Postgres, JobRoleSummary>(&query)
            .bind(filter.capability_id)
            .bind(filter.band_id)
            .bind(filter.open)
            .fetch_all(&self.pool)
            .await?;

        Ok(roles)
    }

    #[tracing::instrument(skip(self), fields(db.table = "job_roles", db.operation = "select", db.record_id = %id))]
    async fn get_job_role(&self, id: Uuid) -> Result<Option<JobRoleSummary>, AppError> {
        self.fetch_summary(id).await
    }

    #[tracing::instrument(skip(self), fields(db.table = "job_roles", db.operation = "select", db.record_id = %id))]
    async fn job_role_exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM job_roles WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "job_roles", db.operation = "insert"))]
    async fn create_job_role(&self, request: &JobRoleRequest) -> Result<JobRoleSummary, AppError> {
        let id = sqlx::query_scalar::<Postgres, Uuid>(
            r#"
            INSERT INTO job_roles (
                role_name, description, responsibilities, job_spec_url, location,
                capability_id, band_id, status_id, closing_date, number_of_open_positions
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&request.role_name)
        .bind(&request.description)
        .bind(&request.responsibilities)
        .bind(&request.job_spec_url)
        .bind(&request.location)
        .bind(request.capability_id)
        .bind(request.band_id)
        .bind(request.status_id)
        .bind(request.closing_date)
        .bind(request.number_of_open_positions)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Job role already exists", || {
                AppError::InvalidInput(UNKNOWN_REFERENCE.to_string())
            })
        })?;

        self.require_summary(id).await
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "job_roles", db.operation = "update", db.record_id = %id))]
    async fn update_job_role(
        &self,
        id: Uuid,
        request: &JobRoleRequest,
    ) -> Result<Option<JobRoleSummary>, AppError> {
        let updated = sqlx::query_scalar::<Postgres, Uuid>(
            r#"
            UPDATE job_roles
            SET role_name = $2, description = $3, responsibilities = $4, job_spec_url = $5,
                location = $6, capability_id = $7, band_id = $8, status_id = $9,
                closing_date = $10, number_of_open_positions = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&request.role_name)
        .bind(&request.description)
        .bind(&request.responsibilities)
        .bind(&request.job_spec_url)
        .bind(&request.location)
        .bind(request.capability_id)
        .bind(request.band_id)
        .bind(request.status_id)
        .bind(request.closing_date)
        .bind(request.number_of_open_positions)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Job role already exists", || {
                AppError::InvalidInput(UNKNOWN_REFERENCE.to_string())
            })
        })?;

        match updated {
            Some(id) => Ok(Some(self.require_summary(id).await?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self), fields(db.table = "job_roles", db.operation = "delete", db.record_id = %id))]
    async fn delete_job_role(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM job_roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(e, "Job role already exists", || {
                    AppError::Conflict(
                        "Job role has applications and cannot be deleted".to_string(),
                    )
                })
            })?;

        Ok(result.rows_affected() > 0)
    }
}
