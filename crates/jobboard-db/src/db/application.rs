use async_trait::async_trait;
use jobboard_core::models::{Application, ApplicationFilter, ApplicationStatus, NewApplication};
use jobboard_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::constraint::map_write_error;
use crate::store_traits::ApplicationStore;

/// Repository for submitted applications
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    #[tracing::instrument(skip(self, application), fields(db.table = "applications", db.operation = "insert", db.record_id = %application.id))]
    async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, AppError> {
        sqlx::query_as::<Postgres, Application>(
            r#"
            INSERT INTO applications (id, user_id, job_role_id, status, cv_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, job_role_id, status, cv_url, created_at
            "#,
        )
        .bind(application.id)
        .bind(application.user_id)
        .bind(application.job_role_id)
        .bind(application.status)
        .bind(&application.cv_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Application already exists", || {
                AppError::InvalidInput("Referenced user or job role does not exist".to_string())
            })
        })
    }

    #[tracing::instrument(skip(self), fields(db.table = "applications", db.operation = "select", db.record_id = %id))]
    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError> {
        let application = sqlx::query_as::<Postgres, Application>(
            "SELECT id, user_id, job_role_id, status, cv_url, created_at FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    #[tracing::instrument(skip(self), fields(db.table = "applications", db.operation = "select"))]
    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, AppError> {
        let applications = sqlx::query_as::<Postgres, Application>(
            r#"
            SELECT id, user_id, job_role_id, status, cv_url, created_at
            FROM applications
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::uuid IS NULL OR job_role_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.job_role_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    #[tracing::instrument(skip(self), fields(db.table = "applications", db.operation = "update", db.record_id = %id))]
    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError> {
        let application = sqlx::query_as::<Postgres, Application>(
            r#"
            UPDATE applications SET status = $2
            WHERE id = $1
            RETURNING id, user_id, job_role_id, status, cv_url, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }
}
