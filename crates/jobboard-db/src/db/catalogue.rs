use async_trait::async_trait;
use jobboard_core::models::{Band, Capability, JobRoleStatus};
use jobboard_core::AppError;
use sqlx::{PgPool, Postgres};

use super::constraint::map_write_error;
use crate::store_traits::CatalogueStore;

/// Repository for the capability / band / status reference tables
#[derive(Clone)]
pub struct CatalogueRepository {
    pool: PgPool,
}

impl CatalogueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogueStore for CatalogueRepository {
    #[tracing::instrument(skip(self), fields(db.table = "capabilities", db.operation = "select"))]
    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError> {
        let rows = sqlx::query_as::<Postgres, Capability>(
            "SELECT id, name FROM capabilities ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.table = "capabilities", db.operation = "insert"))]
    async fn create_capability(&self, name: &str) -> Result<Capability, AppError> {
        sqlx::query_as::<Postgres, Capability>(
            "INSERT INTO capabilities (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Capability with this name already exists", || {
                AppError::Internal("Unexpected foreign key on capabilities".to_string())
            })
        })
    }

    #[tracing::instrument(skip(self), fields(db.table = "bands", db.operation = "select"))]
    async fn list_bands(&self) -> Result<Vec<Band>, AppError> {
        let rows = sqlx::query_as::<Postgres, Band>(
            "SELECT id, name, level FROM bands ORDER BY level ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.table = "bands", db.operation = "insert"))]
    async fn create_band(&self, name: &str, level: i32) -> Result<Band, AppError> {
        sqlx::query_as::<Postgres, Band>(
            "INSERT INTO bands (name, level) VALUES ($1, $2) RETURNING id, name, level",
        )
        .bind(name)
        .bind(level)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "Band with this name already exists", || {
                AppError::Internal("Unexpected foreign key on bands".to_string())
            })
        })
    }

    #[tracing::instrument(skip(self), fields(db.table = "job_role_statuses", db.operation = "select"))]
    async fn list_job_role_statuses(&self) -> Result<Vec<JobRoleStatus>, AppError> {
        let rows = sqlx::query_as::<Postgres, JobRoleStatus>(
            "SELECT id, name FROM job_role_statuses ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
