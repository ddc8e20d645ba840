//! Repository trait abstractions
//!
//! These traits define the narrow interface that services and handlers need from
//! the database, so the API can be exercised against in-memory stores without a
//! running PostgreSQL instance. The Postgres repositories in `db` implement them.

use async_trait::async_trait;
use jobboard_core::models::{
    Application, ApplicationFilter, ApplicationStatus, Band, Capability, JobRoleFilter,
    JobRoleRequest, JobRoleStatus, JobRoleSummary, NewApplication, NewUser, User,
};
use jobboard_core::AppError;
use uuid::Uuid;

/// User lookups and registration
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Insert a user. A duplicate email yields `AppError::Conflict`.
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;
}

/// Reference data: capabilities, bands and job-role statuses
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError>;

    async fn create_capability(&self, name: &str) -> Result<Capability, AppError>;

    async fn list_bands(&self) -> Result<Vec<Band>, AppError>;

    async fn create_band(&self, name: &str, level: i32) -> Result<Band, AppError>;

    async fn list_job_role_statuses(&self) -> Result<Vec<JobRoleStatus>, AppError>;
}

#[async_trait]
pub trait JobRoleStore: Send + Sync {
    async fn list_job_roles(&self, filter: &JobRoleFilter)
        -> Result<Vec<JobRoleSummary>, AppError>;

    async fn get_job_role(&self, id: Uuid) -> Result<Option<JobRoleSummary>, AppError>;

    async fn job_role_exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Unknown capability, band or status yields `AppError::InvalidInput`.
    async fn create_job_role(&self, request: &JobRoleRequest) -> Result<JobRoleSummary, AppError>;

    /// Returns `None` when the role does not exist.
    async fn update_job_role(
        &self,
        id: Uuid,
        request: &JobRoleRequest,
    ) -> Result<Option<JobRoleSummary>, AppError>;

    /// Returns whether a row was deleted. A role with applications yields `AppError::Conflict`.
    async fn delete_job_role(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Application records
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn create_application(&self, application: NewApplication)
        -> Result<Application, AppError>;

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError>;

    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, AppError>;

    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError>;
}

/// Readiness probe
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
}
