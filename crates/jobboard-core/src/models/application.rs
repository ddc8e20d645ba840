use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

/// Review status of an application. New applications always start `IN_PROGRESS`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    InProgress,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// Whether a reviewer may move an application into this status
    pub fn is_decision(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApplicationStatus::InProgress => write!(f, "IN_PROGRESS"),
            ApplicationStatus::Rejected => write!(f, "REJECTED"),
            ApplicationStatus::Accepted => write!(f, "ACCEPTED"),
        }
    }
}

/// A submitted application. `cv_url` always points at an uploaded CV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_role_id: Uuid,
    pub status: ApplicationStatus,
    pub cv_url: String,
    pub created_at: DateTime<Utc>,
}

/// Values inserted when an application is created
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_role_id: Uuid,
    pub cv_url: String,
    pub status: ApplicationStatus,
}

impl NewApplication {
    pub fn in_progress(id: Uuid, user_id: Uuid, job_role_id: Uuid, cv_url: String) -> Self {
        NewApplication {
            id,
            user_id,
            job_role_id,
            cv_url,
            status: ApplicationStatus::InProgress,
        }
    }
}

/// Listing filter. `user_id` is forced to the caller for non-admins.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub user_id: Option<Uuid>,
    pub job_role_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}
