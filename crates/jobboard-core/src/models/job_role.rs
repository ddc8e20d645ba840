use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Job role row as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: Uuid,
    pub role_name: String,
    pub description: String,
    pub responsibilities: String,
    pub job_spec_url: String,
    pub location: String,
    pub capability_id: Uuid,
    pub band_id: Uuid,
    pub status_id: Uuid,
    pub closing_date: NaiveDate,
    pub number_of_open_positions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read view of a job role with its capability, band and status names joined in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct JobRoleSummary {
    pub id: Uuid,
    pub role_name: String,
    pub description: String,
    pub responsibilities: String,
    pub job_spec_url: String,
    pub location: String,
    pub capability_id: Uuid,
    pub capability_name: String,
    pub band_id: Uuid,
    pub band_name: String,
    pub band_level: i32,
    pub status_id: Uuid,
    pub status_name: String,
    pub closing_date: NaiveDate,
    pub number_of_open_positions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRoleSummary {
    pub fn is_open(&self) -> bool {
        self.status_name.eq_ignore_ascii_case("open")
    }
}

/// Request body for creating or replacing a job role
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Role name must be between 1 and 255 characters"
    ))]
    pub role_name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Responsibilities are required"))]
    pub responsibilities: String,
    #[validate(url(message = "Job spec URL must be a valid URL"))]
    pub job_spec_url: String,
    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,
    pub capability_id: Uuid,
    pub band_id: Uuid,
    pub status_id: Uuid,
    pub closing_date: NaiveDate,
    #[validate(range(min = 1, message = "Number of open positions must be at least 1"))]
    pub number_of_open_positions: i32,
}

impl JobRoleRequest {
    /// Trim surrounding whitespace from the text fields; validate after this.
    pub fn trimmed(self) -> Self {
        Self {
            role_name: self.role_name.trim().to_string(),
            description: self.description.trim().to_string(),
            responsibilities: self.responsibilities.trim().to_string(),
            job_spec_url: self.job_spec_url.trim().to_string(),
            location: self.location.trim().to_string(),
            ..self
        }
    }
}

/// Filters accepted by the job-role listing
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleFilter {
    pub capability_id: Option<Uuid>,
    pub band_id: Option<Uuid>,
    /// When true only roles whose status is "open" are returned
    pub open: Option<bool>,
}
