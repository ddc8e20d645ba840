use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Capability (job family) a role belongs to, e.g. "Engineering"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Capability {
    pub id: Uuid,
    pub name: String,
}

/// Seniority band. Lower `level` sorts first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Band {
    pub id: Uuid,
    pub name: String,
    pub level: i32,
}

/// Lifecycle status of a job role, e.g. "open" or "closed"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct JobRoleStatus {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCapabilityRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Capability name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

impl CreateCapabilityRequest {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBandRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Band name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(range(min = 0, message = "Band level must not be negative"))]
    pub level: i32,
}

impl CreateBandRequest {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self
        }
    }
}
