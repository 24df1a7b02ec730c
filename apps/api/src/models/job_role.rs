use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pagination::PageMeta;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Administrator text, not necessarily canonical dictionary names.
    pub required_skills: Vec<String>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub is_active: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public listing shape for active roles.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRoleRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub created_by: Uuid,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRoleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
}

/// A job role that passed validation, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRoleDraft {
    pub title: String,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRolePage {
    pub job_roles: Vec<JobRoleRow>,
    pub pagination: PageMeta,
}
