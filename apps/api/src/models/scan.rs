use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::resume::ResumeSkillsRow;

/// One comparison of a résumé against a job role. Rows are never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistoryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_role_id: Uuid,
    pub job_role_title: String,
    pub file_name: String,
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub scan_duration_ms: i64,
    pub created_at: DateTime<Utc>,
}

/// History listing shape.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummaryRow {
    pub id: Uuid,
    pub job_role_title: String,
    pub file_name: String,
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDetail {
    #[serde(flatten)]
    pub scan: ScanHistoryRow,
    pub resume: Option<ResumeSkillsRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_role_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub scan_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistoryPage {
    pub scans: Vec<ScanSummaryRow>,
    pub pagination: crate::pagination::PageMeta,
}

/// Everything needed to insert a scan-history row.
pub struct NewScan<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_role_id: Uuid,
    pub job_role_title: &'a str,
    pub file_name: &'a str,
    pub match_percentage: f64,
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub extra_skills: &'a [String],
    pub suggestions: &'a [String],
    pub scan_duration_ms: i64,
}
