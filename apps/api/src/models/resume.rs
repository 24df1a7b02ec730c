use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::skills::extractor::CategorizedSkills;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    /// Object-store key of the original PDF.
    pub file_path: String,
    pub file_size: i64,
    pub extracted_text: String,
    pub extracted_skills: Vec<String>,
    pub categorized_skills: Json<CategorizedSkills>,
    pub page_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing shape for a user's résumés.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummaryRow {
    pub id: Uuid,
    pub file_name: String,
    pub extracted_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The résumé fields embedded in a scan detail.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSkillsRow {
    pub id: Uuid,
    pub file_name: String,
    pub extracted_skills: Vec<String>,
    pub categorized_skills: Json<CategorizedSkills>,
}

/// Everything needed to insert a new résumé row.
pub struct NewResume<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: &'a str,
    pub file_path: &'a str,
    pub file_size: i64,
    pub extracted_text: &'a str,
    pub extracted_skills: &'a [String],
    pub categorized_skills: &'a CategorizedSkills,
    pub page_count: Option<i32>,
}

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub file_name: String,
    pub extracted_skills: Vec<String>,
    pub categorized_skills: CategorizedSkills,
    pub page_count: Option<i32>,
}
