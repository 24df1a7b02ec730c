use axum::extract::{multipart::MultipartError, Multipart, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::{required_user_id, ApiJson, ApiPath, ApiQuery};
use crate::models::job_role::JobRoleSummaryRow;
use crate::models::resume::{ResumeSummaryRow, UploadResponse};
use crate::models::scan::{CompareRequest, CompareResponse, ScanDetail, ScanHistoryPage};
use crate::pagination::PageQuery;
use crate::parsing::UploadedFile;
use crate::resumes::service;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<Uuid>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("File too large".to_string())
    } else {
        AppError::Validation(err.body_text())
    }
}

/// Reads the `user_id` text field and the `resume` file field.
async fn read_upload(mut multipart: Multipart) -> Result<(Uuid, UploadedFile), AppError> {
    let mut user_id = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") | Some("userId") => {
                let raw = field.text().await.map_err(multipart_error)?;
                let parsed = Uuid::parse_str(raw.trim())
                    .map_err(|_| AppError::Validation("Invalid user ID".to_string()))?;
                user_id = Some(parsed);
            }
            Some("resume") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("User ID is required".to_string()))?;
    let file = file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    Ok((user_id, file))
}

/// POST /api/v1/resumes/upload
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ApiResponse<UploadResponse>, AppError> {
    let (user_id, file) = read_upload(multipart).await?;
    let uploaded = service::upload_resume(&state, user_id, file).await?;
    Ok(ApiResponse::created(
        "Resume uploaded and parsed successfully",
        uploaded,
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<ApiResponse<Vec<ResumeSummaryRow>>, AppError> {
    let user_id = required_user_id(params.user_id)?;
    let resumes = store::resumes::list_user_resumes(&state.db, user_id).await?;
    Ok(ApiResponse::ok(resumes))
}

/// DELETE /api/v1/resumes/:resume_id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    ApiPath(resume_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<ApiResponse<()>, AppError> {
    let user_id = required_user_id(params.user_id)?;
    service::delete_resume(&state, user_id, resume_id).await?;
    Ok(ApiResponse::message("Resume deleted successfully"))
}

/// POST /api/v1/resumes/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CompareRequest>,
) -> Result<ApiResponse<CompareResponse>, AppError> {
    let result = service::compare_resume(&state, &req).await?;
    Ok(ApiResponse::with_message("Resume compared successfully", result))
}

/// GET /api/v1/resumes/history
pub async fn handle_scan_history(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HistoryQuery>,
) -> Result<ApiResponse<ScanHistoryPage>, AppError> {
    let user_id = required_user_id(params.user_id)?;
    let page = PageQuery {
        page: params.page,
        limit: params.limit,
    }
    .validate()?;

    let (scans, total) = store::scans::list_user_scans(&state.db, user_id, page).await?;
    Ok(ApiResponse::ok(ScanHistoryPage {
        scans,
        pagination: page.meta(total),
    }))
}

/// GET /api/v1/resumes/history/:scan_id
pub async fn handle_scan_detail(
    State(state): State<AppState>,
    ApiPath(scan_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<ApiResponse<ScanDetail>, AppError> {
    let user_id = required_user_id(params.user_id)?;
    let detail = service::scan_detail(&state, user_id, scan_id).await?;
    Ok(ApiResponse::ok(detail))
}

/// DELETE /api/v1/resumes/history/:scan_id
pub async fn handle_delete_scan(
    State(state): State<AppState>,
    ApiPath(scan_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<ApiResponse<()>, AppError> {
    let user_id = required_user_id(params.user_id)?;
    service::delete_scan(&state, user_id, scan_id).await?;
    Ok(ApiResponse::message("Scan history deleted successfully"))
}

/// GET /api/v1/resumes/job-roles
pub async fn handle_active_job_roles(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<JobRoleSummaryRow>>, AppError> {
    let roles = store::job_roles::list_active_job_roles(&state.db).await?;
    Ok(ApiResponse::ok(roles))
}
