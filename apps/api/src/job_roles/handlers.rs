use axum::extract::State;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::job_roles::validation::{merge_update, validate_draft, validate_search};
use crate::models::job_role::{
    CreateJobRoleRequest, JobRoleDraft, JobRolePage, JobRoleRow, UpdateJobRoleRequest,
};
use crate::pagination::PageQuery;
use crate::state::AppState;
use crate::store::{self, is_unique_violation};

const DUPLICATE_TITLE: &str = "Job role with this title already exists";
const NOT_FOUND: &str = "Job role not found";

#[derive(Debug, Default, Deserialize)]
pub struct JobRoleListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND.to_string())
}

/// The pre-check gives a clean message; the unique index still catches races.
fn duplicate_or(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(DUPLICATE_TITLE.to_string())
    } else {
        AppError::Database(err)
    }
}

async fn ensure_title_free(
    state: &AppState,
    draft: &JobRoleDraft,
    except: Option<Uuid>,
) -> Result<(), AppError> {
    if store::job_roles::title_taken(&state.db, &draft.title, except).await? {
        warn!(title = %draft.title, "Rejected duplicate job role title");
        return Err(AppError::Conflict(DUPLICATE_TITLE.to_string()));
    }
    Ok(())
}

/// POST /api/v1/admin/job-roles
pub async fn handle_create_job_role(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateJobRoleRequest>,
) -> Result<ApiResponse<JobRoleRow>, AppError> {
    let created_by = req.created_by;
    let draft = validate_draft(req.into())?;
    ensure_title_free(&state, &draft, None).await?;

    let role = store::job_roles::insert_job_role(&state.db, Uuid::new_v4(), &draft, created_by)
        .await
        .map_err(duplicate_or)?;

    info!(job_role_id = %role.id, title = %role.title, "Created job role");
    Ok(ApiResponse::created("Job role created successfully", role))
}

/// GET /api/v1/admin/job-roles
pub async fn handle_list_job_roles(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<JobRoleListQuery>,
) -> Result<ApiResponse<JobRolePage>, AppError> {
    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    }
    .validate()?;
    let search = validate_search(query.search.as_deref())?;

    let (job_roles, total) =
        store::job_roles::list_job_roles(&state.db, search.as_deref(), page).await?;

    Ok(ApiResponse::ok(JobRolePage {
        job_roles,
        pagination: page.meta(total),
    }))
}

/// GET /api/v1/admin/job-roles/:job_id
pub async fn handle_get_job_role(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<Uuid>,
) -> Result<ApiResponse<JobRoleRow>, AppError> {
    let role = store::job_roles::find_job_role(&state.db, job_id)
        .await?
        .ok_or_else(not_found)?;
    Ok(ApiResponse::ok(role))
}

/// PUT /api/v1/admin/job-roles/:job_id
pub async fn handle_update_job_role(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateJobRoleRequest>,
) -> Result<ApiResponse<JobRoleRow>, AppError> {
    let existing = store::job_roles::find_job_role(&state.db, job_id)
        .await?
        .ok_or_else(not_found)?;

    let draft = validate_draft(merge_update(&existing, req))?;
    if !draft.title.eq_ignore_ascii_case(&existing.title) {
        ensure_title_free(&state, &draft, Some(job_id)).await?;
    }

    let role = store::job_roles::update_job_role(&state.db, job_id, &draft)
        .await
        .map_err(duplicate_or)?
        .ok_or_else(not_found)?;

    info!(job_role_id = %role.id, "Updated job role");
    Ok(ApiResponse::with_message("Job role updated successfully", role))
}

/// DELETE /api/v1/admin/job-roles/:job_id
pub async fn handle_delete_job_role(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<Uuid>,
) -> Result<ApiResponse<()>, AppError> {
    if !store::job_roles::deactivate_job_role(&state.db, job_id).await? {
        return Err(not_found());
    }
    info!(job_role_id = %job_id, "Deactivated job role");
    Ok(ApiResponse::message("Job role deleted successfully"))
}

/// PATCH /api/v1/admin/job-roles/:job_id/toggle-status
pub async fn handle_toggle_job_role_status(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<Uuid>,
) -> Result<ApiResponse<JobRoleRow>, AppError> {
    let role = store::job_roles::toggle_job_role_status(&state.db, job_id)
        .await?
        .ok_or_else(not_found)?;

    let verb = if role.is_active { "activated" } else { "deactivated" };
    info!(job_role_id = %role.id, is_active = role.is_active, "Toggled job role status");
    Ok(ApiResponse::with_message(
        format!("Job role {verb} successfully"),
        role,
    ))
}
