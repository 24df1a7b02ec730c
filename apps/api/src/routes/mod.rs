pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};

use crate::job_roles::handlers as job_roles;
use crate::resumes::handlers as resumes;
use crate::skills::handlers as skills;
use crate::state::AppState;

/// Room for multipart boundaries and the `user_id` field on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_file_size + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill dictionary
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .route("/api/v1/skills/extract", post(skills::handle_extract_skills))
        .route("/api/v1/skills/compare", post(skills::handle_compare_skills))
        // Résumés & scans
        .route("/api/v1/resumes", get(resumes::handle_list_resumes))
        .route("/api/v1/resumes/upload", post(resumes::handle_upload_resume))
        .route("/api/v1/resumes/compare", post(resumes::handle_compare))
        .route("/api/v1/resumes/history", get(resumes::handle_scan_history))
        .route(
            "/api/v1/resumes/history/:scan_id",
            get(resumes::handle_scan_detail).delete(resumes::handle_delete_scan),
        )
        .route(
            "/api/v1/resumes/job-roles",
            get(resumes::handle_active_job_roles),
        )
        .route(
            "/api/v1/resumes/:resume_id",
            delete(resumes::handle_delete_resume),
        )
        // Job-role administration
        .route(
            "/api/v1/admin/job-roles",
            post(job_roles::handle_create_job_role).get(job_roles::handle_list_job_roles),
        )
        .route(
            "/api/v1/admin/job-roles/:job_id",
            get(job_roles::handle_get_job_role)
                .put(job_roles::handle_update_job_role)
                .delete(job_roles::handle_delete_job_role),
        )
        .route(
            "/api/v1/admin/job-roles/:job_id/toggle-status",
            patch(job_roles::handle_toggle_job_role_status),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
