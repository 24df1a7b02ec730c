use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, UploadResponse};
use crate::models::scan::{CompareRequest, CompareResponse, NewScan, ScanDetail};
use crate::parsing::{ensure_pdf, UploadedFile};
use crate::skills::comparator::compare_skills_with;
use crate::skills::extractor::{categorize_skills, extract_skills};
use crate::skills::suggestions::generate_suggestions;
use crate::state::AppState;
use crate::store;
use crate::store::objects::{delete_object, put_resume_pdf, resume_object_key};

const RESUME_NOT_FOUND: &str = "Resume not found";
const JOB_ROLE_NOT_FOUND: &str = "Job role not found";
const SCAN_NOT_FOUND: &str = "Scan not found";

// ────────────────────────────────────────────────────────────────────────────
// Upload
// ────────────────────────────────────────────────────────────────────────────

/// Validates and parses the PDF, extracts skills, stores the original bytes and
/// persists the résumé. An empty text layer yields a résumé with no skills.
pub async fn upload_resume(
    state: &AppState,
    user_id: Uuid,
    file: UploadedFile,
) -> Result<UploadResponse, AppError> {
    ensure_pdf(&file, state.config.max_file_size)?;

    info!(%user_id, file_name = %file.file_name, size = file.bytes.len(), "Uploading resume");

    let document = state.text_extractor.extract(&file).await?;
    let extracted_skills = extract_skills(&document.text);
    let categorized_skills = categorize_skills(&extracted_skills);

    info!(
        %user_id,
        chars = document.text.len(),
        pages = ?document.page_count,
        skills = extracted_skills.len(),
        "Parsed resume"
    );

    let resume_id = Uuid::new_v4();
    let file_path = resume_object_key(user_id, resume_id);
    put_resume_pdf(
        &state.s3,
        &state.config.s3_bucket,
        &file_path,
        file.bytes.clone(),
    )
    .await?;

    let file_size = i64::try_from(document.file_size)
        .map_err(|_| AppError::PayloadTooLarge("File too large".to_string()))?;

    let inserted = store::resumes::insert_resume(
        &state.db,
        &NewResume {
            id: resume_id,
            user_id,
            file_name: &document.file_name,
            file_path: &file_path,
            file_size,
            extracted_text: &document.text,
            extracted_skills: &extracted_skills,
            categorized_skills: &categorized_skills,
            page_count: document.page_count,
        },
    )
    .await;

    let resume = match inserted {
        Ok(resume) => resume,
        Err(e) => {
            // Keep the bucket consistent with the table.
            if let Err(cleanup) =
                delete_object(&state.s3, &state.config.s3_bucket, &file_path).await
            {
                warn!("Orphaned upload {file_path}: {cleanup}");
            }
            return Err(e.into());
        }
    };

    info!(%user_id, resume_id = %resume.id, "Resume saved");

    Ok(UploadResponse {
        resume_id: resume.id,
        file_name: resume.file_name,
        extracted_skills,
        categorized_skills,
        page_count: resume.page_count,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Compare
// ────────────────────────────────────────────────────────────────────────────

/// Scores a stored résumé against an active job role and records the scan.
pub async fn compare_resume(
    state: &AppState,
    req: &CompareRequest,
) -> Result<CompareResponse, AppError> {
    let started = Instant::now();

    let resume = store::resumes::find_user_resume(&state.db, req.user_id, req.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;

    let job_role = store::job_roles::find_job_role(&state.db, req.job_role_id)
        .await?
        .filter(|role| role.is_active)
        .ok_or_else(|| AppError::NotFound(JOB_ROLE_NOT_FOUND.to_string()))?;

    let comparison = compare_skills_with(
        &resume.extracted_skills,
        &job_role.required_skills,
        state.config.requirement_matching(),
    );
    let suggestions = generate_suggestions(&comparison.missing);

    let scan_duration_ms = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);

    let scan = store::scans::insert_scan(
        &state.db,
        &NewScan {
            id: Uuid::new_v4(),
            user_id: req.user_id,
            resume_id: resume.id,
            job_role_id: job_role.id,
            job_role_title: &job_role.title,
            file_name: &resume.file_name,
            match_percentage: comparison.match_percentage,
            matched_skills: &comparison.matched,
            missing_skills: &comparison.missing,
            extra_skills: &comparison.extra,
            suggestions: &suggestions,
            scan_duration_ms,
        },
    )
    .await?;

    info!(
        user_id = %req.user_id,
        resume_id = %resume.id,
        job_role_id = %job_role.id,
        scan_id = %scan.id,
        match_percentage = comparison.match_percentage,
        "Compared resume with job role"
    );

    Ok(CompareResponse {
        match_percentage: comparison.match_percentage,
        matched_skills: comparison.matched,
        missing_skills: comparison.missing,
        extra_skills: comparison.extra,
        suggestions,
        scan_id: scan.id,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// History & deletion
// ────────────────────────────────────────────────────────────────────────────

pub async fn scan_detail(
    state: &AppState,
    user_id: Uuid,
    scan_id: Uuid,
) -> Result<ScanDetail, AppError> {
    let scan = store::scans::find_user_scan(&state.db, user_id, scan_id)
        .await?
        .ok_or_else(|| AppError::NotFound(SCAN_NOT_FOUND.to_string()))?;
    let resume = store::resumes::find_resume_skills(&state.db, scan.resume_id).await?;
    Ok(ScanDetail { scan, resume })
}

pub async fn delete_scan(state: &AppState, user_id: Uuid, scan_id: Uuid) -> Result<(), AppError> {
    if !store::scans::delete_user_scan(&state.db, user_id, scan_id).await? {
        return Err(AppError::NotFound(SCAN_NOT_FOUND.to_string()));
    }
    info!(%user_id, %scan_id, "Deleted scan");
    Ok(())
}

/// Removes the résumé with its scans, then the stored PDF. The database is the
/// source of truth, so a failed object delete is only logged.
pub async fn delete_resume(
    state: &AppState,
    user_id: Uuid,
    resume_id: Uuid,
) -> Result<(), AppError> {
    let resume = store::resumes::find_user_resume(&state.db, user_id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;

    store::resumes::delete_resume_with_scans(&state.db, resume.id).await?;

    if !resume.file_path.is_empty() {
        if let Err(e) = delete_object(&state.s3, &state.config.s3_bucket, &resume.file_path).await
        {
            warn!(%resume_id, "Stored PDF not removed: {e}");
        }
    }
    Ok(())
}
