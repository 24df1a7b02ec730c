use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{NewResume, ResumeRow, ResumeSkillsRow, ResumeSummaryRow};

pub async fn insert_resume(pool: &PgPool, resume: &NewResume<'_>) -> sqlx::Result<ResumeRow> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, user_id, file_name, file_path, file_size, extracted_text,
             extracted_skills, categorized_skills, page_count)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(resume.id)
    .bind(resume.user_id)
    .bind(resume.file_name)
    .bind(resume.file_path)
    .bind(resume.file_size)
    .bind(resume.extracted_text)
    .bind(resume.extracted_skills)
    .bind(Json(resume.categorized_skills))
    .bind(resume.page_count)
    .fetch_one(pool)
    .await
}

/// Looks up a résumé only if it belongs to `user_id`.
pub async fn find_user_resume(
    pool: &PgPool,
    user_id: Uuid,
    resume_id: Uuid,
) -> sqlx::Result<Option<ResumeRow>> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(resume_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Newest first.
pub async fn list_user_resumes(
    pool: &PgPool,
    user_id: Uuid,
) -> sqlx::Result<Vec<ResumeSummaryRow>> {
    sqlx::query_as::<_, ResumeSummaryRow>(
        r#"
        SELECT id, file_name, extracted_skills, created_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_resume_skills(
    pool: &PgPool,
    resume_id: Uuid,
) -> sqlx::Result<Option<ResumeSkillsRow>> {
    sqlx::query_as::<_, ResumeSkillsRow>(
        "SELECT id, file_name, extracted_skills, categorized_skills FROM resumes WHERE id = $1",
    )
    .bind(resume_id)
    .fetch_optional(pool)
    .await
}

/// Deletes the résumé and every scan that references it, atomically.
pub async fn delete_resume_with_scans(pool: &PgPool, resume_id: Uuid) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    let scans = sqlx::query("DELETE FROM scan_histories WHERE resume_id = $1")
        .bind(resume_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(resume_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(%resume_id, scans, "Deleted resume and its scan history");
    Ok(())
}
