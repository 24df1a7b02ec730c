use sqlx::PgPool;
use uuid::Uuid;

use crate::models::scan::{NewScan, ScanHistoryRow, ScanSummaryRow};
use crate::pagination::Page;

/// Scan history is append-only: rows are inserted and deleted, never updated.
pub async fn insert_scan(pool: &PgPool, scan: &NewScan<'_>) -> sqlx::Result<ScanHistoryRow> {
    sqlx::query_as::<_, ScanHistoryRow>(
        r#"
        INSERT INTO scan_histories
            (id, user_id, resume_id, job_role_id, job_role_title, file_name,
             match_percentage, matched_skills, missing_skills, extra_skills,
             suggestions, scan_duration_ms)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(scan.id)
    .bind(scan.user_id)
    .bind(scan.resume_id)
    .bind(scan.job_role_id)
    .bind(scan.job_role_title)
    .bind(scan.file_name)
    .bind(scan.match_percentage)
    .bind(scan.matched_skills)
    .bind(scan.missing_skills)
    .bind(scan.extra_skills)
    .bind(scan.suggestions)
    .bind(scan.scan_duration_ms)
    .fetch_one(pool)
    .await
}

/// One page of a user's scans, newest first, plus the total count.
pub async fn list_user_scans(
    pool: &PgPool,
    user_id: Uuid,
    page: Page,
) -> sqlx::Result<(Vec<ScanSummaryRow>, i64)> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scan_histories WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let scans = sqlx::query_as::<_, ScanSummaryRow>(
        r#"
        SELECT id, job_role_title, file_name, match_percentage,
               matched_skills, missing_skills, suggestions, created_at
        FROM scan_histories
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok((scans, total))
}

pub async fn find_user_scan(
    pool: &PgPool,
    user_id: Uuid,
    scan_id: Uuid,
) -> sqlx::Result<Option<ScanHistoryRow>> {
    sqlx::query_as::<_, ScanHistoryRow>(
        "SELECT * FROM scan_histories WHERE id = $1 AND user_id = $2",
    )
    .bind(scan_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no scan with that id belongs to the user.
pub async fn delete_user_scan(pool: &PgPool, user_id: Uuid, scan_id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM scan_histories WHERE id = $1 AND user_id = $2")
        .bind(scan_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
