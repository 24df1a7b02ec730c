use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job_role::{JobRoleDraft, JobRoleRow, JobRoleSummaryRow};
use crate::pagination::Page;
use crate::store::like_pattern;

pub async fn insert_job_role(
    pool: &PgPool,
    id: Uuid,
    draft: &JobRoleDraft,
    created_by: Uuid,
) -> sqlx::Result<JobRoleRow> {
    sqlx::query_as::<_, JobRoleRow>(
        r#"
        INSERT INTO job_roles
            (id, title, description, required_skills, category, experience_level,
             min_experience, max_experience, is_active, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, $9)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.required_skills)
    .bind(&draft.category)
    .bind(&draft.experience_level)
    .bind(draft.min_experience)
    .bind(draft.max_experience)
    .bind(created_by)
    .fetch_one(pool)
    .await
}

/// Case-insensitive title check, optionally ignoring one role (the one being updated).
pub async fn title_taken(pool: &PgPool, title: &str, except: Option<Uuid>) -> sqlx::Result<bool> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM job_roles
            WHERE LOWER(title) = LOWER($1) AND ($2::uuid IS NULL OR id <> $2)
        )
        "#,
    )
    .bind(title)
    .bind(except)
    .fetch_one(pool)
    .await
}

pub async fn find_job_role(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<JobRoleRow>> {
    sqlx::query_as::<_, JobRoleRow>("SELECT * FROM job_roles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Admin listing: includes inactive roles, newest first. `search` matches title,
/// description or category.
pub async fn list_job_roles(
    pool: &PgPool,
    search: Option<&str>,
    page: Page,
) -> sqlx::Result<(Vec<JobRoleRow>, i64)> {
    let pattern = search.map(like_pattern);

    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM job_roles
        WHERE $1::text IS NULL
           OR title ILIKE $1 OR description ILIKE $1 OR category ILIKE $1
        "#,
    )
    .bind(&pattern)
    .fetch_one(pool)
    .await?;

    let roles = sqlx::query_as::<_, JobRoleRow>(
        r#"
        SELECT * FROM job_roles
        WHERE $1::text IS NULL
           OR title ILIKE $1 OR description ILIKE $1 OR category ILIKE $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(&pattern)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok((roles, total))
}

/// Roles offered to users for comparison, ordered by title.
pub async fn list_active_job_roles(pool: &PgPool) -> sqlx::Result<Vec<JobRoleSummaryRow>> {
    sqlx::query_as::<_, JobRoleSummaryRow>(
        r#"
        SELECT id, title, description, required_skills, category
        FROM job_roles
        WHERE is_active
        ORDER BY title ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_job_role(
    pool: &PgPool,
    id: Uuid,
    draft: &JobRoleDraft,
) -> sqlx::Result<Option<JobRoleRow>> {
    sqlx::query_as::<_, JobRoleRow>(
        r#"
        UPDATE job_roles
        SET title = $2, description = $3, required_skills = $4, category = $5,
            experience_level = $6, min_experience = $7, max_experience = $8,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.required_skills)
    .bind(&draft.category)
    .bind(&draft.experience_level)
    .bind(draft.min_experience)
    .bind(draft.max_experience)
    .fetch_optional(pool)
    .await
}

/// Soft delete.
pub async fn deactivate_job_role(pool: &PgPool, id: Uuid) -> sqlx::Result<bool> {
    let result =
        sqlx::query("UPDATE job_roles SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn toggle_job_role_status(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<JobRoleRow>> {
    sqlx::query_as::<_, JobRoleRow>(
        r#"
        UPDATE job_roles
        SET is_active = NOT is_active, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
