// PostgreSQL repositories and object storage.
// Functions take the pool (or S3 client) explicitly and return sqlx results;
// mapping to HTTP errors happens in the calling service.

pub mod job_roles;
pub mod objects;
pub mod resumes;
pub mod scans;

/// Escapes LIKE metacharacters so user search text matches literally.
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// True when the error is a PostgreSQL unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
