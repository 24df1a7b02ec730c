// Job-role catalog administration. Roles are soft-deleted so existing scan
// history keeps pointing at a real row.

pub mod handlers;
pub mod validation;
