pub mod job_role;
pub mod resume;
pub mod scan;
