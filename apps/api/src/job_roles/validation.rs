use std::collections::HashSet;

use crate::errors::AppError;
use crate::models::job_role::{
    CreateJobRoleRequest, JobRoleDraft, JobRoleRow, UpdateJobRoleRequest,
};

const TITLE_MIN_CHARS: usize = 2;
const TITLE_MAX_CHARS: usize = 100;
const SEARCH_MIN_CHARS: usize = 2;

impl From<CreateJobRoleRequest> for JobRoleDraft {
    fn from(req: CreateJobRoleRequest) -> Self {
        JobRoleDraft {
            title: req.title,
            description: req.description,
            required_skills: req.required_skills,
            category: req.category,
            experience_level: req.experience_level,
            min_experience: req.min_experience,
            max_experience: req.max_experience,
        }
    }
}

/// Overlays a partial update on the stored role. The result still has to pass
/// `validate_draft`, so an update cannot produce a role a create would reject.
pub fn merge_update(existing: &JobRoleRow, req: UpdateJobRoleRequest) -> JobRoleDraft {
    JobRoleDraft {
        title: req.title.unwrap_or_else(|| existing.title.clone()),
        description: req.description.or_else(|| existing.description.clone()),
        required_skills: req
            .required_skills
            .unwrap_or_else(|| existing.required_skills.clone()),
        category: req.category.or_else(|| existing.category.clone()),
        experience_level: req
            .experience_level
            .or_else(|| existing.experience_level.clone()),
        min_experience: req.min_experience.or(existing.min_experience),
        max_experience: req.max_experience.or(existing.max_experience),
    }
}

/// Checks every job-role rule and returns the trimmed draft to store.
pub fn validate_draft(raw: JobRoleDraft) -> Result<JobRoleDraft, AppError> {
    let title = validate_title(&raw.title)?;
    let description = optional_text(raw.description, "Description")?;
    let category = optional_text(raw.category, "Category")?;
    let experience_level = optional_text(raw.experience_level, "Experience level")?;
    let required_skills = validate_required_skills(raw.required_skills)?;
    validate_experience(raw.min_experience, raw.max_experience)?;

    Ok(JobRoleDraft {
        title,
        description,
        required_skills,
        category,
        experience_level,
        min_experience: raw.min_experience,
        max_experience: raw.max_experience,
    })
}

/// Trims the admin search box; blank means no filter.
pub fn validate_search(search: Option<&str>) -> Result<Option<String>, AppError> {
    match search.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.chars().count() < SEARCH_MIN_CHARS => Err(AppError::Validation(format!(
            "Search query must be at least {SEARCH_MIN_CHARS} characters"
        ))),
        Some(s) => Ok(Some(s.to_string())),
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Job role title is required".to_string()));
    }
    let len = trimmed.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(AppError::Validation(format!(
            "Job role title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// `""` counts as absent; anything else must contain more than whitespace.
fn optional_text(value: Option<String>, label: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) if v.trim().is_empty() => Err(AppError::Validation(format!(
            "{label} cannot contain only spaces"
        ))),
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

fn validate_required_skills(skills: Vec<String>) -> Result<Vec<String>, AppError> {
    if skills.is_empty() {
        return Err(AppError::Validation(
            "At least one required skill is needed".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(skills.len());
    let mut cleaned = Vec::with_capacity(skills.len());
    for skill in skills {
        let trimmed = skill.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Skill cannot contain only spaces".to_string(),
            ));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(AppError::Validation(
                "Duplicate skills are not allowed".to_string(),
            ));
        }
        cleaned.push(trimmed.to_string());
    }
    Ok(cleaned)
}

fn validate_experience(min: Option<i32>, max: Option<i32>) -> Result<(), AppError> {
    let invalid = |msg: &str| Err(AppError::Validation(msg.to_string()));
    match (min, max) {
        (None, None) => Ok(()),
        (Some(_), None) => {
            invalid("Maximum experience is required when minimum experience is provided")
        }
        (None, Some(_)) => {
            invalid("Minimum experience is required when maximum experience is provided")
        }
        (Some(min), _) if min < 0 => invalid("Minimum experience must be a positive number"),
        (_, Some(max)) if max < 0 => invalid("Maximum experience must be a positive number"),
        (Some(min), Some(max)) if max < min => {
            invalid("Maximum experience must be greater than minimum experience")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn draft() -> JobRoleDraft {
        JobRoleDraft {
            title: "  Full Stack Developer ".to_string(),
            description: Some("Builds things".to_string()),
            required_skills: vec![" React ".to_string(), "Node.js".to_string()],
            category: Some("Engineering".to_string()),
            experience_level: None,
            min_experience: Some(2),
            max_experience: Some(5),
        }
    }

    fn validation_message(result: Result<JobRoleDraft, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let clean = validate_draft(draft()).unwrap();
        assert_eq!(clean.title, "Full Stack Developer");
        assert_eq!(clean.required_skills, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_title_length_counts_trimmed_chars() {
        let mut d = draft();
        d.title = "  a  ".to_string();
        assert!(validation_message(validate_draft(d)).contains("between 2 and 100"));

        let mut d = draft();
        d.title = "x".repeat(101);
        assert!(validate_draft(d).is_err());

        let mut d = draft();
        d.title = "   ".to_string();
        assert_eq!(validation_message(validate_draft(d)), "Job role title is required");
    }

    #[test]
    fn test_whitespace_only_optional_fields_rejected() {
        let mut d = draft();
        d.category = Some("   ".to_string());
        assert_eq!(
            validation_message(validate_draft(d)),
            "Category cannot contain only spaces"
        );

        let mut d = draft();
        d.description = Some(String::new());
        assert_eq!(validate_draft(d).unwrap().description, None);
    }

    #[test]
    fn test_required_skills_rules() {
        let mut d = draft();
        d.required_skills.clear();
        assert!(validation_message(validate_draft(d)).contains("At least one"));

        let mut d = draft();
        d.required_skills.push("   ".to_string());
        assert!(validation_message(validate_draft(d)).contains("only spaces"));

        let mut d = draft();
        d.required_skills.push("react".to_string());
        assert_eq!(
            validation_message(validate_draft(d)),
            "Duplicate skills are not allowed"
        );
    }

    #[test]
    fn test_experience_rules() {
        assert!(validate_experience(None, None).is_ok());
        assert!(validate_experience(Some(0), Some(0)).is_ok());
        assert!(validate_experience(Some(1), None).is_err());
        assert!(validate_experience(None, Some(3)).is_err());
        assert!(validate_experience(Some(-1), Some(3)).is_err());
        assert!(validate_experience(Some(5), Some(2)).is_err());
    }

    #[test]
    fn test_search_rules() {
        assert_eq!(validate_search(None).unwrap(), None);
        assert_eq!(validate_search(Some("   ")).unwrap(), None);
        assert!(validate_search(Some(" a ")).is_err());
        assert_eq!(validate_search(Some(" dev ")).unwrap(), Some("dev".to_string()));
    }

    #[test]
    fn test_merge_update_keeps_unset_fields() {
        let now = Utc::now();
        let existing = JobRoleRow {
            id: Uuid::new_v4(),
            title: "Backend Developer".to_string(),
            description: Some("APIs".to_string()),
            required_skills: vec!["Go".to_string()],
            category: None,
            experience_level: Some("Mid".to_string()),
            min_experience: Some(1),
            max_experience: Some(3),
            is_active: true,
            created_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let update = UpdateJobRoleRequest {
            max_experience: Some(6),
            ..Default::default()
        };

        let merged = merge_update(&existing, update);
        assert_eq!(merged.title, "Backend Developer");
        assert_eq!(merged.required_skills, vec!["Go"]);
        assert_eq!(merged.min_experience, Some(1));
        assert_eq!(merged.max_experience, Some(6));
        assert!(validate_draft(merged).is_ok());
    }
}
