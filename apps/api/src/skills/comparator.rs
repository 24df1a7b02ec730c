//! Scores a résumé's extracted skills against a job role's requirements.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::skills::extractor::normalize_skill_name;

/// How administrator-entered required skills are compared with extracted names.
///
/// `Literal` compares the raw strings case-insensitively, so a requirement typed
/// as "Node" does not match an extracted "Node.js". `Normalized` resolves each
/// requirement through the alias table first. `Literal` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementMatching {
    #[default]
    Literal,
    Normalized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Required skills found, in required order and casing.
    #[serde(rename = "matchedSkills")]
    pub matched: Vec<String>,
    /// Required skills not found, in required order and casing.
    #[serde(rename = "missingSkills")]
    pub missing: Vec<String>,
    /// Extracted skills that no requirement asked for.
    #[serde(rename = "extraSkills")]
    pub extra: Vec<String>,
    pub match_percentage: f64,
}

pub fn compare_skills<E, R>(extracted: &[E], required: &[R]) -> ComparisonResult
where
    E: AsRef<str>,
    R: AsRef<str>,
{
    compare_skills_with(extracted, required, RequirementMatching::Literal)
}

pub fn compare_skills_with<E, R>(
    extracted: &[E],
    required: &[R],
    matching: RequirementMatching,
) -> ComparisonResult
where
    E: AsRef<str>,
    R: AsRef<str>,
{
    let extracted_lower: HashSet<String> = extracted
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let requirement_key = |skill: &str| match matching {
        RequirementMatching::Literal => skill.to_lowercase(),
        RequirementMatching::Normalized => normalize_skill_name(skill).to_lowercase(),
    };
    let required_lower: HashSet<String> = required
        .iter()
        .map(|s| requirement_key(s.as_ref()))
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(|s| s.as_ref().to_string())
        .partition(|s| extracted_lower.contains(&requirement_key(s)));

    let extra = extracted
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !required_lower.contains(&s.to_lowercase()))
        .map(String::from)
        .collect();

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / required.len() as f64 * 100.0)
    };

    ComparisonResult {
        matched,
        missing,
        extra,
        match_percentage,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::extractor::extract_skills;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_empty_required_scores_zero() {
        let result = compare_skills(&["React", "Docker"], &NONE);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.extra, vec!["React", "Docker"]);
    }

    #[test]
    fn test_empty_extracted_misses_everything() {
        let required = ["React", "Node.js"];
        let result = compare_skills(&NONE, &required);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["React", "Node.js"]);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_case_insensitive_keeps_required_casing() {
        let result = compare_skills(&["React"], &["react"]);
        assert_eq!(result.matched, vec!["react"]);
        assert!(result.missing.is_empty());
        assert!(result.extra.is_empty());
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_one_of_three_rounds_to_two_decimals() {
        let result = compare_skills(&["Docker"], &["Docker", "AWS", "Redis"]);
        assert_eq!(result.match_percentage, 33.33);
    }

    #[test]
    fn test_scenario_end_to_end() {
        let extracted =
            extract_skills("Experienced engineer skilled in React, Node.js and PostgreSQL.");
        let result = compare_skills(&extracted, &["React", "Node.js", "Docker"]);
        assert_eq!(result.matched, vec!["React", "Node.js"]);
        assert_eq!(result.missing, vec!["Docker"]);
        assert_eq!(result.extra, vec!["PostgreSQL"]);
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_literal_mode_does_not_resolve_aliases() {
        let result = compare_skills(&["Node.js", "MongoDB"], &["Node", "Mongo"]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["Node", "Mongo"]);
        assert_eq!(result.extra, vec!["Node.js", "MongoDB"]);
    }

    #[test]
    fn test_normalized_mode_resolves_aliases() {
        let result = compare_skills_with(
            &["Node.js", "MongoDB", "Git"],
            &["Node", "mongo", "Docker"],
            RequirementMatching::Normalized,
        );
        assert_eq!(result.matched, vec!["Node", "mongo"]);
        assert_eq!(result.missing, vec!["Docker"]);
        assert_eq!(result.extra, vec!["Git"]);
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_literal_is_default_mode() {
        assert_eq!(RequirementMatching::default(), RequirementMatching::Literal);
        let a = compare_skills(&["Node.js"], &["Node"]);
        let b = compare_skills_with(&["Node.js"], &["Node"], RequirementMatching::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_requirements_each_counted() {
        let result = compare_skills(&["React"], &["React", "REACT"]);
        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_comparison_serializes_camel_case() {
        let result = compare_skills(&["React"], &["React"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchPercentage"], 100.0);
        assert!(json.get("matchedSkills").is_some());
        assert!(json.get("matched").is_none());
    }
}
