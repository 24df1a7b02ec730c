use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::skills::comparator::{compare_skills, ComparisonResult};
use crate::skills::dictionary::{aliases_of, all_skill_names, categories, category_of};
use crate::skills::extractor::{
    categorize_skills, extract_skills, extract_skills_with_frequency, CategorizedSkills,
    SkillFrequency,
};
use crate::skills::suggestions::generate_suggestions;

#[derive(Debug, Serialize)]
pub struct SkillListing {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: &'static str,
    pub skills: Vec<SkillListing>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryResponse {
    pub total: usize,
    pub categories: Vec<CategoryListing>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub extracted_skills: Vec<String>,
    pub categorized_skills: CategorizedSkills,
    pub frequency: Vec<SkillFrequency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareSkillsRequest {
    pub extracted_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareSkillsResponse {
    #[serde(flatten)]
    pub comparison: ComparisonResult,
    pub suggestions: Vec<String>,
}

/// Dictionary grouped by category, categories in first-seen order.
pub fn dictionary_listing() -> DictionaryResponse {
    let names = all_skill_names();
    let categories = categories()
        .into_iter()
        .map(|category| CategoryListing {
            category,
            skills: names
                .iter()
                .copied()
                .filter(|name| category_of(name) == Some(category))
                .map(|name| SkillListing {
                    name,
                    aliases: aliases_of(name),
                })
                .collect(),
        })
        .collect();

    DictionaryResponse {
        total: names.len(),
        categories,
    }
}

/// GET /api/v1/skills
pub async fn handle_list_skills() -> ApiResponse<DictionaryResponse> {
    ApiResponse::ok(dictionary_listing())
}

/// POST /api/v1/skills/extract
/// Runs the extractor on raw text without storing anything.
pub async fn handle_extract_skills(
    ApiJson(req): ApiJson<ExtractRequest>,
) -> Result<ApiResponse<ExtractResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let extracted_skills = extract_skills(&req.text);
    let categorized_skills = categorize_skills(&extracted_skills);
    let frequency = extract_skills_with_frequency(&req.text);

    Ok(ApiResponse::ok(ExtractResponse {
        extracted_skills,
        categorized_skills,
        frequency,
    }))
}

/// POST /api/v1/skills/compare
/// Literal comparison of two ad-hoc skill lists; nothing is stored.
pub async fn handle_compare_skills(
    ApiJson(req): ApiJson<CompareSkillsRequest>,
) -> ApiResponse<CompareSkillsResponse> {
    let comparison = compare_skills(&req.extracted_skills, &req.required_skills);
    let suggestions = generate_suggestions(&comparison.missing);
    ApiResponse::ok(CompareSkillsResponse {
        comparison,
        suggestions,
    })
}
