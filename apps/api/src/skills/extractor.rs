//! Turns free text into the set of dictionary skills it mentions.
//!
//! Matching is lexical and case-insensitive: the text is lower-cased once and each
//! dictionary entry is tested by canonical name, then by alias. A word-boundary test
//! of the canonical name would only ever confirm a substring hit, so presence is
//! decided by "name substring OR alias substring" alone.
//!
//! Boundary patterns are still needed for occurrence counting
//! (`extract_skills_with_frequency`); they are compiled once per process from the
//! immutable dictionary.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::skills::dictionary::{category_of, SkillEntry, OTHER_CATEGORY, SKILL_DICTIONARY};

/// Category label → canonical names, as stored with a résumé.
pub type CategorizedSkills = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub name: String,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled surface forms
// ────────────────────────────────────────────────────────────────────────────

/// One lower-cased surface form and its boundary pattern.
/// `pattern` is `None` when compilation failed; counting then falls back to
/// plain substring occurrences.
struct SurfaceForm {
    term: String,
    pattern: Option<Regex>,
}

impl SurfaceForm {
    fn new(raw: &str) -> Self {
        let term = raw.to_lowercase();
        let pattern = boundary_pattern(&term);
        Self { term, pattern }
    }

    fn occurs_in(&self, lower_text: &str) -> bool {
        !self.term.is_empty() && lower_text.contains(&self.term)
    }

    fn count_in(&self, lower_text: &str) -> usize {
        if self.term.is_empty() {
            return 0;
        }
        match &self.pattern {
            Some(re) => re.find_iter(lower_text).count(),
            None => lower_text.matches(self.term.as_str()).count(),
        }
    }
}

struct EntryForms {
    entry: &'static SkillEntry,
    name: SurfaceForm,
    aliases: Vec<SurfaceForm>,
}

static ENTRY_FORMS: Lazy<Vec<EntryForms>> = Lazy::new(|| {
    SKILL_DICTIONARY
        .iter()
        .map(|entry| EntryForms {
            entry,
            name: SurfaceForm::new(entry.name),
            aliases: entry.aliases.iter().map(|a| SurfaceForm::new(a)).collect(),
        })
        .collect()
});

/// Builds `\b<term>\b` with the term's metacharacters escaped (".NET", "C#", "CI/CD").
///
/// A `\b` is only placed on a side where the term starts or ends with a word
/// character: `\b` next to "#" or "." would require a word character on the other
/// side and never match "c# developer" or " .net".
fn boundary_pattern(term: &str) -> Option<Regex> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trail = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    let source = format!("{lead}{}{trail}", regex::escape(term));
    match Regex::new(&source) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Boundary pattern for '{term}' failed to compile, using substring count: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Returns the distinct canonical names found in `text`, sorted ascending (ordinal).
/// Empty text yields an empty result.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: BTreeSet<&'static str> = BTreeSet::new();

    for forms in ENTRY_FORMS.iter() {
        if forms.name.occurs_in(&lower) || forms.aliases.iter().any(|a| a.occurs_in(&lower)) {
            found.insert(forms.entry.name);
        }
    }

    found.into_iter().map(String::from).collect()
}

/// Counts every bounded occurrence of each skill (canonical name plus every alias,
/// summed). Skills with no occurrence are omitted; the result is ordered by count
/// descending, ties in dictionary order.
pub fn extract_skills_with_frequency(text: &str) -> Vec<SkillFrequency> {
    let lower = text.to_lowercase();

    let mut counts: Vec<SkillFrequency> = ENTRY_FORMS
        .iter()
        .filter_map(|forms| {
            let count = forms.name.count_in(&lower)
                + forms
                    .aliases
                    .iter()
                    .map(|a| a.count_in(&lower))
                    .sum::<usize>();
            (count > 0).then(|| SkillFrequency {
                name: forms.entry.name.to_string(),
                count,
            })
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Groups names by dictionary category. Unknown names land in "Other"; within a
/// category, names keep their input order.
pub fn categorize_skills<S: AsRef<str>>(skills: &[S]) -> CategorizedSkills {
    let mut categorized = CategorizedSkills::new();
    for skill in skills {
        let skill = skill.as_ref();
        let category = category_of(skill).unwrap_or(OTHER_CATEGORY);
        categorized
            .entry(category.to_string())
            .or_default()
            .push(skill.to_string());
    }
    categorized
}

/// Resolves `input` to its canonical form: canonical names first, then aliases,
/// both case-insensitive. Unknown input is returned unchanged.
pub fn normalize_skill_name(input: &str) -> String {
    let lower = input.to_lowercase();

    if let Some(forms) = ENTRY_FORMS.iter().find(|f| f.name.term == lower) {
        return forms.entry.name.to_string();
    }

    ENTRY_FORMS
        .iter()
        .find(|f| f.aliases.iter().any(|a| a.term == lower))
        .map(|f| f.entry.name.to_string())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "Experienced engineer skilled in React, Node.js and PostgreSQL.";

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills_with_frequency("").is_empty());
    }

    #[test]
    fn test_scenario_extracts_sorted_canonical_names() {
        assert_eq!(
            extract_skills(SCENARIO),
            vec!["Node.js", "PostgreSQL", "React"]
        );
    }

    #[test]
    fn test_every_canonical_name_is_detected_in_context() {
        for entry in SKILL_DICTIONARY {
            let text = format!("Worked daily with {} on production systems", entry.name);
            let found = extract_skills(&text);
            assert!(
                found.iter().any(|s| s == entry.name),
                "{} not detected in {text:?}: {found:?}",
                entry.name
            );
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_entry() {
        for entry in SKILL_DICTIONARY {
            for alias in entry.aliases {
                let text = format!("... {alias} ...");
                let found = extract_skills(&text);
                assert!(
                    found.iter().any(|s| s == entry.name),
                    "alias {alias} did not yield {}",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        assert_eq!(extract_skills("REACT"), extract_skills("react"));
        assert_eq!(extract_skills("react"), vec!["React"]);
    }

    #[test]
    fn test_metacharacter_names_are_found() {
        let found = extract_skills("Backend work in C# and .NET, pipelines via CI/CD");
        assert!(found.contains(&"C#".to_string()));
        assert!(found.contains(&".NET".to_string()));
        assert!(found.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_no_minimum_text_length() {
        assert_eq!(extract_skills("k8s"), vec!["Kubernetes"]);
    }

    #[test]
    fn test_results_are_distinct() {
        let found = extract_skills("docker docker DOCKER Docker");
        assert_eq!(found, vec!["Docker"]);
    }

    #[test]
    fn test_frequency_counts_name_and_aliases() {
        let freq = extract_skills_with_frequency(
            "Postgres tuning, PostgreSQL replication, docker compose",
        );
        // "postgresql" matches the canonical name and the identical alias
        let pg = freq.iter().find(|f| f.name == "PostgreSQL").unwrap();
        assert_eq!(pg.count, 3);
        let docker = freq.iter().find(|f| f.name == "Docker").unwrap();
        assert_eq!(docker.count, 2);
        assert_eq!(freq[0].name, "PostgreSQL");
    }

    #[test]
    fn test_frequency_respects_word_boundaries() {
        // "reactive" is a substring hit but not a bounded occurrence
        let freq = extract_skills_with_frequency("reactive systems");
        assert!(freq.iter().all(|f| f.name != "React"));
    }

    #[test]
    fn test_frequency_sorted_descending() {
        let freq = extract_skills_with_frequency("python python python rust");
        let counts: Vec<usize> = freq.iter().map(|f| f.count).collect();
        let mut sorted = counts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
        assert_eq!(freq[0].name, "Python");
    }

    #[test]
    fn test_frequency_handles_symbol_terms() {
        let freq = extract_skills_with_frequency("c# developer, also c# tooling");
        let cs = freq.iter().find(|f| f.name == "C#").unwrap();
        assert_eq!(cs.count, 2);
    }

    #[test]
    fn test_boundary_pattern_escapes_metacharacters() {
        let re = boundary_pattern(".net").unwrap();
        assert!(re.is_match("asp .net core"));
        assert!(!re.is_match("xnet"));
        let re = boundary_pattern("ci/cd").unwrap();
        assert!(re.is_match("a ci/cd pipeline"));
    }

    #[test]
    fn test_categorize_groups_and_preserves_order() {
        let cats = categorize_skills(&["React", "PostgreSQL", "HTML", "Cobol"]);
        assert_eq!(cats["Frontend"], vec!["React", "HTML"]);
        assert_eq!(cats["Database"], vec!["PostgreSQL"]);
        assert_eq!(cats[OTHER_CATEGORY], vec!["Cobol"]);
    }

    #[test]
    fn test_categorize_is_lossless_over_extraction() {
        let text = "React, Redux, Docker, AWS lambda, Jest, Git, leadership, Flutter";
        let skills = extract_skills(text);
        let cats = categorize_skills(&skills);

        let mut union: Vec<String> = cats.values().flatten().cloned().collect();
        union.sort();
        assert_eq!(union, skills);
        assert!(!cats.contains_key(OTHER_CATEGORY));
    }

    #[test]
    fn test_categorize_empty_input() {
        let empty: [&str; 0] = [];
        assert!(categorize_skills(&empty).is_empty());
    }

    #[test]
    fn test_normalize_canonical_alias_and_unknown() {
        assert_eq!(normalize_skill_name("postgresql"), "PostgreSQL");
        assert_eq!(normalize_skill_name("Mongo"), "MongoDB");
        assert_eq!(normalize_skill_name("NODE"), "Node.js");
        assert_eq!(normalize_skill_name("Fortran"), "Fortran");
    }

    #[test]
    fn test_normalize_prefers_canonical_over_alias() {
        // "react native" is both React Native's canonical (lower-cased) and its alias
        assert_eq!(normalize_skill_name("React Native"), "React Native");
        assert_eq!(normalize_skill_name("git"), "Git");
    }

    #[test]
    fn test_frequency_ties_keep_dictionary_order() {
        // Redis is declared before Docker
        let freq = extract_skills_with_frequency("docker redis");
        let names: Vec<&str> = freq.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Redis", "Docker"]);
        assert_eq!(freq[0].count, freq[1].count);
    }

    #[test]
    fn test_common_words_do_not_trigger_skills() {
        let found = extract_skills("Planned the next steps for a team of five");
        assert!(!found.contains(&"Next.js".to_string()));
        assert!(!found.contains(&"Teamwork".to_string()));
    }
}
