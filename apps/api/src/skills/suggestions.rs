//! Canned learning advice for missing skills.
//!
//! Pure lookup. Skill names are matched exactly as the administrator typed them.

pub const ALL_SKILLS_PRESENT: &str = "Excellent! You have all the required skills for this role.";

pub const RESOURCES_LINE: &str =
    "Online resources: Coursera, Udemy, freeCodeCamp, YouTube tutorials, and official documentation.";

/// Builds the suggestion list shown with a scan result: a summary line, one line
/// per missing skill, and a closing resources line. With nothing missing the list
/// holds a single congratulatory message.
pub fn generate_suggestions<S: AsRef<str>>(missing: &[S]) -> Vec<String> {
    if missing.is_empty() {
        return vec![ALL_SKILLS_PRESENT.to_string()];
    }

    let mut suggestions = Vec::with_capacity(missing.len() + 2);
    suggestions.push(format!(
        "You are missing {} key skill(s) for this role.",
        missing.len()
    ));

    for skill in missing {
        let skill = skill.as_ref();
        let line = match advice_for(skill) {
            Some(advice) => advice.to_string(),
            None => format!(
                "Consider learning {skill} through online courses, tutorials, and hands-on projects."
            ),
        };
        suggestions.push(line);
    }

    suggestions.push(RESOURCES_LINE.to_string());
    suggestions
}

fn advice_for(skill: &str) -> Option<&'static str> {
    let advice = match skill {
        "React" => "Learn React through official documentation and build projects like todo apps or e-commerce sites.",
        "Node.js" | "Node" => "Take Node.js courses on Udemy or freeCodeCamp and build REST APIs.",
        "TypeScript" => "Start with TypeScript handbook and convert existing JavaScript projects to TypeScript.",
        "Python" => "Learn Python basics on Codecademy and practice with small automation scripts.",
        "Docker" => "Understand containerization basics through Docker's getting started guide.",
        "AWS" => "Get AWS Certified Cloud Practitioner certification to understand cloud fundamentals.",
        "MongoDB" | "Mongo" => "Practice MongoDB with their free university courses and build a CRUD application.",
        "PostgreSQL" | "Postgres" => "Learn SQL fundamentals and practice complex queries with PostgreSQL.",
        "JavaScript" | "JS" => "Master JavaScript fundamentals through modern ES6+ features and practice coding challenges.",
        "HTML" | "HTML5" => "Learn semantic HTML5 and accessibility best practices.",
        "CSS" | "CSS3" => "Master CSS3 including Flexbox, Grid, and responsive design.",
        "Tailwind" | "Tailwind CSS" => "Learn Tailwind CSS utility-first framework for rapid UI development.",
        "Bootstrap" => "Master Bootstrap framework for responsive, mobile-first websites.",
        "Redux" => "Learn Redux state management with Redux Toolkit for React applications.",
        "Next.js" | "Next" => "Learn Next.js framework for production-ready React applications with SSR.",
        _ => return None,
    };
    Some(advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_missing_is_single_congratulation() {
        let empty: [&str; 0] = [];
        assert_eq!(generate_suggestions(&empty), vec![ALL_SKILLS_PRESENT]);
    }

    #[test]
    fn test_known_and_unknown_skill_layout() {
        let lines = generate_suggestions(&["React", "UnknownSkillXYZ"]);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "You are missing 2 key skill(s) for this role.");
        assert!(lines[1].starts_with("Learn React through official documentation"));
        assert_eq!(
            lines[2],
            "Consider learning UnknownSkillXYZ through online courses, tutorials, and hands-on projects."
        );
        assert_eq!(lines[3], RESOURCES_LINE);
    }

    #[test]
    fn test_alias_keys_share_advice() {
        assert_eq!(advice_for("Node"), advice_for("Node.js"));
        assert_eq!(advice_for("Mongo"), advice_for("MongoDB"));
        assert_eq!(advice_for("Postgres"), advice_for("PostgreSQL"));
        assert_eq!(advice_for("Tailwind"), advice_for("Tailwind CSS"));
        assert_eq!(advice_for("Next"), advice_for("Next.js"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(advice_for("react").is_none());
        let lines = generate_suggestions(&["docker"]);
        assert!(lines[1].starts_with("Consider learning docker"));
    }

    #[test]
    fn test_one_line_per_missing_skill_in_order() {
        let missing = ["Docker", "AWS", "Kafka"];
        let lines = generate_suggestions(&missing);
        assert_eq!(lines.len(), missing.len() + 2);
        assert!(lines[1].contains("Docker"));
        assert!(lines[2].contains("AWS"));
        assert!(lines[3].contains("Kafka"));
    }
}
