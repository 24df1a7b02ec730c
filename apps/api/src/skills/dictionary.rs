//! The fixed, hand-curated table of recognised skills.
//!
//! Each entry has one canonical display name, a category label, and the alternate
//! surface forms that resolve to it. The table is plain data and never mutated.
//!
//! Curation rule: aliases that are fragments of ordinary words or of other skill
//! names ("ng", "es", "ts", "js", "py", "bs", "ga", "s3", "comm", "next", "team")
//! are left out, because extraction is substring-based and they would fire on unrelated text
//! ("engineer" → Angular, "node.js" → JavaScript). For the same reason there is
//! no bare "SQL" entry: it would be reported for every résumé mentioning
//! PostgreSQL, MySQL or SQLite.

/// Category assigned to names that are not in the dictionary.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub aliases: &'static [&'static str],
}

const fn skill(
    name: &'static str,
    category: &'static str,
    aliases: &'static [&'static str],
) -> SkillEntry {
    SkillEntry {
        name,
        category,
        aliases,
    }
}

pub static SKILL_DICTIONARY: &[SkillEntry] = &[
    // Frontend
    skill("HTML", "Frontend", &["html5"]),
    skill("CSS", "Frontend", &["css3"]),
    skill(
        "JavaScript",
        "Frontend",
        &["ecmascript", "es6", "es8", "es2020"],
    ),
    skill("TypeScript", "Frontend", &[]),
    skill("React", "Frontend", &["reactjs", "react.js"]),
    skill("Redux", "Frontend", &["reduxjs", "redux.js"]),
    skill("Vue", "Frontend", &["vuejs", "vue.js"]),
    skill("Angular", "Frontend", &["angularjs", "angular.js"]),
    skill("Next.js", "Frontend", &["nextjs"]),
    skill("Tailwind CSS", "Frontend", &["tailwind", "tailwindcss"]),
    skill("Bootstrap", "Frontend", &["bootstrap4", "bootstrap5"]),
    skill("jQuery", "Frontend", &["jquery"]),
    skill("SASS", "Frontend", &["scss"]),
    skill("LESS", "Frontend", &["less"]),
    skill("Webpack", "Frontend", &["webpack"]),
    skill("Vite", "Frontend", &["vitejs"]),
    // Backend
    skill("Node.js", "Backend", &["node", "nodejs"]),
    skill("Express", "Backend", &["expressjs", "express.js"]),
    skill("Python", "Backend", &[]),
    skill("Django", "Backend", &["django"]),
    skill("Flask", "Backend", &["flask"]),
    skill("Java", "Backend", &["java8", "java11", "java17"]),
    skill("Spring Boot", "Backend", &["spring", "springboot"]),
    skill("C#", "Backend", &["csharp"]),
    skill(".NET", "Backend", &["dotnet", ".net core"]),
    skill("PHP", "Backend", &["php"]),
    skill("Laravel", "Backend", &["laravel"]),
    skill("Go", "Backend", &["golang"]),
    skill("Rust", "Backend", &["rust"]),
    skill("Ruby", "Backend", &["ruby"]),
    skill("Rails", "Backend", &["ruby on rails"]),
    // Database
    skill("MySQL", "Database", &["mysql"]),
    skill("PostgreSQL", "Database", &["postgres", "postgresql"]),
    skill("MongoDB", "Database", &["mongo", "mongodb"]),
    skill("Redis", "Database", &["redis"]),
    skill("Elasticsearch", "Database", &["elastic"]),
    skill("Oracle", "Database", &["oracle db"]),
    skill("SQLite", "Database", &["sqlite"]),
    skill("Firebase", "Database", &["firebase"]),
    skill("DynamoDB", "Database", &["dynamodb"]),
    // DevOps & Cloud
    skill("Docker", "DevOps", &["docker"]),
    skill("Kubernetes", "DevOps", &["k8s", "kubernetes"]),
    skill(
        "AWS",
        "Cloud",
        &["amazon web services", "ec2", "lambda"],
    ),
    skill("Azure", "Cloud", &["microsoft azure"]),
    skill("GCP", "Cloud", &["google cloud", "google cloud platform"]),
    skill(
        "CI/CD",
        "DevOps",
        &["cicd", "continuous integration", "continuous deployment"],
    ),
    skill("Jenkins", "DevOps", &["jenkins"]),
    skill("GitHub Actions", "DevOps", &["github actions"]),
    skill("GitLab CI", "DevOps", &["gitlab ci"]),
    skill("Terraform", "DevOps", &["terraform"]),
    skill("Ansible", "DevOps", &["ansible"]),
    // Testing
    skill("Jest", "Testing", &["jest"]),
    skill("Mocha", "Testing", &["mocha"]),
    skill("Chai", "Testing", &["chai"]),
    skill("Cypress", "Testing", &["cypress"]),
    skill("Selenium", "Testing", &["selenium"]),
    skill("JUnit", "Testing", &["junit"]),
    skill("PyTest", "Testing", &["pytest"]),
    // Mobile
    skill("React Native", "Mobile", &["react native"]),
    skill("Flutter", "Mobile", &["flutter"]),
    skill("Swift", "Mobile", &["swift"]),
    skill("Kotlin", "Mobile", &["kotlin"]),
    skill("iOS", "Mobile", &["ios"]),
    skill("Android", "Mobile", &["android"]),
    // Version Control
    skill("Git", "Version Control", &["git"]),
    skill("GitHub", "Version Control", &["github"]),
    skill("GitLab", "Version Control", &["gitlab"]),
    skill("Bitbucket", "Version Control", &["bitbucket"]),
    // Soft Skills
    skill("Communication", "Soft Skills", &[]),
    skill("Teamwork", "Soft Skills", &[]),
    skill(
        "Problem Solving",
        "Soft Skills",
        &["problem solving", "analytical"],
    ),
    skill("Leadership", "Soft Skills", &["leadership"]),
    skill("Time Management", "Soft Skills", &["time management"]),
];

/// Canonical names in declaration order.
pub fn all_skill_names() -> Vec<&'static str> {
    SKILL_DICTIONARY.iter().map(|s| s.name).collect()
}

/// Exact (case-sensitive) lookup by canonical name.
pub fn find_entry(name: &str) -> Option<&'static SkillEntry> {
    SKILL_DICTIONARY.iter().find(|s| s.name == name)
}

/// Declared aliases of a canonical name; empty when unknown or none declared.
pub fn aliases_of(name: &str) -> &'static [&'static str] {
    find_entry(name).map(|s| s.aliases).unwrap_or(&[])
}

pub fn category_of(name: &str) -> Option<&'static str> {
    find_entry(name).map(|s| s.category)
}

/// Distinct categories in the order they first appear in the table.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for entry in SKILL_DICTIONARY {
        if !seen.contains(&entry.category) {
            seen.push(entry.category);
        }
    }
    seen
}
