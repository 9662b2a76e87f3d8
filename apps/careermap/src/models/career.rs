use serde::Deserialize;

/// One career in the catalog. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerRecord {
    /// Unique within the catalog.
    pub title: String,
    pub description: String,
    /// Matched against whitespace-separated interest words.
    pub keywords: Vec<String>,
    /// Matched against the comma-separated skills list.
    pub required_skills: Vec<String>,
    pub demand: String,
    pub outlook: String,
    pub learning_resources: Vec<String>,
    /// Ordered steps; rendered as a numbered list.
    pub learning_path: Vec<String>,
}

impl CareerRecord {
    pub fn has_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    pub fn requires_skill(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|s| s == skill)
    }
}
