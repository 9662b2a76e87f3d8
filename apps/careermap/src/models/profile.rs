/// What the user told us about themselves, filled in one field per turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub interests: String,
    pub skills: Vec<String>,
    pub education: String,
}

impl UserProfile {
    /// Interest words as used for keyword matching.
    pub fn interest_terms(&self) -> impl Iterator<Item = &str> {
        self.interests.split_whitespace()
    }

    /// Splits a comma-separated answer into skills. Tokens are trimmed and
    /// empty tokens (`"python,,java"`, trailing comma) are dropped.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
