use std::fmt;

use crate::models::{CareerRecord, UserProfile};

/// Coarse bucket for how many of a career's required skills the user has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentLabel {
    Excellent,
    Good,
    Partial,
    Basic,
}

impl AlignmentLabel {
    /// Band boundaries are exclusive: exactly 0.75 is `Good`, not `Excellent`.
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r > 0.75 => AlignmentLabel::Excellent,
            r if r > 0.5 => AlignmentLabel::Good,
            r if r > 0.25 => AlignmentLabel::Partial,
            _ => AlignmentLabel::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentLabel::Excellent => "Excellent match",
            AlignmentLabel::Good => "Good match",
            AlignmentLabel::Partial => "Partial match",
            AlignmentLabel::Basic => "Basic match",
        }
    }
}

impl fmt::Display for AlignmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile skills found in `required_skills`, over `max(|required_skills|, 1)`.
pub fn alignment_ratio(profile: &UserProfile, career: &CareerRecord) -> f64 {
    let matched = profile
        .skills
        .iter()
        .filter(|skill| career.requires_skill(skill))
        .count();
    matched as f64 / career.required_skills.len().max(1) as f64
}

pub fn calculate_alignment(profile: &UserProfile, career: &CareerRecord) -> AlignmentLabel {
    AlignmentLabel::from_ratio(alignment_ratio(profile, career))
}
