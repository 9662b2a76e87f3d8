use std::fmt;

use crate::models::CareerRecord;

/// Rough time to get job-ready, keyed off the highest degree mentioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningDuration {
    Doctorate,
    Master,
    Bachelor,
    Foundational,
}

impl LearningDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningDuration::Doctorate => "3-6 months",
            LearningDuration::Master => "6-12 months",
            LearningDuration::Bachelor => "1-2 years",
            LearningDuration::Foundational => "2+ years (consider foundational education first)",
        }
    }
}

impl fmt::Display for LearningDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First match wins, checked phd → master → bachelor, case-insensitively.
///
/// `_career` is accepted for future per-career estimates; nothing is read from it.
pub fn estimate_learning_duration(education: &str, _career: &CareerRecord) -> LearningDuration {
    let education = education.to_lowercase();
    if education.contains("phd") {
        LearningDuration::Doctorate
    } else if education.contains("master") {
        LearningDuration::Master
    } else if education.contains("bachelor") {
        LearningDuration::Bachelor
    } else {
        LearningDuration::Foundational
    }
}
