//! Keyword matching — scores every catalog career against the user profile
//! and keeps the best few as suggestions.
//!
//! The engine holds a `Box<dyn CareerMatcher>`; `KeywordMatcher` is the only
//! backend today.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{CareerRecord, UserProfile};

/// Points per interest word found in a career's keywords.
pub const INTEREST_WEIGHT: u32 = 1;
/// Points per profile skill found in a career's required skills.
pub const SKILL_WEIGHT: u32 = 2;
/// Length cap of the suggestion queue.
pub const MAX_SUGGESTIONS: usize = 3;

/// A career together with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCareer {
    pub career: CareerRecord,
    pub score: u32,
}

/// Ranks catalog careers for a profile. Implementations must return at most
/// [`MAX_SUGGESTIONS`] careers, all with a score above zero, best first.
pub trait CareerMatcher {
    fn rank(&self, profile: &UserProfile, catalog: &Catalog) -> Vec<ScoredCareer>;
}

/// Exact-string overlap scorer. Deterministic: equal scores keep catalog order.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatcher;

impl CareerMatcher for KeywordMatcher {
    fn rank(&self, profile: &UserProfile, catalog: &Catalog) -> Vec<ScoredCareer> {
        rank_careers(profile, catalog)
    }
}

/// interests ∩ keywords × 1 + skills ∩ required_skills × 2.
///
/// Repeated interest words or skills count once per occurrence.
pub fn match_score(profile: &UserProfile, career: &CareerRecord) -> u32 {
    let interest_hits = profile
        .interest_terms()
        .filter(|word| career.has_keyword(word))
        .count() as u32;
    let skill_hits = profile
        .skills
        .iter()
        .filter(|skill| career.requires_skill(skill))
        .count() as u32;

    interest_hits * INTEREST_WEIGHT + skill_hits * SKILL_WEIGHT
}

pub fn rank_careers(profile: &UserProfile, catalog: &Catalog) -> Vec<ScoredCareer> {
    let mut matched: Vec<ScoredCareer> = catalog
        .careers()
        .iter()
        .filter_map(|career| {
            let score = match_score(profile, career);
            debug!("Match score {} for '{}'", score, career.title);
            (score > 0).then(|| ScoredCareer {
                career: career.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in catalog order.
    matched.sort_by(|a, b| b.score.cmp(&a.score));
    matched.truncate(MAX_SUGGESTIONS);
    matched
}
