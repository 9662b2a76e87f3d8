//! Dialogue state machine.
//!
//! One user turn is `advance(session, input, ctx) -> (reply, session)`: the
//! session goes in by value and comes back updated, so a turn has no hidden
//! side effects beyond the returned value and the tip selector.
//!
//! Normal flow:
//! Welcome → CollectInterests → CollectSkills → CollectEducation
//!   → SuggestCareers → GenerateRoadmap → FollowUp
//! with `NoMatches` reachable from matching and from an exhausted queue.

use std::collections::VecDeque;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::conversation::prompts::{
    EDUCATION_PROMPT, FALLBACK_RESPONSE, FOLLOW_UP_PROMPT, NO_MATCHES_PROMPT, SKILLS_PROMPT,
};
use crate::conversation::render::{format_career_suggestion, generate_roadmap, render_interests_prompt};
use crate::conversation::tips::TipSelector;
use crate::matching::CareerMatcher;
use crate::models::{CareerRecord, UserProfile};

const ACCEPT_WORD: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueState {
    Welcome,
    CollectInterests,
    CollectSkills,
    CollectEducation,
    SuggestCareers,
    GenerateRoadmap,
    FollowUp,
    NoMatches,
}

impl DialogueState {
    /// States in which every input gets the fallback reply.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogueState::FollowUp | DialogueState::NoMatches)
    }
}

/// Everything one conversation accumulates.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub state: DialogueState,
    pub profile: UserProfile,
    /// Ranked suggestions still on offer, best first. Only ever shortened.
    pub suggestions: VecDeque<CareerRecord>,
    /// The career the user said yes to.
    pub selected_career: Option<CareerRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: DialogueState::Welcome,
            profile: UserProfile::default(),
            suggestions: VecDeque::new(),
            selected_career: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Collaborators a turn may consult.
pub struct TurnContext<'a> {
    pub catalog: &'a Catalog,
    pub matcher: &'a dyn CareerMatcher,
    pub tips: &'a mut dyn TipSelector,
}

/// Trims and lowercases a raw user line.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Runs one turn. Never fails: states without a transition answer with the
/// fallback text and stay where they are.
pub fn advance(mut session: Session, raw_input: &str, ctx: &mut TurnContext<'_>) -> (String, Session) {
    let input = normalize_input(raw_input);
    let from = session.state;

    let reply = match from {
        DialogueState::Welcome => {
            session.state = DialogueState::CollectInterests;
            render_interests_prompt(&input)
        }

        DialogueState::CollectInterests => {
            session.profile.interests = input;
            session.state = DialogueState::CollectSkills;
            SKILLS_PROMPT.to_string()
        }

        DialogueState::CollectSkills => {
            session.profile.skills = UserProfile::parse_skills(&input);
            session.state = DialogueState::CollectEducation;
            EDUCATION_PROMPT.to_string()
        }

        DialogueState::CollectEducation => {
            session.profile.education = input;
            suggest_careers(&mut session, ctx)
        }

        DialogueState::SuggestCareers => {
            if input.contains(ACCEPT_WORD) {
                accept_suggestion(&mut session, ctx)
            } else {
                reject_suggestion(&mut session)
            }
        }

        DialogueState::GenerateRoadmap => {
            session.state = DialogueState::FollowUp;
            FOLLOW_UP_PROMPT.to_string()
        }

        DialogueState::FollowUp | DialogueState::NoMatches => {
            warn!(
                "Session {}: no transition from {:?}, sending fallback",
                session.id, from
            );
            FALLBACK_RESPONSE.to_string()
        }
    };

    if from != session.state {
        debug!("Session {}: {:?} -> {:?}", session.id, from, session.state);
        if session.state.is_terminal() {
            info!("Session {} reached {:?}", session.id, session.state);
        }
    }

    (reply, session)
}

fn suggest_careers(session: &mut Session, ctx: &TurnContext<'_>) -> String {
    let ranked = ctx.matcher.rank(&session.profile, ctx.catalog);
    info!(
        "Session {}: {} of {} careers matched",
        session.id,
        ranked.len(),
        ctx.catalog.len()
    );

    for (rank, scored) in ranked.iter().enumerate() {
        debug!("#{} '{}' (score {})", rank + 1, scored.career.title, scored.score);
    }

    session.suggestions = ranked.into_iter().map(|scored| scored.career).collect();
    match session.suggestions.front() {
        Some(head) => {
            session.state = DialogueState::SuggestCareers;
            format_career_suggestion(&session.profile, head)
        }
        None => no_matches(session),
    }
}

fn accept_suggestion(session: &mut Session, ctx: &mut TurnContext<'_>) -> String {
    let Some(career) = session.suggestions.pop_front() else {
        return no_matches(session);
    };
    info!("Session {}: accepted '{}'", session.id, career.title);

    let roadmap = generate_roadmap(&session.profile, &career, ctx.tips);
    session.suggestions.clear();
    session.selected_career = Some(career);
    session.state = DialogueState::GenerateRoadmap;
    roadmap
}

fn reject_suggestion(session: &mut Session) -> String {
    if let Some(rejected) = session.suggestions.pop_front() {
        debug!("Session {}: rejected '{}'", session.id, rejected.title);
    }
    match session.suggestions.front() {
        Some(next) => format_career_suggestion(&session.profile, next),
        None => no_matches(session),
    }
}

fn no_matches(session: &mut Session) -> String {
    session.suggestions.clear();
    session.state = DialogueState::NoMatches;
    NO_MATCHES_PROMPT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::prompts::MOTIVATIONAL_TIPS;
    use crate::conversation::tips::FixedTipSelector;
    use crate::matching::KeywordMatcher;

    fn make_career(title: &str, keywords: &[&str], skills: &[&str]) -> CareerRecord {
        CareerRecord {
            title: title.to_string(),
            description: format!("All about {title}"),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            demand: "High".to_string(),
            outlook: "Stable".to_string(),
            learning_resources: vec![format!("{title} handbook")],
            learning_path: vec!["Start".to_string(), "Finish".to_string()],
        }
    }

    fn three_career_catalog() -> Catalog {
        Catalog::new(vec![
            make_career("Software Engineer", &["software"], &["python", "java", "git"]),
            make_career("Data Scientist", &["data", "software"], &["python", "statistics"]),
            make_career("Web Developer", &["software", "web"], &["javascript"]),
            make_career("Chef", &["cooking"], &["knives"]),
        ])
        .unwrap()
    }

    /// Feeds inputs one by one and returns every reply plus the final session.
    fn run(catalog: &Catalog, inputs: &[&str]) -> (Vec<String>, Session) {
        let mut tips = FixedTipSelector(0);
        let mut ctx = TurnContext {
            catalog,
            matcher: &KeywordMatcher,
            tips: &mut tips,
        };
        let mut session = Session::new();
        let mut replies = Vec::new();
        for input in inputs {
            let (reply, next) = advance(session, input, &mut ctx);
            replies.push(reply);
            session = next;
        }
        (replies, session)
    }

    const PROFILE_TURNS: [&str; 4] = [
        "technology",
        "Software Development",
        "Python, Java",
        "Bachelor's in CS",
    ];

    #[test]
    fn test_profile_collection_flow() {
        let catalog = three_career_catalog();
        let (replies, session) = run(&catalog, &PROFILE_TURNS[..3]);

        assert!(replies[0].contains("within technology"));
        assert_eq!(replies[1], SKILLS_PROMPT);
        assert_eq!(replies[2], EDUCATION_PROMPT);
        assert_eq!(session.state, DialogueState::CollectEducation);
        assert_eq!(session.profile.interests, "software development");
        assert_eq!(session.profile.skills, vec!["python", "java"]);
    }

    #[test]
    fn test_welcome_does_not_touch_profile() {
        let (_, session) = run(&three_career_catalog(), &["anything at all"]);
        assert_eq!(session.state, DialogueState::CollectInterests);
        assert_eq!(session.profile, UserProfile::default());
    }

    #[test]
    fn test_education_turn_suggests_best_match() {
        let catalog = three_career_catalog();
        let (replies, session) = run(&catalog, &PROFILE_TURNS);

        assert_eq!(session.state, DialogueState::SuggestCareers);
        assert_eq!(session.profile.education, "bachelor's in cs");
        // Software Engineer 1 + 2*2 = 5, Data Scientist 1 + 2 = 3, Web Developer 1.
        let queue: Vec<&str> = session.suggestions.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(queue, vec!["Software Engineer", "Data Scientist", "Web Developer"]);
        assert!(replies[3].contains("Career Suggestion: Software Engineer"));
        assert!(replies[3].contains("Good match"));
    }

    #[test]
    fn test_empty_catalog_goes_to_no_matches() {
        let (replies, session) = run(&Catalog::default(), &PROFILE_TURNS);
        assert_eq!(session.state, DialogueState::NoMatches);
        assert_eq!(replies[3], NO_MATCHES_PROMPT);
        assert!(session.suggestions.is_empty());
    }

    #[test]
    fn test_three_rejections_drain_queue() {
        let catalog = three_career_catalog();
        let inputs: Vec<&str> = PROFILE_TURNS.iter().copied().chain(["no", "no", "nope"]).collect();
        let (replies, session) = run(&catalog, &inputs);

        assert!(replies[4].contains("Career Suggestion: Data Scientist"));
        assert!(replies[5].contains("Career Suggestion: Web Developer"));
        assert_eq!(replies[6], NO_MATCHES_PROMPT);
        assert_eq!(session.state, DialogueState::NoMatches);
        assert!(session.suggestions.is_empty());
    }

    #[test]
    fn test_accept_uses_current_head() {
        let catalog = three_career_catalog();
        let inputs: Vec<&str> = PROFILE_TURNS.iter().copied().chain(["no", "YES please"]).collect();
        let (replies, session) = run(&catalog, &inputs);

        assert_eq!(session.state, DialogueState::GenerateRoadmap);
        assert_eq!(session.selected_career.as_ref().unwrap().title, "Data Scientist");
        assert!(replies[5].contains("Learning Roadmap for Data Scientist"));
        assert!(replies[5].contains("Estimated Duration: 1-2 years"));
        assert!(replies[5].contains(MOTIVATIONAL_TIPS[0]));
        assert!(session.suggestions.is_empty());
    }

    #[test]
    fn test_yes_is_substring_match() {
        let catalog = three_career_catalog();
        let inputs: Vec<&str> = PROFILE_TURNS.iter().copied().chain(["eyes wide open"]).collect();
        let (_, session) = run(&catalog, &inputs);
        assert_eq!(session.state, DialogueState::GenerateRoadmap);
        assert_eq!(session.selected_career.unwrap().title, "Software Engineer");
    }

    #[test]
    fn test_roadmap_then_follow_up_then_fallback() {
        let catalog = three_career_catalog();
        let inputs: Vec<&str> = PROFILE_TURNS
            .iter()
            .copied()
            .chain(["yes", "ok", "1", "2"])
            .collect();
        let (replies, session) = run(&catalog, &inputs);

        assert_eq!(replies[5], FOLLOW_UP_PROMPT);
        assert_eq!(replies[6], FALLBACK_RESPONSE);
        assert_eq!(replies[7], FALLBACK_RESPONSE);
        assert_eq!(session.state, DialogueState::FollowUp);
    }

    #[test]
    fn test_no_matches_is_absorbing() {
        let inputs: Vec<&str> = PROFILE_TURNS.iter().copied().chain(["yes", "broaden"]).collect();
        let (replies, session) = run(&Catalog::default(), &inputs);
        assert_eq!(replies[4], FALLBACK_RESPONSE);
        assert_eq!(replies[5], FALLBACK_RESPONSE);
        assert_eq!(session.state, DialogueState::NoMatches);
    }

    #[test]
    fn test_accept_with_empty_queue_degrades_to_no_matches() {
        let catalog = three_career_catalog();
        let mut tips = FixedTipSelector(0);
        let mut ctx = TurnContext {
            catalog: &catalog,
            matcher: &KeywordMatcher,
            tips: &mut tips,
        };
        let mut session = Session::new();
        session.state = DialogueState::SuggestCareers;

        let (reply, session) = advance(session, "yes", &mut ctx);
        assert_eq!(reply, NO_MATCHES_PROMPT);
        assert_eq!(session.state, DialogueState::NoMatches);
    }

    #[test]
    fn test_every_state_accepts_arbitrary_input() {
        let catalog = three_career_catalog();
        let states = [
            DialogueState::Welcome,
            DialogueState::CollectInterests,
            DialogueState::CollectSkills,
            DialogueState::CollectEducation,
            DialogueState::SuggestCareers,
            DialogueState::GenerateRoadmap,
            DialogueState::FollowUp,
            DialogueState::NoMatches,
        ];
        for state in states {
            for input in ["", "   ", "yes", "no", ",,,", "ÄÖÜ 🚀", "software, python"] {
                let mut tips = FixedTipSelector(3);
                let mut ctx = TurnContext {
                    catalog: &catalog,
                    matcher: &KeywordMatcher,
                    tips: &mut tips,
                };
                let mut session = Session::new();
                session.state = state;
                let (reply, _) = advance(session, input, &mut ctx);
                assert!(!reply.is_empty(), "empty reply for {state:?} / {input:?}");
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(DialogueState::FollowUp.is_terminal());
        assert!(DialogueState::NoMatches.is_terminal());
        assert!(!DialogueState::SuggestCareers.is_terminal());
    }
}
