use crate::conversation::prompts::{
    CAREER_SUGGESTION_TEMPLATE, INTERESTS_PROMPT, LEARNING_ROADMAP_TEMPLATE, MOTIVATIONAL_TIPS,
};
use crate::conversation::tips::{pick_tip, TipSelector};
use crate::matching::{calculate_alignment, estimate_learning_duration};
use crate::models::{CareerRecord, UserProfile};

const DEFAULT_TOPIC: &str = "this area";

/// The follow-up question after the welcome answer. An empty answer falls
/// back to a generic topic so the sentence still reads.
pub fn render_interests_prompt(topic: &str) -> String {
    let topic = if topic.is_empty() { DEFAULT_TOPIC } else { topic };
    INTERESTS_PROMPT.replace("{interests}", topic)
}

pub fn format_career_suggestion(profile: &UserProfile, career: &CareerRecord) -> String {
    let alignment = calculate_alignment(profile, career);

    CAREER_SUGGESTION_TEMPLATE
        .replace("{title}", &career.title)
        .replace("{description}", &career.description)
        .replace("{skills}", &career.required_skills.join(", "))
        .replace("{demand}", &career.demand)
        .replace("{alignment}", alignment.as_str())
        .replace("{outlook}", &career.outlook)
}

pub fn generate_roadmap(
    profile: &UserProfile,
    career: &CareerRecord,
    tips: &mut dyn TipSelector,
) -> String {
    let duration = estimate_learning_duration(&profile.education, career);

    let resources = career
        .learning_resources
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");
    let steps = career
        .learning_path
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    LEARNING_ROADMAP_TEMPLATE
        .replace("{title}", &career.title)
        .replace("{duration}", duration.as_str())
        .replace("{resources}", &resources)
        .replace("{steps}", &steps)
        .replace("{tip}", pick_tip(MOTIVATIONAL_TIPS, tips))
}
