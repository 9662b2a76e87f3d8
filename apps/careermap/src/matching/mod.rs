// Career matching: ranking careers for a profile, skill alignment, and
// learning-duration estimates. Pure functions over the profile and catalog.

pub mod alignment;
pub mod duration;
pub mod keyword;

pub use alignment::calculate_alignment;
pub use duration::estimate_learning_duration;
pub use keyword::{CareerMatcher, KeywordMatcher};
