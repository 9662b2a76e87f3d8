use tracing::info;

use crate::catalog::Catalog;
use crate::conversation::prompts::{EXIT_KEYWORDS, FAREWELL_MESSAGE, WELCOME_PROMPT};
use crate::conversation::state::{advance, normalize_input, DialogueState, Session, TurnContext};
use crate::conversation::tips::TipSelector;
use crate::matching::CareerMatcher;

/// One assistant conversation: the catalog, the pluggable collaborators and
/// the single active session. The terminal loop only talks to this type.
pub struct Conversation {
    catalog: Catalog,
    matcher: Box<dyn CareerMatcher>,
    tips: Box<dyn TipSelector>,
    session: Session,
}

impl Conversation {
    pub fn new(
        catalog: Catalog,
        matcher: Box<dyn CareerMatcher>,
        tips: Box<dyn TipSelector>,
    ) -> Self {
        let session = Session::new();
        info!(
            "Session {} started with {} careers",
            session.id,
            catalog.len()
        );
        Self {
            catalog,
            matcher,
            tips,
            session,
        }
    }

    /// What the assistant says before the first user turn.
    pub fn greet(&self) -> &'static str {
        WELCOME_PROMPT
    }

    pub fn farewell(&self) -> &'static str {
        FAREWELL_MESSAGE
    }

    /// True for `quit`, `exit` or `bye` in any case. These are never passed
    /// to [`Conversation::process_turn`].
    pub fn is_exit_command(input: &str) -> bool {
        let input = normalize_input(input);
        EXIT_KEYWORDS.contains(&input.as_str())
    }

    pub fn process_turn(&mut self, raw_input: &str) -> String {
        let session = std::mem::take(&mut self.session);
        let mut ctx = TurnContext {
            catalog: &self.catalog,
            matcher: self.matcher.as_ref(),
            tips: self.tips.as_mut(),
        };
        let (reply, session) = advance(session, raw_input, &mut ctx);
        self.session = session;
        reply
    }

    pub fn state(&self) -> DialogueState {
        self.session.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
