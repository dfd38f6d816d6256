//! Conversation control
//!
//! A two-phase state machine drives the read-classify-reply loop. In
//! `Normal` each turn is answered by the reply selector, except that exit
//! phrases terminate immediately and the first thanks after a substantive
//! exchange opens the exit-confirmation sub-dialogue. In
//! `AwaitingExitConfirmation` the turn's text is matched against the
//! affirmative/negative sets and is otherwise discarded.
//!
//! Session state is an explicit value threaded through each turn call;
//! there are no globals.

use sahayak_nlu::{normalize, LanguageClassifier, THANKS_INTENT};

use crate::catalog::ResponseCatalog;
use crate::phrases;
use crate::selector::ReplySelector;

/// Dialog phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Normal,
    AwaitingExitConfirmation,
}

/// Mutable per-conversation state
///
/// Initialized at conversation start, mutated once per turn, discarded at
/// process exit. `last_intent` is the only multi-turn context the assistant
/// keeps.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: DialogPhase,
    pub last_intent: Option<&'static str>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Outcome of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Emit the reply and keep the conversation going
    Reply(String),
    /// Emit the farewell and terminate the loop
    Farewell(String),
}

impl TurnOutcome {
    /// The line to show the user
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Farewell(text) => text,
        }
    }

    /// Whether the conversation is over after this turn
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Farewell(_))
    }
}

/// Conversation controller
pub struct Controller {
    language: LanguageClassifier,
    selector: ReplySelector,
    catalog: ResponseCatalog,
}

impl Controller {
    pub fn new(language: LanguageClassifier, selector: ReplySelector) -> Self {
        Self {
            language,
            selector,
            catalog: ResponseCatalog::new(),
        }
    }

    /// Handle one turn of the conversation
    ///
    /// Total: every input produces an outcome, worst case the default
    /// template or a re-prompt.
    pub async fn handle_turn(&self, session: &mut SessionState, raw: &str) -> TurnOutcome {
        let normalized = normalize(raw);
        let language = self.language.classify(raw).await;

        if session.phase == DialogPhase::AwaitingExitConfirmation {
            if phrases::is_affirmative(&normalized) {
                tracing::debug!("exit declined, resuming");
                session.phase = DialogPhase::Normal;
                return TurnOutcome::Reply(self.catalog.continue_prompt().to_string());
            }
            if phrases::is_negative(&normalized) {
                tracing::info!(%language, "exit confirmed");
                return TurnOutcome::Farewell(self.catalog.farewell(language).to_string());
            }
            // Unrecognised answer: re-prompt and discard the turn's text
            tracing::debug!("unrecognised confirmation answer, re-prompting");
            return TurnOutcome::Reply(self.catalog.reprompt().to_string());
        }

        if phrases::is_exit_message(raw) {
            tracing::info!(%language, "exit phrase matched");
            return TurnOutcome::Farewell(self.catalog.farewell(language).to_string());
        }

        let intent = self.selector.classify_intent(&normalized);

        // First thanks after a substantive exchange opens the
        // exit-confirmation sub-dialogue instead of the thank_you template
        let first_thanks = intent == THANKS_INTENT
            && session.last_intent.is_some_and(|last| last != THANKS_INTENT);
        if first_thanks {
            tracing::debug!(%language, "thanks after substantive exchange, asking to confirm exit");
            session.phase = DialogPhase::AwaitingExitConfirmation;
            session.last_intent = Some(intent);
            return TurnOutcome::Reply(self.catalog.welcome_prompt(language).to_string());
        }

        let reply = self.selector.select(&normalized, language).await;
        session.last_intent = Some(intent);
        session.phase = DialogPhase::Normal;
        TurnOutcome::Reply(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_nlu::{
        create_detector, create_scorer, IntentClassifier, LanguageConfig, SentimentClassifier,
        SentimentConfig,
    };

    fn controller() -> Controller {
        Controller::new(
            LanguageClassifier::new(create_detector(&LanguageConfig::default())),
            ReplySelector::new(
                IntentClassifier::new(),
                SentimentClassifier::new(create_scorer(&SentimentConfig::default())),
                ResponseCatalog::new(),
            ),
        )
    }

    #[tokio::test]
    async fn test_normal_turn_records_last_intent() {
        let controller = controller();
        let mut session = SessionState::new();

        let outcome = controller.handle_turn(&mut session, "where is my order").await;
        assert!(!outcome.is_final());
        assert_eq!(outcome.text(), "You can track your order here: [Track Order Link]");
        assert_eq!(session.last_intent, Some("track_order"));
        assert_eq!(session.phase, DialogPhase::Normal);
    }

    #[tokio::test]
    async fn test_exit_phrase_terminates_directly() {
        let controller = controller();
        let mut session = SessionState::new();

        let outcome = controller.handle_turn(&mut session, "thank you, that's it").await;
        assert!(outcome.is_final());
        assert_eq!(outcome.text(), "Goodbye! Have a great day! 👋");
    }

    #[tokio::test]
    async fn test_first_thanks_opens_confirmation() {
        let controller = controller();
        let mut session = SessionState::new();

        controller.handle_turn(&mut session, "where is my order").await;
        let outcome = controller.handle_turn(&mut session, "thank you").await;

        assert!(!outcome.is_final());
        assert_eq!(
            outcome.text(),
            "You're welcome! Do you have another question, or would you like to end the conversation?"
        );
        assert_eq!(session.phase, DialogPhase::AwaitingExitConfirmation);
        assert_eq!(session.last_intent, Some(THANKS_INTENT));
    }

    #[tokio::test]
    async fn test_thanks_without_prior_exchange_uses_template() {
        let controller = controller();
        let mut session = SessionState::new();

        // No last_intent yet, so the gating does not trigger
        let outcome = controller.handle_turn(&mut session, "thanks").await;
        assert_eq!(
            outcome.text(),
            "You're most welcome! Let me know if you need anything else. 🙏"
        );
        assert_eq!(session.phase, DialogPhase::Normal);
    }

    #[tokio::test]
    async fn test_confirmation_no_ends_conversation() {
        let controller = controller();
        let mut session = SessionState::new();

        controller.handle_turn(&mut session, "where is my order").await;
        controller.handle_turn(&mut session, "thank you").await;
        let outcome = controller.handle_turn(&mut session, "no").await;

        assert!(outcome.is_final());
        assert_eq!(outcome.text(), "Goodbye! Have a great day! 👋");
    }

    #[tokio::test]
    async fn test_confirmation_yes_resumes() {
        let controller = controller();
        let mut session = SessionState::new();

        controller.handle_turn(&mut session, "where is my order").await;
        controller.handle_turn(&mut session, "thank you").await;
        let outcome = controller.handle_turn(&mut session, "yes").await;

        assert!(!outcome.is_final());
        assert_eq!(outcome.text(), "Sure! Please go ahead.");
        assert_eq!(session.phase, DialogPhase::Normal);
    }

    #[tokio::test]
    async fn test_confirmation_unrecognised_reprompts_and_stays() {
        let controller = controller();
        let mut session = SessionState::new();

        controller.handle_turn(&mut session, "where is my order").await;
        controller.handle_turn(&mut session, "thank you").await;
        let outcome = controller.handle_turn(&mut session, "maybe").await;

        assert!(!outcome.is_final());
        assert_eq!(
            outcome.text(),
            "I'm here if you have another question, or you can type 'exit' to leave. 😊"
        );
        assert_eq!(session.phase, DialogPhase::AwaitingExitConfirmation);
    }

    #[tokio::test]
    async fn test_confirmation_thats_all_ends() {
        let controller = controller();
        let mut session = SessionState::new();

        controller.handle_turn(&mut session, "where is my order").await;
        controller.handle_turn(&mut session, "thank you").await;
        let outcome = controller.handle_turn(&mut session, "that's all").await;

        assert!(outcome.is_final());
    }
}
