use std::sync::Arc;

use thiserror::Error;

use crate::{
    dictionary::DictionaryChecker,
    game::{RootWordSource, WordValidator},
    models::{GameEvent, Rejection, Session, ValidationOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no game in progress; start a game before submitting words")]
    NotStarted,
    #[error("root word source has no candidates")]
    NoRootWord,
}

/// Runs one word-scramble game at a time.
///
/// Submissions go through originality, feasibility and dictionary checks in
/// that order; the first failing check decides the rejection. Presentation
/// events are queued and collected with [`GameEngine::drain_events`].
pub struct GameEngine {
    root_words: Arc<dyn RootWordSource>,
    dictionary: Arc<dyn DictionaryChecker>,
    language: String,
    session: Option<Session>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(
        root_words: Arc<dyn RootWordSource>,
        dictionary: Arc<dyn DictionaryChecker>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            root_words,
            dictionary,
            language: language.into(),
            session: None,
            events: Vec::new(),
        }
    }

    /// Draw a new root word and discard any previous session
    pub fn start_game(&mut self) -> Result<&Session, EngineError> {
        let root_word = self
            .root_words
            .next_root_word()
            .map(|word| WordValidator::normalize(&word))
            .filter(|word| !word.is_empty())
            .ok_or(EngineError::NoRootWord)?;

        tracing::info!("Starting game with root word '{}'", root_word);

        self.events.push(GameEvent::RootWordChanged {
            word: root_word.clone(),
        });
        Ok(&*self.session.insert(Session::new(root_word)))
    }

    /// Validate a submission and record it when every check passes
    pub fn submit_word(&mut self, raw: &str) -> Result<ValidationOutcome, EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NotStarted)?;
        let candidate = WordValidator::normalize(raw);

        let rejection = if candidate.is_empty() {
            Some(Rejection::EmptyInput)
        } else if !WordValidator::is_original(&candidate, session.used_words()) {
            Some(Rejection::DuplicateWord)
        } else if !WordValidator::is_possible(&candidate, session.root_word()) {
            Some(Rejection::InfeasibleSpelling)
        } else if !self.dictionary.is_recognized(&candidate, &self.language) {
            Some(Rejection::UnrecognizedWord)
        } else {
            None
        };

        let Some(reason) = rejection else {
            tracing::debug!("Accepted '{}'", candidate);
            session.push_used_word(candidate.clone());
            self.events.push(GameEvent::WordAccepted {
                word: candidate,
                used_words: session.used_words().to_vec(),
            });
            return Ok(ValidationOutcome::Accepted);
        };

        if let Some(alert) = reason.alert(session.root_word()) {
            tracing::debug!("Rejected '{}': {:?}", candidate, reason);
            self.events.push(GameEvent::SubmissionRejected {
                reason,
                title: alert.title,
                message: alert.message,
            });
        }

        Ok(ValidationOutcome::Rejected(reason))
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    pub fn root_word(&self) -> Option<&str> {
        self.session.as_ref().map(Session::root_word)
    }

    pub fn used_words(&self) -> &[String] {
        self.session
            .as_ref()
            .map(Session::used_words)
            .unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::sync::Mutex;

    /// Hands out the given root words in order
    struct FixedRootWords(Mutex<Vec<String>>);

    impl FixedRootWords {
        fn new(words: &[&str]) -> Arc<Self> {
            Arc::new(Self(Mutex::new(
                words.iter().rev().map(|w| w.to_string()).collect(),
            )))
        }
    }

    impl RootWordSource for FixedRootWords {
        fn next_root_word(&self) -> Option<String> {
            self.0.lock().unwrap().pop()
        }
    }

    fn english(words: &[&str]) -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words("en", words.iter().copied()))
    }

    fn started_engine(root: &str, words: &[&str]) -> GameEngine {
        let mut engine = GameEngine::new(FixedRootWords::new(&[root]), english(words), "en");
        engine.start_game().unwrap();
        engine.drain_events();
        engine
    }

    #[test]
    fn test_start_game_sets_root_word() {
        let mut engine = GameEngine::new(FixedRootWords::new(&["SilkWorm\n"]), english(&[]), "en");
        assert!(!engine.is_started());

        engine.start_game().unwrap();

        assert_eq!(engine.root_word(), Some("silkworm"), "Root word should be normalized");
        assert!(engine.used_words().is_empty());
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::RootWordChanged {
                word: "silkworm".to_string()
            }]
        );
    }

    #[test]
    fn test_start_game_without_candidates_fails() {
        let mut engine = GameEngine::new(FixedRootWords::new(&[]), english(&[]), "en");
        assert_eq!(engine.start_game().unwrap_err(), EngineError::NoRootWord);
        assert!(!engine.is_started());
    }

    #[test]
    fn test_start_game_resets_history() {
        let mut engine = GameEngine::new(
            FixedRootWords::new(&["silkworm", "harvest"]),
            english(&["silk", "vest"]),
            "en",
        );
        engine.start_game().unwrap();
        engine.submit_word("silk").unwrap();
        assert_eq!(engine.used_words(), ["silk"]);

        engine.start_game().unwrap();
        assert_eq!(engine.root_word(), Some("harvest"));
        assert!(
            engine.used_words().is_empty(),
            "A new game should clear the history"
        );
    }

    #[test]
    fn test_submit_before_start_is_rejected() {
        let mut engine = GameEngine::new(FixedRootWords::new(&["silkworm"]), english(&["silk"]), "en");
        assert_eq!(engine.submit_word("silk").unwrap_err(), EngineError::NotStarted);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_accepted_word_is_recorded() {
        let mut engine = started_engine("silkworm", &["silk"]);

        let outcome = engine.submit_word("  Silk\n").unwrap();

        assert_eq!(outcome, ValidationOutcome::Accepted);
        assert_eq!(engine.used_words(), ["silk"]);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::WordAccepted {
                word: "silk".to_string(),
                used_words: vec!["silk".to_string()],
            }]
        );
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut engine = started_engine("silkworm", &["silk", "worm", "milk"]);
        for word in ["silk", "worm", "milk"] {
            assert!(engine.submit_word(word).unwrap().is_accepted());
        }
        assert_eq!(engine.used_words(), ["milk", "worm", "silk"]);
    }

    #[test]
    fn test_empty_input_is_silent() {
        let mut engine = started_engine("silkworm", &["silk"]);

        for raw in ["", "   ", "\n", "\t \n"] {
            let outcome = engine.submit_word(raw).unwrap();
            assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::EmptyInput));
        }

        assert!(engine.used_words().is_empty());
        assert!(
            engine.drain_events().is_empty(),
            "Empty input should not produce any event"
        );
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let mut engine = started_engine("silkworm", &["silk"]);
        engine.submit_word("silk").unwrap();
        engine.drain_events();

        let outcome = engine.submit_word("SILK").unwrap();

        assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::DuplicateWord));
        assert_eq!(engine.used_words(), ["silk"]);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::SubmissionRejected {
                reason: Rejection::DuplicateWord,
                title: "Word used already".to_string(),
                message: "Be more original".to_string(),
            }]
        );
    }

    #[test]
    fn test_infeasible_spelling() {
        let mut engine = started_engine("silkworm", &["silkworms"]);

        let outcome = engine.submit_word("silkworms").unwrap();

        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(Rejection::InfeasibleSpelling)
        );
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::SubmissionRejected {
                reason: Rejection::InfeasibleSpelling,
                title: "Word not possible".to_string(),
                message: "You can't spell that word from silkworm".to_string(),
            }]
        );
    }

    #[test]
    fn test_unrecognized_word() {
        let mut engine = started_engine("silkworm", &["silk"]);

        let outcome = engine.submit_word("wilk").unwrap();

        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(Rejection::UnrecognizedWord)
        );
        assert!(engine.used_words().is_empty());
    }

    #[test]
    fn test_checks_run_in_order() {
        // "silkworms" is neither feasible nor in the dictionary: feasibility wins
        let mut engine = started_engine("silkworm", &[]);
        assert_eq!(
            engine.submit_word("silkworms").unwrap().rejection(),
            Some(Rejection::InfeasibleSpelling)
        );

        // A repeated word is a duplicate even though it is still spellable and real
        let mut engine = started_engine("tree", &["tee"]);
        engine.submit_word("tee").unwrap();
        assert_eq!(
            engine.submit_word("tee").unwrap().rejection(),
            Some(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn test_rejection_is_repeatable() {
        let mut engine = started_engine("tree", &["eet", "eeet"]);
        let first = engine.submit_word("eeet").unwrap();
        let second = engine.submit_word("eeet").unwrap();
        assert_eq!(first, ValidationOutcome::Rejected(Rejection::InfeasibleSpelling));
        assert_eq!(first, second, "Resubmitting should give the same reason");

        assert!(engine.submit_word("eet").unwrap().is_accepted());
    }

    #[test]
    fn test_root_word_itself_is_allowed() {
        let mut engine = started_engine("silkworm", &["silkworm"]);
        assert!(engine.submit_word("silkworm").unwrap().is_accepted());
    }

    #[test]
    fn test_configured_language_is_used() {
        let mut engine = GameEngine::new(FixedRootWords::new(&["silkworm"]), english(&["silk"]), "fr");
        engine.start_game().unwrap();
        assert_eq!(engine.language(), "fr");
        assert_eq!(
            engine.submit_word("silk").unwrap().rejection(),
            Some(Rejection::UnrecognizedWord),
            "Words should be checked against the configured language"
        );
    }
}
