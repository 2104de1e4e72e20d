use serde::{Deserialize, Serialize};

/// State of one play session: the root word and the words accepted so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    root_word: String,
    /// Most recent first
    used_words: Vec<String>,
}

impl Session {
    /// Start a fresh session with no accepted words
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Record an accepted word at the front of the history
    pub(crate) fn push_used_word(&mut self, word: String) {
        self.used_words.insert(0, word);
    }
}

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    DuplicateWord,
    InfeasibleSpelling,
    UnrecognizedWord,
    /// Blank input. Never surfaced to the player.
    EmptyInput,
}

impl Rejection {
    /// Title and message shown to the player, or `None` when the rejection is silent
    pub fn alert(&self, root_word: &str) -> Option<Alert> {
        let (title, message) = match self {
            Rejection::DuplicateWord => ("Word used already", "Be more original".to_string()),
            Rejection::InfeasibleSpelling => (
                "Word not possible",
                format!("You can't spell that word from {}", root_word),
            ),
            Rejection::UnrecognizedWord => (
                "Word not recognized",
                "You can't just make up words".to_string(),
            ),
            Rejection::EmptyInput => return None,
        };

        Some(Alert {
            title: title.to_string(),
            message,
        })
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Rejection::EmptyInput)
    }
}

/// Result of running one submission through the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Notifications the engine queues for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RootWordChanged {
        word: String,
    },
    WordAccepted {
        word: String,
        used_words: Vec<String>,
    },
    SubmissionRejected {
        reason: Rejection,
        title: String,
        message: String,
    },
}
