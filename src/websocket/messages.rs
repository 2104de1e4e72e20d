use serde::{Deserialize, Serialize};

use crate::models::{GameEvent, Rejection};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    StartGame,
    SubmitWord { word: String },
    GetState,
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RootWordChanged {
        word: String,
    },
    WordAccepted {
        word: String,
        used_words: Vec<UsedWordInfo>,
    },
    SubmissionRejected {
        reason: Rejection,
        title: String,
        message: String,
    },
    GameState {
        root_word: Option<String>,
        used_words: Vec<UsedWordInfo>,
    },
    Error {
        message: String,
    },
}

/// An accepted word as shown in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWordInfo {
    pub word: String,
    /// Letter count displayed next to the word
    pub letters: usize,
}

impl UsedWordInfo {
    pub fn from_words(words: &[String]) -> Vec<Self> {
        words
            .iter()
            .map(|word| UsedWordInfo {
                word: word.clone(),
                letters: word.chars().count(),
            })
            .collect()
    }
}

impl From<GameEvent> for ServerMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::RootWordChanged { word } => ServerMessage::RootWordChanged { word },
            GameEvent::WordAccepted { word, used_words } => ServerMessage::WordAccepted {
                word,
                used_words: UsedWordInfo::from_words(&used_words),
            },
            GameEvent::SubmissionRejected {
                reason,
                title,
                message,
            } => ServerMessage::SubmissionRejected {
                reason,
                title,
                message,
            },
        }
    }
}
