use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Supplies the word a new game is built from
pub trait RootWordSource: Send + Sync {
    /// A randomly chosen root word, or `None` when there are no candidates
    fn next_root_word(&self) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum RootWordError {
    #[error("could not read root word list {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("root word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Root words read from a newline-delimited word list
#[derive(Debug, Clone)]
pub struct RootWordList {
    words: Vec<String>,
}

impl RootWordList {
    /// Load the candidate list. A missing or empty file is an error
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, RootWordError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| RootWordError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let list = Self::from_words(content.lines());
        if list.is_empty() {
            return Err(RootWordError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loaded {} root words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RootWordSource for RootWordList {
    fn next_root_word(&self) -> Option<String> {
        let mut rng = rand::rng();
        self.words.choose(&mut rng).cloned()
    }
}
