use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::Result;

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a string is a real word in a given language.
///
/// The whole input is checked as a single word; a string containing
/// several words is never recognized.
pub trait DictionaryChecker: Send + Sync {
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// Word list dictionary for a single language
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_words(language, content.lines());

        tracing::info!(
            "Loaded {} {} words into dictionary",
            dictionary.len(),
            dictionary.language()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Create an empty dictionary
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for Dictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            tracing::debug!(
                "Dictionary for '{}' asked about language '{}'",
                self.language,
                language
            );
            return false;
        }

        !word.is_empty() && !word.contains(char::is_whitespace) && self.contains(word)
    }
}
