/// Rule checks applied to every submitted word
pub struct WordValidator;

impl WordValidator {
    /// Trim surrounding whitespace and lower-case
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Check that the word has not been accepted before
    pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
        !used_words
            .iter()
            .any(|used| used.to_lowercase() == candidate.to_lowercase())
    }

    /// Check that the word can be spelled from the root word's letters,
    /// using each letter no more often than it appears in the root
    pub fn is_possible(candidate: &str, root_word: &str) -> bool {
        let mut remaining: Vec<char> = root_word.chars().collect();

        for letter in candidate.chars() {
            match remaining.iter().position(|&c| c == letter) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => return false,
            }
        }

        true
    }
}
