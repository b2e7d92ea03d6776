//! The game dictionary
//!
//! A filtered, ordered list of lowercase alphabetic words. The bundled list is
//! compiled into the binary; a replacement can be loaded from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_LINES, DICTIONARY_LINES_COUNT};
pub use loader::{DictionaryError, is_playable_line, load_from_file};

use rustc_hash::FxHashSet;

/// An ordered word list with fast membership tests
///
/// Order is the input order and duplicates are kept; nothing downstream depends on
/// either beyond the puzzle generator walking the list front to back.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw lines, dropping anything that is not a playable word
    ///
    /// # Examples
    /// ```
    /// use subset::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["grade", "Garrett", "don't", "  ridge  "]);
    /// assert_eq!(dict.words(), &["grade", "ridge"]);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .filter(|line| is_playable_line(line.as_ref()))
            .map(|line| line.as_ref().trim().to_string())
            .collect();
        let lookup = words.iter().cloned().collect();

        Self { words, lookup }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::from_lines(DICTIONARY_LINES);
        log::debug!(
            "embedded dictionary: {} of {DICTIONARY_LINES_COUNT} lines kept",
            dictionary.len()
        );
        dictionary
    }

    /// All words, in input order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_keeps_order_and_duplicates() {
        let dict = Dictionary::from_lines(["ridge", "grade", "ridge"]);
        assert_eq!(dict.words(), &["ridge", "grade", "ridge"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn contains_only_filtered_words() {
        let dict = Dictionary::from_lines(["grade", "Reading", "co-op"]);
        assert!(dict.contains("grade"));
        assert!(!dict.contains("Reading"));
        assert!(!dict.contains("reading"));
        assert!(!dict.contains("co-op"));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let dict = Dictionary::from_lines(Vec::<String>::new());
        assert!(dict.is_empty());
    }

    #[test]
    fn embedded_dictionary_is_filtered() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.len() < DICTIONARY_LINES_COUNT);
        assert!(dict.contains("reading"));
        assert!(dict.contains("café"));
        assert!(!dict.contains("Bristol"));
        assert!(!dict.contains("don't"));
        for word in dict.words() {
            assert!(
                word.chars().all(char::is_alphabetic),
                "'{word}' is not alphabetic"
            );
        }
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(DICTIONARY_LINES.len(), DICTIONARY_LINES_COUNT);
    }
}
