//! Sorted sets of distinct letters
//!
//! A `LetterSet` is the letter alphabet of a word: each distinct character once,
//! in ascending order. The ordering is part of the puzzle contract because random
//! draws index into it, so it must be identical on every run.

use std::fmt;

/// The distinct letters of a word, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Build the letter set of a word
    ///
    /// # Examples
    /// ```
    /// use subset::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("reading");
    /// assert_eq!(set.as_slice(), &['a', 'd', 'e', 'g', 'i', 'n', 'r']);
    /// assert_eq!(set.len(), 7);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        Self { letters }
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Check whether every character of `word` is drawn from this set
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// Letters in ascending order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_sorts_and_dedups() {
        let set = LetterSet::from_word("banana");
        assert_eq!(set.as_slice(), &['a', 'b', 'n']);
    }

    #[test]
    fn from_word_empty() {
        let set = LetterSet::from_word("");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn ordering_is_independent_of_word_order() {
        assert_eq!(LetterSet::from_word("painter"), LetterSet::from_word("repaint"));
        assert_eq!(LetterSet::from_word("pertain").to_string(), "aeinprt");
    }

    #[test]
    fn contains_and_spells() {
        let set = LetterSet::from_word("reading");
        assert!(set.contains('g'));
        assert!(!set.contains('z'));
        assert!(set.spells("grinder"));
        assert!(set.spells("dagger"));
        assert!(!set.spells("garden!"));
        assert!(!set.spells("bread"));
    }

    #[test]
    fn extended_latin_letters_are_distinct() {
        let set = LetterSet::from_word("café");
        assert_eq!(set.len(), 4);
        assert!(set.contains('é'));
        assert!(!set.contains('e'));
    }
}
