//! Puzzle generation from a seeded stream

use super::{GameRng, Seed};
use crate::core::{LetterSet, MIN_WORD_LENGTH, PANGRAM_SIZE, total_score};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("the dictionary has no word with seven distinct letters to build a puzzle from")]
    NoPangramCandidate,
}

/// A generated puzzle
///
/// Everything except the ring order is fixed once generated.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pangram_word: String,
    letters: LetterSet,
    required_letter: char,
    ring_letters: Vec<char>,
    valid_words: Vec<String>,
    valid_lookup: FxHashSet<String>,
    pangrams: Vec<String>,
    total_score: u32,
}

impl Puzzle {
    /// Generate the puzzle for a seed
    ///
    /// Convenience over [`Puzzle::generate`] that starts a fresh stream and drops it.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::NoPangramCandidate` if no dictionary word has seven
    /// distinct letters.
    ///
    /// # Examples
    /// ```
    /// use subset::dictionary::Dictionary;
    /// use subset::puzzle::{Puzzle, Seed};
    ///
    /// let dict = Dictionary::from_lines(["reading", "grade", "ridge", "dig"]);
    /// let puzzle = Puzzle::from_seed(Seed::new(42), &dict).unwrap();
    ///
    /// assert_eq!(puzzle.pangram_word(), "reading");
    /// assert_eq!(puzzle.letters().len(), 7);
    /// assert!(puzzle.letters().contains(puzzle.required_letter()));
    /// ```
    pub fn from_seed(seed: Seed, dictionary: &Dictionary) -> Result<Self, PuzzleError> {
        Self::generate(&mut seed.rng(), dictionary)
    }

    /// Generate a puzzle by drawing from `rng`
    ///
    /// The stream must be freshly seeded for the result to be reproducible. On return
    /// it has been advanced past the pangram choice, the required letter and the
    /// initial ring shuffle, ready for further shuffles.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::NoPangramCandidate` if no dictionary word has seven
    /// distinct letters.
    pub fn generate(rng: &mut GameRng, dictionary: &Dictionary) -> Result<Self, PuzzleError> {
        let candidates: Vec<&String> = dictionary
            .words()
            .iter()
            .filter(|word| LetterSet::from_word(word).len() == PANGRAM_SIZE)
            .collect();

        let pangram_word = (*candidates
            .choose(rng)
            .ok_or(PuzzleError::NoPangramCandidate)?)
        .clone();

        let letters = LetterSet::from_word(&pangram_word);
        let required_letter = *letters
            .as_slice()
            .choose(rng)
            .ok_or(PuzzleError::NoPangramCandidate)?;

        let mut ring_letters: Vec<char> = letters
            .iter()
            .filter(|&letter| letter != required_letter)
            .map(uppercase)
            .collect();
        ring_letters.shuffle(rng);

        let valid_words: Vec<String> = dictionary
            .words()
            .iter()
            .filter(|word| {
                word.chars().count() >= MIN_WORD_LENGTH
                    && word.contains(required_letter)
                    && letters.spells(word)
            })
            .cloned()
            .collect();

        let pangrams: Vec<String> = valid_words
            .iter()
            .filter(|word| LetterSet::from_word(word) == letters)
            .cloned()
            .collect();

        let valid_lookup = valid_words.iter().cloned().collect();
        let total_score = total_score(&valid_words);

        log::debug!(
            "puzzle from {} candidates: '{pangram_word}', letters {letters}, required '{required_letter}', {} valid words, {} pangrams",
            candidates.len(),
            valid_words.len(),
            pangrams.len()
        );

        Ok(Self {
            pangram_word,
            letters,
            required_letter,
            ring_letters,
            valid_words,
            valid_lookup,
            pangrams,
            total_score,
        })
    }

    /// Reorder the ring letters
    pub fn shuffle_ring<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ring_letters.shuffle(rng);
    }

    /// The seven-letter word the puzzle was built from
    #[must_use]
    pub fn pangram_word(&self) -> &str {
        &self.pangram_word
    }

    /// The seven puzzle letters in ascending order
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// Lowercase letter every guess must contain
    #[must_use]
    pub const fn required_letter(&self) -> char {
        self.required_letter
    }

    /// The six other letters, uppercase, in display order
    #[must_use]
    pub fn ring_letters(&self) -> &[char] {
        &self.ring_letters
    }

    /// Every acceptable word, in dictionary order
    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid_lookup.contains(word)
    }

    /// Valid words that use all seven letters
    #[must_use]
    pub fn pangrams(&self) -> &[String] {
        &self.pangrams
    }

    /// Score for finding every valid word
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }
}

/// Uppercase a letter for display, keeping it as-is if it has no single-char uppercase
fn uppercase(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}
