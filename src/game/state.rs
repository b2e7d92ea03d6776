//! Found words, score and guess evaluation

use crate::core::{is_pangram, score_word};
use crate::dictionary::Dictionary;
use crate::puzzle::Puzzle;
use rustc_hash::FxHashSet;

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New valid word, now recorded
    Accepted {
        word: String,
        points: u32,
        pangram: bool,
    },
    /// Valid word that was already found
    AlreadyPlayed { word: String },
    /// Word lacks the required letter
    MissingRequired { word: String, required: char },
    /// Dictionary word using letters outside the puzzle
    OtherLetters { word: String },
    /// Not a dictionary word (or too short to count)
    NotInDictionary { word: String },
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Progress through one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    found: Vec<String>,
    found_lookup: FxHashSet<String>,
    score: u32,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from previously found words
    ///
    /// Words that are not valid for `puzzle` (for example after a dictionary change)
    /// and repeats are dropped, so the state always satisfies found ⊆ valid words.
    #[must_use]
    pub fn restore<I, S>(found: I, puzzle: &Puzzle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::new();
        for word in found {
            let word = word.as_ref();
            if !puzzle.is_valid(word) {
                log::warn!("dropping saved word '{word}': not valid for this puzzle");
                continue;
            }
            if !state.record(word) {
                log::debug!("dropping repeated saved word '{word}'");
            }
        }
        state
    }

    /// Evaluate a guess and record it if it is a new valid word
    ///
    /// `word` is expected already trimmed and lowercased.
    pub fn guess(&mut self, word: &str, puzzle: &Puzzle, dictionary: &Dictionary) -> GuessOutcome {
        let owned = word.to_string();

        if self.found_lookup.contains(word) {
            return GuessOutcome::AlreadyPlayed { word: owned };
        }

        if puzzle.is_valid(word) {
            self.record(word);
            return GuessOutcome::Accepted {
                word: owned,
                points: score_word(word),
                pangram: is_pangram(word),
            };
        }

        let required = puzzle.required_letter();
        if !word.contains(required) {
            GuessOutcome::MissingRequired {
                word: owned,
                required,
            }
        } else if dictionary.contains(word) {
            GuessOutcome::OtherLetters { word: owned }
        } else {
            GuessOutcome::NotInDictionary { word: owned }
        }
    }

    /// Add a word, returning false if it was already present
    fn record(&mut self, word: &str) -> bool {
        if !self.found_lookup.insert(word.to_string()) {
            return false;
        }
        self.found.push(word.to_string());
        self.score += score_word(word);
        true
    }

    /// Found words in the order they were played
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found_lookup.contains(word)
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}
