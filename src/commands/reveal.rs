//! Puzzle reveal command
//!
//! Derives the puzzle for a seed without playing it, listing every answer.

use crate::core::{LetterSet, is_pangram};
use crate::dictionary::Dictionary;
use crate::puzzle::{Puzzle, PuzzleError, Seed};

/// Everything about one puzzle
pub struct Reveal {
    pub seed: Seed,
    pub pangram_word: String,
    pub letters: LetterSet,
    pub required_letter: char,
    /// Valid words in dictionary order, each flagged if it is a pangram
    pub words: Vec<(String, bool)>,
    pub total_score: u32,
}

impl Reveal {
    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.words.iter().filter(|(_, pangram)| *pangram).count()
    }
}

/// Build the puzzle for `seed` and collect its answers
///
/// # Errors
///
/// Returns `PuzzleError::NoPangramCandidate` if the dictionary cannot produce a puzzle.
///
/// # Examples
/// ```
/// use subset::commands::reveal_puzzle;
/// use subset::dictionary::Dictionary;
/// use subset::puzzle::Seed;
///
/// let dict = Dictionary::from_lines(["reading", "grained", "grin"]);
/// let reveal = reveal_puzzle(Seed::new(1), &dict).unwrap();
/// assert_eq!(reveal.letters.to_string(), "adeginr");
/// assert!(reveal.pangram_count() >= 2);
/// ```
pub fn reveal_puzzle(seed: Seed, dictionary: &Dictionary) -> Result<Reveal, PuzzleError> {
    let puzzle = Puzzle::from_seed(seed, dictionary)?;

    let words = puzzle
        .valid_words()
        .iter()
        .map(|word| (word.clone(), is_pangram(word)))
        .collect();

    Ok(Reveal {
        seed,
        pangram_word: puzzle.pangram_word().to_string(),
        letters: puzzle.letters().clone(),
        required_letter: puzzle.required_letter(),
        words,
        total_score: puzzle.total_score(),
    })
}
