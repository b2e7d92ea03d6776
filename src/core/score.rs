//! Word scoring
//!
//! Four-letter words are worth a single point, longer words one point per letter.
//! Pangrams (words using all seven puzzle letters) earn a bonus on top.

use super::LetterSet;

/// Distinct letters in every puzzle, and in every pangram
pub const PANGRAM_SIZE: usize = 7;

/// Extra points awarded for a pangram
pub const PANGRAM_BONUS: u32 = 14;

/// Check if a word uses exactly seven distinct letters
///
/// For any valid word of a puzzle this is the same as using every puzzle letter,
/// since valid words only draw from the puzzle's seven.
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    LetterSet::from_word(word).len() == PANGRAM_SIZE
}

/// Score a single word
///
/// # Examples
/// ```
/// use subset::core::score_word;
///
/// assert_eq!(score_word("cozy"), 1);
/// assert_eq!(score_word("dinner"), 6);
/// assert_eq!(score_word("reading"), 7 + 14);
/// ```
#[must_use]
pub fn score_word(word: &str) -> u32 {
    let length = word.chars().count() as u32;
    let base = if length == 4 { 1 } else { length };

    if is_pangram(word) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

/// Sum of the scores of a set of words
pub fn total_score<I, S>(words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| score_word(w.as_ref())).sum()
}
