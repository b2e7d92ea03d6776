//! Core domain types for Subset
//!
//! Letter sets, the scoring rules and word formatting. Everything here is pure and has
//! no I/O.

mod letters;
mod score;
mod text;

pub use letters::LetterSet;
pub use score::{PANGRAM_BONUS, PANGRAM_SIZE, is_pangram, score_word, total_score};
pub use text::{pluralize, title_case};

/// Shortest word the game will ever accept
pub const MIN_WORD_LENGTH: usize = 4;
