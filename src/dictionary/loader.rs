//! Dictionary loading utilities
//!
//! Reads word lists from disk and applies the playable-word filter.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check if a raw dictionary line holds a playable word
///
/// A line survives if, once trimmed, it is non-empty, made only of alphabetic
/// characters, and does not start with an uppercase letter (proper nouns).
/// Punctuation such as `- _ ' . ? ! ( ) : ; # "` and digits are therefore rejected.
#[must_use]
pub fn is_playable_line(line: &str) -> bool {
    let word = line.trim();
    let mut chars = word.chars();

    match chars.next() {
        Some(first) if first.is_alphabetic() && !first.is_uppercase() => {
            chars.all(char::is_alphabetic)
        }
        _ => false,
    }
}

/// Load a dictionary from a file
///
/// The file is decoded as ISO-8859-1, one word per line.
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if the file does not exist, or
/// `DictionaryError::Io` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use subset::dictionary::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DictionaryError::NotFound(path.to_path_buf())
        } else {
            DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let content = decode_latin1(&bytes);
    let dictionary = Dictionary::from_lines(content.lines());
    log::info!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );

    Ok(dictionary)
}

/// Decode ISO-8859-1 text, where every byte is the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
