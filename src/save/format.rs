//! Save file text encoding
//!
//! Lines starting with `#` open a section; any other line belongs to the most recently
//! opened one. Sections may repeat and appear in any order: the last non-empty `seed`
//! line wins and `found` lines accumulate. Unknown sections are skipped. A file without a
//! seed still loads; the caller picks the seed.

use crate::puzzle::Seed;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file line {line}: '{value}' is not a valid seed")]
    InvalidSeed {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("could not locate the home directory for the save file")]
    NoHomeDir,

    #[error("save file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parser position inside a save file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Seed,
    Found,
    Unknown,
}

impl Section {
    fn from_directive(name: &str) -> Self {
        match name {
            "seed" => Self::Seed,
            "found" => Self::Found,
            _ => Self::Unknown,
        }
    }
}

/// Contents of a save file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    /// `None` when the file never named a seed
    pub seed: Option<Seed>,
    /// Found words in the order they were played
    pub found: Vec<String>,
}

impl SaveFile {
    #[must_use]
    pub const fn new(seed: Seed, found: Vec<String>) -> Self {
        Self {
            seed: Some(seed),
            found,
        }
    }

    /// Parse save file text
    ///
    /// # Errors
    ///
    /// Returns `SaveError::InvalidSeed` if a non-empty seed line is not an integer.
    ///
    /// # Examples
    /// ```
    /// use subset::puzzle::Seed;
    /// use subset::save::SaveFile;
    ///
    /// let save = SaveFile::parse("#found\ngrade\n#seed\n42\n#found\nridge\n").unwrap();
    /// assert_eq!(save.seed, Some(Seed::new(42)));
    /// assert_eq!(save.found, vec!["grade", "ridge"]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, SaveError> {
        let mut section = Section::None;
        let mut seed = None;
        let mut found = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if let Some(directive) = line.strip_prefix('#') {
                section = Section::from_directive(directive.trim());
                continue;
            }

            let value = line.trim();
            if value.is_empty() {
                continue;
            }

            match section {
                Section::Seed => {
                    let parsed = value.parse::<Seed>().map_err(|source| SaveError::InvalidSeed {
                        line: index + 1,
                        value: value.to_string(),
                        source,
                    })?;
                    seed = Some(parsed);
                }
                Section::Found => found.push(value.to_string()),
                Section::None | Section::Unknown => {}
            }
        }

        Ok(Self { seed, found })
    }

    /// Render save file text
    ///
    /// # Examples
    /// ```
    /// use subset::puzzle::Seed;
    /// use subset::save::SaveFile;
    ///
    /// let save = SaveFile::new(Seed::new(42), vec!["grade".into(), "ridge".into()]);
    /// assert_eq!(save.render(), "#seed\n42\n#found\ngrade\nridge\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("#seed\n");
        if let Some(seed) = self.seed {
            out.push_str(&seed.to_string());
            out.push('\n');
        }
        out.push_str("#found\n");
        for word in &self.found {
            out.push_str(word);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_order() {
        let save = SaveFile::new(
            Seed::new(1_613_412_345),
            vec!["reading".into(), "grade".into(), "aired".into()],
        );
        assert_eq!(SaveFile::parse(&save.render()).unwrap(), save);
    }

    #[test]
    fn round_trip_with_no_words() {
        let save = SaveFile::new(Seed::new(7), Vec::new());
        assert_eq!(save.render(), "#seed\n7\n#found\n");
        assert_eq!(SaveFile::parse(&save.render()).unwrap(), save);
    }

    #[test]
    fn last_seed_wins() {
        let save = SaveFile::parse("#seed\n1\n#found\ngrade\n#seed\n2\n").unwrap();
        assert_eq!(save.seed, Some(Seed::new(2)));
        assert_eq!(save.found, vec!["grade"]);
    }

    #[test]
    fn empty_seed_lines_are_ignored() {
        let save = SaveFile::parse("#seed\n5\n#seed\n\n").unwrap();
        assert_eq!(save.seed, Some(Seed::new(5)));
    }

    #[test]
    fn found_sections_accumulate() {
        let save = SaveFile::parse("#found\nread\n#seed\n3\n#found\n\ndear\n  ridge  \n").unwrap();
        assert_eq!(save.found, vec!["read", "dear", "ridge"]);
    }

    #[test]
    fn unknown_sections_and_leading_lines_are_skipped() {
        let save = SaveFile::parse("stray\n#notes\nhello\n#seed\n9\n#found\ngrade\n").unwrap();
        assert_eq!(save.seed, Some(Seed::new(9)));
        assert_eq!(save.found, vec!["grade"]);
    }

    #[test]
    fn windows_line_endings() {
        let save = SaveFile::parse("#seed\r\n9\r\n#found\r\ngrade\r\n").unwrap();
        assert_eq!(save.seed, Some(Seed::new(9)));
        assert_eq!(save.found, vec!["grade"]);
    }

    #[test]
    fn malformed_seed_is_an_error() {
        match SaveFile::parse("#seed\nsoon\n#found\ngrade\n") {
            Err(SaveError::InvalidSeed { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidSeed, got {other:?}"),
        }
    }

    #[test]
    fn negative_seed_is_accepted() {
        let save = SaveFile::parse("#seed\n-1613412345\n#found\ngrade\n").unwrap();
        assert_eq!(save.seed, Some(Seed::new(-1_613_412_345)));
        assert_eq!(save.found, vec!["grade"]);
        assert_eq!(save.render(), "#seed\n-1613412345\n#found\ngrade\n");
    }

    #[test]
    fn missing_seed_keeps_found_words() {
        let save = SaveFile::parse("#found\ngrade\n").unwrap();
        assert_eq!(save.seed, None);
        assert_eq!(save.found, vec!["grade"]);
        assert_eq!(save.render(), "#seed\n#found\ngrade\n");
        assert_eq!(SaveFile::parse(&save.render()).unwrap(), save);

        let empty = SaveFile::parse("").unwrap();
        assert_eq!(empty.seed, None);
        assert!(empty.found.is_empty());
    }
}
