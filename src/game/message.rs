//! Transient status messages shown above the prompt

use super::GuessOutcome;
use crate::core::{pluralize, title_case};
use std::fmt;

/// The message for the next redraw; shown once, then cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NewGame,
    Resumed,
    Shuffled,
    Guess(GuessOutcome),
}

impl From<GuessOutcome> for Message {
    fn from(outcome: GuessOutcome) -> Self {
        Self::Guess(outcome)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewGame => write!(f, "Welcome to Subset! Started a new game"),
            Self::Resumed => write!(f, "Found save file"),
            Self::Shuffled => write!(f, "Shuffled"),
            Self::Guess(outcome) => write!(f, "{outcome}"),
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted {
                points,
                pangram: true,
                ..
            } => write!(f, "Pangram found! +{}", pluralize(*points as usize, "point")),
            Self::Accepted { points, .. } => {
                write!(f, "Correct! +{}", pluralize(*points as usize, "point"))
            }
            Self::AlreadyPlayed { word } => write!(f, "Already played {word}"),
            Self::MissingRequired { word, required } => write!(
                f,
                "'{}' does not contain {}",
                title_case(word),
                required.to_uppercase()
            ),
            Self::OtherLetters { word } => write!(f, "'{}' uses other letters", title_case(word)),
            Self::NotInDictionary { word } => {
                write!(f, "'{}' is not in dictionary", title_case(word))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_messages() {
        let one = GuessOutcome::Accepted {
            word: "read".into(),
            points: 1,
            pangram: false,
        };
        assert_eq!(one.to_string(), "Correct! +1 point");

        let pangram = GuessOutcome::Accepted {
            word: "reading".into(),
            points: 21,
            pangram: true,
        };
        assert_eq!(pangram.to_string(), "Pangram found! +21 points");
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            GuessOutcome::AlreadyPlayed {
                word: "grade".into()
            }
            .to_string(),
            "Already played grade"
        );
        assert_eq!(
            GuessOutcome::MissingRequired {
                word: "bread".into(),
                required: 'g'
            }
            .to_string(),
            "'Bread' does not contain G"
        );
        assert_eq!(
            GuessOutcome::OtherLetters {
                word: "cozy".into()
            }
            .to_string(),
            "'Cozy' uses other letters"
        );
        assert_eq!(
            GuessOutcome::NotInDictionary {
                word: "grdae".into()
            }
            .to_string(),
            "'Grdae' is not in dictionary"
        );
    }

    #[test]
    fn session_messages() {
        assert_eq!(
            Message::NewGame.to_string(),
            "Welcome to Subset! Started a new game"
        );
        assert_eq!(Message::Resumed.to_string(), "Found save file");
        assert_eq!(Message::Shuffled.to_string(), "Shuffled");
    }
}
