//! Player input parsing

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, only redraws
    Empty,
    /// `a`: about the game
    About,
    /// `e`: save and exit
    SaveAndExit,
    /// `h`: list commands
    Help,
    /// `l`: list found words
    List,
    /// `q`: end the game and show results
    Quit,
    /// `s`: reorder the ring letters
    Shuffle,
    /// Anything else, trimmed and lowercased
    Guess(String),
}

impl Command {
    /// Interpret a raw input line
    ///
    /// # Examples
    /// ```
    /// use subset::game::Command;
    ///
    /// assert_eq!(Command::parse("  "), Command::Empty);
    /// assert_eq!(Command::parse("S"), Command::Shuffle);
    /// assert_eq!(Command::parse(" Grade\n"), Command::Guess("grade".into()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "" => Self::Empty,
            "a" => Self::About,
            "e" => Self::SaveAndExit,
            "h" => Self::Help,
            "l" => Self::List,
            "q" => Self::Quit,
            "s" => Self::Shuffle,
            _ => Self::Guess(input),
        }
    }
}
