//! A running game and its command state machine

use super::{Command, GameState, GuessOutcome, Message};
use crate::core::is_pangram;
use crate::dictionary::Dictionary;
use crate::puzzle::{GameRng, Puzzle, PuzzleError, Seed};
use crate::save::{SaveError, SaveFile, SaveStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Where the session is in its command loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a guess or command
    Playing,
    /// `q` was entered, waiting for yes/no
    ConfirmingQuit,
    /// `e` was entered, waiting for yes/no
    ConfirmingSave,
    /// The game is over; the process should exit
    Ended,
}

/// How a game finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Quit: the save file was removed and results should be shown
    Abandoned,
    /// Saved for later
    Saved,
}

/// Informational screens that change nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    About,
    Help,
    FoundList,
}

/// Everything the board needs after a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status<'a> {
    pub score: u32,
    pub total_score: u32,
    pub found_count: usize,
    pub valid_word_count: usize,
    pub pangram_count: usize,
    pub ring_letters: &'a [char],
    pub required_letter: char,
}

/// A word annotated for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub found: bool,
    pub pangram: bool,
}

/// One game from start to exit
///
/// Owns the seed, puzzle, progress and the live random stream. The seed never changes
/// for the lifetime of the session.
#[derive(Debug)]
pub struct GameSession {
    seed: Seed,
    dictionary: Dictionary,
    puzzle: Puzzle,
    state: GameState,
    rng: GameRng,
    phase: Phase,
    message: Option<Message>,
    store: SaveStore,
}

impl GameSession {
    /// Start a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated from the dictionary.
    pub fn new(seed: Seed, dictionary: Dictionary, store: SaveStore) -> Result<Self, SessionError> {
        let session = Self::build(seed, &[], dictionary, store, Message::NewGame)?;
        log::info!("started new game with seed {seed}");
        Ok(session)
    }

    /// Resume a saved game
    ///
    /// The puzzle is regenerated from the saved seed; the ring order is freshly shuffled.
    /// A save that never named a seed resumes on a clock seed.
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated from the dictionary.
    pub fn resume(
        save: SaveFile,
        dictionary: Dictionary,
        store: SaveStore,
    ) -> Result<Self, SessionError> {
        Self::restore(save, Seed::from_clock(), dictionary, store)
    }

    /// Resume from the store if a save exists, otherwise start a game from `seed`
    ///
    /// `seed` also stands in for a save file without a seed line.
    ///
    /// # Errors
    ///
    /// Returns an error if the save file is unreadable or malformed, or if no puzzle
    /// can be generated.
    pub fn open(seed: Seed, dictionary: Dictionary, store: SaveStore) -> Result<Self, SessionError> {
        match store.load()? {
            Some(save) => Self::restore(save, seed, dictionary, store),
            None => Self::new(seed, dictionary, store),
        }
    }

    fn restore(
        save: SaveFile,
        fallback: Seed,
        dictionary: Dictionary,
        store: SaveStore,
    ) -> Result<Self, SessionError> {
        let seed = save.seed.unwrap_or_else(|| {
            log::warn!("save file has no seed, using {fallback}");
            fallback
        });
        let session = Self::build(seed, &save.found, dictionary, store, Message::Resumed)?;
        log::info!(
            "resumed game with seed {seed}, {} words found",
            session.state.found().len()
        );
        Ok(session)
    }

    fn build(
        seed: Seed,
        found: &[String],
        dictionary: Dictionary,
        store: SaveStore,
        message: Message,
    ) -> Result<Self, SessionError> {
        let mut rng = seed.rng();
        let puzzle = Puzzle::generate(&mut rng, &dictionary)?;
        let state = GameState::restore(found, &puzzle);

        Ok(Self {
            seed,
            dictionary,
            puzzle,
            state,
            rng,
            phase: Phase::Playing,
            message: Some(message),
            store,
        })
    }

    /// Apply one line of player input while playing
    ///
    /// Returns the informational screen to show, if the input asked for one. Input
    /// outside the `Playing` phase is ignored.
    pub fn handle_input(&mut self, input: &str) -> Option<Screen> {
        if self.phase != Phase::Playing {
            log::debug!("ignoring input in phase {:?}", self.phase);
            return None;
        }

        match Command::parse(input) {
            Command::Empty => None,
            Command::About => Some(Screen::About),
            Command::Help => Some(Screen::Help),
            Command::List => Some(Screen::FoundList),
            Command::Shuffle => {
                self.puzzle.shuffle_ring(&mut self.rng);
                self.message = Some(Message::Shuffled);
                None
            }
            Command::Quit => {
                self.transition(Phase::ConfirmingQuit);
                None
            }
            Command::SaveAndExit => {
                self.transition(Phase::ConfirmingSave);
                None
            }
            Command::Guess(word) => {
                let outcome = self.guess(&word);
                self.message = Some(outcome.into());
                None
            }
        }
    }

    /// Evaluate a guess against the puzzle
    pub fn guess(&mut self, word: &str) -> GuessOutcome {
        let outcome = self.state.guess(word, &self.puzzle, &self.dictionary);
        log::debug!("guess '{word}': {outcome:?}");
        outcome
    }

    /// Answer a pending quit or save confirmation
    ///
    /// Declining returns to `Playing`. Confirming a quit removes the save file,
    /// confirming a save writes it; either ends the game. Outside a confirmation phase
    /// this does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the save file cannot be written or removed. The phase is
    /// left unchanged in that case.
    pub fn confirm(&mut self, yes: bool) -> Result<Option<Ending>, SessionError> {
        let ending = match self.phase {
            Phase::ConfirmingQuit if yes => {
                self.store.delete()?;
                Ending::Abandoned
            }
            Phase::ConfirmingSave if yes => {
                self.store.save(&self.save_file())?;
                Ending::Saved
            }
            Phase::ConfirmingQuit | Phase::ConfirmingSave => {
                self.transition(Phase::Playing);
                return Ok(None);
            }
            Phase::Playing | Phase::Ended => return Ok(None),
        };

        self.transition(Phase::Ended);
        Ok(Some(ending))
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("phase {:?} -> {next:?}", self.phase);
        self.phase = next;
    }

    /// Projection of the game onto the save format
    #[must_use]
    pub fn save_file(&self) -> SaveFile {
        SaveFile::new(self.seed, self.state.found().to_vec())
    }

    /// Take the pending message, leaving none
    pub fn take_message(&mut self) -> Option<Message> {
        self.message.take()
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        Status {
            score: self.state.score(),
            total_score: self.puzzle.total_score(),
            found_count: self.state.found().len(),
            valid_word_count: self.puzzle.valid_words().len(),
            pangram_count: self.puzzle.pangrams().len(),
            ring_letters: self.puzzle.ring_letters(),
            required_letter: self.puzzle.required_letter(),
        }
    }

    /// Found words in play order
    #[must_use]
    pub fn found_entries(&self) -> Vec<WordEntry<'_>> {
        self.state
            .found()
            .iter()
            .map(|word| WordEntry {
                word,
                found: true,
                pangram: is_pangram(word),
            })
            .collect()
    }

    /// Every valid word in dictionary order, marked found or not
    #[must_use]
    pub fn word_report(&self) -> Vec<WordEntry<'_>> {
        self.puzzle
            .valid_words()
            .iter()
            .map(|word| WordEntry {
                word,
                found: self.state.has_found(word),
                pangram: is_pangram(word),
            })
            .collect()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &SaveStore {
        &self.store
    }
}
