//! Game play
//!
//! `GameState` tracks found words and score for one puzzle. `GameSession` owns a whole
//! game (seed, puzzle, state, random stream and save location) and drives the
//! command state machine the terminal shell talks to.

mod command;
mod message;
mod session;
mod state;

pub use command::Command;
pub use message::Message;
pub use session::{Ending, GameSession, Phase, Screen, SessionError, Status, WordEntry};
pub use state::{GameState, GuessOutcome};
