//! Command implementations

pub mod play;
pub mod reveal;

pub use play::{PlayConfig, run_play};
pub use reveal::{Reveal, reveal_puzzle};
