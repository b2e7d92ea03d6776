//! Puzzle derivation
//!
//! A puzzle is fully determined by a seed and a dictionary. The generator performs a
//! fixed sequence of draws from one seeded stream:
//!
//! 1. choose a word with exactly seven distinct letters
//! 2. choose the required letter from that word's sorted letters
//! 3. shuffle the six remaining (ring) letters
//!
//! Steps 1 and 2 are what a save file reproduces. The ring order is display-only and
//! the same stream keeps feeding later shuffles.

mod generator;
mod seed;

pub use generator::{Puzzle, PuzzleError};
pub use seed::{GameRng, Seed};
