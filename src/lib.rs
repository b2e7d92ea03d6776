//! Subset
//!
//! A terminal word-finding game. Each puzzle offers seven letters, one of them
//! required; the player makes dictionary words of four or more letters from them.
//!
//! # Quick Start
//!
//! ```rust
//! use subset::dictionary::Dictionary;
//! use subset::game::{GameState, GuessOutcome};
//! use subset::puzzle::{Puzzle, Seed};
//!
//! let dictionary = Dictionary::embedded();
//! let puzzle = Puzzle::from_seed(Seed::new(1_613_412_345), &dictionary).unwrap();
//!
//! let mut state = GameState::new();
//! let outcome = state.guess(puzzle.pangram_word(), &puzzle, &dictionary);
//! assert!(matches!(outcome, GuessOutcome::Accepted { pangram: true, .. }));
//! ```

// Core domain types
pub mod core;

// Word list and filtering
pub mod dictionary;

// Seeded puzzle generation
pub mod puzzle;

// Game state and session state machine
pub mod game;

// Save file format and storage
pub mod save;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
