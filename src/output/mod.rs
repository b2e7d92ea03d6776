//! Terminal output formatting
//!
//! The renderer side of the game: screens are built as strings from already
//! computed game data, then printed by the play loop.

pub mod display;
pub mod formatters;

pub use display::{
    render_about, render_banner, render_board, render_found_list, render_help, render_results,
    render_reveal, render_saved, render_word_report,
};
