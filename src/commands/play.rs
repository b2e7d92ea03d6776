//! Interactive game loop
//!
//! Line-based terminal shell around a `GameSession`: redraw, read a line, apply it.

use crate::dictionary::Dictionary;
use crate::game::{Ending, GameSession, Phase, Screen};
use crate::output::formatters::center_prompt;
use crate::output::{
    render_about, render_banner, render_board, render_found_list, render_help, render_results,
    render_saved, render_word_report,
};
use crate::puzzle::Seed;
use crate::save::SaveStore;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Terminal width used when the real one cannot be read
const FALLBACK_WIDTH: usize = 80;

/// How the game should start
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Start a new game with this seed, ignoring any save file
    pub seed: Option<Seed>,
    /// Start a new game from the clock, ignoring any save file
    pub fresh: bool,
}

/// Run the interactive game until the player quits or saves
///
/// # Errors
///
/// Returns an error if the save file is malformed, no puzzle can be built from the
/// dictionary, or the terminal cannot be read or written.
pub fn run_play(dictionary: Dictionary, store: SaveStore, config: PlayConfig) -> Result<()> {
    let mut session = match config.seed {
        Some(seed) => GameSession::new(seed, dictionary, store)?,
        None if config.fresh => GameSession::new(Seed::from_clock(), dictionary, store)?,
        None => GameSession::open(Seed::from_clock(), dictionary, store)
            .context("could not resume the saved game")?,
    };

    loop {
        let keep_going = match session.phase() {
            Phase::Playing => play_turn(&mut session)?,
            Phase::ConfirmingQuit => confirm_quit(&mut session)?,
            Phase::ConfirmingSave => confirm_save(&mut session)?,
            Phase::Ended => false,
        };

        if !keep_going {
            return Ok(());
        }
    }
}

/// Draw the board, read one line and apply it
///
/// Returns false once input is exhausted.
fn play_turn(session: &mut GameSession) -> Result<bool> {
    let width = terminal_width();
    clear_screen()?;

    let message = session.take_message();
    print!("{}", render_banner(width));
    print!("{}", render_board(&session.status(), message.as_ref(), width));

    let Some(input) = read_guess()? else {
        log::info!("input closed, leaving without saving");
        return Ok(false);
    };

    let width = terminal_width();
    clear_screen()?;

    if let Some(screen) = session.handle_input(&input) {
        let text = match screen {
            Screen::About => render_about(width),
            Screen::Help => render_help(width),
            Screen::FoundList => render_found_list(&session.found_entries(), &session.status(), width),
        };
        print!("{text}");
        pause(width)?;
    }

    Ok(true)
}

fn confirm_quit(session: &mut GameSession) -> Result<bool> {
    let width = terminal_width();
    print!("{}", render_banner(width));

    let yes = ask_yes_no("Really end this game and see results? (y/n) ", width, is_exact_yes)?;
    let Some(Ending::Abandoned) = session.confirm(yes)? else {
        return Ok(true);
    };

    clear_screen()?;
    print!("{}", render_results(&session.status(), width));

    if ask_yes_no("Print words? (y/n) ", width, is_exact_yes)? {
        print!("{}", render_word_report(&session.word_report(), width));
    }

    pause(width)?;
    Ok(false)
}

fn confirm_save(session: &mut GameSession) -> Result<bool> {
    let width = terminal_width();
    print!("{}", render_banner(width));

    let yes = ask_yes_no("Really save and exit? (y/n) ", width, starts_with_yes)?;
    let Some(Ending::Saved) = session
        .confirm(yes)
        .with_context(|| format!("could not save to {}", session.store().path().display()))?
    else {
        return Ok(true);
    };

    clear_screen()?;
    print!("{}", render_saved(width));
    pause(width)?;
    Ok(false)
}

/// Read a guess with the typed text shown in yellow
fn read_guess() -> Result<Option<String>> {
    let mut stdout = io::stdout();
    print!("> ");
    execute!(stdout, SetForegroundColor(Color::Yellow))?;
    let input = read_line();
    execute!(stdout, ResetColor)?;
    input
}

/// Ask a yes/no question; closed input counts as no
fn ask_yes_no(question: &str, width: usize, accept: fn(&str) -> bool) -> Result<bool> {
    print!("{}", center_prompt(question, width));
    let answer = read_line()?.unwrap_or_default();
    Ok(accept(&answer))
}

/// Only a lone `y` confirms
fn is_exact_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Any answer starting with `y` confirms
fn starts_with_yes(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

fn pause(width: usize) -> Result<()> {
    print!("{}", center_prompt("[Press Enter]", width));
    read_line()?;
    Ok(())
}

/// Read one line from stdin, `None` at end of input
fn read_line() -> Result<Option<String>> {
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Current terminal width, queried fresh each time
fn terminal_width() -> usize {
    match terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        Ok(_) => FALLBACK_WIDTH,
        Err(e) => {
            log::warn!("could not read terminal size, assuming {FALLBACK_WIDTH} columns: {e}");
            FALLBACK_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_needs_a_lone_y() {
        assert!(is_exact_yes("y"));
        assert!(is_exact_yes(" Y \r"));
        assert!(!is_exact_yes("yes"));
        assert!(!is_exact_yes(""));
        assert!(!is_exact_yes("n"));
    }

    #[test]
    fn save_takes_any_y_answer() {
        assert!(starts_with_yes("y"));
        assert!(starts_with_yes("Yes please"));
        assert!(starts_with_yes("  yep"));
        assert!(!starts_with_yes(""));
        assert!(!starts_with_yes("no"));
    }
}
