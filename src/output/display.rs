//! Screens for the terminal shell
//!
//! Every function takes the terminal width explicitly and returns the text to print.

use super::formatters::{Justify, ScoreBand, align, columns};
use crate::commands::Reveal;
use crate::core::{pluralize, title_case};
use crate::game::{GuessOutcome, Message, Status, WordEntry};
use colored::Colorize;

/// Width of the narrow centred text block used by help, about and prompts
pub const MID_WIDTH: usize = 35;

const LOGO: [&str; 5] = [
    "   _____       __              __ ",
    "  / ___/__  __/ /_  ________  / /_",
    "  \\__ \\/ / / / __ \\/ ___/ _ \\/ __/",
    " ___/ / /_/ / /_/ (__  )  __/ /_  ",
    "/____/\\__,_/_.___/____/\\___/\\__/  ",
];

/// The title banner, sized to the terminal
#[must_use]
pub fn render_banner(width: usize) -> String {
    let justify = if width > 70 {
        Justify::Center
    } else if width > 50 {
        Justify::Left
    } else {
        return format!("\n\n\n\n{}\n{}\n", "Subset".yellow(), "=".repeat(width));
    };

    let mut out = String::new();
    for line in LOGO {
        out.push_str(&align(line, width, justify).yellow().to_string());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out
}

/// Score panel, letter hexagon, pending message and prompt hint
#[must_use]
pub fn render_board(status: &Status<'_>, message: Option<&Message>, width: usize) -> String {
    let band = ScoreBand::of(status.score, status.total_score);
    let mut out = String::new();

    let stats = [
        format!(
            "Score: {}/{}",
            band.paint(&status.score.to_string()),
            status.total_score.to_string().green()
        ),
        format!(
            "Words: {}/{}",
            band.paint(&status.found_count.to_string()),
            status.valid_word_count.to_string().green()
        ),
        pluralize(status.pangram_count, "Pangram").yellow().to_string(),
    ];
    for line in &stats {
        out.push_str(&align(line, width, Justify::Right));
        out.push('\n');
    }
    out.push('\n');

    for line in hexagon(status.ring_letters, status.required_letter) {
        out.push_str(&align(&line, width, Justify::Center));
        out.push('\n');
    }

    if let Some(message) = message {
        out.push_str(&paint_message(message));
    }
    out.push('\n');
    out.push_str(&format!("Type word or {} for help\n", "h".bold()));
    out
}

/// Three rows with the required letter in the middle
fn hexagon(ring: &[char], required: char) -> [String; 3] {
    let centre = required.to_uppercase().to_string().yellow();
    match ring {
        [a, b, c, d, e, f] => [
            format!(" {a} {b} "),
            format!("{c} {centre} {d}"),
            format!(" {e} {f} "),
        ],
        _ => {
            let letters: String = ring.iter().collect();
            [String::new(), format!("{centre} {letters}"), String::new()]
        }
    }
}

/// Colour a message the way the board shows it
#[must_use]
pub fn paint_message(message: &Message) -> String {
    match message {
        Message::NewGame => format!(
            "{} {}",
            "Welcome to Subset!".bold(),
            "Started a new game".cyan()
        ),
        Message::Resumed | Message::Shuffled => message.to_string().cyan().to_string(),
        Message::Guess(outcome) => match outcome {
            GuessOutcome::Accepted { .. } => outcome.to_string().green().to_string(),
            GuessOutcome::AlreadyPlayed { .. } => outcome.to_string().yellow().to_string(),
            GuessOutcome::MissingRequired { word, required } => format!(
                "{}{}",
                format!("'{}' does not contain ", title_case(word)).red(),
                required.to_uppercase().to_string().yellow()
            ),
            GuessOutcome::OtherLetters { .. } | GuessOutcome::NotInDictionary { .. } => {
                outcome.to_string().red().to_string()
            }
        },
    }
}

/// Command summary
#[must_use]
pub fn render_help(width: usize) -> String {
    let rows = [
        "a About this game",
        "e Save and exit",
        "h Help (this text)",
        "l List found words",
        "q Quit and show words",
        "s Shuffle letters",
    ];

    let mut out = render_banner(width);
    out.push_str(&align("Commands", width, Justify::Center));
    out.push('\n');
    out.push_str(&align(&"-".repeat(MID_WIDTH), width, Justify::Center));
    out.push('\n');
    for row in rows {
        out.push_str(&block_line(row, width));
    }
    out.push('\n');
    out
}

/// Rules and credits
#[must_use]
pub fn render_about(width: usize) -> String {
    let rules = [
        "is a word-finding game.",
        "Every game, you are presented",
        "with seven letters, the goal is",
        "to make as many words as you can",
        "using those letters. You may use",
        "the same letter more than once",
        "in a word. You MUST use the center",
        "letter in every word. Longer words",
        "are worth more points. Words that",
        "use all seven letters are called",
        "'pangrams' and are worth extra",
        "points as well.",
    ];

    let mut out = render_banner(width);
    out.push_str(&align("About Subset", width, Justify::Center));
    out.push('\n');
    out.push_str(&align(&"-".repeat(MID_WIDTH - 1), width, Justify::Center));
    out.push('\n');
    for (i, rule) in rules.iter().enumerate() {
        let line = if i == 0 {
            format!("{} {rule}", "Subset".yellow())
        } else {
            (*rule).to_string()
        };
        out.push_str(&block_line(&line, width));
    }
    out.push('\n');
    out.push_str(&align(
        "Use --dictionary to play with your own word list.",
        width,
        Justify::Center,
    ));
    out.push_str("\n\n");
    out.push_str(&align(
        &format!("{} is open source and available at:", "Subset".yellow()),
        width,
        Justify::Center,
    ));
    out.push('\n');
    out.push_str(&align(
        &"https://github.com/rightbrace/subset-game.git".cyan().to_string(),
        width,
        Justify::Center,
    ));
    out.push_str("\n\n");
    out
}

/// A left-justified line inside the centred narrow block
fn block_line(text: &str, width: usize) -> String {
    let mut line = align(&align(text, MID_WIDTH, Justify::Left), width, Justify::Center);
    line.push('\n');
    line
}

/// The `l` screen: found words in columns
#[must_use]
pub fn render_found_list(entries: &[WordEntry<'_>], status: &Status<'_>, width: usize) -> String {
    let band = ScoreBand::of(status.score, status.total_score);
    let mut out = render_banner(width);
    out.push_str(&format!(
        "Found {}/{} words:\n",
        band.paint(&status.found_count.to_string()),
        status.valid_word_count.to_string().green()
    ));
    out.push_str(&word_columns(entries, width, false));
    out
}

/// Final score after a confirmed quit
#[must_use]
pub fn render_results(status: &Status<'_>, width: usize) -> String {
    let band = ScoreBand::of(status.score, status.total_score);
    let mut out = render_banner(width);
    out.push_str(&align(
        &format!(
            "Final score: {}/{}",
            band.paint(&status.score.to_string()),
            status.total_score.to_string().green()
        ),
        width,
        Justify::Center,
    ));
    out.push('\n');
    out.push_str(&align(
        &format!(
            "Found {}/{} words",
            band.paint(&status.found_count.to_string()),
            status.valid_word_count.to_string().green()
        ),
        width,
        Justify::Center,
    ));
    out.push('\n');
    out
}

/// Every valid word, found ones in green, pangrams starred
#[must_use]
pub fn render_word_report(entries: &[WordEntry<'_>], width: usize) -> String {
    let rule = "=".repeat(width);
    let mut out = format!("\n{rule}\n");
    out.push_str(&word_columns(entries, width, true));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&align(
        &format!("Pangrams are marked with {}", "*".yellow()),
        width,
        Justify::Right,
    ));
    out.push_str("\n\n");
    out
}

/// Confirmation after saving
#[must_use]
pub fn render_saved(width: usize) -> String {
    let mut out = render_banner(width);
    out.push_str(&align("Game saved!", width, Justify::Center));
    out.push_str("\n\n");
    out
}

/// Non-interactive puzzle listing for the `reveal` command
#[must_use]
pub fn render_reveal(reveal: &Reveal, width: usize) -> String {
    let rule = "─".repeat(width.min(60));
    let mut out = format!("\n{}\n", rule.cyan());
    out.push_str(&format!(
        "Seed {}: {}\n",
        reveal.seed.to_string().bright_yellow().bold(),
        reveal.pangram_word.to_uppercase().bold()
    ));
    out.push_str(&format!("{}\n", rule.cyan()));
    out.push_str(&format!(
        "Letters:  {}\nRequired: {}\nWords:    {}\nPangrams: {}\nTotal:    {}\n",
        reveal.letters.to_string().to_uppercase(),
        reveal.required_letter.to_uppercase().to_string().yellow(),
        reveal.words.len(),
        reveal.pangram_count(),
        pluralize(reveal.total_score as usize, "point"),
    ));

    let entries: Vec<WordEntry<'_>> = reveal
        .words
        .iter()
        .map(|(word, pangram)| WordEntry {
            word,
            found: false,
            pangram: *pangram,
        })
        .collect();
    out.push('\n');
    out.push_str(&word_columns(&entries, width, false));
    out
}

fn word_columns(entries: &[WordEntry<'_>], width: usize, highlight_found: bool) -> String {
    let longest = entries
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);

    let cells: Vec<String> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.pangram {
                "*".yellow().to_string()
            } else {
                " ".to_string()
            };
            let word = if highlight_found && entry.found {
                entry.word.green().to_string()
            } else {
                entry.word.to_string()
            };
            format!(" {marker}{word}")
        })
        .collect();

    columns(&cells, longest + 3, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatters::{strip_ansi as strip, visible_width};

    fn status(ring: &[char]) -> Status<'_> {
        Status {
            score: 12,
            total_score: 100,
            found_count: 3,
            valid_word_count: 40,
            pangram_count: 2,
            ring_letters: ring,
            required_letter: 'g',
        }
    }

    #[test]
    fn banner_tiers() {
        let narrow = strip(&render_banner(40));
        assert!(narrow.contains("Subset"));
        assert!(!narrow.contains("/____/"));

        let wide = strip(&render_banner(80));
        assert!(wide.contains("/____/"));
        assert!(wide.lines().all(|line| visible_width(line) <= 80));
    }

    #[test]
    fn board_shows_stats_and_letters() {
        let ring = ['A', 'D', 'E', 'I', 'N', 'R'];
        let board = strip(&render_board(&status(&ring), None, 60));

        assert!(board.contains("Score: 12/100"));
        assert!(board.contains("Words: 3/40"));
        assert!(board.contains("2 Pangrams"));
        assert!(board.contains(" A D "));
        assert!(board.contains("E G I"));
        assert!(board.contains(" N R "));
        assert!(board.contains("Type word or h for help"));
    }

    #[test]
    fn board_includes_message() {
        let ring = ['A', 'D', 'E', 'I', 'N', 'R'];
        let message = Message::Guess(GuessOutcome::MissingRequired {
            word: "bread".into(),
            required: 'g',
        });
        let board = strip(&render_board(&status(&ring), Some(&message), 60));
        assert!(board.contains("'Bread' does not contain G"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = strip(&render_help(80));
        for key in ["a About", "e Save", "h Help", "l List", "q Quit", "s Shuffle"] {
            assert!(help.contains(key), "missing '{key}'");
        }
    }

    #[test]
    fn about_credits_only_what_ships() {
        let about = strip(&render_about(80));
        assert!(about.contains("About Subset"));
        assert!(about.contains("--dictionary"));
        assert!(!about.contains("SCOWL"));
    }

    #[test]
    fn word_report_marks_pangrams() {
        let entries = [
            WordEntry {
                word: "grade",
                found: true,
                pangram: false,
            },
            WordEntry {
                word: "reading",
                found: false,
                pangram: true,
            },
        ];
        let report = strip(&render_word_report(&entries, 40));
        assert!(report.contains("  grade"));
        assert!(report.contains(" *reading"));
        assert!(report.contains("Pangrams are marked with *"));
    }

    #[test]
    fn found_list_counts() {
        let ring = ['A', 'D', 'E', 'I', 'N', 'R'];
        let entries = [WordEntry {
            word: "ridge",
            found: true,
            pangram: false,
        }];
        let list = strip(&render_found_list(&entries, &status(&ring), 60));
        assert!(list.contains("Found 3/40 words:"));
        assert!(list.contains("ridge"));
    }
}
