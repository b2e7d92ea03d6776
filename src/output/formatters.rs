//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

/// Horizontal placement within a fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
    Center,
}

/// Remove ANSI colour sequences
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip to the end of the escape sequence
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Width of a string as displayed, ignoring ANSI colour sequences
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Pad `text` to `width` columns; text wider than `width` is returned unpadded
///
/// Centering puts the odd column of slack on the left.
#[must_use]
pub fn align(text: &str, width: usize, justify: Justify) -> String {
    let slack = width.saturating_sub(visible_width(text));
    let (left, right) = match justify {
        Justify::Left => (0, slack),
        Justify::Right => (slack, 0),
        Justify::Center => (slack.div_ceil(2), slack / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Left padding only, so a prompt's cursor sits right after the text
#[must_use]
pub fn center_prompt(text: &str, width: usize) -> String {
    let slack = width.saturating_sub(visible_width(text));
    format!("{}{text}", " ".repeat(slack.div_ceil(2)))
}

/// How far through the puzzle a score is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Middle,
    High,
}

impl ScoreBand {
    #[must_use]
    pub fn of(score: u32, total: u32) -> Self {
        let ratio = if total == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(total)
        };

        if ratio < 0.33 {
            Self::Low
        } else if ratio < 0.66 {
            Self::Middle
        } else {
            Self::High
        }
    }

    /// Colour a value according to this band
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Low => text.red(),
            Self::Middle => text.yellow(),
            Self::High => text.green(),
        }
    }
}

/// Lay cells out in as many columns of `cell_width` as fit in `width`
///
/// Each cell is left-justified to `cell_width`; every row ends with a newline.
#[must_use]
pub fn columns(cells: &[String], cell_width: usize, width: usize) -> String {
    let per_row = (width / cell_width.max(1)).max(1);
    let mut out = String::new();

    for row in cells.chunks(per_row) {
        for cell in row {
            out.push_str(&align(cell, cell_width, Justify::Left));
        }
        out.push('\n');
    }
    out
}
