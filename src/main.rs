//! Subset - CLI
//!
//! Play the word game in the terminal, or reveal the answers for a seed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subset::{
    commands::{PlayConfig, reveal_puzzle, run_play},
    dictionary::{Dictionary, load_from_file},
    output::render_reveal,
    puzzle::Seed,
    save::SaveStore,
};

#[derive(Parser)]
#[command(
    name = "subset",
    about = "A word-finding game: make words from seven letters, always using the centre one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file to use instead of the bundled dictionary (ISO-8859-1, one word per line)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Save file location (default: ~/.subset/savefile.txt)
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default), resuming a saved game if there is one
    Play {
        /// Start a new game with this seed instead of resuming
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Start a new game even if a save exists
        #[arg(long, conflicts_with = "seed")]
        new: bool,
    },

    /// Print the puzzle and every answer for a seed
    Reveal {
        /// Puzzle seed, as stored in a save file
        #[arg(long, allow_negative_numbers = true)]
        seed: i64,
    },
}

fn init_logging(verbosity: u8) {
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(base_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

/// Load the dictionary from the -d flag, or the bundled one
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path).context("cannot start without a dictionary"),
        None => Ok(Dictionary::embedded()),
    }
}

fn save_store(path: Option<PathBuf>) -> Result<SaveStore> {
    match path {
        Some(path) => Ok(SaveStore::new(path)),
        None => SaveStore::at_default_location().context("cannot locate the save file"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        new: false,
    });

    match command {
        Commands::Play { seed, new } => {
            let store = save_store(cli.save_file)?;
            let config = PlayConfig {
                seed: seed.map(Seed::new),
                fresh: new,
            };
            run_play(dictionary, store, config)
        }
        Commands::Reveal { seed } => run_reveal_command(Seed::new(seed), &dictionary),
    }
}

fn run_reveal_command(seed: Seed, dictionary: &Dictionary) -> Result<()> {
    let reveal = reveal_puzzle(seed, dictionary)?;
    let width = crossterm::terminal::size().map_or(80, |(columns, _)| usize::from(columns));
    print!("{}", render_reveal(&reveal, width));
    Ok(())
}
