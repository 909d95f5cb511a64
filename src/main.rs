//! Paper Wordle - CLI
//!
//! Terminal stand-ins for the e-paper device: a full-screen simulator, a
//! line mode and a viewer for the saved board.

use anyhow::Result;
use clap::{Parser, Subcommand};
use paper_wordle::{
    commands::{run_simple, show_saved},
    config::{Config, DEFAULT_STATE_FILE, DEFAULT_WORDS_FILE},
    interactive::run_tui,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paper_wordle",
    about = "Word-guessing game for e-paper touchscreen devices",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory standing in for the SD card
    #[arg(long, global = true, env = "PAPER_WORDLE_STORAGE", default_value = ".")]
    storage: PathBuf,

    /// Word list file, relative to the storage directory
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_FILE)]
    words: String,

    /// Saved game file, relative to the storage directory
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    state: String,

    /// Seed for reproducible answers
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen simulator (default)
    Play,

    /// Line mode: type 'crane=' to submit, 'new' and 'quit' as commands
    Simple,

    /// Print the saved board
    Show,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            storage: self.storage.clone(),
            words_file: self.words.clone(),
            state_file: self.state.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(&config),
        Commands::Simple => run_simple(&config),
        Commands::Show => show_saved(&config),
    }
}
