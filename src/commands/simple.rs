//! Simple line-mode frontend
//!
//! Each input line is fed to the game one key symbol at a time, so `crane=`
//! types a word and submits it, and `<` deletes a letter. The whole lines
//! `new` and `quit` start a new game and exit.

use crate::config::Config;
use crate::input::{Key, KeyOutcome};
use crate::output::TextRenderer;
use crate::persistence::{FileStore, PersistenceGateway};
use crate::session::render::Renderer;
use crate::session::{Command, Outcome, Session};
use crate::wordlists::WordStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or printing
/// the board.
pub fn run_simple(config: &Config) -> Result<()> {
    let words_path = config.words_path();
    let words = WordStore::load(&words_path)
        .with_context(|| format!("reading {}", words_path.display()))?;
    let store = FileStore::new(config.state_path());

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Paper Wordle - Line Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type letters, '=' to submit and '<' to delete, e.g. 'crane='.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut session = Session::start(words, store, TextRenderer, config.rng())?;
    play_lines(&mut session, io::stdin().lock())?;

    println!("\nThanks for playing!\n");
    Ok(())
}

/// Feed input lines to a session until `quit` or end of input
///
/// # Errors
///
/// Returns an error on read failures or when drawing fails.
pub fn play_lines<P, R, I>(session: &mut Session<P, R>, input: I) -> Result<()>
where
    P: PersistenceGateway,
    R: Renderer,
    I: BufRead,
{
    prompt()?;
    for line in input.lines() {
        let line = line?;
        match line.trim().to_lowercase().as_str() {
            "quit" | "exit" => return Ok(()),
            "new" => {
                session.handle(Command::NewGame)?;
            }
            typed => {
                for key in typed.chars().filter_map(Key::from_symbol) {
                    report(&session.handle(Command::Key(key))?);
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Key(KeyOutcome::Discarded) => {
            println!("{}", "  Not in word list".bright_red());
        }
        Outcome::Refused(e) => println!("{}", format!("  {e}").bright_red()),
        _ => {}
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
