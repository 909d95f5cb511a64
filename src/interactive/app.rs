//! TUI simulator of the device

use super::rendering::ui;
use crate::config::Config;
use crate::game::SubmitError;
use crate::input::{Key, KeyOutcome};
use crate::persistence::FileStore;
use crate::session::render::{Renderer, Screen};
use crate::session::{Command, Outcome, Session};
use crate::wordlists::WordStore;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// Draws sessions into a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    notice: Option<String>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub const fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            notice: None,
        }
    }

    /// Message shown under the keyboard until the next key
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn redraw(&mut self, screen: Screen<'_>) -> Result<()> {
        let notice = self.notice.as_deref();
        self.terminal.draw(|f| ui(f, screen, notice))?;
        Ok(())
    }
}

/// What a terminal key means to the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Quit,
}

/// Map a terminal key press to a simulator action
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::Command(Command::NewGame)),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::F(2) => Some(Action::Command(Command::NewGame)),
        KeyCode::Enter => Some(Action::Command(Command::Key(Key::Submit))),
        KeyCode::Backspace => Some(Action::Command(Command::Key(Key::Backspace))),
        KeyCode::Char(c) if !ctrl => Key::from_symbol(c).map(|k| Action::Command(Command::Key(k))),
        _ => None,
    }
}

fn notice_for(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Key(KeyOutcome::Discarded) => Some("Not in word list".to_string()),
        Outcome::Refused(SubmitError::GameAlreadyOver | SubmitError::BoardFull) => {
            Some("Game over, press ^N".to_string())
        }
        Outcome::Refused(e) => Some(e.to_string()),
        _ => None,
    }
}

/// Run the simulator until the player quits
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(config: &Config) -> Result<()> {
    let words_path = config.words_path();
    let words = WordStore::load(&words_path)
        .with_context(|| format!("reading {}", words_path.display()))?;
    let store = FileStore::new(config.state_path());
    info!(
        "Loaded {} valid words, {} answers",
        words.valid_count(),
        words.candidate_count()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = Session::start(words, store, TerminalRenderer::new(terminal), config.rng())
        .and_then(|mut session| run_app(&mut session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;

    res
}

fn run_app<B: Backend>(session: &mut Session<FileStore, TerminalRenderer<B>>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let command = match map_key(key) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Command(command)) => command,
            None => continue,
        };

        let had_notice = session.renderer().notice().is_some();
        session.renderer_mut().set_notice(None);
        let outcome = session.handle(command)?;

        let notice = notice_for(&outcome);
        if notice.is_some() || (had_notice && outcome == Outcome::Key(KeyOutcome::Ignored)) {
            session.renderer_mut().set_notice(notice);
            session.redraw()?;
        }
    }
}
