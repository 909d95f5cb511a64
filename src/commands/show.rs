//! Print the saved board without playing

use crate::config::Config;
use crate::game::GameState;
use crate::output::format_game;
use crate::persistence::{FileStore, PersistenceGateway};
use anyhow::{Context, Result};

/// Board text for whatever is saved at the configured state path
///
/// # Errors
///
/// Returns an error if the state file exists but cannot be read or parsed.
pub fn saved_board(config: &Config) -> Result<String> {
    let mut store = FileStore::new(config.state_path());
    let snapshot = store
        .load()
        .with_context(|| format!("reading {}", store.path().display()))?;

    Ok(match snapshot {
        Some(snapshot) => format_game(&GameState::restore(&snapshot)),
        None => format!("No saved game at {}\n", store.path().display()),
    })
}

/// Print the saved board
///
/// # Errors
///
/// See [`saved_board`].
pub fn show_saved(config: &Config) -> Result<()> {
    print!("{}", saved_board(config)?);
    Ok(())
}
