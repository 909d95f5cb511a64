//! The controlling loop's state
//!
//! A [`Session`] owns everything one device runs: the word list, the current
//! game, where it is saved and what draws it. Frontends feed it [`Command`]s.

pub mod render;

use crate::game::{GameState, SubmitError};
use crate::input::{InputController, Key, KeyOutcome};
use crate::persistence::{PersistenceError, PersistenceGateway};
use crate::wordlists::WordStore;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use render::{Renderer, Screen};

/// Input delivered by a frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key(Key),
    NewGame,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Key(KeyOutcome),
    NewGame,
    /// The submission broke a board invariant; shown to the player only
    Refused(SubmitError),
}

pub struct Session<P, R> {
    words: WordStore,
    game: Option<GameState>,
    store: P,
    renderer: R,
    rng: StdRng,
    /// Cleared when the saved game could not be read, so it is never
    /// overwritten
    saving: bool,
}

impl<P: PersistenceGateway, R: Renderer> Session<P, R> {
    /// Restore the saved game, or start a new one, and draw it
    ///
    /// Without a saved game and without candidate answers the session shows
    /// the missing-word-list screen until one is loaded. A saved game that
    /// exists but cannot be read leaves saving off for the whole session; a
    /// damaged one is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the first redraw fails.
    pub fn start(words: WordStore, mut store: P, renderer: R, rng: StdRng) -> anyhow::Result<Self> {
        let mut saving = true;
        let game = match store.load() {
            Ok(snapshot) => snapshot.map(|s| GameState::restore(&s)),
            Err(PersistenceError::Io(e)) => {
                warn!("Could not read saved game, not saving this session: {e}");
                saving = false;
                None
            }
            Err(e) => {
                warn!("Discarding saved game: {e}");
                None
            }
        };

        let mut session = Self {
            words,
            game,
            store,
            renderer,
            rng,
            saving,
        };

        if session.game.is_none() {
            session.new_game();
        }
        session.redraw()?;

        Ok(session)
    }

    /// Apply a command, then save and redraw as needed
    ///
    /// # Errors
    ///
    /// Returns an error only when drawing fails.
    pub fn handle(&mut self, command: Command) -> anyhow::Result<Outcome> {
        let key = match command {
            Command::NewGame => {
                self.new_game();
                self.redraw()?;
                return Ok(Outcome::NewGame);
            }
            Command::Key(key) => key,
        };

        let Some(game) = self.game.as_mut() else {
            return Ok(Outcome::Key(KeyOutcome::Ignored));
        };

        let outcome = match InputController::new(&self.words).on_key(game, key) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Refused submission: {e}");
                return Ok(Outcome::Refused(e));
            }
        };

        match outcome {
            KeyOutcome::Submitted(result) => {
                info!(
                    "Guess {} {} -> {:?}",
                    result.row.guess(),
                    result.row.feedback().to_emoji(),
                    result.status
                );
                self.save();
                self.redraw()?;
            }
            KeyOutcome::Edited | KeyOutcome::Discarded => {
                self.renderer.refresh_input(game)?;
            }
            KeyOutcome::Ignored => {}
        }

        Ok(Outcome::Key(outcome))
    }

    /// Draw the whole screen
    ///
    /// # Errors
    ///
    /// Display failures.
    pub fn redraw(&mut self) -> anyhow::Result<()> {
        let screen = match &self.game {
            Some(game) => Screen::Game(game),
            None => Screen::MissingWordList,
        };
        self.renderer.redraw(screen)
    }

    fn new_game(&mut self) {
        match self.words.pick_random_answer(&mut self.rng) {
            Ok(answer) => {
                match &mut self.game {
                    Some(game) => game.reset_game(answer),
                    None => self.game = Some(GameState::new(answer)),
                }
                info!("New game started");
                self.save();
            }
            Err(e) => {
                warn!("{e}");
                self.game = None;
            }
        }
    }

    fn save(&mut self) {
        if !self.saving {
            debug!("Saving is off for this session");
            return;
        }
        if let Some(game) = &self.game
            && let Err(e) = self.store.save(&game.snapshot())
        {
            warn!("Could not save game: {e}");
        }
    }

    #[must_use]
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub const fn words(&self) -> &WordStore {
        &self.words
    }

    #[must_use]
    pub const fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
