use thiserror::Error;

/// Why a guess was not added to the board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("{0} is not in the word list")]
    NotAWord(String),
    #[error("Game already ended, no new guesses are accepted")]
    GameAlreadyOver,
    #[error("Board already holds 6 rows")]
    BoardFull,
}

pub type Result<T> = std::result::Result<T, SubmitError>;
