use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Row is locked and can no longer be edited")]
    RowLocked,
    #[error("Row was already submitted for validation")]
    AlreadySubmitted,
    #[error("Row is not fully filled in")]
    RowIncomplete,
    #[error("Game already ended, no new input is accepted")]
    GameOver,
    #[error("Verdict is not a full row of G/Y/B symbols")]
    MalformedVerdict,
}

pub type Result<T> = core::result::Result<T, GameError>;
