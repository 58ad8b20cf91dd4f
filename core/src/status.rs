use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What one submission produced at the validator boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The validator scored the row.
    Scored(Verdict),
    /// The validator rejected the word; the reason is surfaced verbatim.
    Rejected(String),
}

/// User-facing game state, re-derived after each submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Invalid(String),
    Won,
    Lost,
    TryAgain,
}

impl GameStatus {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("Guess the word"),
            Self::Invalid(reason) => f.write_str(reason),
            Self::Won => f.write_str("Congrats!"),
            Self::Lost => f.write_str("Game over!"),
            Self::TryAgain => f.write_str("Oups, try again"),
        }
    }
}

/// Derives the status for one submission.
///
/// Precedence, highest first: a rejected guess, then a winning verdict, then
/// exhaustion of the final row. A rejection must never be masked by a stale
/// win/lose determination.
pub fn evaluate(outcome: &SubmitOutcome, final_row: bool) -> GameStatus {
    match outcome {
        SubmitOutcome::Rejected(reason) => GameStatus::Invalid(reason.clone()),
        SubmitOutcome::Scored(verdict) if verdict.is_win() => GameStatus::Won,
        SubmitOutcome::Scored(_) if final_row => GameStatus::Lost,
        SubmitOutcome::Scored(_) => GameStatus::TryAgain,
    }
}
