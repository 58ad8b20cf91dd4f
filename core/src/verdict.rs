use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-letter classification returned by the validator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterScore {
    /// Right letter in the right position (`G`).
    Correct,
    /// Letter exists in the word but elsewhere (`Y`).
    Present,
    /// Letter does not appear in the word (`B`).
    Absent,
}

impl LetterScore {
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'B' => Some(Self::Absent),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }
}

/// Positional verdict for one submitted row, aligned with its letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    scores: Vec<LetterScore>,
}

impl Verdict {
    /// Parses a symbol string; anything but exactly `width` symbols drawn
    /// from `G`/`Y`/`B` is malformed.
    pub fn from_symbols(symbols: &str, width: Coord) -> Result<Self> {
        let scores: Vec<LetterScore> = symbols
            .chars()
            .map(LetterScore::from_symbol)
            .collect::<Option<_>>()
            .ok_or(GameError::MalformedVerdict)?;

        if scores.len() != usize::from(width) {
            return Err(GameError::MalformedVerdict);
        }

        Ok(Self { scores })
    }

    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }

    pub fn width(&self) -> Coord {
        self.scores.len() as Coord
    }

    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|&score| score == LetterScore::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.scores {
            write!(f, "{}", score.symbol())?;
        }
        Ok(())
    }
}
