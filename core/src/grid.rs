use alloc::collections::BTreeSet;
use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a grid mutation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditOutcome {
    NoChange,
    Changed,
}

impl EditOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// The letters entered so far, plus which rows are frozen for validation.
///
/// Rows fill strictly left to right: a cell is only written when it is empty,
/// and only the rightmost letter of a row can be cleared again. Once a row is
/// locked its cells never change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessGrid {
    config: BoardConfig,
    cells: Array2<GridCell>,
    locked: BTreeSet<Coord>,
}

impl GuessGrid {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: Array2::default((config.rows as usize, config.cols as usize)),
            locked: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    fn validate(&self, pos: Coord2) -> Result<Coord2> {
        if self.config.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn letter_at(&self, pos: Coord2) -> Result<GridCell> {
        let pos = self.validate(pos)?;
        Ok(self.cells[pos.to_nd_index()])
    }

    /// Writes a letter into an empty cell. Occupied cells are left untouched.
    pub fn set_letter(&mut self, pos: Coord2, ch: char) -> Result<EditOutcome> {
        let pos = self.validate(pos)?;

        if !self.cells[pos.to_nd_index()].is_empty() {
            return Ok(EditOutcome::NoChange);
        }

        self.cells[pos.to_nd_index()] = GridCell::Letter(ch);
        Ok(EditOutcome::Changed)
    }

    pub fn clear_letter(&mut self, pos: Coord2) -> Result<EditOutcome> {
        let pos = self.validate(pos)?;

        if self.is_locked(pos.0) {
            return Err(GameError::RowLocked);
        }

        if self.cells[pos.to_nd_index()].is_empty() {
            return Ok(EditOutcome::NoChange);
        }

        self.cells[pos.to_nd_index()] = GridCell::Empty;
        Ok(EditOutcome::Changed)
    }

    /// Freezes a row for validation. Idempotent; a partially filled row
    /// cannot be locked.
    pub fn lock_row(&mut self, row: Coord) -> Result<EditOutcome> {
        if row >= self.config.rows {
            return Err(GameError::OutOfBounds);
        }

        if self.locked.contains(&row) {
            return Ok(EditOutcome::NoChange);
        }

        if !self.row_is_full(row) {
            return Err(GameError::RowIncomplete);
        }

        self.locked.insert(row);
        log::debug!("row {} locked for validation", row);
        Ok(EditOutcome::Changed)
    }

    pub fn is_locked(&self, row: Coord) -> bool {
        self.locked.contains(&row)
    }

    /// Number of letters in `row`. Rows fill left to right, so this is also
    /// the column the next letter of that row would land in.
    pub fn filled_len(&self, row: Coord) -> Coord {
        (0..self.config.cols)
            .take_while(|&col| !self.cells[(row, col).to_nd_index()].is_empty())
            .count() as Coord
    }

    pub fn row_is_full(&self, row: Coord) -> bool {
        self.filled_len(row) == self.config.cols
    }

    pub fn row_word(&self, row: Coord) -> String {
        (0..self.config.cols)
            .filter_map(|col| self.cells[(row, col).to_nd_index()].letter())
            .collect()
    }
}
