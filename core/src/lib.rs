#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use coloring::*;
pub use error::*;
pub use grid::*;
pub use input::*;
pub use status::*;
pub use types::*;
pub use verdict::*;

mod cell;
mod coloring;
mod error;
mod grid;
mod input;
mod status;
mod types;
mod verdict;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
}

impl BoardConfig {
    /// The classic board: six guesses of five letters.
    pub const CLASSIC: Self = Self::new_unchecked(6, 5);

    pub const fn new_unchecked(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    pub fn new(rows: Coord, cols: Coord) -> Self {
        Self::new_unchecked(rows.clamp(1, Coord::MAX), cols.clamp(1, Coord::MAX))
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }

    pub const fn last_row(&self) -> Coord {
        self.rows - 1
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
