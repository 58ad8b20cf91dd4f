use serde::{Deserialize, Serialize};

/// One cell of the guess grid as typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GridCell {
    Empty,
    Letter(char),
}

impl GridCell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Empty => None,
        }
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::Empty
    }
}
