use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete input events delivered by the dispatcher (one per keyboard
/// button: 26 letters, delete, enter).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    Ready,
    Active,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Ready
    }
}

/// What a `Letter` or `Delete` event did to the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputOutcome {
    NoChange,
    Placed { pos: Coord2, ch: char },
    Cleared { pos: Coord2 },
}

impl InputOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A fully typed row, locked and ready to be sent to the validator.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingGuess {
    pub row: Coord,
    pub word: String,
}

/// The input state machine: translates events into grid mutations while
/// holding the cursor and row-locking invariants.
///
/// The cursor is where the next letter lands. The pending row is the row
/// most recently typed into; `Delete` and `Submit` address it even after the
/// cursor has advanced into the next row, so typing can run ahead of
/// validation just as it could in the on-screen keyboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputController {
    grid: GuessGrid,
    cursor: Coord2,
    pending: Coord,
    phase: GamePhase,
}

impl InputController {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            grid: GuessGrid::new(config),
            cursor: (0, 0),
            pending: 0,
            phase: GamePhase::default(),
        }
    }

    pub fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn pending_row(&self) -> Coord {
        self.pending
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_final_row(&self, row: Coord) -> bool {
        row == self.grid.config().last_row()
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    pub fn press_letter(&mut self, ch: char) -> Result<InputOutcome> {
        self.check_not_finished()?;

        if !ch.is_ascii_alphabetic() {
            return Ok(InputOutcome::NoChange);
        }

        let (row, col) = self.cursor;
        if col == self.grid.cols() || self.grid.is_locked(row) {
            return Ok(InputOutcome::NoChange);
        }

        let ch = ch.to_ascii_uppercase();
        if !self.grid.set_letter((row, col), ch)?.has_update() {
            return Ok(InputOutcome::NoChange);
        }

        self.pending = row;
        self.mark_started();
        self.cursor = if col + 1 < self.grid.cols() {
            (row, col + 1)
        } else if row + 1 < self.grid.rows() {
            (row + 1, 0)
        } else {
            // Last cell of the last row: park the cursor instead of wrapping
            // back to row 0. Exhaustion is reported by status evaluation.
            log::debug!("board exhausted, awaiting final verdict");
            (row, col + 1)
        };

        Ok(InputOutcome::Placed { pos: (row, col), ch })
    }

    pub fn delete(&mut self) -> Result<InputOutcome> {
        self.check_not_finished()?;

        if self.grid.is_locked(self.pending) {
            return Ok(InputOutcome::NoChange);
        }

        let filled = self.grid.filled_len(self.pending);
        if filled == 0 {
            return Ok(InputOutcome::NoChange);
        }

        let pos = (self.pending, filled - 1);
        self.grid.clear_letter(pos)?;
        // Un-advance: the next letter goes where the cleared one was, even
        // if the cursor had already moved into the next row.
        self.cursor = pos;
        Ok(InputOutcome::Cleared { pos })
    }

    /// Locks the pending row and hands it off for validation. The lock is
    /// taken before any network activity and is never rolled back.
    pub fn submit(&mut self) -> Result<PendingGuess> {
        self.check_not_finished()?;

        if self.grid.is_locked(self.pending) {
            return Err(GameError::AlreadySubmitted);
        }
        if !self.grid.row_is_full(self.pending) {
            return Err(GameError::RowIncomplete);
        }

        self.grid.lock_row(self.pending)?;
        Ok(PendingGuess {
            row: self.pending,
            word: self.grid.row_word(self.pending),
        })
    }

    /// Folds a derived status back into the phase, ending the game on a
    /// terminal status.
    pub fn apply_status(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won => self.phase = GamePhase::Won,
            GameStatus::Lost => self.phase = GamePhase::Lost,
            _ => {}
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.phase, GamePhase::Ready) {
            self.phase = GamePhase::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> InputController {
        InputController::new(BoardConfig::CLASSIC)
    }

    fn type_word(ctl: &mut InputController, word: &str) {
        for ch in word.chars() {
            assert!(ctl.press_letter(ch).unwrap().has_update());
        }
    }

    #[test]
    fn letters_advance_the_cursor_left_to_right() {
        let mut ctl = controller();

        assert_eq!(
            ctl.press_letter('c').unwrap(),
            InputOutcome::Placed {
                pos: (0, 0),
                ch: 'C'
            }
        );
        assert_eq!(ctl.cursor(), (0, 1));
        assert_eq!(ctl.phase(), GamePhase::Active);
    }

    #[test]
    fn non_alphabetic_input_is_ignored() {
        let mut ctl = controller();

        assert_eq!(ctl.press_letter('3').unwrap(), InputOutcome::NoChange);
        assert_eq!(ctl.press_letter(' ').unwrap(), InputOutcome::NoChange);
        assert_eq!(ctl.cursor(), (0, 0));
    }

    #[test]
    fn filling_a_row_moves_the_cursor_to_the_next_row() {
        let mut ctl = controller();

        type_word(&mut ctl, "CRANE");

        assert_eq!(ctl.cursor(), (1, 0));
        assert_eq!(ctl.pending_row(), 0);
    }

    #[test]
    fn delete_steps_back_across_the_row_boundary() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRANE");

        assert_eq!(
            ctl.delete().unwrap(),
            InputOutcome::Cleared { pos: (0, 4) }
        );
        assert_eq!(ctl.cursor(), (0, 4));
        assert_eq!(ctl.grid().filled_len(0), 4);
    }

    #[test]
    fn delete_on_an_empty_pending_row_is_a_no_op() {
        let mut ctl = controller();

        assert_eq!(ctl.delete().unwrap(), InputOutcome::NoChange);
    }

    #[test]
    fn delete_after_submission_leaves_the_row_locked_and_unchanged() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRANE");
        ctl.submit().unwrap();

        assert_eq!(ctl.delete().unwrap(), InputOutcome::NoChange);
        assert!(ctl.grid().is_locked(0));
        assert_eq!(ctl.grid().row_word(0), "CRANE");
    }

    #[test]
    fn submit_rejects_a_partial_row_without_locking_it() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRAN");

        assert_eq!(ctl.submit(), Err(GameError::RowIncomplete));
        assert!(!ctl.grid().is_locked(0));
    }

    #[test]
    fn resubmitting_a_locked_row_is_rejected() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRANE");

        let guess = ctl.submit().unwrap();
        assert_eq!(guess.row, 0);
        assert_eq!(guess.word, "CRANE");

        assert_eq!(ctl.submit(), Err(GameError::AlreadySubmitted));
    }

    #[test]
    fn typing_can_run_ahead_into_the_next_row_before_submitting() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRANE");
        type_word(&mut ctl, "SL");

        assert_eq!(ctl.pending_row(), 1);
        assert_eq!(ctl.cursor(), (1, 2));
        // Submit addresses the row last typed into, not row 0.
        assert_eq!(ctl.submit(), Err(GameError::RowIncomplete));
    }

    #[test]
    fn last_cell_of_the_board_parks_the_cursor_instead_of_wrapping() {
        let mut ctl = controller();
        for _ in 0..6 {
            type_word(&mut ctl, "CRANE");
        }

        assert_eq!(ctl.cursor(), (5, 5));
        assert_eq!(ctl.press_letter('X').unwrap(), InputOutcome::NoChange);
        assert_eq!(ctl.pending_row(), 5);
    }

    #[test]
    fn terminal_phase_rejects_all_further_input() {
        let mut ctl = controller();
        type_word(&mut ctl, "CRANE");
        ctl.submit().unwrap();
        ctl.apply_status(&GameStatus::Won);

        assert_eq!(ctl.press_letter('A'), Err(GameError::GameOver));
        assert_eq!(ctl.delete(), Err(GameError::GameOver));
        assert_eq!(ctl.submit(), Err(GameError::GameOver));
    }

    #[test]
    fn cursor_stays_in_bounds_for_arbitrary_event_sequences() {
        let mut ctl = controller();
        let script = "ABCDE\u{8}FG\u{8}\u{8}\u{8}HIJKLMNOPQRSTUVWXYZABCDEFGHIJ\u{8}K";

        for ch in script.chars() {
            let _ = if ch == '\u{8}' {
                ctl.delete()
            } else {
                ctl.press_letter(ch)
            };

            let (row, col) = ctl.cursor();
            let config = ctl.grid().config();
            assert!(row < config.rows);
            assert!(col <= config.cols);
        }
    }
}
