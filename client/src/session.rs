use chrono::{DateTime, Utc};
use gridle_core as game;

use crate::{ClientError, Validator};

/// One game against the validator: the input state machine, the renderer it
/// paints into, and the validator it submits to, plus bookkeeping about the
/// run itself.
///
/// `handle` is the single entry point for the dispatcher. Everything that
/// can go wrong at the validator boundary is absorbed here and becomes the
/// status line; the grid is never left half-mutated, because a submitted
/// row locks before the request goes out and never unlocks.
#[derive(Debug)]
pub struct GameSession<R, V> {
    controller: game::InputController,
    validator: V,
    renderer: R,
    status: game::GameStatus,
    status_line: String,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    move_count: u32,
}

impl<R: game::GridRenderer, V: Validator> GameSession<R, V> {
    pub fn new(config: game::BoardConfig, validator: V, mut renderer: R) -> Self {
        game::build_grid(&mut renderer, config);
        Self {
            controller: game::InputController::new(config),
            validator,
            renderer,
            status: game::GameStatus::InProgress,
            status_line: game::GameStatus::InProgress.to_string(),
            started_at: None,
            ended_at: None,
            move_count: 0,
        }
    }

    pub fn controller(&self) -> &game::InputController {
        &self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn status(&self) -> &game::GameStatus {
        &self.status
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn is_finished(&self) -> bool {
        self.controller.phase().is_finished()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Feeds one input event through the state machine. Returns whether the
    /// display (grid or status line) changed.
    pub async fn handle(&mut self, event: game::InputEvent) -> bool {
        use game::InputEvent::*;

        match event {
            Letter(ch) => match self.controller.press_letter(ch) {
                Ok(game::InputOutcome::Placed { pos, ch }) => {
                    self.renderer.set_cell_text(pos, Some(ch));
                    self.on_successful_move();
                    true
                }
                Ok(_) => false,
                Err(err) => {
                    log::debug!("letter ignored: {}", err);
                    false
                }
            },
            Delete => match self.controller.delete() {
                Ok(game::InputOutcome::Cleared { pos }) => {
                    self.renderer.set_cell_text(pos, None);
                    self.on_successful_move();
                    true
                }
                Ok(_) => false,
                Err(err) => {
                    log::debug!("delete ignored: {}", err);
                    false
                }
            },
            Submit => self.submit_pending().await,
        }
    }

    async fn submit_pending(&mut self) -> bool {
        let guess = match self.controller.submit() {
            Ok(guess) => guess,
            Err(err) => {
                // Partial row or double submit: no request goes out at all.
                log::debug!("submit ignored: {}", err);
                return false;
            }
        };

        log::info!("validating row {}: {}", guess.row, guess.word);
        self.on_successful_move();

        let outcome = match self.validator.submit(&guess.word).await {
            Ok(reply) => game::SubmitOutcome::Scored(reply.verdict),
            Err(ClientError::InvalidGuess(reason)) => game::SubmitOutcome::Rejected(reason),
            Err(err) => {
                // Fail closed: the row stays locked, the failure becomes the
                // status line, and the user decides whether to spend another
                // row on the word.
                log::warn!("submission failed: {}", err);
                self.status_line = err.to_string();
                return true;
            }
        };

        if let game::SubmitOutcome::Scored(verdict) = &outcome {
            game::apply_verdict(&mut self.renderer, guess.row, verdict);
        }

        let status = game::evaluate(&outcome, self.controller.is_final_row(guess.row));
        self.controller.apply_status(&status);
        self.status_line = status.to_string();
        self.status = status;

        if self.is_finished() && self.ended_at.is_none() {
            self.ended_at = Some(Utc::now());
        }
        true
    }

    fn on_successful_move(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
    }
}
