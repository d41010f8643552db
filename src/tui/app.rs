//! Application state and logic.

use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::{FlagSlot, move_cursor};
use crate::games::flags::{GuessOutcome, RandomSource, SessionEngine, SessionError, Transition};
use crate::store::HighScoreStore;

/// Alert shown over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Feedback after a guess; Enter continues to the next round.
    Score {
        /// "Correct!" or "Wrong."
        title: String,
        /// Score read-out.
        message: String,
    },
    /// Final feedback; Enter starts a new game.
    GameOver {
        /// Feedback title followed by "Game Over".
        title: String,
        /// Final score read-out.
        message: String,
    },
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App<R, S> {
    engine: SessionEngine<R, S>,
    cursor: FlagSlot,
    dialog: Option<Dialog>,
}

impl<R: RandomSource, S: HighScoreStore> App<R, S> {
    /// Creates the app and deals the first round.
    #[instrument(skip(engine))]
    pub fn new(mut engine: SessionEngine<R, S>) -> Self {
        engine.start_new_game();
        Self {
            engine,
            cursor: FlagSlot::default(),
            dialog: None,
        }
    }

    /// The engine driving the game.
    pub fn engine(&self) -> &SessionEngine<R, S> {
        &self.engine
    }

    /// Highlighted flag.
    pub fn cursor(&self) -> FlagSlot {
        self.cursor
    }

    /// Alert on screen, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<AppAction, SessionError> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            return Ok(AppAction::Quit);
        }

        match self.dialog.take() {
            Some(Dialog::Score { .. }) if is_confirm(key) => {
                self.engine.advance_round()?;
                self.cursor = FlagSlot::default();
            }
            Some(Dialog::GameOver { .. }) if is_confirm(key) || key == KeyCode::Char('n') => {
                self.engine.start_new_game();
                self.cursor = FlagSlot::default();
            }
            Some(dialog) => self.dialog = Some(dialog),
            None => match key {
                KeyCode::Enter | KeyCode::Char(' ') => self.guess(self.cursor)?,
                KeyCode::Char(c) => {
                    if let Some(slot) = FlagSlot::from_digit(c) {
                        self.cursor = slot;
                        self.guess(slot)?;
                    } else {
                        self.cursor = move_cursor(self.cursor, key);
                    }
                }
                _ => self.cursor = move_cursor(self.cursor, key),
            },
        }

        Ok(AppAction::Continue)
    }

    /// Submits a guess and opens the matching dialog.
    ///
    /// On the final round the game is ended straight away so the game-over
    /// dialog can show the reconciled high score.
    fn guess(&mut self, slot: FlagSlot) -> Result<(), SessionError> {
        let outcome = self.engine.submit_guess(slot.index())?;
        let title = self.feedback_title(&outcome);
        debug!(correct = outcome.correct, "Showing feedback");

        if outcome.is_final_round {
            let message = match self.engine.advance_round()? {
                Transition::GameOver(summary) if summary.new_high_score => format!(
                    "Your final score is {}\nNew high score!",
                    summary.final_score
                ),
                Transition::GameOver(summary) => format!(
                    "Your final score is {}\nHigh score: {}",
                    summary.final_score, summary.high_score
                ),
                Transition::NextRound(_) => format!("Your score is {}", outcome.score_after),
            };
            self.dialog = Some(Dialog::GameOver {
                title: format!("{} Game Over", title),
                message,
            });
        } else {
            self.dialog = Some(Dialog::Score {
                title,
                message: format!("Your score is {}", outcome.score_after),
            });
        }
        Ok(())
    }

    /// "Correct!" or "Wrong. That's <chosen country>!".
    fn feedback_title(&self, outcome: &GuessOutcome) -> String {
        if outcome.correct {
            "Correct!".to_string()
        } else {
            let name = self.engine.universe().name(&outcome.chosen).unwrap_or("Unknown");
            format!("Wrong. That's {}!", name)
        }
    }
}

fn is_confirm(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::Char(' '))
}
