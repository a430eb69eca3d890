//! Guessing game data structures.
//!
//! The engine holds the hidden number, the guess counter and the
//! finished flag. It performs no I/O.

use thiserror::Error;

/// Outcome of comparing a guess to the secret value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooLow,
    TooHigh,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Lifecycle of a single game. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
    #[error("secret {secret} lies outside the range [{lower}, {upper}]")]
    SecretOutOfRange { secret: i64, lower: i64, upper: i64 },
    #[error("the game is already finished; start a new game to keep playing")]
    AlreadyFinished,
}

/// Full game state for one session.
///
/// Construct through [`GameEngine::new`], [`GameEngine::seeded`],
/// [`GameEngine::with_rng`] or [`GameEngine::with_secret`]; guesses go
/// through [`GameEngine::evaluate_guess`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(super) lower_bound: i64,
    pub(super) upper_bound: i64,
    pub(super) secret_value: i64,
    pub(super) guess_count: u32,
    pub(super) finished: bool,
}

impl GameEngine {
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// The secret value, only once it has been guessed.
    pub fn reveal(&self) -> Option<i64> {
        self.finished.then_some(self.secret_value)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lower_bound..=self.upper_bound).contains(&value)
    }
}
