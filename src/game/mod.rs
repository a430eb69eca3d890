//! Number guessing game: engine state, guess evaluation and the
//! interactive loop that drives a session to completion.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::evaluate_guess;
pub use session::{
    parse_guess, render_verdict, GuessParseError, Session, SessionError, SessionSummary,
    StepOutcome,
};
pub use types::{GameEngine, GameError, GameStatus, Verdict};
