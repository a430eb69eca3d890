//! Read-validate-evaluate-render loop for one guessing game.
//!
//! The session is generic over its reader and writer so the same loop
//! drives stdin/stdout in the binary and in-memory buffers in tests.

use super::{GameEngine, GameError, Verdict};
use crate::prompt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const GUESS_PROMPT: &str = "Guess the number in my head: ";
pub const WELCOME_BANNER: &str = "--- Welcome to the Guessing Game! ---";
pub const CLOSING_MESSAGE: &str = "--- Game Over! Thanks for playing! ---";

/// Raw input that is not an integer. Recoverable: the loop re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid number")]
pub struct GuessParseError {
    pub input: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the number was guessed")]
    InputClosed,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result of one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Rejected(GuessParseError),
    Evaluated { guess: i64, verdict: Verdict },
}

/// Totals for a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub guesses: u32,
    pub invalid_inputs: u32,
    pub secret: i64,
}

/// Parse one line of raw input as a guess, ignoring surrounding whitespace.
pub fn parse_guess(raw: &str) -> Result<i64, GuessParseError> {
    raw.trim().parse().map_err(|_| GuessParseError {
        input: raw.to_string(),
    })
}

/// Feedback line for a verdict. A correct guess renders several lines.
pub fn render_verdict(guess: i64, verdict: Verdict, guess_count: u32) -> String {
    match verdict {
        Verdict::TooHigh => format!("Your guess {} is a bit too high.", guess),
        Verdict::TooLow => format!("Your guess {} is too low.", guess),
        Verdict::Correct => format!(
            "That was smart! Your guess {} is correct.\nCONGRATULATIONS!\nYou used {} guesses.",
            guess, guess_count
        ),
    }
}

pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    invalid_inputs: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            invalid_inputs: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn invalid_inputs(&self) -> u32 {
        self.invalid_inputs
    }

    /// Hand back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the number is guessed.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "{}", WELCOME_BANNER)?;
        writeln!(
            self.output,
            "I'm thinking of a number between {} and {}.",
            self.engine.lower_bound(),
            self.engine.upper_bound()
        )?;

        while !self.engine.is_finished() {
            self.step()?;
        }

        writeln!(self.output, "{}", CLOSING_MESSAGE)?;
        self.output.flush()?;

        Ok(SessionSummary {
            guesses: self.engine.guess_count(),
            invalid_inputs: self.invalid_inputs,
            secret: self.engine.secret_value,
        })
    }

    /// Prompt for one line and handle it.
    pub fn step(&mut self) -> Result<StepOutcome, SessionError> {
        prompt::prompt(&mut self.output, GUESS_PROMPT)?;
        let raw = prompt::read_line(&mut self.input)?.ok_or(SessionError::InputClosed)?;

        let guess = match parse_guess(&raw) {
            Ok(guess) => guess,
            Err(err) => {
                tracing::debug!(input = %err.input, "rejected non-numeric guess");
                self.invalid_inputs += 1;
                writeln!(self.output, " {}. Try again.", err)?;
                return Ok(StepOutcome::Rejected(err));
            }
        };

        let verdict = self.engine.evaluate_guess(guess)?;
        writeln!(
            self.output,
            "{}",
            render_verdict(guess, verdict, self.engine.guess_count())
        )?;

        Ok(StepOutcome::Evaluated { guess, verdict })
    }
}
