//! Guessing game logic.
//!
//! Handles secret selection and guess evaluation.

use super::{GameEngine, GameError, Verdict};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

impl GameEngine {
    /// Start a game with a secret drawn from the thread RNG.
    pub fn new(lower: i64, upper: i64) -> Result<Self, GameError> {
        Self::with_rng(lower, upper, &mut rand::thread_rng())
    }

    /// Start a reproducible game: the same seed and bounds pick the same secret.
    pub fn seeded(lower: i64, upper: i64, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(lower, upper, &mut StdRng::seed_from_u64(seed))
    }

    /// Start a game with a secret drawn uniformly from `[lower, upper]`.
    pub fn with_rng<R: Rng>(
        lower: i64,
        upper: i64,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        validate_range(lower, upper)?;
        let secret = rng.gen_range(lower..=upper);
        tracing::debug!(lower, upper, "new guessing game");
        Ok(Self::build(lower, upper, secret))
    }

    /// Start a game with a known secret.
    pub fn with_secret(lower: i64, upper: i64, secret: i64) -> Result<Self, GameError> {
        validate_range(lower, upper)?;
        if !(lower..=upper).contains(&secret) {
            return Err(GameError::SecretOutOfRange {
                secret,
                lower,
                upper,
            });
        }
        Ok(Self::build(lower, upper, secret))
    }

    fn build(lower: i64, upper: i64, secret: i64) -> Self {
        Self {
            lower_bound: lower,
            upper_bound: upper,
            secret_value: secret,
            guess_count: 0,
            finished: false,
        }
    }

    /// Compare a guess to the secret. Every accepted guess counts, even
    /// ones outside the bounds.
    pub fn evaluate_guess(&mut self, guess: i64) -> Result<Verdict, GameError> {
        evaluate_guess(self, guess)
    }
}

fn validate_range(lower: i64, upper: i64) -> Result<(), GameError> {
    if lower > upper {
        return Err(GameError::InvalidRange { lower, upper });
    }
    Ok(())
}

/// Evaluate a guess against the engine's secret.
/// Rejects guesses once the game is finished, leaving the counter untouched.
pub fn evaluate_guess(game: &mut GameEngine, guess: i64) -> Result<Verdict, GameError> {
    if game.finished {
        return Err(GameError::AlreadyFinished);
    }

    game.guess_count = game.guess_count.saturating_add(1);

    let verdict = match guess.cmp(&game.secret_value) {
        std::cmp::Ordering::Equal => {
            game.finished = true;
            Verdict::Correct
        }
        std::cmp::Ordering::Less => Verdict::TooLow,
        std::cmp::Ordering::Greater => Verdict::TooHigh,
    };

    tracing::trace!(guess, ?verdict, count = game.guess_count, "guess evaluated");
    Ok(verdict)
}
