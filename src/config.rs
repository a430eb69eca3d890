//! Runtime configuration for the game and the news client.

use crate::constants::*;
use crate::game::{GameEngine, GameError};
use crate::news::FetchError;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a guessing game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest number the secret can be
    pub min_number: i64,

    /// Largest number the secret can be
    pub max_number: i64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: MIN_NUMBER,
            max_number: MAX_NUMBER,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_bounds(min_number: i64, max_number: i64) -> Self {
        Self {
            min_number,
            max_number,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build_engine(&self) -> Result<GameEngine, GameError> {
        match self.seed {
            Some(seed) => GameEngine::seeded(self.min_number, self.max_number, seed),
            None => GameEngine::new(self.min_number, self.max_number),
        }
    }
}

/// Configuration for the news client and its results log.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_key: String,

    /// API root without a trailing slash
    pub base_url: String,

    /// File the formatted results are appended to
    pub log_path: PathBuf,

    pub timeout: Duration,

    /// Articles per page for the everything search
    pub page_size: u32,

    /// How far back the everything search looks
    pub lookback_days: i64,
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: NEWS_API_BASE_URL.to_string(),
            log_path: PathBuf::from(NEWS_RESULTS_FILE),
            timeout: Duration::from_secs(NEWS_REQUEST_TIMEOUT_SECONDS),
            page_size: NEWS_PAGE_SIZE,
            lookback_days: NEWS_LOOKBACK_DAYS,
        }
    }

    /// Read the API key from `NEWS_API_KEY`.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_key(std::env::var(NEWS_API_KEY_ENV).ok())
    }

    fn from_key(key: Option<String>) -> Result<Self, FetchError> {
        match key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(FetchError::MissingApiKey),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }
}
