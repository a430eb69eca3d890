// Guessing game bounds
pub const MIN_NUMBER: i64 = 1;
pub const MAX_NUMBER: i64 = 100;

// Logging
pub const LOG_LEVEL_ENV: &str = "GUESS_LOG";

// News API
pub const NEWS_API_KEY_ENV: &str = "NEWS_API_KEY";
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
pub const NEWS_USER_AGENT: &str = "guessing-game-news";
pub const NEWS_RESULTS_FILE: &str = "news_results.txt";
pub const NEWS_REQUEST_TIMEOUT_SECONDS: u64 = 15;
pub const NEWS_LOOKBACK_DAYS: i64 = 7;
pub const NEWS_PAGE_SIZE: u32 = 10; // the everything endpoint caps this at 100
pub const NEWS_FALLBACK_QUERY: &str = "artificial intelligence OR quantum computing";

// Report formatting
pub const SNIPPET_MAX_CHARS: usize = 80;
pub const REPORT_SEPARATOR_WIDTH: usize = 60;
pub const LOG_HEADER_WIDTH: usize = 80;
