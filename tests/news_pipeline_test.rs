//! Integration test: news search pipeline
//!
//! Runs both searches against an in-process fake API and checks the
//! terminal output, the results log, and failure handling.

use chrono::{TimeZone, Utc};
use guessing_game::news::{
    run_searches, Article, ArticleSource, ArticlesPage, EverythingQuery, FetchError, HeadlineApi,
    ResultsLog, SearchParams, SearchWindow,
};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Canned responses plus a record of the requests the pipeline made.
struct FakeApi {
    headlines: fn() -> Result<ArticlesPage, FetchError>,
    everything: fn() -> Result<ArticlesPage, FetchError>,
    seen_queries: RefCell<Vec<EverythingQuery>>,
    seen_params: RefCell<Vec<SearchParams>>,
}

impl FakeApi {
    fn new(
        headlines: fn() -> Result<ArticlesPage, FetchError>,
        everything: fn() -> Result<ArticlesPage, FetchError>,
    ) -> Self {
        Self {
            headlines,
            everything,
            seen_queries: RefCell::new(Vec::new()),
            seen_params: RefCell::new(Vec::new()),
        }
    }
}

impl HeadlineApi for FakeApi {
    fn top_headlines(&self, params: &SearchParams) -> Result<ArticlesPage, FetchError> {
        self.seen_params.borrow_mut().push(params.clone());
        (self.headlines)()
    }

    fn everything(&self, query: &EverythingQuery) -> Result<ArticlesPage, FetchError> {
        self.seen_queries.borrow_mut().push(query.clone());
        (self.everything)()
    }
}

fn article(title: &str) -> Article {
    Article {
        source: Some(ArticleSource {
            id: None,
            name: Some("Daily Example".to_string()),
        }),
        title: Some(title.to_string()),
        description: Some(format!("All about {}", title)),
        url: Some(format!("https://example.com/{}", title)),
        published_at: Some("2026-10-16T09:00:00Z".to_string()),
        ..Default::default()
    }
}

fn two_headlines() -> Result<ArticlesPage, FetchError> {
    Ok(ArticlesPage {
        total_results: 12,
        articles: vec![article("alpha"), article("beta")],
    })
}

fn one_result() -> Result<ArticlesPage, FetchError> {
    Ok(ArticlesPage {
        total_results: 1,
        articles: vec![article("gamma")],
    })
}

fn empty_page() -> Result<ArticlesPage, FetchError> {
    Ok(ArticlesPage::default())
}

fn api_failure() -> Result<ArticlesPage, FetchError> {
    Err(FetchError::Api {
        code: "apiKeyInvalid".to_string(),
        message: "Your API key is invalid.".to_string(),
    })
}

fn temp_log_path() -> PathBuf {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "guessing-game-news-test-{}-{}",
        std::process::id(),
        test_id
    ));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join("news_results.txt");
    let _ = fs::remove_file(&path);
    path
}

fn window() -> SearchWindow {
    SearchWindow {
        now: Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap(),
        lookback_days: 7,
        page_size: 10,
    }
}

fn run(api: &FakeApi, params: &SearchParams, log: &ResultsLog) -> (String, String) {
    let mut output = Vec::new();
    run_searches(api, log, params, window(), &mut output).expect("searches should not hit I/O errors");
    let printed = String::from_utf8(output).unwrap();
    let logged = fs::read_to_string(log.path()).unwrap();
    (printed, logged)
}

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_both_searches_printed_and_logged() {
    let api = FakeApi::new(two_headlines, one_result);
    let log = ResultsLog::new(temp_log_path());
    let params = SearchParams::from_answers("rust", "technology", "English", "US");

    let mut output = Vec::new();
    let report = run_searches(&api, &log, &params, window(), &mut output).unwrap();
    assert_eq!(report.headlines, Some(2));
    assert_eq!(report.everything, Some(1));
    assert!(report.all_succeeded());

    let printed = String::from_utf8(output).unwrap();
    let logged = fs::read_to_string(log.path()).unwrap();

    for text in [&printed, &logged] {
        assert!(text.contains("Retrieved 2 of 12 top headlines."));
        assert!(text.contains("ARTICLE #1"));
        assert!(text.contains("  Title: beta"));
        assert!(text.contains("for: 'rust'"));
        assert!(text.contains("Total relevant articles found: 1"));
        assert!(text.contains("RESULT #1 (Published: 2026-10-16):"));
    }

    assert!(logged.contains("KEYWORD: rust"));
    assert!(logged.contains("LANGUAGE: en"));
    assert!(logged.contains("COUNTRY: us"));
    assert!(logged.trim_end().ends_with("Search completed."));
    assert!(printed.contains(&format!("All results saved to '{}'", log.path().display())));

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

#[test]
fn test_requests_carry_params_and_window() {
    let api = FakeApi::new(empty_page, empty_page);
    let log = ResultsLog::new(temp_log_path());
    let params = SearchParams::from_answers("", "sports", "yoruba", "NG");
    run(&api, &params, &log);

    assert_eq!(api.seen_params.borrow().as_slice(), &[params.clone()]);

    let queries = api.seen_queries.borrow();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query.query, "artificial intelligence OR quantum computing");
    assert_eq!(query.to, window().now);
    assert_eq!(query.from, Utc.with_ymd_and_hms(2026, 10, 10, 12, 0, 0).unwrap());
    assert_eq!(query.page_size, 10);
    assert_eq!(query.page, 1);

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

#[test]
fn test_empty_results() {
    let api = FakeApi::new(empty_page, empty_page);
    let log = ResultsLog::new(temp_log_path());
    let (printed, logged) = run(&api, &SearchParams::default(), &log);

    assert_eq!(printed.matches("No articles found.").count(), 2);
    assert_eq!(logged.matches("No articles found.").count(), 2);
    assert!(logged.contains("KEYWORD: None"));

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

#[test]
fn test_runs_append_to_same_log() {
    let api = FakeApi::new(two_headlines, one_result);
    let log = ResultsLog::new(temp_log_path());
    let params = SearchParams::from_answers("rust", "", "", "");

    run(&api, &params, &log);
    let (_, logged) = run(&api, &params, &log);

    assert_eq!(logged.matches("SEARCH TIMESTAMP:").count(), 2);
    assert_eq!(logged.matches("Search completed.").count(), 2);

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_headline_failure_does_not_stop_everything_search() {
    let api = FakeApi::new(api_failure, one_result);
    let log = ResultsLog::new(temp_log_path());

    let mut output = Vec::new();
    let report = run_searches(&api, &log, &SearchParams::default(), window(), &mut output).unwrap();
    assert_eq!(report.headlines, None);
    assert_eq!(report.everything, Some(1));
    assert!(!report.all_succeeded());

    let printed = String::from_utf8(output).unwrap();
    let logged = fs::read_to_string(log.path()).unwrap();
    for text in [&printed, &logged] {
        assert!(text.contains(
            "Error fetching headlines: news API returned an error (apiKeyInvalid): Your API key is invalid."
        ));
        assert!(text.contains("RESULT #1"));
    }
    assert_eq!(api.seen_queries.borrow().len(), 1);

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

#[test]
fn test_everything_failure_reported() {
    let api = FakeApi::new(two_headlines, || {
        Err(FetchError::Transport("connection refused".to_string()))
    });
    let log = ResultsLog::new(temp_log_path());
    let (printed, logged) = run(&api, &SearchParams::default(), &log);

    let expected = "Error during 'everything' search: could not reach the news API: connection refused";
    assert!(printed.contains(expected));
    assert!(logged.contains(expected));
    assert!(logged.trim_end().ends_with("Search completed."));

    fs::remove_file(log.path()).expect("Failed to remove log file");
}

#[test]
fn test_unwritable_log_is_an_error() {
    let api = FakeApi::new(two_headlines, one_result);
    let log = ResultsLog::new(
        std::env::temp_dir()
            .join("guessing-game-missing-dir")
            .join("deeper")
            .join("log.txt"),
    );
    let mut output = Vec::new();
    assert!(run_searches(&api, &log, &SearchParams::default(), window(), &mut output).is_err());
}
