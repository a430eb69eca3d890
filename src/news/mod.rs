//! Headline search tool: a typed client for the remote news API, text
//! rendering of results, and an append-only results log.

pub mod client;
pub mod log;
pub mod report;
pub mod search;
pub mod types;

pub use client::{FetchError, HeadlineApi, NewsClient};
pub use log::ResultsLog;
pub use report::{render_article, render_articles, ReportStyle};
pub use search::{read_search_params, run_searches, SearchReport, SearchWindow};
pub use types::{
    normalize_language, ApiResponse, Article, ArticleSource, ArticlesPage, EverythingQuery,
    SearchParams,
};
