//! Search orchestration: gather parameters, run both searches, print and
//! log the results.
//!
//! A failed search is reported and logged, and the run moves on to the
//! next one. Only I/O errors on the terminal or the log abort the run.

use super::report::{render_articles, render_log_header, ReportStyle};
use super::{EverythingQuery, FetchError, HeadlineApi, ResultsLog, SearchParams};
use crate::prompt;
use chrono::{DateTime, Local, Utc};
use std::io::{self, BufRead, Write};

pub const KEYWORD_PROMPT: &str = "Enter a keyword to search for: ";
pub const CATEGORY_PROMPT: &str =
    "Category (business, entertainment, general, health, science, sports, technology): ";
pub const LANGUAGE_PROMPT: &str =
    "Language (e.g., English, French, Yoruba, or code like 'en', 'fr', 'yo'): ";
pub const COUNTRY_PROMPT: &str = "Country code (NG, US, FR, etc.): ";

/// Options for one run of both searches.
#[derive(Debug, Clone, Copy)]
pub struct SearchWindow {
    pub now: DateTime<Utc>,
    pub lookback_days: i64,
    pub page_size: u32,
}

/// How each search went. `None` means the search failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub headlines: Option<usize>,
    pub everything: Option<usize>,
}

impl SearchReport {
    pub fn all_succeeded(&self) -> bool {
        self.headlines.is_some() && self.everything.is_some()
    }
}

/// Ask for keyword, category, language and country.
pub fn read_search_params<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<SearchParams> {
    writeln!(output, "\n--- Gather Search Parameters ---")?;
    let keyword = prompt::ask(input, output, KEYWORD_PROMPT)?;
    let category = prompt::ask(input, output, CATEGORY_PROMPT)?;
    let language = prompt::ask(input, output, LANGUAGE_PROMPT)?;
    let country = prompt::ask(input, output, COUNTRY_PROMPT)?;
    Ok(SearchParams::from_answers(
        &keyword, &category, &language, &country,
    ))
}

/// Write `text` to the terminal and the log.
fn emit<W: Write>(output: &mut W, log: &ResultsLog, text: &str) -> io::Result<()> {
    writeln!(output, "{}", text)?;
    log.append(text)
}

fn report_failure<W: Write>(
    output: &mut W,
    log: &ResultsLog,
    context: &str,
    err: &FetchError,
) -> io::Result<()> {
    tracing::warn!(error = %err, "{}", context);
    emit(output, log, &format!("{}: {}", context, err))
}

/// Run the top-headlines search and the everything search.
pub fn run_searches<A: HeadlineApi, W: Write>(
    api: &A,
    log: &ResultsLog,
    params: &SearchParams,
    window: SearchWindow,
    output: &mut W,
) -> io::Result<SearchReport> {
    let mut report = SearchReport::default();

    let timestamp = window
        .now
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    log.append(&render_log_header(params, &timestamp))?;

    writeln!(output, "\n--- Starting Top Headlines Search ---")?;
    match api.top_headlines(params) {
        Ok(page) => {
            emit(
                output,
                log,
                &format!(
                    "Retrieved {} of {} top headlines.",
                    page.articles.len(),
                    page.total_results
                ),
            )?;
            emit(
                output,
                log,
                &render_articles("--- TOP HEADLINES ---", &page.articles, ReportStyle::Headline),
            )?;
            report.headlines = Some(page.articles.len());
        }
        Err(err) => report_failure(output, log, "Error fetching headlines", &err)?,
    }

    writeln!(output, "\n--- Starting Advanced Search ---")?;
    let query = EverythingQuery::last_days(
        &params.keyword,
        window.lookback_days,
        window.page_size,
        window.now,
    );
    match api.everything(&query) {
        Ok(page) => {
            let title = format!(
                "ADVANCED SEARCH RESULTS (Everything Endpoint) for: '{}'\nTotal relevant articles found: {}",
                query.query, page.total_results
            );
            emit(
                output,
                log,
                &render_articles(&title, &page.articles, ReportStyle::Snippet),
            )?;
            report.everything = Some(page.articles.len());
        }
        Err(err) => report_failure(output, log, "Error during 'everything' search", &err)?,
    }

    log.append("Search completed.\n")?;
    writeln!(
        output,
        "\nAll results saved to '{}'",
        log.path().display()
    )?;

    Ok(report)
}
