//! Plain-text rendering of search results.

use super::{Article, SearchParams};
use crate::constants::{LOG_HEADER_WIDTH, REPORT_SEPARATOR_WIDTH, SNIPPET_MAX_CHARS};

/// Which block layout to use for an article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Full entry with source and description
    Headline,
    /// Short entry with the publish date and a truncated snippet
    Snippet,
}

fn separator() -> String {
    "-".repeat(REPORT_SEPARATOR_WIDTH)
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.unwrap_or(default)
}

/// First `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Render one article as a multi-line block ending with a separator.
pub fn render_article(index: usize, article: &Article, style: ReportStyle) -> String {
    let title = or_default(article.title.as_deref(), "N/A");
    let url = or_default(article.url.as_deref(), "N/A");
    let published = or_default(article.published_at.as_deref(), "N/A");

    match style {
        ReportStyle::Headline => format!(
            "ARTICLE #{}\n  Title: {}\n  Source: {}\n  Published: {}\n  URL: {}\n  Description: {}\n{}\n",
            index,
            title,
            or_default(article.source_name(), "Unknown"),
            published,
            url,
            or_default(article.description.as_deref(), "No description available"),
            separator()
        ),
        ReportStyle::Snippet => format!(
            "RESULT #{} (Published: {}):\n  Title: {}\n  Snippet: {}...\n  URL: {}\n{}\n",
            index,
            truncate_chars(published, 10),
            title,
            truncate_chars(
                or_default(article.description.as_deref(), "No snippet available"),
                SNIPPET_MAX_CHARS
            ),
            url,
            separator()
        ),
    }
}

/// Render a titled list of articles, numbered from 1.
pub fn render_articles(title: &str, articles: &[Article], style: ReportStyle) -> String {
    let mut out = format!("\n{}\n", title);
    if articles.is_empty() {
        out.push_str("No articles found.\n");
        return out;
    }
    for (i, article) in articles.iter().enumerate() {
        out.push_str(&render_article(i + 1, article, style));
    }
    out
}

/// Header block written to the results log before each search run.
pub fn render_log_header(params: &SearchParams, timestamp: &str) -> String {
    fn shown(value: &str) -> &str {
        if value.is_empty() {
            "None"
        } else {
            value
        }
    }

    let rule = "=".repeat(LOG_HEADER_WIDTH);
    format!(
        "{rule}\nSEARCH TIMESTAMP: {}\nKEYWORD: {}\nCATEGORY: {}\nLANGUAGE: {}\nCOUNTRY: {}\n{rule}\n",
        timestamp,
        shown(&params.keyword),
        shown(&params.category),
        shown(&params.language),
        shown(&params.country),
        rule = rule
    )
}
