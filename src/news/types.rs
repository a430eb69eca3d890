//! News search data structures: request parameters and the API's
//! response model.

use super::FetchError;
use crate::constants::NEWS_FALLBACK_QUERY;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Timestamp layout the everything endpoint accepts for `from`/`to`.
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Language names accepted in place of ISO 639-1 codes.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("french", "fr"),
    ("german", "de"),
    ("spanish", "es"),
    ("italian", "it"),
    ("chinese", "zh"),
    ("arabic", "ar"),
    ("russian", "ru"),
    ("yoruba", "yo"),
    ("hausa", "ha"),
];

/// Map a language name to its code. Unknown input passes through so users
/// can type any code the API understands.
pub fn normalize_language(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, code)| code.to_string())
        .unwrap_or(lowered)
}

/// Search parameters gathered from the user. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub category: String,
    pub language: String,
    pub country: String,
}

impl SearchParams {
    /// Normalize raw answers: trim everything, lower-case category and
    /// country, map language names to codes.
    pub fn from_answers(keyword: &str, category: &str, language: &str, country: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            category: category.trim().to_lowercase(),
            language: normalize_language(language),
            country: country.trim().to_lowercase(),
        }
    }

    /// Non-empty query pairs for the top-headlines endpoint.
    pub fn headline_query(&self) -> Vec<(&'static str, &str)> {
        [
            ("q", self.keyword.as_str()),
            ("category", self.category.as_str()),
            ("language", self.language.as_str()),
            ("country", self.country.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// Request for the everything endpoint, bounded to a time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EverythingQuery {
    pub query: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub page_size: u32,
    pub page: u32,
}

impl EverythingQuery {
    /// Articles published in the `days` before `now`, newest first. An
    /// empty keyword falls back to a broad technology query.
    pub fn last_days(keyword: &str, days: i64, page_size: u32, now: DateTime<Utc>) -> Self {
        let keyword = keyword.trim();
        let query = if keyword.is_empty() {
            NEWS_FALLBACK_QUERY.to_string()
        } else {
            keyword.to_string()
        };
        Self {
            query,
            from: now - Duration::days(days),
            to: now,
            page_size,
            page: 1,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("from", self.from.format(QUERY_TIME_FORMAT).to_string()),
            ("to", self.to.format(QUERY_TIME_FORMAT).to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("pageSize", self.page_size.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One article as returned by the API. Every field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// A successful page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlesPage {
    pub total_results: u64,
    pub articles: Vec<Article>,
}

impl ArticlesPage {
    /// Decode a response body. An `error` status becomes [`FetchError::Api`].
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let response: ApiResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        response.into_page()
    }
}

/// Raw response envelope, tagged by its `status` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Ok {
        #[serde(rename = "totalResults", default)]
        total_results: u64,
        #[serde(default)]
        articles: Vec<Article>,
    },
    Error {
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    },
}

impl ApiResponse {
    pub fn into_page(self) -> Result<ArticlesPage, FetchError> {
        match self {
            ApiResponse::Ok {
                total_results,
                articles,
            } => Ok(ArticlesPage {
                total_results,
                articles,
            }),
            ApiResponse::Error { code, message } => Err(FetchError::Api { code, message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const OK_BODY: &str = r#"{
        "status": "ok",
        "totalResults": 37,
        "articles": [
            {
                "source": {"id": null, "name": "Example Times"},
                "author": "A. Writer",
                "title": "Rust reaches the moon",
                "description": "A systems language lands.",
                "url": "https://example.com/rust",
                "urlToImage": null,
                "publishedAt": "2026-10-15T08:30:00Z",
                "content": "..."
            },
            {
                "source": {"id": "x", "name": null},
                "title": null
            }
        ]
    }"#;

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("English"), "en");
        assert_eq!(normalize_language(" yoruba "), "yo");
        assert_eq!(normalize_language("HAUSA"), "ha");
        assert_eq!(normalize_language("FR"), "fr");
        assert_eq!(normalize_language("pt"), "pt");
        assert_eq!(normalize_language(""), "");
    }

    #[test]
    fn test_search_params_from_answers() {
        let params = SearchParams::from_answers("  rust lang ", " Technology", "French", "NG ");
        assert_eq!(params.keyword, "rust lang");
        assert_eq!(params.category, "technology");
        assert_eq!(params.language, "fr");
        assert_eq!(params.country, "ng");
    }

    #[test]
    fn test_headline_query_skips_empty() {
        let params = SearchParams::from_answers("", "sports", "", "us");
        assert_eq!(
            params.headline_query(),
            vec![("category", "sports"), ("country", "us")]
        );
    }

    #[test]
    fn test_everything_query_window() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let query = EverythingQuery::last_days("rust", 7, 10, now);
        assert_eq!(query.query, "rust");
        assert_eq!(query.page, 1);

        let pairs = query.query_pairs();
        assert!(pairs.contains(&("from", "2026-10-10T12:00:00".to_string())));
        assert!(pairs.contains(&("to", "2026-10-17T12:00:00".to_string())));
        assert!(pairs.contains(&("sortBy", "publishedAt".to_string())));
        assert!(pairs.contains(&("pageSize", "10".to_string())));
    }

    #[test]
    fn test_everything_query_fallback() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let query = EverythingQuery::last_days("   ", 7, 10, now);
        assert_eq!(query.query, "artificial intelligence OR quantum computing");
    }

    #[test]
    fn test_decode_ok_response() {
        let page = ArticlesPage::from_json(OK_BODY).unwrap();
        assert_eq!(page.total_results, 37);
        assert_eq!(page.articles.len(), 2);

        let first = &page.articles[0];
        assert_eq!(first.title.as_deref(), Some("Rust reaches the moon"));
        assert_eq!(first.source_name(), Some("Example Times"));
        assert_eq!(first.published_at.as_deref(), Some("2026-10-15T08:30:00Z"));

        let second = &page.articles[1];
        assert_eq!(second.title, None);
        assert_eq!(second.source_name(), None);
        assert_eq!(second.url, None);
    }

    #[test]
    fn test_decode_error_response() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        match ArticlesPage::from_json(body) {
            Err(FetchError::Api { code, message }) => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid.");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            ArticlesPage::from_json("<html>oops</html>"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            ArticlesPage::from_json(r#"{"status":"maybe"}"#),
            Err(FetchError::Decode(_))
        ));
    }
}
