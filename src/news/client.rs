//! HTTP client for the headline-search API.

use super::{ArticlesPage, EverythingQuery, SearchParams};
use crate::config::NewsConfig;
use crate::constants::NEWS_USER_AGENT;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("NEWS_API_KEY not found. Please set it in your environment.")]
    MissingApiKey,
    #[error("request failed with HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("could not reach the news API: {0}")]
    Transport(String),
    #[error("malformed response from the news API: {0}")]
    Decode(String),
    #[error("news API returned an error ({code}): {message}")]
    Api { code: String, message: String },
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                // Error bodies usually carry the API's own code and message
                match ArticlesPage::from_json(&body) {
                    Err(api @ FetchError::Api { .. }) => api,
                    _ => FetchError::Http {
                        status,
                        message: body,
                    },
                }
            }
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}

/// The two searches the news tool runs. Implemented by [`NewsClient`] and by
/// fakes in tests.
pub trait HeadlineApi {
    fn top_headlines(&self, params: &SearchParams) -> Result<ArticlesPage, FetchError>;

    fn everything(&self, query: &EverythingQuery) -> Result<ArticlesPage, FetchError>;
}

/// Blocking client bound to one API key.
pub struct NewsClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(config: &NewsConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(NEWS_USER_AGENT)
            .build();
        Self {
            agent,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ArticlesPage, FetchError> {
        let url = self.endpoint(path);
        tracing::info!(%url, "requesting articles");

        let mut request = self.agent.get(&url).set("X-Api-Key", &self.api_key);
        for (name, value) in query {
            request = request.query(name, value);
        }

        let body = request
            .call()?
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        ArticlesPage::from_json(&body)
    }
}

impl HeadlineApi for NewsClient {
    fn top_headlines(&self, params: &SearchParams) -> Result<ArticlesPage, FetchError> {
        self.get("top-headlines", &params.headline_query())
    }

    fn everything(&self, query: &EverythingQuery) -> Result<ArticlesPage, FetchError> {
        let pairs = query.query_pairs();
        let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get("everything", &borrowed)
    }
}
