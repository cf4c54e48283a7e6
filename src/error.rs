use thiserror::Error;

/// Failures the quick search can run into. None of them are fatal: each one
/// degrades to an empty or fallback state in the search bar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Fetch failed or the server answered with a non-2xx status
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Recent keyword storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Branding asset or app directory missing
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// Short message shown inline in the suggestion panel
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Parse(_) => "Something went wrong. Try again later.",
            Self::Storage(_) | Self::Config(_) => "",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;
