use reqwest::Url;

/// Explorer page a submission or a suggestion click navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Token(String),
    Address(String),
    Block(u64),
    BlockHash(String),
    Transaction(String),
    Blob(String),
    UserOperation(String),
    App(String),
    /// Full results listing, parameterized by the raw query
    SearchResults(String),
}

impl Route {
    /// Path relative to the explorer root
    pub fn path(&self) -> String {
        match self {
            Self::Token(addr) => format!("/token/{addr}"),
            Self::Address(addr) => format!("/address/{addr}"),
            Self::Block(num) => format!("/block/{num}"),
            Self::BlockHash(hash) => format!("/block/{hash}"),
            Self::Transaction(hash) => format!("/tx/{hash}"),
            Self::Blob(hash) => format!("/blobs/{hash}"),
            Self::UserOperation(hash) => format!("/op/{hash}"),
            Self::App(id) => format!("/apps/{id}"),
            Self::SearchResults(query) => {
                // Let the url crate do the escaping of the raw query
                let url = Url::parse_with_params("http://localhost/search-results", &[("q", query)]);
                match url {
                    Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
                    Err(_) => "/search-results".to_string(),
                }
            }
        }
    }

    /// Absolute URL against the explorer base
    pub fn url(&self, explorer_url: &str) -> String {
        format!("{}{}", explorer_url.trim_end_matches('/'), self.path())
    }

    pub fn is_direct(&self) -> bool {
        !matches!(self, Self::SearchResults(_))
    }
}
