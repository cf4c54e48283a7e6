//! qsearch - quick search for blockchain explorers
//!
//! A debounced search bar over an explorer's quick-search API, with results
//! grouped by category and a persisted list of recent keywords.

pub mod api;
pub mod app;
pub mod branding;
pub mod categorize;
pub mod config;
pub mod error;
pub mod logging;
pub mod panel;
pub mod query;
pub mod recent;
pub mod route;
pub mod search;
pub mod ui;
pub mod wallet;

// Re-export commonly used types
pub use api::{SearchBackend, SearchClient, SearchResultItem};
pub use app::{App, Screen, Submission};
pub use categorize::{categorize, CategoryKey, Categorized};
pub use config::Config;
pub use error::{SearchError, SearchResult};
pub use panel::{PanelState, SuggestionPanel};
pub use query::{QueryClient, QueryState};
pub use recent::{FileKeywordStore, KeywordStore, MemoryKeywordStore};
pub use route::Route;
