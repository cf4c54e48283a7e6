//! Debounced quick-search requests.
//!
//! Every issued lookup gets a sequence number. Only the response carrying the
//! latest number is applied; anything older is dropped on arrival, whatever
//! order the responses come back in.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::api::{SearchBackend, SearchResultItem};
use crate::categorize::{categorize, Categorized, DEFAULT_RESULT_CAP};
use crate::error::SearchResult;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A lookup the caller should run, tagged with its issuance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub query: String,
}

/// What the panel should show after a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Blank input: show recent keywords, nothing is fetched
    Recent,
    /// A lookup is scheduled once typing pauses
    Pending,
}

/// Authoritative state of the current query
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Ready(Categorized),
    /// Lookup failed; shown as an empty result with a notice
    Failed(String),
}

#[derive(Debug)]
pub struct QueryClient {
    delay: Duration,
    cap: usize,
    /// Query waiting for the debounce window, with the time of its last keystroke
    pending: Option<(String, Instant)>,
    last_issued: u64,
    /// Sequence number whose response is still awaited
    awaiting: Option<u64>,
    state: QueryState,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE, DEFAULT_RESULT_CAP)
    }
}

impl QueryClient {
    pub fn new(delay: Duration, cap: usize) -> Self {
        Self {
            delay,
            cap,
            pending: None,
            last_issued: 0,
            awaiting: None,
            state: QueryState::Idle,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    /// Register a change of the input text at `now`
    pub fn input(&mut self, text: &str, now: Instant) -> InputOutcome {
        let query = text.trim();
        if query.is_empty() {
            self.reset();
            return InputOutcome::Recent;
        }

        self.pending = Some((query.to_string(), now));
        self.state = QueryState::Loading;
        InputOutcome::Pending
    }

    /// Issue the pending lookup once the debounce window has passed
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        let (_, typed_at) = self.pending.as_ref()?;
        if now.duration_since(*typed_at) < self.delay {
            return None;
        }

        let (query, _) = self.pending.take()?;
        Some(self.issue(query))
    }

    /// Issue a lookup right away, skipping the debounce
    pub fn submit_now(&mut self, text: &str) -> Option<Ticket> {
        let query = text.trim();
        if query.is_empty() {
            self.reset();
            return None;
        }

        self.pending = None;
        self.state = QueryState::Loading;
        Some(self.issue(query.to_string()))
    }

    fn issue(&mut self, query: String) -> Ticket {
        self.last_issued += 1;
        self.awaiting = Some(self.last_issued);
        debug!(seq = self.last_issued, query = %query, "issuing quick search");
        Ticket {
            seq: self.last_issued,
            query,
        }
    }

    /// Drop pending input and invalidate every in-flight lookup
    pub fn reset(&mut self) {
        self.pending = None;
        self.awaiting = None;
        self.state = QueryState::Idle;
    }

    /// Stop waiting for the lookup in flight, as when the user leaves the
    /// search bar. A settled result is kept; an unsettled one goes back to idle.
    pub fn abandon(&mut self) {
        self.pending = None;
        self.awaiting = None;
        if self.is_loading() {
            self.state = QueryState::Idle;
        }
    }

    /// Apply a lookup response. Returns the new state, or `None` when the
    /// response belongs to a superseded request and was discarded.
    pub fn resolve(
        &mut self,
        seq: u64,
        result: SearchResult<Vec<SearchResultItem>>,
    ) -> Option<&QueryState> {
        if self.awaiting != Some(seq) {
            debug!(seq, latest = self.last_issued, "discarding superseded response");
            return None;
        }

        self.awaiting = None;
        // A newer keystroke is still debouncing; stay in the loading state
        if self.pending.is_some() {
            return Some(&self.state);
        }

        self.state = match result {
            Ok(items) => QueryState::Ready(categorize(&items, self.cap)),
            Err(e) => {
                debug!(seq, "quick search failed: {e}");
                QueryState::Failed(e.notice().to_string())
            }
        };
        Some(&self.state)
    }
}

/// Run a ticket against the backend. Apps matching the query are appended to
/// the API results; they only appear when the API lookup itself succeeds.
pub async fn run_ticket<B>(backend: &B, ticket: &Ticket) -> SearchResult<Vec<SearchResultItem>>
where
    B: SearchBackend + ?Sized,
{
    let (items, apps) = tokio::join!(
        backend.quick_search(&ticket.query),
        backend.matching_apps(&ticket.query)
    );
    let mut items = items?;
    items.extend(apps);
    Ok(items)
}
