use std::time::Instant;
use tracing::info;
use tui_input::Input;

use crate::api::SearchResultItem;
use crate::branding::{ColorMode, LogoSource};
use crate::config::Config;
use crate::error::SearchResult;
use crate::panel::{Suggestion, SuggestionPanel};
use crate::query::{QueryClient, QueryState, Ticket};
use crate::recent::KeywordStore;
use crate::route::Route;
use crate::search::SearchQuery;
use crate::wallet::{DetachedModal, ThemeSync};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Search,
    /// A submission left the search bar for this page
    Navigated(Route),
}

/// What the event loop should do after Enter
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Navigate(Route),
    /// A recent keyword was picked; run it right away
    Search(Ticket),
    Nothing,
}

pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub search_input: Input,
    pub query: QueryClient,
    pub panel: SuggestionPanel,
    pub keywords: Box<dyn KeywordStore>,
    pub theme_sync: ThemeSync<DetachedModal>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, keywords: Box<dyn KeywordStore>) -> Self {
        let query = QueryClient::new(config.debounce(), config.result_cap);
        let panel = SuggestionPanel::new(keywords.list());
        let mut theme_sync = ThemeSync::new(&config.wallet, DetachedModal::default());
        theme_sync.sync(config.color_mode);

        Self {
            config,
            screen: Screen::Search,
            search_input: Input::default(),
            query,
            panel,
            keywords,
            theme_sync,
            should_quit: false,
        }
    }

    pub fn is_on_search(&self) -> bool {
        matches!(self.screen, Screen::Search)
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn recent_keywords(&self) -> Vec<String> {
        self.keywords.list()
    }

    fn refresh_panel(&mut self) {
        self.panel.apply(self.query.state(), || self.keywords.list());
    }

    /// The input text changed at `now`
    pub fn on_input_changed(&mut self, now: Instant) {
        self.query.input(self.search_input.value(), now);
        self.refresh_panel();
    }

    /// Replace the input text, as when a keyword is picked
    pub fn set_input(&mut self, text: &str) {
        self.search_input = Input::new(text.to_string());
    }

    /// Lookup to start once the debounce window has passed
    pub fn tick(&mut self, now: Instant) -> Option<Ticket> {
        self.query.poll(now)
    }

    /// Feed a lookup response back. Returns false when it was superseded.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: SearchResult<Vec<SearchResultItem>>,
    ) -> bool {
        match self.query.resolve(seq, result) {
            Some(state) => {
                self.panel.apply(state, || self.keywords.list());
                true
            }
            None => false,
        }
    }

    /// Enter pressed: pick the highlighted suggestion or commit the query
    pub fn submit(&mut self) -> Submission {
        let selected = match self.panel.selected() {
            Some(Suggestion::Keyword(keyword)) => Some(Err(keyword.to_string())),
            Some(Suggestion::Item(item)) => item.route().map(Ok),
            None => None,
        };

        match selected {
            Some(Err(keyword)) => {
                self.set_input(&keyword);
                self.panel.clear_selection();
                match self.query.submit_now(&keyword) {
                    Some(ticket) => {
                        self.refresh_panel();
                        Submission::Search(ticket)
                    }
                    None => Submission::Nothing,
                }
            }
            Some(Ok(route)) => {
                let text = self.search_input.value().to_string();
                self.keywords.record(&text);
                self.navigate(route)
            }
            None => {
                let text = self.search_input.value().trim().to_string();
                if text.is_empty() {
                    return Submission::Nothing;
                }
                self.keywords.record(&text);
                let route = self.route_for(&text);
                self.navigate(route)
            }
        }
    }

    /// Direct page when the query is unambiguous, otherwise the results listing
    fn route_for(&self, text: &str) -> Route {
        if let QueryState::Ready(result) = self.query.state() {
            if let Some(route) = result.single_item().and_then(|item| item.route()) {
                return route;
            }
        }

        SearchQuery::parse(text)
            .direct_route()
            .unwrap_or_else(|| Route::SearchResults(text.to_string()))
    }

    fn navigate(&mut self, route: Route) -> Submission {
        info!(path = %route.path(), "navigating");
        // The event loop drops the lookup in flight; nothing will answer it
        self.query.abandon();
        self.screen = Screen::Navigated(route.clone());
        Submission::Navigate(route)
    }

    /// Back to the search bar from a navigated page. Returns a lookup to run
    /// when the query left behind never settled.
    pub fn go_back(&mut self) -> Option<Ticket> {
        self.screen = Screen::Search;
        let ticket = match self.query.state() {
            QueryState::Idle => self.query.submit_now(self.search_input.value()),
            _ => None,
        };
        self.refresh_panel();
        ticket
    }

    pub fn remove_selected_keyword(&mut self) {
        let Some(Suggestion::Keyword(keyword)) = self.panel.selected() else {
            return;
        };
        let keyword = keyword.to_string();
        let index = self.panel.cursor;

        self.keywords.remove(&keyword);
        self.refresh_panel();

        // Keep the cursor on the row that moved into place
        let len = self.panel.rows().len();
        self.panel.cursor = match index {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }

    pub fn select_next(&mut self) {
        self.panel.select_next();
    }

    pub fn select_prev(&mut self) {
        self.panel.select_prev();
    }

    pub fn next_tab(&mut self) {
        self.panel.next_tab();
    }

    pub fn prev_tab(&mut self) {
        self.panel.prev_tab();
    }

    pub fn color_mode(&self) -> ColorMode {
        self.config.color_mode
    }

    /// Switch light/dark and keep the wallet modal in step
    pub fn toggle_color_mode(&mut self) {
        self.config.color_mode = self.config.color_mode.toggled();
        self.theme_sync.sync(self.config.color_mode);
    }

    pub fn logo(&self) -> LogoSource {
        self.config.branding.logo(self.config.color_mode)
    }

    /// Compact network mark for narrow layouts
    pub fn icon(&self) -> LogoSource {
        self.config.branding.icon(self.config.color_mode)
    }
}
