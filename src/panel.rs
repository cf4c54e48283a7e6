//! Suggestion panel state shown under the search bar.

use crate::api::SearchResultItem;
use crate::categorize::{Categorized, CategoryBucket, CategoryKey};
use crate::query::QueryState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// No query: recent keywords instead of results
    Empty { recent: Vec<String> },
    #[default]
    Loading,
    Results(Categorized),
    /// Lookup failed: no results plus a non-blocking notice
    Error { message: String },
}

/// A selectable row of the panel
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion<'a> {
    Keyword(&'a str),
    Item(&'a SearchResultItem),
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionPanel {
    pub state: PanelState,
    /// `None` shows every category
    pub selected_tab: Option<CategoryKey>,
    /// Highlighted row, `None` while the cursor is in the input
    pub cursor: Option<usize>,
}

impl SuggestionPanel {
    pub fn new(recent: Vec<String>) -> Self {
        Self {
            state: PanelState::Empty { recent },
            selected_tab: None,
            cursor: None,
        }
    }

    /// Follow the query client. `recent` is used only when the query is idle.
    pub fn apply(&mut self, query: &QueryState, recent: impl FnOnce() -> Vec<String>) {
        self.state = match query {
            QueryState::Idle => PanelState::Empty { recent: recent() },
            QueryState::Loading => PanelState::Loading,
            QueryState::Ready(result) => PanelState::Results(result.clone()),
            QueryState::Failed(message) => PanelState::Error {
                message: message.clone(),
            },
        };
        self.cursor = None;
    }

    pub fn results(&self) -> Option<&Categorized> {
        match &self.state {
            PanelState::Results(result) => Some(result),
            _ => None,
        }
    }

    /// Tab that is actually applied: a remembered tab missing from the
    /// current results shows everything
    pub fn effective_tab(&self) -> Option<CategoryKey> {
        let tab = self.selected_tab?;
        self.results()
            .and_then(|r| r.bucket(tab))
            .map(|b| b.key)
    }

    /// Buckets visible under the current tab
    pub fn visible_buckets(&self) -> Vec<&CategoryBucket> {
        let Some(result) = self.results() else {
            return Vec::new();
        };
        match self.effective_tab() {
            Some(tab) => result.buckets.iter().filter(|b| b.key == tab).collect(),
            None => result.buckets.iter().collect(),
        }
    }

    /// Selectable rows in display order
    pub fn rows(&self) -> Vec<Suggestion<'_>> {
        match &self.state {
            PanelState::Empty { recent } => {
                recent.iter().map(|k| Suggestion::Keyword(k.as_str())).collect()
            }
            PanelState::Results(_) => self
                .visible_buckets()
                .into_iter()
                .flat_map(|b| b.items.iter().map(Suggestion::Item))
                .collect(),
            PanelState::Loading | PanelState::Error { .. } => Vec::new(),
        }
    }

    /// Cycle tabs: all → first category → … → last category → all
    pub fn next_tab(&mut self) {
        let Some(result) = self.results() else {
            return;
        };
        let keys: Vec<CategoryKey> = result.keys().collect();
        if keys.len() < 2 {
            return;
        }

        self.selected_tab = match self.effective_tab() {
            None => keys.first().copied(),
            Some(tab) => keys
                .iter()
                .position(|k| *k == tab)
                .and_then(|i| keys.get(i + 1).copied()),
        };
        self.cursor = None;
    }

    pub fn prev_tab(&mut self) {
        let Some(result) = self.results() else {
            return;
        };
        let keys: Vec<CategoryKey> = result.keys().collect();
        if keys.len() < 2 {
            return;
        }

        self.selected_tab = match self.effective_tab() {
            None => keys.last().copied(),
            Some(tab) => match keys.iter().position(|k| *k == tab) {
                Some(0) | None => None,
                Some(i) => keys.get(i - 1).copied(),
            },
        };
        self.cursor = None;
    }

    /// Row offset of a category's section in the all-categories list.
    /// Each section takes a header row followed by its items.
    pub fn section_offset(&self, key: CategoryKey) -> Option<usize> {
        let result = self.results()?;
        let mut offset = 0;
        for bucket in &result.buckets {
            if bucket.key == key {
                return Some(offset);
            }
            offset += 1 + bucket.items.len();
        }
        None
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }

        self.cursor = match self.cursor {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to the input
            Some(i) => Some(i + 1),
        };
    }

    pub fn select_prev(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }

        self.cursor = match self.cursor {
            None => Some(len - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn selected(&self) -> Option<Suggestion<'_>> {
        let index = self.cursor?;
        self.rows().into_iter().nth(index)
    }

    pub fn clear_selection(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AddressItem, TokenItem};
    use crate::categorize::categorize;
    use crate::error::SearchError;

    fn token(name: &str) -> SearchResultItem {
        SearchResultItem::Token(TokenItem {
            address: "0x1".to_string(),
            name: name.to_string(),
            symbol: None,
            token_type: None,
            icon_url: None,
            exchange_rate: None,
            is_smart_contract_verified: None,
        })
    }

    fn contract(name: &str) -> SearchResultItem {
        SearchResultItem::Contract(AddressItem {
            address: "0x2".to_string(),
            name: Some(name.to_string()),
            is_smart_contract_verified: Some(true),
        })
    }

    fn ready(items: Vec<SearchResultItem>) -> QueryState {
        QueryState::Ready(categorize(&items, 50))
    }

    #[test]
    fn test_idle_shows_recent_keywords_in_order() {
        let mut panel = SuggestionPanel::default();
        panel.apply(&QueryState::Idle, || {
            vec!["0xabc".to_string(), "usd".to_string(), "bob".to_string()]
        });

        assert_eq!(
            panel.rows(),
            vec![
                Suggestion::Keyword("0xabc"),
                Suggestion::Keyword("usd"),
                Suggestion::Keyword("bob")
            ]
        );
    }

    #[test]
    fn test_transitions_follow_query_state() {
        let mut panel = SuggestionPanel::default();
        panel.apply(&QueryState::Loading, Vec::new);
        assert_eq!(panel.state, PanelState::Loading);

        panel.apply(&ready(vec![token("A")]), Vec::new);
        assert!(panel.results().is_some());

        let failed = QueryState::Failed(SearchError::Network("x".into()).notice().to_string());
        panel.apply(&failed, Vec::new);
        assert!(matches!(panel.state, PanelState::Error { .. }));
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn test_tab_filters_rows() {
        let mut panel = SuggestionPanel::default();
        panel.apply(
            &ready(vec![token("A"), token("B"), contract("C")]),
            Vec::new,
        );
        assert_eq!(panel.rows().len(), 3);

        panel.next_tab();
        assert_eq!(panel.selected_tab, Some(CategoryKey::Tokens));
        assert_eq!(panel.rows().len(), 2);

        panel.next_tab();
        assert_eq!(panel.selected_tab, Some(CategoryKey::Addresses));
        assert_eq!(panel.rows(), vec![Suggestion::Item(&contract("C"))]);

        panel.next_tab();
        assert_eq!(panel.selected_tab, None);

        panel.prev_tab();
        assert_eq!(panel.selected_tab, Some(CategoryKey::Addresses));
    }

    #[test]
    fn test_tab_persists_across_refetch() {
        let mut panel = SuggestionPanel::default();
        panel.apply(&ready(vec![token("A"), contract("C")]), Vec::new);
        panel.next_tab();
        panel.next_tab();
        assert_eq!(panel.selected_tab, Some(CategoryKey::Addresses));

        // New result set without addresses: everything is shown
        panel.apply(&QueryState::Loading, Vec::new);
        panel.apply(&ready(vec![token("A"), token("B")]), Vec::new);
        assert_eq!(panel.effective_tab(), None);
        assert_eq!(panel.rows().len(), 2);

        // Addresses come back: the selection applies again
        panel.apply(&ready(vec![token("A"), contract("D")]), Vec::new);
        assert_eq!(panel.effective_tab(), Some(CategoryKey::Addresses));
        assert_eq!(panel.rows().len(), 1);
    }

    #[test]
    fn test_section_offset() {
        let mut panel = SuggestionPanel::default();
        panel.apply(
            &ready(vec![token("A"), token("B"), contract("C")]),
            Vec::new,
        );
        assert_eq!(panel.section_offset(CategoryKey::Tokens), Some(0));
        assert_eq!(panel.section_offset(CategoryKey::Addresses), Some(3));
        assert_eq!(panel.section_offset(CategoryKey::Blocks), None);
    }

    #[test]
    fn test_cursor_wraps_to_input() {
        let mut panel = SuggestionPanel::new(vec!["usd".to_string(), "bob".to_string()]);

        panel.select_next();
        assert_eq!(panel.selected(), Some(Suggestion::Keyword("usd")));
        panel.select_next();
        assert_eq!(panel.selected(), Some(Suggestion::Keyword("bob")));
        panel.select_next();
        assert_eq!(panel.selected(), None);

        panel.select_prev();
        assert_eq!(panel.selected(), Some(Suggestion::Keyword("bob")));
    }
}
