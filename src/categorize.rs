//! Groups a flat quick-search response into tab buckets.

use tracing::debug;

use crate::api::SearchResultItem;

/// Default combined display cap; also the page size of the quick search API
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Tab categories, declared in display priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryKey {
    Tokens,
    Addresses,
    Blocks,
    Transactions,
    Blobs,
    UserOperations,
    Labels,
    Apps,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 8] = [
        Self::Tokens,
        Self::Addresses,
        Self::Blocks,
        Self::Transactions,
        Self::Blobs,
        Self::UserOperations,
        Self::Labels,
        Self::Apps,
    ];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Tokens => "Tokens",
            Self::Addresses => "Addresses",
            Self::Blocks => "Blocks",
            Self::Transactions => "Transactions",
            Self::Blobs => "Blobs",
            Self::UserOperations => "User operations",
            Self::Labels => "Public tags",
            Self::Apps => "Apps",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub key: CategoryKey,
    /// Items in response order
    pub items: Vec<SearchResultItem>,
    /// Full count for the tab badge, before the display cap
    pub count: usize,
}

/// Output of [`categorize`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Categorized {
    pub buckets: Vec<CategoryBucket>,
    /// Recognized items across all buckets
    pub total: usize,
    /// Items kept for display, at most the cap
    pub displayed: usize,
    /// The response filled the cap, so a "view all" link is offered
    pub has_more: bool,
}

impl Categorized {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, key: CategoryKey) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = CategoryKey> + '_ {
        self.buckets.iter().map(|b| b.key)
    }

    /// The single recognized item, when the response is unambiguous
    pub fn single_item(&self) -> Option<&SearchResultItem> {
        if self.total != 1 {
            return None;
        }
        self.buckets.first().and_then(|b| b.items.first())
    }
}

/// Partition `items` into buckets in fixed category order.
///
/// Unknown kinds are dropped. Each bucket keeps its full `count`, while the
/// kept items are capped at `cap` across all buckets, filled in category order.
/// `has_more` reflects the search page alone: app entries come from the app
/// directory and never count toward it.
pub fn categorize(items: &[SearchResultItem], cap: usize) -> Categorized {
    let mut grouped: Vec<(CategoryKey, Vec<&SearchResultItem>)> =
        CategoryKey::ALL.iter().map(|k| (*k, Vec::new())).collect();

    let mut dropped = 0;
    for item in items {
        match item.category() {
            Some(key) => grouped[key as usize].1.push(item),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "ignoring search results of unknown kind");
    }

    let mut remaining = cap;
    let mut total = 0;
    let buckets: Vec<CategoryBucket> = grouped
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(key, items)| {
            let count = items.len();
            total += count;
            let take = count.min(remaining);
            remaining -= take;
            CategoryBucket {
                key,
                items: items.into_iter().take(take).cloned().collect(),
                count,
            }
        })
        .collect();

    Categorized {
        displayed: total.min(cap),
        total,
        has_more: cap > 0 && page_len(items) >= cap,
        buckets,
    }
}

/// Items that came back from the quick search endpoint, unknown kinds included
fn page_len(items: &[SearchResultItem]) -> usize {
    items
        .iter()
        .filter(|item| !matches!(item, SearchResultItem::App(_)))
        .count()
}
