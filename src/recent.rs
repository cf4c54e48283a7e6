//! Recently submitted search keywords.
//!
//! The list is most-recent-first, deduplicated and bounded. Persistence is
//! best-effort: a broken store behaves like an empty in-memory one.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{SearchError, SearchResult};

/// Storage key, and file stem of the persisted list
pub const STORAGE_KEY: &str = "recent_search_keywords";

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

pub trait KeywordStore {
    /// Keywords, most recent first
    fn list(&self) -> Vec<String>;

    /// Move `keyword` to the front, dropping duplicates and overflow
    fn record(&mut self, keyword: &str);

    fn remove(&mut self, keyword: &str);

    fn clear(&mut self);
}

/// Insert at front, dedupe, truncate. Returns false for blank keywords.
fn push_front(list: &mut Vec<String>, keyword: &str, max: usize) -> bool {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return false;
    }

    list.retain(|k| k != keyword);
    list.insert(0, keyword.to_string());
    list.truncate(max);
    true
}

#[derive(Debug, Clone)]
pub struct MemoryKeywordStore {
    keywords: Vec<String>,
    max: usize,
}

impl MemoryKeywordStore {
    pub fn new(max: usize) -> Self {
        Self {
            keywords: Vec::new(),
            max,
        }
    }

    pub fn with_keywords(max: usize, keywords: Vec<String>) -> Self {
        let mut keywords = keywords;
        keywords.truncate(max);
        Self { keywords, max }
    }
}

impl Default for MemoryKeywordStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEYWORDS)
    }
}

impl KeywordStore for MemoryKeywordStore {
    fn list(&self) -> Vec<String> {
        self.keywords.clone()
    }

    fn record(&mut self, keyword: &str) {
        push_front(&mut self.keywords, keyword, self.max);
    }

    fn remove(&mut self, keyword: &str) {
        self.keywords.retain(|k| k != keyword);
    }

    fn clear(&mut self) {
        self.keywords.clear();
    }
}

/// Keywords persisted as a JSON array of strings in a single file
#[derive(Debug)]
pub struct FileKeywordStore {
    path: PathBuf,
    max: usize,
    // Loaded on first access
    keywords: OnceCell<Vec<String>>,
}

impl FileKeywordStore {
    pub fn new(path: impl Into<PathBuf>, max: usize) -> Self {
        Self {
            path: path.into(),
            max,
            keywords: OnceCell::new(),
        }
    }

    /// Store under `<data_dir>/qsearch/recent_search_keywords.json`
    pub fn in_data_dir(max: usize) -> SearchResult<Self> {
        let dir = dirs::data_dir()
            .map(|p| p.join("qsearch"))
            .ok_or_else(|| SearchError::Storage("Could not determine data directory".into()))?;
        Ok(Self::new(dir.join(format!("{STORAGE_KEY}.json")), max))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> SearchResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SearchError::Storage(format!("read {:?}: {e}", self.path)))?;
        let mut keywords: Vec<String> = serde_json::from_str(&contents)
            .map_err(|e| SearchError::Storage(format!("parse {:?}: {e}", self.path)))?;
        keywords.truncate(self.max);
        Ok(keywords)
    }

    fn write(&self, keywords: &[String]) -> SearchResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| SearchError::Storage(format!("create {dir:?}: {e}")))?;
        }

        let contents = serde_json::to_string(keywords)?;
        std::fs::write(&self.path, contents)
            .map_err(|e| SearchError::Storage(format!("write {:?}: {e}", self.path)))
    }

    fn load(&self) -> Vec<String> {
        self.read().unwrap_or_else(|e| {
            warn!("recent keywords unavailable: {e}");
            Vec::new()
        })
    }

    fn keywords(&self) -> &Vec<String> {
        self.keywords.get_or_init(|| self.load())
    }

    /// Apply `change` to the loaded list and persist it when `change` reports a modification
    fn update(&mut self, change: impl FnOnce(&mut Vec<String>) -> bool) {
        let mut keywords = self.keywords.take().unwrap_or_else(|| self.load());
        let changed = change(&mut keywords);

        if changed {
            if let Err(e) = self.write(&keywords) {
                warn!("failed to persist recent keywords: {e}");
            }
        }
        self.keywords = OnceCell::from(keywords);
    }
}

impl KeywordStore for FileKeywordStore {
    fn list(&self) -> Vec<String> {
        self.keywords().clone()
    }

    fn record(&mut self, keyword: &str) {
        let max = self.max;
        self.update(|keywords| push_front(keywords, keyword, max));
    }

    fn remove(&mut self, keyword: &str) {
        self.update(|keywords| {
            let before = keywords.len();
            keywords.retain(|k| k != keyword);
            keywords.len() != before
        });
    }

    fn clear(&mut self) {
        self.update(|keywords| {
            keywords.clear();
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir, max: usize) -> FileKeywordStore {
        FileKeywordStore::new(dir.path().join("recent_search_keywords.json"), max)
    }

    #[test]
    fn test_record_moves_duplicate_to_front() {
        let mut store = MemoryKeywordStore::new(4);
        store.record("usd");
        store.record("bob");
        store.record("usd");
        assert_eq!(store.list(), vec!["usd", "bob"]);
    }

    #[test]
    fn test_record_truncates_to_max() {
        let mut store = MemoryKeywordStore::new(4);
        for kw in ["a", "b", "c", "d", "e", "f"] {
            store.record(kw);
        }
        assert_eq!(store.list(), vec!["f", "e", "d", "c"]);
    }

    #[test]
    fn test_record_ignores_blank_and_trims() {
        let mut store = MemoryKeywordStore::default();
        store.record("   ");
        store.record("  usd ");
        assert_eq!(store.list(), vec!["usd"]);
    }

    #[test]
    fn test_file_store_reads_existing_list_in_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("recent_search_keywords.json"),
            r#"["0xabc","usd","bob"]"#,
        )
        .unwrap();

        let store = file_store(&dir, DEFAULT_MAX_KEYWORDS);
        assert_eq!(store.list(), vec!["0xabc", "usd", "bob"]);
    }

    #[test]
    fn test_file_store_persists_on_record() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, 3);
        store.record("usd");
        store.record("bob");

        let reopened = file_store(&dir, 3);
        assert_eq!(reopened.list(), vec!["bob", "usd"]);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"["bob","usd"]"#);
    }

    #[test]
    fn test_file_store_corrupt_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("recent_search_keywords.json"), "{not json").unwrap();

        let mut store = file_store(&dir, 3);
        assert!(store.list().is_empty());

        // Still usable, and overwrites the corrupt file
        store.record("usd");
        assert_eq!(file_store(&dir, 3).list(), vec!["usd"]);
    }

    #[test]
    fn test_file_store_unwritable_keeps_memory_list() {
        let dir = TempDir::new().unwrap();
        // Parent "directory" is a file, so writes fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = FileKeywordStore::new(blocker.join("keywords.json"), 3);

        store.record("usd");
        store.record("bob");
        assert_eq!(store.list(), vec!["bob", "usd"]);
    }

    #[test]
    fn test_file_store_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut store = file_store(&dir, 5);
        store.record("a");
        store.record("b");
        store.remove("a");
        assert_eq!(file_store(&dir, 5).list(), vec!["b"]);

        store.clear();
        assert!(file_store(&dir, 5).list().is_empty());
    }
}
