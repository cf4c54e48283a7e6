//! UI rendering tests for qsearch
//!
//! These tests render the app into a `TestBackend` and search the buffer.
//! Run with: cargo test --test ui

mod common_tests;
mod navigated_tests;
mod search_tests;

use qsearch::api::SearchResultItem;
use qsearch::app::App;
use qsearch::config::Config;
use qsearch::error::SearchResult;
use qsearch::recent::MemoryKeywordStore;
use qsearch::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use serde_json::json;
use std::time::{Duration, Instant};

// ==================== Test Data Builders ====================

pub fn create_test_app(recent: &[&str]) -> App {
    let keywords = MemoryKeywordStore::with_keywords(
        10,
        recent.iter().map(|s| s.to_string()).collect(),
    );
    App::new(Config::default(), Box::new(keywords))
}

pub fn mock_token(name: &str, address: &str) -> SearchResultItem {
    serde_json::from_value(json!({
        "type": "token",
        "name": name,
        "symbol": null,
        "address_hash": address,
        "is_smart_contract_verified": true,
    }))
    .unwrap()
}

pub fn mock_contract(name: &str, address: &str) -> SearchResultItem {
    serde_json::from_value(json!({
        "type": "contract",
        "name": name,
        "address_hash": address,
        "is_smart_contract_verified": false,
    }))
    .unwrap()
}

pub fn mock_contracts(count: usize) -> Vec<SearchResultItem> {
    (0..count)
        .map(|i| mock_contract(&format!("Contract {i}"), &format!("0x{i:040x}")))
        .collect()
}

/// Type `text` and let the debounce window pass. The lookup is left in flight.
pub fn start_search(app: &mut App, text: &str) -> u64 {
    let start = Instant::now();
    app.set_input(text);
    app.on_input_changed(start);
    app.tick(start + Duration::from_millis(300))
        .expect("lookup should be issued after the debounce")
        .seq
}

/// Type `text` and resolve its lookup with `result`
pub fn search_with(app: &mut App, text: &str, result: SearchResult<Vec<SearchResultItem>>) {
    let seq = start_search(app, text);
    assert!(app.apply_response(seq, result));
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        content.push_str(&buffer_line(buffer, y));
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Row of the first line containing `needle`
pub fn find_row(buffer: &Buffer, needle: &str) -> Option<u16> {
    (0..buffer.area.height).find(|&y| buffer_line(buffer, y).contains(needle))
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
