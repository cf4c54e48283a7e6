//! Search screen UI tests

use super::*;
use qsearch::error::SearchError;

// ==================== Recent keywords ====================

#[test]
fn test_recent_keywords_listed_in_order() {
    let app = create_test_app(&["0xabc", "usd", "bob"]);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Recent"));
    let rows: Vec<_> = ["0xabc", "usd", "bob"]
        .iter()
        .map(|k| find_row(&buffer, k).unwrap())
        .collect();
    assert!(rows[0] < rows[1] && rows[1] < rows[2]);
}

#[test]
fn test_no_recent_keywords_shows_placeholder_only() {
    let app = create_test_app(&[]);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Search by address / txn hash / block / token..."));
    assert!(!buffer_contains(&buffer, "Recent"));
}

// ==================== Header ====================

#[test]
fn test_header_shows_network_and_mode() {
    let mut app = create_test_app(&[]);
    let buffer = render_to_buffer(&app, 80, 30);
    assert!(buffer_contains(&buffer, "Ethereum explorer"));
    assert!(buffer_contains(&buffer, "light"));

    app.toggle_color_mode();
    let buffer = render_to_buffer(&app, 80, 30);
    assert!(buffer_contains(&buffer, "dark"));
}

// ==================== Loading ====================

#[test]
fn test_typing_shows_skeleton() {
    let mut app = create_test_app(&["usd"]);
    start_search(&mut app, "us");
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "░░░░"));
    assert!(!buffer_contains(&buffer, "Recent"));
}

// ==================== Results ====================

#[test]
fn test_results_show_category_tabs() {
    let mut app = create_test_app(&[]);
    search_with(
        &mut app,
        "usd",
        Ok(vec![
            mock_token("Tether USD", "0xdac17f958d2ee523a2206206994597c13d831ec7"),
            mock_token("USD Coin", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            mock_contract("USD Router", "0x1111111111111111111111111111111111111111"),
        ]),
    );
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "All (3)"));
    assert!(buffer_contains(&buffer, "Tokens (2)"));
    assert!(buffer_contains(&buffer, "Addresses (1)"));
    assert!(buffer_contains(&buffer, "Tether USD"));
    assert!(!buffer_contains(&buffer, "View all results"));
}

#[test]
fn test_single_category_has_no_all_tab() {
    let mut app = create_test_app(&[]);
    search_with(
        &mut app,
        "tether",
        Ok(vec![mock_token(
            "Tether USD",
            "0xdac17f958d2ee523a2206206994597c13d831ec7",
        )]),
    );
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Tokens (1)"));
    assert!(!buffer_contains(&buffer, "All ("));
}

#[test]
fn test_capped_results_offer_view_all() {
    let mut app = create_test_app(&[]);
    search_with(&mut app, "contract", Ok(mock_contracts(50)));
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Addresses (50)"));
    assert!(buffer_contains(&buffer, "View all results"));
    assert!(buffer_contains(&buffer, "/search-results?q=contract"));
}

#[test]
fn test_selected_tab_limits_sections() {
    let mut app = create_test_app(&[]);
    search_with(
        &mut app,
        "usd",
        Ok(vec![
            mock_token("Tether USD", "0xdac17f958d2ee523a2206206994597c13d831ec7"),
            mock_contract("USD Router", "0x1111111111111111111111111111111111111111"),
        ]),
    );
    app.next_tab();
    app.next_tab();
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "USD Router"));
    assert!(!buffer_contains(&buffer, "Tether USD"));
}

#[test]
fn test_highlighted_row_far_down_is_scrolled_into_view() {
    let mut app = create_test_app(&[]);
    search_with(&mut app, "contract", Ok(mock_contracts(50)));
    for _ in 0..40 {
        app.select_next();
    }
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Contract 39"));
    assert!(!buffer_contains(&buffer, "Contract 0 "));
}

#[test]
fn test_empty_results_message() {
    let mut app = create_test_app(&[]);
    search_with(&mut app, "zzzz", Ok(vec![]));
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "No results found for \"zzzz\"."));
}

// ==================== Errors ====================

#[test]
fn test_network_error_shows_notice() {
    let mut app = create_test_app(&[]);
    search_with(
        &mut app,
        "usd",
        Err(SearchError::Network("connection refused".into())),
    );
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "No results found."));
    assert!(buffer_contains(&buffer, "Something went wrong. Try again later."));
    assert!(!buffer_contains(&buffer, "connection refused"));
}
