//! Navigated screen UI tests

use super::*;
use qsearch::app::{Screen, Submission};
use qsearch::route::Route;

#[test]
fn test_navigated_block_shows_url() {
    let mut app = create_test_app(&[]);
    app.screen = Screen::Navigated(Route::Block(19000000));
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Opening"));
    assert!(buffer_contains(&buffer, "https://eth.blockscout.com/block/19000000"));
    assert!(buffer_contains(&buffer, "b back"));
}

#[test]
fn test_submit_text_opens_results_listing() {
    let mut app = create_test_app(&[]);
    app.set_input("uniswap");

    let submission = app.submit();
    assert_eq!(
        submission,
        Submission::Navigate(Route::SearchResults("uniswap".to_string()))
    );

    let buffer = render_to_buffer(&app, 80, 30);
    assert!(buffer_contains(&buffer, "Search results"));
    assert!(buffer_contains(&buffer, "/search-results?q=uniswap"));
}

#[test]
fn test_back_returns_to_search_with_new_keyword() {
    let mut app = create_test_app(&["usd"]);
    app.set_input("bob");
    app.submit();
    app.go_back();
    app.set_input("");
    app.on_input_changed(Instant::now());

    let buffer = render_to_buffer(&app, 80, 30);
    let bob = find_row(&buffer, "bob").unwrap();
    let usd = find_row(&buffer, "usd").unwrap();
    assert!(bob < usd);
}
