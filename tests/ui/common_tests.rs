//! Common UI tests - help line and layout

use super::*;
use qsearch::app::Screen;
use qsearch::route::Route;

// ==================== Help line ====================

#[test]
fn test_help_line_follows_panel_content() {
    let app = create_test_app(&[]);
    let buffer = render_to_buffer(&app, 100, 30);
    assert!(buffer_contains(&buffer, "Enter search"));

    let app = create_test_app(&["usd"]);
    let buffer = render_to_buffer(&app, 100, 30);
    assert!(buffer_contains(&buffer, "Tab category"));
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = create_test_app(&["usd", "bob"]);
    let _ = render_to_buffer(&app, 20, 5);

    search_with(&mut app, "contract", Ok(mock_contracts(50)));
    app.select_next();
    let _ = render_to_buffer(&app, 20, 5);
    let _ = render_to_buffer(&app, 10, 3);

    app.screen = Screen::Navigated(Route::Block(1));
    let _ = render_to_buffer(&app, 10, 3);
}

#[test]
fn test_large_terminal_renders() {
    let mut app = create_test_app(&[]);
    search_with(&mut app, "contract", Ok(mock_contracts(50)));
    let buffer = render_to_buffer(&app, 200, 60);

    assert!(buffer_contains(&buffer, "Contract 0"));
    assert!(buffer_contains(&buffer, "Addresses (50)"));
}
