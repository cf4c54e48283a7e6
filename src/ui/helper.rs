use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::api::SearchResultItem;

// ============================================================================
// Helper Functions
// ============================================================================

pub fn truncate_hash(hash: &str) -> String {
    if hash.len() > 20 && hash.is_ascii() {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

/// Cut `text` to `max` characters, ending with an ellipsis when shortened
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Short tag shown in front of a suggestion
pub fn kind_label(item: &SearchResultItem) -> &'static str {
    match item {
        SearchResultItem::Token(_) => "token",
        SearchResultItem::Contract(_) => "contract",
        SearchResultItem::Address(_) => "address",
        SearchResultItem::Label(_) => "tag",
        SearchResultItem::Block(_) => "block",
        SearchResultItem::Transaction(_) => "tx",
        SearchResultItem::Blob(_) => "blob",
        SearchResultItem::UserOperation(_) => "user op",
        SearchResultItem::App(_) => "app",
        SearchResultItem::Unknown => "?",
    }
}

pub fn format_suggestion<'a>(item: &SearchResultItem, selected: bool, width: usize) -> ListItem<'a> {
    let name = item.display_name();
    let name = if name.starts_with("0x") {
        truncate_hash(&name)
    } else {
        truncate_text(&name, width.saturating_sub(34).max(12))
    };

    let verified = match item {
        SearchResultItem::Token(t) => t.is_smart_contract_verified,
        SearchResultItem::Contract(a) | SearchResultItem::Address(a) | SearchResultItem::Label(a) => {
            a.is_smart_contract_verified
        }
        _ => None,
    };

    // Icons cannot be drawn in a terminal; mark items that have one
    let marker = if item.icon_url().is_some() { "●" } else { " " };

    let mut spans = vec![
        Span::styled(
            format!(" {:>8} ", kind_label(item)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{marker} "), Style::default().fg(Color::Yellow)),
        Span::styled(name, Style::default().fg(Color::White)),
    ];

    if verified == Some(true) {
        spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
    }

    if let Some(secondary) = item.secondary() {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            truncate_hash(secondary),
            Style::default().fg(Color::Gray),
        ));
    }

    let style = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(spans)).style(style)
}

pub fn format_section_header<'a>(title: &str, count: usize) -> ListItem<'a> {
    ListItem::new(Line::from(vec![Span::styled(
        format!("{title} ({count})"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
