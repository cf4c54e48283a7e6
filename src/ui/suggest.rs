use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::helper::*;
use crate::app::App;
use crate::panel::{PanelState, SuggestionPanel};
use crate::route::Route;

const SKELETON_ROWS: usize = 4;

pub fn draw_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match &app.panel.state {
        PanelState::Empty { recent } => draw_recent(frame, &app.panel, recent, block, area),
        PanelState::Loading => draw_skeleton(frame, block, area),
        PanelState::Error { message } => {
            let lines = vec![
                Line::from("No results found.").fg(Color::Gray),
                Line::from(message.as_str()).fg(Color::Red),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        PanelState::Results(result) if result.is_empty() => {
            let text = Line::from(format!(
                "No results found for \"{}\".",
                app.search_input.value().trim()
            ))
            .fg(Color::Gray);
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
        PanelState::Results(_) => draw_results(frame, app, block, area),
    }
}

fn draw_recent(
    frame: &mut Frame,
    panel: &SuggestionPanel,
    recent: &[String],
    block: Block,
    area: Rect,
) {
    if recent.is_empty() {
        return;
    }

    let block = block.title(" Recent ");
    let items: Vec<ListItem> = recent
        .iter()
        .enumerate()
        .map(|(i, keyword)| {
            let style = if panel.cursor == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!(" {}", truncate_text(keyword, 60))).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_skeleton(frame: &mut Frame, block: Block, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = (0..SKELETON_ROWS)
        .map(|i| {
            let len = width.saturating_sub(i * 7).max(4);
            Line::from(format!(" {}", "░".repeat(len))).fg(Color::DarkGray)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tabs(app: &App) -> Line<'static> {
    let Some(result) = app.panel.results() else {
        return Line::default();
    };
    let active = app.panel.effective_tab();

    let tab_style = |selected: bool| {
        if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let mut spans = Vec::new();
    if result.buckets.len() > 1 {
        spans.push(Span::styled(
            format!(" All ({})", result.total),
            tab_style(active.is_none()),
        ));
        spans.push(Span::raw("  "));
    }
    for bucket in &result.buckets {
        spans.push(Span::styled(
            format!(" {} ({})", bucket.key.title(), bucket.count),
            tab_style(active == Some(bucket.key)),
        ));
        spans.push(Span::raw("  "));
    }

    Line::from(spans)
}

fn draw_results(frame: &mut Frame, app: &App, block: Block, area: Rect) {
    let Some(result) = app.panel.results() else {
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Tabs
        Constraint::Length(1), // Spacing
        Constraint::Min(0),    // Items
        Constraint::Length(if result.has_more { 1 } else { 0 }), // View all
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(draw_tabs(app)), chunks[0]);

    // Display rows: a header per section, then its items
    let width = chunks[2].width as usize;
    let mut items: Vec<ListItem> = Vec::new();
    let mut selectable = 0;
    let mut cursor_row = None;
    let mut cursor_section = 0;
    let all_tabs = app.panel.effective_tab().is_none();
    for bucket in app.panel.visible_buckets() {
        let section_start = if all_tabs {
            app.panel.section_offset(bucket.key).unwrap_or(items.len())
        } else {
            items.len()
        };
        items.push(format_section_header(bucket.key.title(), bucket.count));
        for item in &bucket.items {
            let selected = app.panel.cursor == Some(selectable);
            if selected {
                cursor_row = Some(items.len());
                cursor_section = section_start;
            }
            items.push(format_suggestion(item, selected, width));
            selectable += 1;
        }
    }

    // Keep the highlighted item's section header in view when it fits
    let height = chunks[2].height as usize;
    let offset = match cursor_row {
        Some(row) if row - cursor_section < height => cursor_section,
        Some(row) => row + 1 - height.max(1),
        None => 0,
    };
    let mut state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(List::new(items), chunks[2], &mut state);

    if result.has_more {
        let route = Route::SearchResults(app.search_input.value().trim().to_string());
        let line = Line::from(vec![
            Span::styled("View all results ", Style::default().fg(Color::Cyan)),
            Span::styled(route.path(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[3]);
    }
}
