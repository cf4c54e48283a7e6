mod helper;
mod suggest;

use helper::*;
use suggest::draw_suggestions;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::branding::{ColorMode, LogoSource};
use crate::panel::PanelState;
use crate::route::Route;

const SEARCH_HELP: &str =
    "↑↓ select • Tab category • Enter open • Del remove • Ctrl+T theme • Esc quit";
const SEARCH_HELP_SIMPLE: &str = "Enter search • Ctrl+T theme • Esc quit";
const NAV_HELP: &str = "b back • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Search => draw_search(frame, app),
        Screen::Navigated(route) => draw_navigated(frame, app, route),
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let compact = area.width < 40;
    let logo = if compact { app.icon() } else { app.logo() };
    let logo_style = match (&logo, app.color_mode()) {
        (LogoSource::Placeholder, _) => Style::default().fg(Color::DarkGray),
        (LogoSource::Image { invert: true, .. }, _) | (_, ColorMode::Dark) => {
            Style::default().fg(Color::White).bold()
        }
        _ => Style::default().fg(Color::Blue).bold(),
    };

    let line = if compact {
        Line::from(vec![
            Span::styled(format!("{} ", logo.glyph()), logo_style),
            Span::styled(app.config.network_name.clone(), logo_style),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", logo.glyph()), logo_style),
            Span::styled(app.config.network_name.clone(), logo_style),
            Span::styled(" explorer", Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled(
                app.color_mode().as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_search(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Header
        Constraint::Length(1), // Spacing
        Constraint::Length(3), // Search bar
        Constraint::Min(0),    // Suggestions
        Constraint::Length(1), // Help
    ])
    .split(area);

    draw_header(frame, app, chunks[1]);

    let search_area = centered_rect(80, chunks[3]);
    draw_search_bar(frame, app, search_area, app.panel.cursor.is_none());

    let panel_area = centered_rect(80, chunks[4]);
    draw_suggestions(frame, app, panel_area);

    let has_rows = match &app.panel.state {
        PanelState::Empty { recent } => !recent.is_empty(),
        PanelState::Results(result) => !result.is_empty(),
        PanelState::Loading | PanelState::Error { .. } => false,
    };
    let help = Paragraph::new(if has_rows { SEARCH_HELP } else { SEARCH_HELP_SIMPLE })
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Search by address / txn hash / block / token...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor if search bar is selected
    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_navigated(frame: &mut Frame, app: &App, route: &Route) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(if route.is_direct() {
            " Opening "
        } else {
            " Search results "
        });

    let url = route.url(app.config.explorer_url());
    let lines = vec![
        Line::from(route.path()).fg(Color::White),
        Line::from(""),
        Line::from(url).fg(Color::Cyan),
        Line::from(""),
        Line::from(NAV_HELP).fg(Color::DarkGray),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
