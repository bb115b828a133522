//! Layout components (header, report panel, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the report panel, borders included
const REPORT_PANEL_HEIGHT: u16 = 8;

/// Screen regions of the main layout
pub struct MainLayout {
    pub header: Rect,
    pub form: Rect,
    pub report: Option<Rect>,
    pub status: Rect,
}

/// Split the screen into header, form, optional report panel and status bar
pub fn create_layout(area: Rect, show_report_panel: bool) -> MainLayout {
    let report_height = if show_report_panel {
        REPORT_PANEL_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Min(0),                // Form
            Constraint::Length(report_height), // Last report
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        form: chunks[1],
        report: show_report_panel.then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Draw the header with the publication name
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Оголошення ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.publication_name().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Draw the most recent submitted report
pub fn draw_report_panel(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.last_report() {
        Some(report) => Paragraph::new(report.to_string()),
        None => Paragraph::new("Ще нічого не запощено")
            .style(Style::default().fg(Color::DarkGray)),
    };

    let block = Block::default()
        .title(" Останнє оголошення ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        key_hints(app),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.active_field() {
        None => " Enter:post  Tab:next  Esc:quit",
        Some(field) if field.is_choice() => " ←/→:choose  Tab:next  Ctrl+S:post  Esc:quit",
        Some(field) if field.is_multiline() => " Enter:newline  Tab:next  Ctrl+S:post  Esc:quit",
        Some(_) => " Tab:next  Ctrl+S:post  Esc:quit",
    }
}
