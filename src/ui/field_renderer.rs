//! Field rendering utilities for the ad form

use crate::publication::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(field: &Field) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw one schema field with its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    value: &str,
    options: &[String],
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if field.is_choice() {
        choice_line(value, options, is_active, style)
    } else {
        text_content(value, field.is_multiline(), is_active, style)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_content(
    value: &str,
    is_multiline: bool,
    is_active: bool,
    style: Style,
) -> Paragraph<'static> {
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::styled(l.to_string(), style))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}

fn choice_line(
    value: &str,
    options: &[String],
    is_active: bool,
    style: Style,
) -> Paragraph<'static> {
    let selected = if value.is_empty() {
        "(не вибрано)".to_string()
    } else {
        value.to_string()
    };

    let position = match options.iter().position(|o| o == value) {
        Some(i) => format!("  {}/{}", i + 1, options.len()),
        None if options.is_empty() => "  немає варіантів".to_string(),
        None => format!("  -/{}", options.len()),
    };

    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(selected, style),
        Span::styled(" ▶", arrow_style),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]))
}
