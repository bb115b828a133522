//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;

use crate::app::App;
use components::{render_button, BUTTON_HEIGHT};
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Label of the submit button
const SUBMIT_LABEL: &str = "Запостити оголошення";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main = layout::create_layout(frame.area(), app.show_report_panel);

    layout::draw_header(frame, main.header, app);
    draw_form(frame, main.form, app);
    if let Some(report_area) = main.report {
        layout::draw_report_panel(frame, report_area, app);
    }
    layout::draw_status_bar(frame, main.status, app);
}

/// Draw every schema field top-to-bottom, followed by the submit button
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let fields = app.form.strategy().schema().fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let block = Block::default()
        .title(format!(" {} ", app.publication_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            app.form.value(&field.key),
            app.form.options(&field.key),
            app.cursor.active_field() == Some(index),
        );
    }

    render_button(
        frame,
        chunks[fields.len()],
        SUBMIT_LABEL,
        app.cursor.is_submit_active(),
    );
}
