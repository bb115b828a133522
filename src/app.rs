//! Application state and key handling

use crate::config::AppConfig;
use crate::form::{BufferedSink, FormController};
use crate::publication::{Field, PublicationStrategy};
use crate::state::FormCursor;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::{self, Write};

/// Main application struct
pub struct App {
    /// Form session for the selected publication
    pub form: FormController<BufferedSink>,
    /// Focused row
    pub cursor: FormCursor,
    /// Whether the last report is shown under the form
    pub show_report_panel: bool,
    /// Transient feedback for the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(strategy: PublicationStrategy, config: &AppConfig) -> Self {
        let cursor = FormCursor::new(strategy.schema().len());
        Self {
            form: FormController::new(strategy, BufferedSink::new()),
            cursor,
            show_report_panel: config.show_report_panel(),
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn publication_name(&self) -> &str {
        self.form.strategy().name()
    }

    /// Field under the cursor, `None` when the submit button is focused
    pub fn active_field(&self) -> Option<&Field> {
        self.cursor
            .active_field()
            .and_then(|index| self.form.strategy().schema().fields().get(index))
    }

    pub fn last_report(&self) -> Option<&str> {
        self.form.sink().last()
    }

    /// Every report submitted during this session, oldest first
    pub fn into_reports(self) -> Vec<String> {
        self.form.into_sink().into_reports()
    }

    /// Print every submitted report once the terminal is restored
    pub fn write_reports(self, out: &mut impl Write) -> io::Result<()> {
        for report in self.into_reports() {
            writeln!(out, "Оголошення запощено:\n{report}")?;
        }
        Ok(())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.cursor.is_submit_active();
        let on_choice = self.active_field().is_some_and(Field::is_choice);
        let typing = !on_submit_row && !on_choice;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.cursor.next(),
            KeyCode::BackTab | KeyCode::Up => self.cursor.prev(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Left if on_choice => self.cycle_choice(false)?,
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.cycle_choice(true)?,
            KeyCode::Enter => self.input_newline()?,
            KeyCode::Char(c) if typing && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_char(c)?
            }
            KeyCode::Backspace if typing => self.backspace()?,
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) {
        self.form.on_submit();
        let count = self.form.sink().reports().len();
        self.status_message = Some(format!("Оголошення запощено ({count})"));
    }

    fn active_key(&self) -> Option<String> {
        self.active_field().map(|f| f.key.clone())
    }

    fn input_char(&mut self, c: char) -> Result<()> {
        if let Some(key) = self.active_key() {
            let mut value = self.form.value(&key).to_string();
            value.push(c);
            self.form.on_field_changed(&key, value)?;
        }
        Ok(())
    }

    fn backspace(&mut self) -> Result<()> {
        if let Some(key) = self.active_key() {
            let mut value = self.form.value(&key).to_string();
            if value.pop().is_some() {
                self.form.on_field_changed(&key, value)?;
            }
        }
        Ok(())
    }

    /// Enter adds a line break in multi-line fields and moves on elsewhere
    fn input_newline(&mut self) -> Result<()> {
        if self.active_field().is_some_and(Field::is_multiline) {
            self.input_char('\n')
        } else {
            self.cursor.next();
            Ok(())
        }
    }

    fn cycle_choice(&mut self, forward: bool) -> Result<()> {
        let Some(key) = self.active_key() else {
            return Ok(());
        };
        let options = self.form.options(&key);
        if options.is_empty() {
            self.status_message = Some("Немає варіантів для вибору".to_string());
            return Ok(());
        }

        let current = options.iter().position(|o| o == self.form.value(&key));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) | (None, false) => options.len() - 1,
            (Some(i), false) => i - 1,
            (None, true) => 0,
        };
        let value = options[next].clone();
        self.form.on_field_changed(&key, value)?;
        Ok(())
    }
}
