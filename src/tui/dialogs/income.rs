//! Add income stream dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Cadence, IncomeDraft, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{field_line, spinner_line, TextInput};

/// Fields in the income form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeField {
    #[default]
    Title,
    Amount,
    Cadence,
}

impl IncomeField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Cadence,
            Self::Cadence => Self::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Title => Self::Cadence,
            Self::Amount => Self::Title,
            Self::Cadence => Self::Amount,
        }
    }
}

/// State for the income form
#[derive(Debug, Default)]
pub struct IncomeFormState {
    pub focused_field: IncomeField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub cadence_index: usize,
    pub error_message: Option<String>,
}

impl IncomeFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused_field: IncomeField::default(),
            title_input: TextInput::new().placeholder("e.g. Salary"),
            amount_input: TextInput::new().placeholder("0.00"),
            cadence_index: 0,
            error_message: None,
        }
    }

    /// Get the currently selected cadence
    pub fn selected_cadence(&self) -> Cadence {
        Cadence::all()[self.cadence_index]
    }

    /// Select the next cadence
    pub fn next_cadence(&mut self) {
        self.cadence_index = (self.cadence_index + 1) % Cadence::all().len();
    }

    /// Select the previous cadence
    pub fn prev_cadence(&mut self) {
        let count = Cadence::all().len();
        self.cadence_index = (self.cadence_index + count - 1) % count;
    }

    /// Get the currently focused text input (if the field is one)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            IncomeField::Title => Some(&mut self.title_input),
            IncomeField::Amount => Some(&mut self.amount_input),
            IncomeField::Cadence => None,
        }
    }

    /// Parse the form into a draft, or explain what is wrong
    pub fn build_draft(&self) -> Result<IncomeDraft, String> {
        let title = self.title_input.value().trim().to_string();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        let amount = Money::parse(self.amount_input.value())
            .map_err(|e| format!("Invalid amount: {}", e))?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        Ok(IncomeDraft::new(title, amount, self.selected_cadence()))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Income Stream ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Cadence
            Constraint::Length(1), // Monthly preview
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = &app.income_form;

    frame.render_widget(
        Paragraph::new(field_line(
            "Title",
            &form.title_input,
            form.focused_field == IncomeField::Title,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Amount",
            &form.amount_input,
            form.focused_field == IncomeField::Amount,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(spinner_line(
            "Cadence",
            form.selected_cadence().label(),
            form.focused_field == IncomeField::Cadence,
        )),
        chunks[2],
    );

    // Show the normalized monthly value for the current inputs
    if let Ok(amount) = Money::parse(form.amount_input.value()) {
        if amount.is_positive() {
            let monthly = form.selected_cadence().monthly_amount(amount);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw("            "),
                    Span::styled(
                        format!("≈ {} monthly", monthly),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                chunks[3],
            );
        }
    }

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            ))),
            chunks[5],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  [Tab] Next field  [Enter] Save  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[6],
    );
}

/// Handle a key event for the income dialog. Returns true if handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab => {
            app.income_form.clear_error();
            app.income_form.focused_field = app.income_form.focused_field.next();
            true
        }
        KeyCode::BackTab => {
            app.income_form.clear_error();
            app.income_form.focused_field = app.income_form.focused_field.prev();
            true
        }
        KeyCode::Enter => {
            match save_income(app) {
                Ok(()) => {
                    app.close_dialog();
                    app.set_status("Income stream added");
                }
                Err(e) => app.income_form.set_error(e),
            }
            true
        }
        KeyCode::Up => {
            if app.income_form.focused_field == IncomeField::Cadence {
                app.income_form.prev_cadence();
            }
            true
        }
        KeyCode::Down => {
            if app.income_form.focused_field == IncomeField::Cadence {
                app.income_form.next_cadence();
            }
            true
        }
        KeyCode::Char(c) => {
            app.income_form.clear_error();
            if let Some(input) = app.income_form.focused_input() {
                input.insert(c);
            }
            true
        }
        KeyCode::Backspace => {
            if let Some(input) = app.income_form.focused_input() {
                input.backspace();
            }
            true
        }
        KeyCode::Delete => {
            if let Some(input) = app.income_form.focused_input() {
                input.delete();
            }
            true
        }
        KeyCode::Left => {
            if let Some(input) = app.income_form.focused_input() {
                input.move_left();
            }
            true
        }
        KeyCode::Right => {
            if let Some(input) = app.income_form.focused_input() {
                input.move_right();
            }
            true
        }
        KeyCode::Home => {
            if let Some(input) = app.income_form.focused_input() {
                input.move_start();
            }
            true
        }
        KeyCode::End => {
            if let Some(input) = app.income_form.focused_input() {
                input.move_end();
            }
            true
        }
        _ => false,
    }
}

fn save_income(app: &mut App) -> Result<(), String> {
    let draft = app.income_form.build_draft()?;

    // The change toast arrives through the store subscription
    app.store
        .add_income(draft)
        .map_err(|e| format!("Failed to save: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_draft_from_valid_form() {
        let mut form = IncomeFormState::new();
        for c in "Salary".chars() {
            form.title_input.insert(c);
        }
        for c in "2500".chars() {
            form.amount_input.insert(c);
        }

        let draft = form.build_draft().unwrap();
        assert_eq!(draft.title, "Salary");
        assert_eq!(draft.amount, Money::from_cents(250000));
        assert_eq!(draft.cadence, Cadence::Weekly);
    }

    #[test]
    fn test_build_draft_requires_amount() {
        let mut form = IncomeFormState::new();
        for c in "Salary".chars() {
            form.title_input.insert(c);
        }
        assert!(form.build_draft().is_err());
    }

    #[test]
    fn test_cadence_spinner_wraps() {
        let mut form = IncomeFormState::new();
        let count = Cadence::all().len();
        for _ in 0..count {
            form.next_cadence();
        }
        assert_eq!(form.cadence_index, 0);
    }
}
