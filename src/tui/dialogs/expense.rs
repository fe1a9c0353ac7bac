//! Log expense dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use chrono::{Months, NaiveDate};

use crate::models::{ExpenseCategory, ExpenseDraft, Money, PaymentChannel};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{field_line, spinner_line, toggle_line, TextInput};

/// Fields in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Title,
    Amount,
    Category,
    Channel,
    Date,
    Recurring,
    Tags,
}

impl ExpenseField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Channel,
            Self::Channel => Self::Date,
            Self::Date => Self::Recurring,
            Self::Recurring => Self::Tags,
            Self::Tags => Self::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Title => Self::Tags,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
            Self::Channel => Self::Category,
            Self::Date => Self::Channel,
            Self::Recurring => Self::Date,
            Self::Tags => Self::Recurring,
        }
    }
}

/// State for the expense form
#[derive(Debug, Default)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub category_index: usize,
    pub channel_index: usize,
    pub date_input: TextInput,
    pub recurring: bool,
    pub tags_input: TextInput,
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create a fresh form dated today
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused_field: ExpenseField::default(),
            title_input: TextInput::new().placeholder("e.g. Grocery run"),
            amount_input: TextInput::new().placeholder("0.00"),
            category_index: 0,
            channel_index: 0,
            date_input: TextInput::new().content(today.format("%Y-%m-%d").to_string()),
            recurring: false,
            tags_input: TextInput::new().placeholder("comma,separated"),
            error_message: None,
        }
    }

    /// Get the currently selected category
    pub fn selected_category(&self) -> ExpenseCategory {
        ExpenseCategory::all()[self.category_index]
    }

    /// Get the currently selected payment channel
    pub fn selected_channel(&self) -> PaymentChannel {
        PaymentChannel::all()[self.channel_index]
    }

    /// Select the next category
    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % ExpenseCategory::all().len();
    }

    /// Select the previous category
    pub fn prev_category(&mut self) {
        let count = ExpenseCategory::all().len();
        self.category_index = (self.category_index + count - 1) % count;
    }

    /// Select the next payment channel
    pub fn next_channel(&mut self) {
        self.channel_index = (self.channel_index + 1) % PaymentChannel::all().len();
    }

    /// Select the previous payment channel
    pub fn prev_channel(&mut self) {
        let count = PaymentChannel::all().len();
        self.channel_index = (self.channel_index + count - 1) % count;
    }

    /// Get the currently focused text input (if the field is one)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Title => Some(&mut self.title_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Tags => Some(&mut self.tags_input),
            _ => None,
        }
    }

    /// Parse the form into a draft, or explain what is wrong
    pub fn build_draft(&self) -> Result<ExpenseDraft, String> {
        let title = self.title_input.value().trim().to_string();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        let amount = Money::parse(self.amount_input.value())
            .map_err(|e| format!("Invalid amount: {}", e))?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid date (use YYYY-MM-DD)".to_string())?;

        let mut draft = ExpenseDraft::new(
            title,
            amount,
            self.selected_category(),
            self.selected_channel(),
            date,
        );
        draft.recurring = self.recurring;
        draft.tags_input = self.tags_input.value().to_string();
        Ok(draft)
    }

    /// One month after the form's date, shown as the next-sweep hint
    /// while the recurring toggle is on
    pub fn next_sweep_date(&self) -> Option<NaiveDate> {
        let date =
            NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d").ok()?;
        date.checked_add_months(Months::new(1))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 15, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Log Expense ")
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Channel
            Constraint::Length(1), // Date
            Constraint::Length(1), // Recurring
            Constraint::Length(1), // Tags
            Constraint::Length(1), // Suggestions
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(field_line(
            "Title",
            &form.title_input,
            focused == ExpenseField::Title,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Amount",
            &form.amount_input,
            focused == ExpenseField::Amount,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(spinner_line(
            "Category",
            form.selected_category().label(),
            focused == ExpenseField::Category,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(spinner_line(
            "Channel",
            form.selected_channel().label(),
            focused == ExpenseField::Channel,
        )),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Date",
            &form.date_input,
            focused == ExpenseField::Date,
        )),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(toggle_line(
            "Recurring",
            form.recurring,
            focused == ExpenseField::Recurring,
        )),
        chunks[5],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Tags",
            &form.tags_input,
            focused == ExpenseField::Tags,
        )),
        chunks[6],
    );

    // Suggestion chips previewing what save will do: the sweep date a
    // month out for recurring charges, category tag defaults when the
    // tags field is empty
    let mut suggestions: Vec<Span> = Vec::new();
    if form.recurring {
        if let Some(sweep) = form.next_sweep_date() {
            suggestions.push(Span::styled(
                format!("next sweep: {}", sweep.format("%Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    if form.tags_input.value().is_empty() {
        if !suggestions.is_empty() {
            suggestions.push(Span::raw("  "));
        }
        suggestions.push(Span::styled(
            format!(
                "tags default to: {}",
                form.selected_category().default_tags().join(", ")
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !suggestions.is_empty() {
        suggestions.insert(0, Span::raw("            "));
        frame.render_widget(Paragraph::new(Line::from(suggestions)), chunks[7]);
    }

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            ))),
            chunks[8],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  [Tab] Next field  [Enter] Save  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[9],
    );
}

/// Handle a key event for the expense dialog. Returns true if handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab => {
            app.expense_form.clear_error();
            app.expense_form.focused_field = app.expense_form.focused_field.next();
            true
        }
        KeyCode::BackTab => {
            app.expense_form.clear_error();
            app.expense_form.focused_field = app.expense_form.focused_field.prev();
            true
        }
        KeyCode::Enter => {
            match save_expense(app) {
                Ok(()) => {
                    app.close_dialog();
                    app.set_status("Expense logged");
                }
                Err(e) => app.expense_form.set_error(e),
            }
            true
        }
        KeyCode::Up => {
            match app.expense_form.focused_field {
                ExpenseField::Category => app.expense_form.prev_category(),
                ExpenseField::Channel => app.expense_form.prev_channel(),
                _ => {}
            }
            true
        }
        KeyCode::Down => {
            match app.expense_form.focused_field {
                ExpenseField::Category => app.expense_form.next_category(),
                ExpenseField::Channel => app.expense_form.next_channel(),
                _ => {}
            }
            true
        }
        KeyCode::Char(' ') if app.expense_form.focused_field == ExpenseField::Recurring => {
            app.expense_form.recurring = !app.expense_form.recurring;
            true
        }
        KeyCode::Char(c) => {
            app.expense_form.clear_error();
            if let Some(input) = app.expense_form.focused_input() {
                input.insert(c);
            }
            true
        }
        KeyCode::Backspace => {
            if let Some(input) = app.expense_form.focused_input() {
                input.backspace();
            }
            true
        }
        KeyCode::Delete => {
            if let Some(input) = app.expense_form.focused_input() {
                input.delete();
            }
            true
        }
        KeyCode::Left => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_left();
            }
            true
        }
        KeyCode::Right => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_right();
            }
            true
        }
        KeyCode::Home => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_start();
            }
            true
        }
        KeyCode::End => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_end();
            }
            true
        }
        _ => false,
    }
}

fn save_expense(app: &mut App) -> Result<(), String> {
    let draft = app.expense_form.build_draft()?;

    // The change toast arrives through the store subscription
    app.store
        .add_expense(draft)
        .map_err(|e| format!("Failed to save: {}", e))?;

    Ok(())
}
