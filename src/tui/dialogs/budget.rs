//! Set budget limit dialog
//!
//! One form handles both creating a new limit and editing an existing one.
//! The store upserts by scope, so saving with an existing scope replaces
//! that limit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{BudgetScope, BudgetTarget, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{field_line, spinner_line, TextInput};

/// Fields in the budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Scope,
    Limit,
}

impl BudgetField {
    pub fn next(&self) -> Self {
        match self {
            Self::Scope => Self::Limit,
            Self::Limit => Self::Scope,
        }
    }
}

/// State for the budget form
#[derive(Debug, Default)]
pub struct BudgetFormState {
    pub focused_field: BudgetField,
    pub scope_index: usize,
    pub limit_input: TextInput,
    pub error_message: Option<String>,
}

impl BudgetFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            focused_field: BudgetField::default(),
            scope_index: 0,
            limit_input: TextInput::new().placeholder("0.00"),
            error_message: None,
        }
    }

    /// Create a form prefilled from an existing limit, focused on the amount
    pub fn for_target(target: &BudgetTarget) -> Self {
        let scope_index = BudgetScope::all()
            .iter()
            .position(|s| *s == target.scope)
            .unwrap_or(0);

        Self {
            focused_field: BudgetField::Limit,
            scope_index,
            limit_input: TextInput::new()
                .content(format!("{:.2}", target.limit.cents() as f64 / 100.0)),
            error_message: None,
        }
    }

    /// Get the currently selected scope
    pub fn selected_scope(&self) -> BudgetScope {
        BudgetScope::all()[self.scope_index]
    }

    /// Select the next scope
    pub fn next_scope(&mut self) {
        self.scope_index = (self.scope_index + 1) % BudgetScope::all().len();
    }

    /// Select the previous scope
    pub fn prev_scope(&mut self) {
        let count = BudgetScope::all().len();
        self.scope_index = (self.scope_index + count - 1) % count;
    }

    /// Parse the limit amount, or explain what is wrong
    pub fn parse_limit(&self) -> Result<Money, String> {
        let limit =
            Money::parse(self.limit_input.value()).map_err(|e| format!("Invalid limit: {}", e))?;
        if !limit.is_positive() {
            return Err("Limit must be greater than zero".to_string());
        }
        Ok(limit)
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 10, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget Limit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Scope
            Constraint::Length(1), // Limit
            Constraint::Length(1), // Current spend for scope
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = &app.budget_form;
    let scope = form.selected_scope();

    frame.render_widget(
        Paragraph::new(spinner_line(
            "Scope",
            scope.label(),
            form.focused_field == BudgetField::Scope,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Limit",
            &form.limit_input,
            form.focused_field == BudgetField::Limit,
        )),
        chunks[1],
    );

    // Show what the selected scope has already spent this month
    let spent = match scope {
        BudgetScope::Total => app.dashboard.snapshot.total_spend,
        BudgetScope::Category(category) => {
            let expenses = app.store.expenses().unwrap_or_default();
            crate::metrics::spend_by_category(&expenses)
                .get(&category)
                .copied()
                .unwrap_or_default()
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("            "),
            Span::styled(
                format!("spent so far: {}", spent),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[2],
    );

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            ))),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("  [Tab]", Style::default().fg(Color::Yellow)),
            Span::styled(" Next field  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::styled(" Save  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
        ])),
        chunks[5],
    );
}

/// Handle a key event for the budget dialog. Returns true if handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.budget_form.clear_error();
            app.budget_form.focused_field = app.budget_form.focused_field.next();
            true
        }
        KeyCode::Enter => {
            match save_budget(app) {
                Ok(()) => {
                    app.close_dialog();
                    app.set_status("Budget limit saved");
                }
                Err(e) => app.budget_form.set_error(e),
            }
            true
        }
        KeyCode::Up => {
            if app.budget_form.focused_field == BudgetField::Scope {
                app.budget_form.prev_scope();
            }
            true
        }
        KeyCode::Down => {
            if app.budget_form.focused_field == BudgetField::Scope {
                app.budget_form.next_scope();
            }
            true
        }
        KeyCode::Char(c) => {
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.clear_error();
                app.budget_form.limit_input.insert(c);
            }
            true
        }
        KeyCode::Backspace => {
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.backspace();
            }
            true
        }
        KeyCode::Delete => {
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.delete();
            }
            true
        }
        KeyCode::Left => {
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.move_left();
            }
            true
        }
        KeyCode::Right => {
            if app.budget_form.focused_field == BudgetField::Limit {
                app.budget_form.limit_input.move_right();
            }
            true
        }
        _ => false,
    }
}

fn save_budget(app: &mut App) -> Result<(), String> {
    let scope = app.budget_form.selected_scope();
    let limit = app.budget_form.parse_limit()?;

    // The change toast arrives through the store subscription
    app.store
        .upsert_budget(scope, limit)
        .map_err(|e| format!("Failed to save: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_parse_limit_rejects_zero() {
        let mut form = BudgetFormState::new();
        for c in "0".chars() {
            form.limit_input.insert(c);
        }
        assert!(form.parse_limit().is_err());
    }

    #[test]
    fn test_parse_limit_accepts_decimal() {
        let mut form = BudgetFormState::new();
        for c in "450.75".chars() {
            form.limit_input.insert(c);
        }
        assert_eq!(form.parse_limit().unwrap(), Money::from_cents(45075));
    }

    #[test]
    fn test_for_target_prefills_scope_and_limit() {
        let target = BudgetTarget::new(
            BudgetScope::Category(ExpenseCategory::Food),
            Money::from_cents(40000),
        );
        let form = BudgetFormState::for_target(&target);

        assert_eq!(
            form.selected_scope(),
            BudgetScope::Category(ExpenseCategory::Food)
        );
        assert_eq!(form.limit_input.value(), "400.00");
        assert_eq!(form.focused_field, BudgetField::Limit);
    }

    #[test]
    fn test_scope_spinner_wraps() {
        let mut form = BudgetFormState::new();
        assert_eq!(form.selected_scope(), BudgetScope::Total);

        form.prev_scope();
        let count = BudgetScope::all().len();
        assert_eq!(form.scope_index, count - 1);

        form.next_scope();
        assert_eq!(form.selected_scope(), BudgetScope::Total);
    }
}
