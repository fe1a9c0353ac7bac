//! Expenses view
//!
//! Shows logged expenses, newest first, with filters

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::metrics::total_spend;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, app, layout.header);
    render_expense_table(frame, app, layout.content);
}

/// Render expenses header with the active filters and hints
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match app.filters.describe() {
        Some(filters) => format!(" Expenses [{}] ", filters),
        None => " Expenses ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let shown = app.visible_expenses();
    let hints = format!(
        "{} shown, total {}   a:Add  d:Delete  f:Category  c:Channel  r:Recurring  x:Clear",
        shown.len(),
        total_spend(&shown)
    );

    let paragraph = Paragraph::new(hints)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the expense table
fn render_expense_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses = app.visible_expenses();

    if expenses.is_empty() {
        let message = if app.filters.is_active() {
            "No expenses match the filters. Press 'x' to clear them."
        } else {
            "No expenses yet. Press 'a' to log one."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        Constraint::Length(2),  // Recurring marker
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Title
        Constraint::Length(14), // Category
        Constraint::Length(12), // Channel
        Constraint::Length(18), // Tags
        Constraint::Length(12), // Amount
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Channel").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Tags").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let date_format = app.settings.date_format.clone();

    // Data rows
    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let marker = if expense.recurring { "↻" } else { "" };

            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Cyan)),
                Cell::from(expense.date.format(&date_format).to_string()),
                Cell::from(truncate_string(&expense.title, 24)),
                Cell::from(expense.category.label()),
                Cell::from(expense.channel.label()),
                Cell::from(truncate_string(&expense.tags.join(","), 18))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{}", expense.amount)).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum length
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
