//! Income view
//!
//! Shows income streams with their normalized monthly value

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the income view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, app, layout.header);
    render_income_table(frame, app, layout.content);
}

/// Render income header with the monthly total
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Income ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let hints = format!(
        "Total {} monthly   a:Add  d:Remove",
        app.dashboard.snapshot.monthly_income
    );

    let paragraph = Paragraph::new(hints)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the income stream table
fn render_income_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let incomes = app.store.incomes().unwrap_or_default();

    if incomes.is_empty() {
        let text = Paragraph::new("No income streams. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(18),    // Title
        Constraint::Length(12), // Amount
        Constraint::Length(10), // Cadence
        Constraint::Length(14), // Monthly
    ];

    let header = Row::new(vec![
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Cadence").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Monthly").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = incomes
        .iter()
        .map(|stream| {
            Row::new(vec![
                Cell::from(stream.title.clone()),
                Cell::from(format!("{}", stream.amount)),
                Cell::from(stream.cadence.label()),
                Cell::from(format!("{}", stream.monthly_amount()))
                    .style(Style::default().fg(Color::Green)),
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
    state.select(Some(app.selected_income_index));

    frame.render_stateful_widget(table, area, &mut state);
}
