//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current view
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line(":", "Open command palette"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Move focus left/right"),
        key_line("j/k", "Move selection up/down"),
        key_line("1-5", "Jump to a view"),
        Line::from(""),
    ];

    // View-specific help
    match app.active_view {
        ActiveView::Overview => {
            lines.push(section("Overview"));
            lines.push(Line::from(""));
            lines.push(key_line("2", "Jump to expenses"));
            lines.push(key_line("3", "Jump to agent insights"));
            lines.push(Line::from(
                "Cards, the 30-day timeline, and recent activity refresh",
            ));
            lines.push(Line::from("whenever the books change."));
        }
        ActiveView::Expenses => {
            lines.push(section("Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Log a new expense"));
            lines.push(key_line("d", "Delete selected expense"));
            lines.push(key_line("f", "Cycle category filter"));
            lines.push(key_line("c", "Cycle payment channel filter"));
            lines.push(key_line("r", "Toggle recurring-only filter"));
            lines.push(key_line("x", "Clear all filters"));
            lines.push(key_line("g", "Go to top"));
            lines.push(key_line("G", "Go to bottom"));
        }
        ActiveView::Agents => {
            lines.push(section("Agent Insights"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Select a workflow"));
            lines.push(key_line("Enter", "Mark selected workflow done"));
            lines.push(Line::from(
                "Insight cards are recomputed from the current books;",
            ));
            lines.push(Line::from("the same books always produce the same cards."));
        }
        ActiveView::Budgets => {
            lines.push(section("Budgets"));
            lines.push(Line::from(""));
            lines.push(key_line("a/b", "Set a new budget limit"));
            lines.push(key_line("Enter", "Edit selected limit"));
            lines.push(key_line("d", "Remove selected limit"));
        }
        ActiveView::Income => {
            lines.push(section("Income"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add an income stream"));
            lines.push(key_line("d", "Remove selected stream"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a section heading line
fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
