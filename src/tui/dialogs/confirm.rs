//! Confirmation prompt for destructive actions
//!
//! Deletions are irreversible (the store keeps no history), so each one
//! routes through this prompt. The pending action arrives typed; the
//! prompt text is derived from it, never parsed back.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::ConfirmAction;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation prompt for a pending action
pub fn render(frame: &mut Frame, action: &ConfirmAction) {
    let title = match action {
        ConfirmAction::DeleteExpense(..) => " Delete Expense ",
        ConfirmAction::RemoveBudget(..) => " Remove Budget ",
        ConfirmAction::RemoveIncome(..) => " Remove Income ",
    };

    let area = centered_rect_fixed(54, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            action.message(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Confirm   "),
            Span::styled("[N]/[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
