//! Status bar view
//!
//! Shows headline figures, active filters, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = &app.dashboard.snapshot;

    // Build status line
    let mut spans = vec![];

    spans.push(Span::styled(" Spend: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", snapshot.total_spend),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));

    spans.push(Span::styled("Income: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}", snapshot.monthly_income),
        Style::default().fg(Color::Green),
    ));

    spans.push(Span::raw(" │ "));

    let burn_color = if snapshot.burn_rate_pct >= 90.0 {
        Color::Red
    } else if snapshot.burn_rate_pct >= 65.0 {
        Color::Yellow
    } else {
        Color::Green
    };
    spans.push(Span::styled("Burn: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{:.0}%", snapshot.burn_rate_pct),
        Style::default().fg(burn_color),
    ));

    // Active filters
    if let Some(filters) = app.filters.describe() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("filters: {}", filters),
            Style::default().fg(Color::Cyan),
        ));
    }

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  / or ::Command ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
