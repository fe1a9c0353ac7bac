//! Overview view
//!
//! The dashboard landing page: headline cards, the 30-day cashflow
//! timeline, and the recent activity feed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::metrics::TimelineKind;
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

/// Render the overview view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = OverviewLayout::new(area);

    render_cards(frame, app, layout.cards);
    render_timeline(frame, app, layout.timeline);
    render_activity(frame, app, layout.activity);
}

/// Render the three headline cards
fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let snapshot = &app.dashboard.snapshot;

    render_card(
        frame,
        chunks[0],
        " Spend This Month ",
        format!("{}", snapshot.total_spend),
        format!("{} entries", snapshot.expense_count),
        Color::White,
    );

    render_card(
        frame,
        chunks[1],
        " Monthly Income ",
        format!("{}", snapshot.monthly_income),
        format!("avg ticket {}", snapshot.average_ticket),
        Color::Green,
    );

    let burn_color = if snapshot.burn_rate_pct >= 90.0 {
        Color::Red
    } else if snapshot.burn_rate_pct >= 65.0 {
        Color::Yellow
    } else {
        Color::Green
    };
    let burn_note = if snapshot.monthly_income.is_positive() {
        "of monthly income".to_string()
    } else {
        "no income recorded".to_string()
    };
    render_card(
        frame,
        chunks[2],
        " Burn Rate ",
        format!("{:.0}%", snapshot.burn_rate_pct),
        burn_note,
        burn_color,
    );
}

/// A single bordered card with a big value and a sub-line
fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    note: String,
    value_color: Color,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(note, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the upcoming events panel
fn render_timeline(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Next 30 Days ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let timeline = &app.dashboard.timeline;

    if timeline.is_empty() {
        let text = Paragraph::new("Nothing coming up.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = timeline
        .iter()
        .map(|event| {
            let (marker, marker_color) = match event.kind {
                TimelineKind::Expense => ("↓", Color::Red),
                TimelineKind::Income => ("↑", Color::Green),
                TimelineKind::Workflow => ("⚙", Color::Magenta),
            };

            let amount = event
                .amount
                .map(|a| format!("{}", a))
                .unwrap_or_else(|| event.detail.clone());

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", event.date.format("%b %d")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                Span::styled(
                    format!("{:<26}", truncate_string(&event.label, 26)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!("{:>12}", amount), Style::default().fg(marker_color)),
            ]);

            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the recent activity feed
fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.recent_activity.is_empty() {
        let text = Paragraph::new("No changes yet this session.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = app
        .recent_activity
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::styled(entry.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
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
