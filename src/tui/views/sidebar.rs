//! Sidebar view
//!
//! Shows the view switcher and a quick stats block

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_nav(frame, app, layout.nav);
    render_stats(frame, app, layout.stats);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Cashpilot ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new("v0.1.0")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the view switcher
fn render_nav(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(view.label(), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Render the quick stats block
fn render_stats(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" At a Glance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let snapshot = &app.dashboard.snapshot;

    let burn_color = if snapshot.burn_rate_pct >= 90.0 {
        Color::Red
    } else if snapshot.burn_rate_pct >= 65.0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let lines = vec![
        stat_line("Spend", format!("{}", snapshot.total_spend), Color::White),
        stat_line(
            "Income",
            format!("{}", snapshot.monthly_income),
            Color::White,
        ),
        stat_line(
            "Burn",
            format!("{:.0}%", snapshot.burn_rate_pct),
            burn_color,
        ),
        stat_line(
            "Entries",
            format!("{}", snapshot.expense_count),
            Color::White,
        ),
    ];

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// A right-aligned label/value stat row
fn stat_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<9}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{:>15}", value), Style::default().fg(value_color)),
    ])
}
