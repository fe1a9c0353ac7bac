//! Agents view
//!
//! Shows the four heuristic insight cards and the workflow queue

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::metrics::{InsightCard, InsightPriority};
use crate::models::WorkflowStatus;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::AgentsLayout;

/// Render the agents view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = AgentsLayout::new(area);

    render_insight_grid(frame, app, layout.insights);
    render_workflow_queue(frame, app, layout.workflows);
}

/// Render the insight cards in a 2x2 grid
fn render_insight_grid(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];

    for (card, cell) in app.dashboard.insights.iter().zip(cells.iter()) {
        render_insight_card(frame, card, *cell);
    }
}

fn priority_color(priority: InsightPriority) -> Color {
    match priority {
        InsightPriority::High => Color::Red,
        InsightPriority::Medium => Color::Yellow,
        InsightPriority::Low => Color::Green,
    }
}

/// Render one insight card
fn render_insight_card(frame: &mut Frame, card: &InsightCard, area: Rect) {
    let color = priority_color(card.priority);

    let block = Block::default()
        .title(format!(" {} ", card.title))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("▲ {} priority", card.priority.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    if !card.metrics.is_empty() {
        let chips: Vec<String> = card
            .metrics
            .iter()
            .map(|chip| format!("{} {}", chip.label, chip.value))
            .collect();
        lines.push(Line::from(Span::styled(
            chips.join("  ·  "),
            Style::default().fg(Color::Cyan),
        )));
    }

    if let Some(action) = card.actions.first() {
        lines.push(Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Render the workflow queue
fn render_workflow_queue(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Workflow Queue ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let workflows = app.store.workflows().unwrap_or_default();

    if workflows.is_empty() {
        let text = Paragraph::new("Queue is empty.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = workflows
        .iter()
        .map(|workflow| {
            let status_color = match workflow.status {
                WorkflowStatus::Scheduled => Color::Cyan,
                WorkflowStatus::Pending => Color::Yellow,
                WorkflowStatus::Completed => Color::DarkGray,
            };

            let name_style = if workflow.is_completed() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let hint = if workflow.is_completed() {
                String::new()
            } else {
                format!("  runs {}", workflow.next_run.date_naive().format("%b %d"))
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("[{:<9}] ", workflow.status),
                    Style::default().fg(status_color),
                ),
                Span::styled(format!("{:<24}", workflow.name), name_style),
                Span::styled(
                    workflow.trigger.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_workflow_index));

    frame.render_stateful_widget(list, area, &mut state);
}
