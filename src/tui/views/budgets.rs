//! Budgets view
//!
//! Shows every budget limit with a consumption bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::metrics::{BudgetStatus, BudgetUtilization};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Width of the consumption bar in characters
const BAR_WIDTH: usize = 20;

/// Render the budgets view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, app, layout.header);
    render_budget_list(frame, app, layout.content);
}

/// Render budgets header
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budgets ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let over = app
        .dashboard
        .utilizations
        .iter()
        .filter(|u| u.status == BudgetStatus::Critical)
        .count();

    let hints = if over > 0 {
        format!(
            "{} limit(s) at critical   a:Add  Enter:Edit  d:Remove",
            over
        )
    } else {
        "a:Add  Enter:Edit  d:Remove".to_string()
    };

    let paragraph = Paragraph::new(hints)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the budget limit list
fn render_budget_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let utilizations = &app.dashboard.utilizations;

    if utilizations.is_empty() {
        let text = Paragraph::new("No guardrails set. Press 'a' to add a limit.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = utilizations.iter().map(budget_row).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_budget_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// One budget row: scope, bar, figures
fn budget_row(utilization: &BudgetUtilization) -> ListItem<'static> {
    let color = match utilization.status {
        BudgetStatus::Ok => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::Critical => Color::Red,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<16}", utilization.scope.label()),
            Style::default().fg(Color::White),
        ),
        Span::styled(consumption_bar(utilization.percent), Style::default().fg(color)),
        Span::styled(
            format!("  {} / {}", utilization.spent, utilization.limit),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  ({:.0}%)", utilization.percent),
            Style::default().fg(color),
        ),
    ]);

    ListItem::new(line)
}

/// Build a fixed-width bar for a 0-100 percent value
fn consumption_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
