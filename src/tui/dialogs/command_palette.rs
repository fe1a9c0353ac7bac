//! Command palette dialog
//!
//! Substring search over every dashboard command; Enter runs the
//! highlighted one.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::commands::filter_commands;
use crate::tui::layout::centered_rect_fixed;

/// Render the command palette
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(62, 20, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Command Palette ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query
            Constraint::Length(1), // Match count
            Constraint::Min(1),    // Results
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let query_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(app.command_input.clone(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(query_line), chunks[0]);

    let filtered = filter_commands(&app.command_input);

    let count_label = match filtered.len() {
        1 => "1 match".to_string(),
        n => format!("{} matches", n),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {}", count_label),
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[1],
    );

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new("No matching commands").style(Style::default().fg(Color::Yellow)),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|cmd| {
                let shortcut = cmd
                    .shortcut
                    .map(|s| format!("[{}]", s))
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<20}", cmd.name),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("{:<8}", shortcut),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(cmd.description, Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(
            app.selected_command_index
                .min(filtered.len().saturating_sub(1)),
        ));

        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  [Enter] Run  [Up/Down] Select  [Esc] Close",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[3],
    );
}
