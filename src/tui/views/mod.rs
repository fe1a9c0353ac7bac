//! TUI Views module
//!
//! Contains the five main views plus the sidebar and status bar.

pub mod agents;
pub mod budgets;
pub mod expenses;
pub mod income;
pub mod overview;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render sidebar
    sidebar::render(frame, app, layout.sidebar);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Overview => {
            overview::render(frame, app, layout.main);
        }
        ActiveView::Expenses => {
            expenses::render(frame, app, layout.main);
        }
        ActiveView::Agents => {
            agents::render(frame, app, layout.main);
        }
        ActiveView::Budgets => {
            budgets::render(frame, app, layout.main);
        }
        ActiveView::Income => {
            income::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // Toast overlay, top-right, above everything else
    if let Some(notification) = app.notifications.current() {
        let area = toast_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::CommandPalette => {
            dialogs::command_palette::render(frame, app);
        }
        ActiveDialog::Confirm(action) => {
            dialogs::confirm::render(frame, action);
        }
        ActiveDialog::AddExpense => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::SetBudget => {
            dialogs::budget::render(frame, app);
        }
        ActiveDialog::AddIncome => {
            dialogs::income::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

/// Compute the toast rect in the top-right corner
fn toast_area(area: Rect) -> Rect {
    let width = 42u16.min(area.width);
    let height = 3u16.min(area.height.saturating_sub(1));
    Rect::new(area.width.saturating_sub(width + 1), 1, width, height)
}
