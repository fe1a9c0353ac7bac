//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction, FocusedPanel, InputMode};
use super::commands::{filter_commands, CommandAction};
use super::dialogs::budget::BudgetFormState;
use super::event::Event;
use super::widgets::Notification;
use crate::store::demo::seed_demo_data;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_mouse) => {
            // Mouse handling can be added later
            Ok(())
        }
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Check input mode
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Command => handle_command_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }

        // Command palette
        KeyCode::Char(':') | KeyCode::Char('/') => {
            app.open_dialog(ActiveDialog::CommandPalette);
            return Ok(());
        }

        // Panel navigation
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left if key.modifiers.is_empty() => {
            if app.focused_panel == FocusedPanel::Main {
                app.focused_panel = FocusedPanel::Sidebar;
                return Ok(());
            }
        }
        KeyCode::Char('l') | KeyCode::Right if key.modifiers.is_empty() => {
            if app.focused_panel == FocusedPanel::Sidebar {
                app.focused_panel = FocusedPanel::Main;
                return Ok(());
            }
        }

        // Direct view switching
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Overview);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Expenses);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Agents);
            return Ok(());
        }
        KeyCode::Char('4') => {
            app.switch_view(ActiveView::Budgets);
            return Ok(());
        }
        KeyCode::Char('5') => {
            app.switch_view(ActiveView::Income);
            return Ok(());
        }

        _ => {}
    }

    // Panel-specific keys
    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Cycle through views
        KeyCode::Char('j') | KeyCode::Down => {
            app.next_view();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.prev_view();
        }

        // Jump into the current view
        KeyCode::Enter => {
            app.focused_panel = FocusedPanel::Main;
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys when main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Overview => Ok(()),
        ActiveView::Expenses => handle_expenses_view_key(app, key),
        ActiveView::Agents => handle_agents_view_key(app, key),
        ActiveView::Budgets => handle_budgets_view_key(app, key),
        ActiveView::Income => handle_income_view_key(app, key),
    }
}

/// Handle keys in the expenses view
fn handle_expenses_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Same filtered, sorted list the view renders
    let expenses = app.visible_expenses();
    let expense_count = expenses.len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(expense_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('g') => {
            app.selected_expense_index = 0;
        }
        KeyCode::Char('G') => {
            if expense_count > 0 {
                app.selected_expense_index = expense_count - 1;
            }
        }

        // Log a new expense
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddExpense);
        }

        // Delete selected expense
        KeyCode::Char('d') => {
            if let Some(expense) = expenses.get(app.selected_expense_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteExpense(
                    expense.id,
                    expense.title.clone(),
                )));
            }
        }

        // Filters
        KeyCode::Char('f') => {
            app.filters.cycle_category();
            app.selected_expense_index = 0;
            announce_filters(app);
        }
        KeyCode::Char('c') => {
            app.filters.cycle_channel();
            app.selected_expense_index = 0;
            announce_filters(app);
        }
        KeyCode::Char('r') => {
            app.filters.toggle_recurring();
            app.selected_expense_index = 0;
            announce_filters(app);
        }
        KeyCode::Char('x') => {
            app.filters.clear();
            app.selected_expense_index = 0;
            app.set_status("Filters cleared");
        }

        _ => {}
    }

    Ok(())
}

/// Put the current filter set in the status bar
fn announce_filters(app: &mut App) {
    match app.filters.describe() {
        Some(filters) => app.set_status(format!("Filter: {}", filters)),
        None => app.set_status("Filters off"),
    }
}

/// Handle keys in the agents view
fn handle_agents_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let workflow_count = app.store.workflows().map(|w| w.len()).unwrap_or(0);

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(workflow_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Mark workflow done
        KeyCode::Enter | KeyCode::Char(' ') => {
            complete_selected_workflow(app);
        }

        _ => {}
    }

    Ok(())
}

/// Complete the selected workflow, reporting the outcome
fn complete_selected_workflow(app: &mut App) {
    let workflows = app.store.workflows().unwrap_or_default();
    let Some(workflow) = workflows.get(app.selected_workflow_index) else {
        app.set_status("No workflow selected");
        return;
    };

    match app.store.complete_workflow(workflow.id) {
        Ok(true) => {
            app.set_status(format!("'{}' marked done", workflow.name));
        }
        Ok(false) => {
            app.set_status("Workflow already completed");
        }
        Err(e) => {
            app.notifications
                .push(Notification::error(format!("Failed to complete: {}", e)));
        }
    }
}

/// Handle keys in the budgets view
fn handle_budgets_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let budget_count = app.dashboard.utilizations.len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(budget_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // New limit
        KeyCode::Char('a') | KeyCode::Char('b') => {
            app.budget_form = BudgetFormState::new();
            app.open_dialog(ActiveDialog::SetBudget);
        }

        // Edit selected limit
        KeyCode::Enter => {
            let target = app
                .dashboard
                .utilizations
                .get(app.selected_budget_index)
                .and_then(|u| {
                    app.store
                        .budgets()
                        .ok()
                        .and_then(|budgets| budgets.into_iter().find(|t| t.id == u.id))
                });
            if let Some(target) = target {
                app.budget_form = BudgetFormState::for_target(&target);
                app.open_dialog(ActiveDialog::SetBudget);
            }
        }

        // Remove selected limit
        KeyCode::Char('d') => {
            if let Some(utilization) = app.dashboard.utilizations.get(app.selected_budget_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::RemoveBudget(
                    utilization.id,
                    utilization.scope.label().to_string(),
                )));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the income view
fn handle_income_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let incomes = app.store.incomes().unwrap_or_default();
    let income_count = incomes.len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(income_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Add an income stream
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddIncome);
        }

        // Remove selected stream
        KeyCode::Char('d') => {
            if let Some(stream) = incomes.get(app.selected_income_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::RemoveIncome(
                    stream.id,
                    stream.title.clone(),
                )));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in editing mode
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        _ => {
            // Pass to dialog if active
        }
    }
    Ok(())
}

/// Handle keys in command mode (command palette)
fn handle_command_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            let filtered = filter_commands(&app.command_input);

            if let Some(command) = filtered
                .get(app.selected_command_index.min(filtered.len().saturating_sub(1)))
                .copied()
            {
                let action = command.action;

                // Close dialog first
                app.close_dialog();

                // Execute the command action
                execute_command_action(app, action)?;
            } else {
                app.close_dialog();
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
            // Reset selection when input changes
            app.selected_command_index = 0;
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            // Reset selection when input changes
            app.selected_command_index = 0;
        }
        KeyCode::Up => {
            if app.selected_command_index > 0 {
                app.selected_command_index -= 1;
            }
        }
        KeyCode::Down => {
            let filtered_count = filter_commands(&app.command_input).len();
            if app.selected_command_index + 1 < filtered_count {
                app.selected_command_index += 1;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Execute a command action from the command palette
fn execute_command_action(app: &mut App, action: CommandAction) -> Result<()> {
    match action {
        // Navigation
        CommandAction::ViewOverview => {
            app.switch_view(ActiveView::Overview);
        }
        CommandAction::ViewExpenses => {
            app.switch_view(ActiveView::Expenses);
        }
        CommandAction::ViewAgents => {
            app.switch_view(ActiveView::Agents);
        }
        CommandAction::ViewBudgets => {
            app.switch_view(ActiveView::Budgets);
        }
        CommandAction::ViewIncome => {
            app.switch_view(ActiveView::Income);
        }

        // Expense operations
        CommandAction::AddExpense => {
            app.open_dialog(ActiveDialog::AddExpense);
        }
        CommandAction::DeleteExpense => {
            let expenses = app.visible_expenses();
            if let Some(expense) = expenses.get(app.selected_expense_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteExpense(
                    expense.id,
                    expense.title.clone(),
                )));
            } else {
                app.set_status("No expense selected. Switch to Expenses view first.");
            }
        }

        // Budget operations
        CommandAction::SetBudget => {
            app.budget_form = BudgetFormState::new();
            app.open_dialog(ActiveDialog::SetBudget);
        }
        CommandAction::RemoveBudget => {
            if let Some(utilization) = app.dashboard.utilizations.get(app.selected_budget_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::RemoveBudget(
                    utilization.id,
                    utilization.scope.label().to_string(),
                )));
            } else {
                app.set_status("No budget selected. Switch to Budgets view first.");
            }
        }

        // Income operations
        CommandAction::AddIncome => {
            app.open_dialog(ActiveDialog::AddIncome);
        }
        CommandAction::RemoveIncome => {
            let incomes = app.store.incomes().unwrap_or_default();
            if let Some(stream) = incomes.get(app.selected_income_index) {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::RemoveIncome(
                    stream.id,
                    stream.title.clone(),
                )));
            } else {
                app.set_status("No income stream selected. Switch to Income view first.");
            }
        }

        // Workflow operations
        CommandAction::CompleteWorkflow => {
            complete_selected_workflow(app);
        }

        // Filters
        CommandAction::ToggleRecurringFilter => {
            app.filters.toggle_recurring();
            app.selected_expense_index = 0;
            announce_filters(app);
        }
        CommandAction::ClearFilters => {
            app.filters.clear();
            app.selected_expense_index = 0;
            app.set_status("Filters cleared");
        }

        // General
        CommandAction::SeedDemo => match seed_demo_data(app.store) {
            Ok(()) => {
                app.set_status("Demo data seeded");
            }
            Err(e) => {
                app.notifications
                    .push(Notification::error(format!("Seeding failed: {}", e)));
            }
        },
        CommandAction::Help => {
            app.open_dialog(ActiveDialog::Help);
        }
        CommandAction::Quit => {
            app.quit();
        }
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::CommandPalette => {
            handle_command_key(app, key)?;
        }
        ActiveDialog::Confirm(action) => {
            let action = action.clone();
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    execute_confirmed_action(app, action);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::AddExpense => {
            super::dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::SetBudget => {
            super::dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::AddIncome => {
            super::dialogs::income::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Execute an action after user confirmation
fn execute_confirmed_action(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::DeleteExpense(id, title) => match app.store.delete_expense(id) {
            Ok(true) => {
                app.set_status(format!("Deleted '{}'", title));
            }
            Ok(false) => {
                app.set_status("Expense was already removed");
            }
            Err(e) => {
                app.notifications
                    .push(Notification::error(format!("Failed to delete: {}", e)));
            }
        },
        ConfirmAction::RemoveBudget(id, scope) => match app.store.remove_budget(id) {
            Ok(true) => {
                app.set_status(format!("Removed the {} limit", scope));
            }
            Ok(false) => {
                app.set_status("Budget was already removed");
            }
            Err(e) => {
                app.notifications
                    .push(Notification::error(format!("Failed to remove: {}", e)));
            }
        },
        ConfirmAction::RemoveIncome(id, title) => match app.store.remove_income(id) {
            Ok(true) => {
                app.set_status(format!("Removed '{}'", title));
            }
            Ok(false) => {
                app.set_status("Income stream was already removed");
            }
            Err(e) => {
                app.notifications
                    .push(Notification::error(format!("Failed to remove: {}", e)));
            }
        },
    }
}
