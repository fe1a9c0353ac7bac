//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Derived metrics are memoized against the store revision: the dashboard is
//! only recomputed after a store command actually changed something.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::CashpilotResult;
use crate::metrics::Dashboard;
use crate::models::{
    BudgetTargetId, Expense, ExpenseCategory, ExpenseId, IncomeStreamId, PaymentChannel,
};
use crate::store::{Store, StoreChange};

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::income::IncomeFormState;
use super::widgets::{Notification, NotificationQueue};

/// How many store events the overview activity feed keeps
pub const RECENT_ACTIVITY_LIMIT: usize = 8;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    Expenses,
    Agents,
    Budgets,
    Income,
}

impl ActiveView {
    /// All views in sidebar order
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Expenses,
        Self::Agents,
        Self::Budgets,
        Self::Income,
    ];

    /// Get the display label for this view
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Expenses => "Expenses",
            Self::Agents => "Agents",
            Self::Budgets => "Budgets",
            Self::Income => "Income",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    Command,
}

/// A pending action waiting on user confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteExpense(ExpenseId, String),
    RemoveBudget(BudgetTargetId, String),
    RemoveIncome(IncomeStreamId, String),
}

impl ConfirmAction {
    /// Get the question to show in the confirm dialog
    pub fn message(&self) -> String {
        match self {
            Self::DeleteExpense(_, title) => format!("Delete expense '{}'?", title),
            Self::RemoveBudget(_, scope) => format!("Remove the {} budget limit?", scope),
            Self::RemoveIncome(_, title) => format!("Remove income stream '{}'?", title),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    SetBudget,
    AddIncome,
    CommandPalette,
    Help,
    Confirm(ConfirmAction),
}

/// Active filters for the expenses view
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilters {
    /// Only show this category
    pub category: Option<ExpenseCategory>,
    /// Only show this payment channel
    pub channel: Option<PaymentChannel>,
    /// Only show recurring expenses
    pub recurring_only: bool,
}

impl ExpenseFilters {
    /// Check if any filter is active
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.channel.is_some() || self.recurring_only
    }

    /// Check whether an expense passes all active filters
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(channel) = self.channel {
            if expense.channel != channel {
                return false;
            }
        }
        if self.recurring_only && !expense.recurring {
            return false;
        }
        true
    }

    /// Cycle the category filter through all categories and back to off
    pub fn cycle_category(&mut self) {
        let all = ExpenseCategory::all();
        self.category = match self.category {
            None => all.first().copied(),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            }
        };
    }

    /// Cycle the payment channel filter through all channels and back to off
    pub fn cycle_channel(&mut self) {
        let all = PaymentChannel::all();
        self.channel = match self.channel {
            None => all.first().copied(),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            }
        };
    }

    /// Toggle the recurring-only filter
    pub fn toggle_recurring(&mut self) {
        self.recurring_only = !self.recurring_only;
    }

    /// Clear all filters
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Describe the active filters for the status bar
    pub fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(category) = self.category {
            parts.push(format!("category={}", category.label()));
        }
        if let Some(channel) = self.channel {
            parts.push(format!("channel={}", channel.label()));
        }
        if self.recurring_only {
            parts.push("recurring".to_string());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  "))
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The in-memory store
    pub store: &'a Store,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// The date metrics are computed against
    pub today: NaiveDate,

    /// Memoized derived metrics
    pub dashboard: Dashboard,

    /// Store revision the dashboard was computed at
    seen_revision: u64,

    /// Change events from the store subscription
    store_events: Receiver<StoreChange>,

    /// Recent store events for the overview feed (newest first)
    pub recent_activity: VecDeque<String>,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Active expense filters
    pub filters: ExpenseFilters,

    /// Selected row in the expenses view
    pub selected_expense_index: usize,

    /// Selected row in the budgets view
    pub selected_budget_index: usize,

    /// Selected row in the income view
    pub selected_income_index: usize,

    /// Selected workflow in the agents view
    pub selected_workflow_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Command palette input
    pub command_input: String,

    /// Selected command index in palette
    pub selected_command_index: usize,

    /// Expense form state
    pub expense_form: ExpenseFormState,

    /// Budget form state
    pub budget_form: BudgetFormState,

    /// Income form state
    pub income_form: IncomeFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance, subscribed to store changes
    pub fn new(store: &'a Store, settings: &'a Settings) -> CashpilotResult<Self> {
        let store_events = store.subscribe()?;
        let today = Local::now().date_naive();
        let dashboard = Dashboard::compute(store, today)?;
        let seen_revision = store.revision()?;

        Ok(Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            today,
            dashboard,
            seen_revision,
            store_events,
            recent_activity: VecDeque::new(),
            notifications: NotificationQueue::new(),
            filters: ExpenseFilters::default(),
            selected_expense_index: 0,
            selected_budget_index: 0,
            selected_income_index: 0,
            selected_workflow_index: 0,
            status_message: None,
            command_input: String::new(),
            selected_command_index: 0,
            expense_form: ExpenseFormState::new(today),
            budget_form: BudgetFormState::new(),
            income_form: IncomeFormState::new(),
        })
    }

    /// Drain store events and recompute metrics if the store changed
    pub fn sync(&mut self) {
        while let Ok(change) = self.store_events.try_recv() {
            let line = change.to_string();
            self.notifications.push(Notification::success(line.clone()));
            self.recent_activity.push_front(line);
            while self.recent_activity.len() > RECENT_ACTIVITY_LIMIT {
                self.recent_activity.pop_back();
            }
        }

        match self.store.revision() {
            Ok(revision) if revision != self.seen_revision => {
                match Dashboard::compute(self.store, self.today) {
                    Ok(dashboard) => {
                        self.dashboard = dashboard;
                        self.seen_revision = revision;
                    }
                    Err(e) => self.set_status(format!("Failed to refresh metrics: {}", e)),
                }
            }
            Ok(_) => {}
            Err(e) => self.set_status(format!("Store unavailable: {}", e)),
        }

        self.clamp_selections();
    }

    /// Periodic housekeeping driven by tick events
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Keep selections valid after rows are added or removed
    fn clamp_selections(&mut self) {
        let expense_count = self.visible_expenses().len();
        self.selected_expense_index = self
            .selected_expense_index
            .min(expense_count.saturating_sub(1));

        let budget_count = self.dashboard.utilizations.len();
        self.selected_budget_index = self
            .selected_budget_index
            .min(budget_count.saturating_sub(1));

        let income_count = self.store.incomes().map(|i| i.len()).unwrap_or(0);
        self.selected_income_index = self
            .selected_income_index
            .min(income_count.saturating_sub(1));

        let workflow_count = self.store.workflows().map(|w| w.len()).unwrap_or(0);
        self.selected_workflow_index = self
            .selected_workflow_index
            .min(workflow_count.saturating_sub(1));
    }

    /// Get expenses filtered and sorted the way the expenses view shows them
    pub fn visible_expenses(&self) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = self
            .store
            .expenses()
            .unwrap_or_default()
            .into_iter()
            .filter(|e| self.filters.matches(e))
            .collect();
        // Newest first
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;

        // Reset selection based on view
        match view {
            ActiveView::Overview => {}
            ActiveView::Expenses => {
                self.selected_expense_index = 0;
            }
            ActiveView::Agents => {
                self.selected_workflow_index = 0;
            }
            ActiveView::Budgets => {
                self.selected_budget_index = 0;
            }
            ActiveView::Income => {
                self.selected_income_index = 0;
            }
        }
    }

    /// Switch to the next view in sidebar order
    pub fn next_view(&mut self) {
        let views = ActiveView::ALL;
        let idx = views
            .iter()
            .position(|v| *v == self.active_view)
            .unwrap_or(0);
        self.switch_view(views[(idx + 1) % views.len()]);
    }

    /// Switch to the previous view in sidebar order
    pub fn prev_view(&mut self) {
        let views = ActiveView::ALL;
        let idx = views
            .iter()
            .position(|v| *v == self.active_view)
            .unwrap_or(0);
        self.switch_view(views[(idx + views.len() - 1) % views.len()]);
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::CommandPalette => {
                self.command_input.clear();
                self.selected_command_index = 0;
                self.input_mode = InputMode::Command;
            }
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new(self.today);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::SetBudget => {
                // Form is prepared by the caller (new vs edit)
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::AddIncome => {
                self.income_form = IncomeFormState::new();
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::Help | ActiveDialog::Confirm(_) | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Expenses => {
                if self.selected_expense_index > 0 {
                    self.selected_expense_index -= 1;
                }
            }
            ActiveView::Agents => {
                if self.selected_workflow_index > 0 {
                    self.selected_workflow_index -= 1;
                }
            }
            ActiveView::Budgets => {
                if self.selected_budget_index > 0 {
                    self.selected_budget_index -= 1;
                }
            }
            ActiveView::Income => {
                if self.selected_income_index > 0 {
                    self.selected_income_index -= 1;
                }
            }
            ActiveView::Overview => {}
        }
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self, max: usize) {
        match self.active_view {
            ActiveView::Expenses => {
                if self.selected_expense_index < max.saturating_sub(1) {
                    self.selected_expense_index += 1;
                }
            }
            ActiveView::Agents => {
                if self.selected_workflow_index < max.saturating_sub(1) {
                    self.selected_workflow_index += 1;
                }
            }
            ActiveView::Budgets => {
                if self.selected_budget_index < max.saturating_sub(1) {
                    self.selected_budget_index += 1;
                }
            }
            ActiveView::Income => {
                if self.selected_income_index < max.saturating_sub(1) {
                    self.selected_income_index += 1;
                }
            }
            ActiveView::Overview => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::models::{ExpenseDraft, PaymentChannel};

    fn expense(category: ExpenseCategory, channel: PaymentChannel, recurring: bool) -> Expense {
        let mut draft = ExpenseDraft::new(
            "Item",
            Money::from_cents(1000),
            category,
            channel,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        );
        draft.recurring = recurring;
        Expense::from_draft(draft)
    }

    #[test]
    fn test_filters_match_all_when_inactive() {
        let filters = ExpenseFilters::default();
        assert!(!filters.is_active());
        assert!(filters.matches(&expense(
            ExpenseCategory::Food,
            PaymentChannel::Cash,
            false
        )));
    }

    #[test]
    fn test_filters_combine() {
        let filters = ExpenseFilters {
            category: Some(ExpenseCategory::Food),
            channel: Some(PaymentChannel::Cash),
            recurring_only: true,
        };

        assert!(filters.matches(&expense(ExpenseCategory::Food, PaymentChannel::Cash, true)));
        assert!(!filters.matches(&expense(ExpenseCategory::Food, PaymentChannel::Cash, false)));
        assert!(!filters.matches(&expense(
            ExpenseCategory::Housing,
            PaymentChannel::Cash,
            true
        )));
    }

    #[test]
    fn test_category_cycle_wraps_back_to_off() {
        let mut filters = ExpenseFilters::default();
        let count = ExpenseCategory::all().len();

        for _ in 0..count {
            filters.cycle_category();
            assert!(filters.category.is_some());
        }
        filters.cycle_category();
        assert!(filters.category.is_none());
    }

    #[test]
    fn test_describe_lists_active_filters() {
        let mut filters = ExpenseFilters::default();
        assert!(filters.describe().is_none());

        filters.category = Some(ExpenseCategory::Food);
        filters.recurring_only = true;
        let described = filters.describe().unwrap();
        assert!(described.contains("category=Food"));
        assert!(described.contains("recurring"));
    }

    #[test]
    fn test_view_cycle_covers_all_views() {
        assert_eq!(ActiveView::ALL.len(), 5);
        assert_eq!(ActiveView::Overview.label(), "Overview");
    }

    #[test]
    fn test_confirm_messages_name_the_target() {
        let action = ConfirmAction::DeleteExpense(ExpenseId::new(), "Grocery run".to_string());
        assert_eq!(action.message(), "Delete expense 'Grocery run'?");
    }
}
