//! Command definitions for the command palette
//!
//! Defines all available commands that can be executed via the command palette

/// A command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Keyboard shortcut (if any)
    pub shortcut: Option<&'static str>,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Navigation
    ViewOverview,
    ViewExpenses,
    ViewAgents,
    ViewBudgets,
    ViewIncome,

    // Expense operations
    AddExpense,
    DeleteExpense,

    // Budget operations
    SetBudget,
    RemoveBudget,

    // Income operations
    AddIncome,
    RemoveIncome,

    // Workflow operations
    CompleteWorkflow,

    // Filters
    ToggleRecurringFilter,
    ClearFilters,

    // General
    SeedDemo,
    Help,
    Quit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    // Navigation commands
    Command {
        name: "overview",
        description: "Show the dashboard overview",
        shortcut: Some("1"),
        action: CommandAction::ViewOverview,
    },
    Command {
        name: "expenses",
        description: "Browse logged expenses",
        shortcut: Some("2"),
        action: CommandAction::ViewExpenses,
    },
    Command {
        name: "agents",
        description: "Review agent insights and workflows",
        shortcut: Some("3"),
        action: CommandAction::ViewAgents,
    },
    Command {
        name: "budgets",
        description: "Manage budget limits",
        shortcut: Some("4"),
        action: CommandAction::ViewBudgets,
    },
    Command {
        name: "income",
        description: "Manage income streams",
        shortcut: Some("5"),
        action: CommandAction::ViewIncome,
    },
    // Expense commands
    Command {
        name: "add-expense",
        description: "Log a new expense",
        shortcut: Some("a"),
        action: CommandAction::AddExpense,
    },
    Command {
        name: "delete-expense",
        description: "Delete the selected expense",
        shortcut: Some("d"),
        action: CommandAction::DeleteExpense,
    },
    // Budget commands
    Command {
        name: "set-budget",
        description: "Set a budget limit for a category or the total",
        shortcut: Some("b"),
        action: CommandAction::SetBudget,
    },
    Command {
        name: "remove-budget",
        description: "Remove the selected budget limit",
        shortcut: Some("d"),
        action: CommandAction::RemoveBudget,
    },
    // Income commands
    Command {
        name: "add-income",
        description: "Add an income stream",
        shortcut: Some("a"),
        action: CommandAction::AddIncome,
    },
    Command {
        name: "remove-income",
        description: "Remove the selected income stream",
        shortcut: Some("d"),
        action: CommandAction::RemoveIncome,
    },
    // Workflow commands
    Command {
        name: "complete-workflow",
        description: "Mark the selected workflow complete",
        shortcut: Some("Enter"),
        action: CommandAction::CompleteWorkflow,
    },
    // Filter commands
    Command {
        name: "filter-recurring",
        description: "Toggle the recurring-only expense filter",
        shortcut: Some("r"),
        action: CommandAction::ToggleRecurringFilter,
    },
    Command {
        name: "clear-filters",
        description: "Clear all expense filters",
        shortcut: Some("x"),
        action: CommandAction::ClearFilters,
    },
    // General commands
    Command {
        name: "seed-demo",
        description: "Load sample expenses, income, and budgets",
        shortcut: None,
        action: CommandAction::SeedDemo,
    },
    Command {
        name: "help",
        description: "Show help",
        shortcut: Some("?"),
        action: CommandAction::Help,
    },
    Command {
        name: "quit",
        description: "Quit application",
        shortcut: Some("q"),
        action: CommandAction::Quit,
    },
];

/// Find a command by name
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Filter commands by search query
pub fn filter_commands(query: &str) -> Vec<&'static Command> {
    if query.is_empty() {
        COMMANDS.iter().collect()
    } else {
        let query_lower = query.to_lowercase();
        COMMANDS
            .iter()
            .filter(|cmd| {
                cmd.name.to_lowercase().contains(&query_lower)
                    || cmd.description.to_lowercase().contains(&query_lower)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        assert!(find_command("add-expense").is_some());
        assert!(find_command("no-such-command").is_none());
    }

    #[test]
    fn test_filter_matches_name_and_description() {
        let hits = filter_commands("budget");
        assert!(hits.iter().any(|c| c.name == "set-budget"));
        assert!(hits.iter().any(|c| c.name == "remove-budget"));

        let empty_query = filter_commands("");
        assert_eq!(empty_query.len(), COMMANDS.len());
    }
}
