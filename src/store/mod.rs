//! In-memory store for all dashboard state
//!
//! The store owns the canonical lists of expenses, budget targets, income
//! streams, and workflows. Mutation happens only through the command methods
//! here; every effective command bumps the revision counter and notifies
//! subscribers synchronously before returning. State is deliberately
//! ephemeral and resets with the process.

pub mod demo;

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::RwLock;

use chrono::Utc;
use std::fmt;

use crate::error::{CashpilotError, CashpilotResult};
use crate::models::{
    default_workflows, BudgetScope, BudgetTarget, BudgetTargetId, Expense, ExpenseDraft,
    ExpenseId, IncomeDraft, IncomeStream, IncomeStreamId, Money, Workflow, WorkflowId,
};

/// A change notification sent to store subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    ExpenseAdded {
        id: ExpenseId,
        title: String,
        amount: Money,
    },
    ExpenseDeleted {
        id: ExpenseId,
        title: String,
    },
    BudgetUpserted {
        id: BudgetTargetId,
        scope: BudgetScope,
        limit: Money,
    },
    BudgetRemoved {
        id: BudgetTargetId,
        scope: BudgetScope,
    },
    IncomeAdded {
        id: IncomeStreamId,
        title: String,
        amount: Money,
    },
    IncomeRemoved {
        id: IncomeStreamId,
        title: String,
    },
    WorkflowCompleted {
        id: WorkflowId,
        name: String,
    },
}

impl fmt::Display for StoreChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpenseAdded { title, amount, .. } => {
                write!(f, "Logged {} ({})", title, amount)
            }
            Self::ExpenseDeleted { title, .. } => write!(f, "Deleted {}", title),
            Self::BudgetUpserted { scope, limit, .. } => {
                write!(f, "Budget set: {} {}", scope, limit)
            }
            Self::BudgetRemoved { scope, .. } => write!(f, "Budget removed: {}", scope),
            Self::IncomeAdded { title, amount, .. } => {
                write!(f, "Income added: {} ({})", title, amount)
            }
            Self::IncomeRemoved { title, .. } => write!(f, "Income removed: {}", title),
            Self::WorkflowCompleted { name, .. } => {
                write!(f, "Workflow completed: {}", name)
            }
        }
    }
}

/// The application's canonical in-memory state
pub struct Store {
    expenses: RwLock<Vec<Expense>>,
    budgets: RwLock<Vec<BudgetTarget>>,
    incomes: RwLock<Vec<IncomeStream>>,
    workflows: RwLock<Vec<Workflow>>,
    subscribers: RwLock<Vec<Sender<StoreChange>>>,
    revision: RwLock<u64>,
}

impl Store {
    /// Create a store with empty collections and the seeded workflow queue
    pub fn new() -> Self {
        Self {
            expenses: RwLock::new(Vec::new()),
            budgets: RwLock::new(Vec::new()),
            incomes: RwLock::new(Vec::new()),
            workflows: RwLock::new(default_workflows(Utc::now())),
            subscribers: RwLock::new(Vec::new()),
            revision: RwLock::new(0),
        }
    }

    /// Register a change listener.
    ///
    /// Every effective command sends one [`StoreChange`] to each live
    /// subscriber before the command returns. Dropped receivers are pruned
    /// on the next notification.
    pub fn subscribe(&self) -> CashpilotResult<Receiver<StoreChange>> {
        let (tx, rx) = mpsc::channel();
        let mut subscribers = self
            .subscribers
            .write()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire write lock: {}", e)))?;
        subscribers.push(tx);
        Ok(rx)
    }

    /// Current revision; advances by one per effective mutation
    pub fn revision(&self) -> CashpilotResult<u64> {
        let revision = self
            .revision
            .read()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*revision)
    }

    /// Validate and append a new expense, returning its id
    pub fn add_expense(&self, draft: ExpenseDraft) -> CashpilotResult<ExpenseId> {
        draft
            .validate()
            .map_err(|e| CashpilotError::Validation(e.to_string()))?;

        let expense = Expense::from_draft(draft);
        let change = StoreChange::ExpenseAdded {
            id: expense.id,
            title: expense.title.clone(),
            amount: expense.amount,
        };
        let id = expense.id;

        {
            let mut expenses = self.expenses.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            expenses.push(expense);
        }

        self.notify(change)?;
        Ok(id)
    }

    /// Remove an expense by id.
    ///
    /// Returns whether anything was removed; an unknown id is a silent
    /// no-op and produces no notification.
    pub fn delete_expense(&self, id: ExpenseId) -> CashpilotResult<bool> {
        let removed = {
            let mut expenses = self.expenses.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            match expenses.iter().position(|e| e.id == id) {
                Some(index) => Some(expenses.remove(index)),
                None => None,
            }
        };

        match removed {
            Some(expense) => {
                self.notify(StoreChange::ExpenseDeleted {
                    id: expense.id,
                    title: expense.title,
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the limit for a scope, replacing any existing target.
    ///
    /// At most one target exists per scope; upserting an existing scope
    /// keeps the target's identity and swaps the limit.
    pub fn upsert_budget(&self, scope: BudgetScope, limit: Money) -> CashpilotResult<BudgetTargetId> {
        if !limit.is_positive() {
            return Err(CashpilotError::Validation(format!(
                "Budget limit must be positive (got {})",
                limit
            )));
        }

        let id = {
            let mut budgets = self.budgets.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            match budgets.iter_mut().find(|t| t.scope == scope) {
                Some(target) => {
                    target.set_limit(limit);
                    target.id
                }
                None => {
                    let target = BudgetTarget::new(scope, limit);
                    let id = target.id;
                    budgets.push(target);
                    id
                }
            }
        };

        self.notify(StoreChange::BudgetUpserted { id, scope, limit })?;
        Ok(id)
    }

    /// Remove a budget target by id; silent no-op if absent
    pub fn remove_budget(&self, id: BudgetTargetId) -> CashpilotResult<bool> {
        let removed = {
            let mut budgets = self.budgets.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            match budgets.iter().position(|t| t.id == id) {
                Some(index) => Some(budgets.remove(index)),
                None => None,
            }
        };

        match removed {
            Some(target) => {
                self.notify(StoreChange::BudgetRemoved {
                    id: target.id,
                    scope: target.scope,
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate and append a new income stream, returning its id
    pub fn add_income(&self, draft: IncomeDraft) -> CashpilotResult<IncomeStreamId> {
        draft
            .validate()
            .map_err(|e| CashpilotError::Validation(e.to_string()))?;

        let stream = IncomeStream::from_draft(draft);
        let change = StoreChange::IncomeAdded {
            id: stream.id,
            title: stream.title.clone(),
            amount: stream.amount,
        };
        let id = stream.id;

        {
            let mut incomes = self.incomes.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            incomes.push(stream);
        }

        self.notify(change)?;
        Ok(id)
    }

    /// Remove an income stream by id; silent no-op if absent
    pub fn remove_income(&self, id: IncomeStreamId) -> CashpilotResult<bool> {
        let removed = {
            let mut incomes = self.incomes.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            match incomes.iter().position(|s| s.id == id) {
                Some(index) => Some(incomes.remove(index)),
                None => None,
            }
        };

        match removed {
            Some(stream) => {
                self.notify(StoreChange::IncomeRemoved {
                    id: stream.id,
                    title: stream.title,
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Mark a workflow Completed.
    ///
    /// Returns true if the status changed. Completing an already-Completed
    /// workflow is idempotent: Ok(false), no revision bump, no notification.
    pub fn complete_workflow(&self, id: WorkflowId) -> CashpilotResult<bool> {
        let transition = {
            let mut workflows = self.workflows.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            let workflow = workflows
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or_else(|| CashpilotError::workflow_not_found(id.to_string()))?;

            if workflow.complete() {
                Some(StoreChange::WorkflowCompleted {
                    id: workflow.id,
                    name: workflow.name.clone(),
                })
            } else {
                None
            }
        };

        match transition {
            Some(change) => {
                self.notify(change)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Snapshot of all expenses in insertion order
    pub fn expenses(&self) -> CashpilotResult<Vec<Expense>> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.clone())
    }

    /// Snapshot of all budget targets in insertion order
    pub fn budgets(&self) -> CashpilotResult<Vec<BudgetTarget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.clone())
    }

    /// Snapshot of all income streams in insertion order
    pub fn incomes(&self) -> CashpilotResult<Vec<IncomeStream>> {
        let incomes = self
            .incomes
            .read()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(incomes.clone())
    }

    /// Snapshot of the workflow queue
    pub fn workflows(&self) -> CashpilotResult<Vec<Workflow>> {
        let workflows = self
            .workflows
            .read()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(workflows.clone())
    }

    /// Bump the revision and fan the change out to live subscribers
    fn notify(&self, change: StoreChange) -> CashpilotResult<()> {
        {
            let mut revision = self.revision.write().map_err(|e| {
                CashpilotError::Store(format!("Failed to acquire write lock: {}", e))
            })?;
            *revision += 1;
        }

        let mut subscribers = self
            .subscribers
            .write()
            .map_err(|e| CashpilotError::Store(format!("Failed to acquire write lock: {}", e)))?;
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, ExpenseCategory, PaymentChannel};
    use chrono::NaiveDate;

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft::new(
            "Grocery run",
            Money::from_cents(5420),
            ExpenseCategory::Food,
            PaymentChannel::DebitCard,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn test_add_expense_appends_one() {
        let store = Store::new();
        assert_eq!(store.expenses().unwrap().len(), 0);

        let id = store.add_expense(valid_draft()).unwrap();

        let expenses = store.expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, id);
        assert_eq!(expenses[0].amount, Money::from_cents(5420));
    }

    #[test]
    fn test_add_expense_rejects_empty_title() {
        let store = Store::new();
        let mut draft = valid_draft();
        draft.title = "   ".to_string();

        let err = store.add_expense(draft).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.expenses().unwrap().len(), 0);
        assert_eq!(store.revision().unwrap(), 0);
    }

    #[test]
    fn test_add_expense_rejects_non_positive_amount() {
        let store = Store::new();

        let mut zero = valid_draft();
        zero.amount = Money::zero();
        assert!(store.add_expense(zero).unwrap_err().is_validation());

        let mut negative = valid_draft();
        negative.amount = Money::from_cents(-100);
        assert!(store.add_expense(negative).unwrap_err().is_validation());

        assert_eq!(store.expenses().unwrap().len(), 0);
    }

    #[test]
    fn test_delete_expense() {
        let store = Store::new();
        let id = store.add_expense(valid_draft()).unwrap();

        assert!(store.delete_expense(id).unwrap());
        assert_eq!(store.expenses().unwrap().len(), 0);

        // Unknown id is a silent no-op
        assert!(!store.delete_expense(id).unwrap());
    }

    #[test]
    fn test_delete_unknown_expense_does_not_notify() {
        let store = Store::new();
        let rx = store.subscribe().unwrap();
        let before = store.revision().unwrap();

        assert!(!store.delete_expense(ExpenseId::new()).unwrap());
        assert_eq!(store.revision().unwrap(), before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_upsert_budget_replaces_existing_scope() {
        let store = Store::new();
        let scope = BudgetScope::Category(ExpenseCategory::Food);

        let first = store.upsert_budget(scope, Money::from_cents(40000)).unwrap();
        let second = store.upsert_budget(scope, Money::from_cents(55000)).unwrap();

        let budgets = store.budgets().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, Money::from_cents(55000));
        assert_eq!(first, second);
    }

    #[test]
    fn test_upsert_budget_rejects_non_positive_limit() {
        let store = Store::new();
        let err = store
            .upsert_budget(BudgetScope::Total, Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.budgets().unwrap().is_empty());
    }

    #[test]
    fn test_remove_budget() {
        let store = Store::new();
        let id = store
            .upsert_budget(BudgetScope::Total, Money::from_cents(250000))
            .unwrap();

        assert!(store.remove_budget(id).unwrap());
        assert!(store.budgets().unwrap().is_empty());
        assert!(!store.remove_budget(id).unwrap());
    }

    #[test]
    fn test_add_and_remove_income() {
        let store = Store::new();
        let id = store
            .add_income(IncomeDraft::new(
                "Salary",
                Money::from_cents(450000),
                Cadence::Monthly,
            ))
            .unwrap();
        assert_eq!(store.incomes().unwrap().len(), 1);

        assert!(store.remove_income(id).unwrap());
        assert!(store.incomes().unwrap().is_empty());
    }

    #[test]
    fn test_add_income_rejects_invalid_draft() {
        let store = Store::new();
        let err = store
            .add_income(IncomeDraft::new("", Money::from_cents(1000), Cadence::Weekly))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.incomes().unwrap().is_empty());
    }

    #[test]
    fn test_complete_workflow_is_idempotent() {
        let store = Store::new();
        let id = store.workflows().unwrap()[0].id;

        assert!(store.complete_workflow(id).unwrap());
        let after_first = store.revision().unwrap();

        // Repeat completion changes nothing
        assert!(!store.complete_workflow(id).unwrap());
        assert_eq!(store.revision().unwrap(), after_first);

        let workflows = store.workflows().unwrap();
        assert!(workflows.iter().find(|w| w.id == id).unwrap().is_completed());
    }

    #[test]
    fn test_complete_unknown_workflow_errors() {
        let store = Store::new();
        let err = store.complete_workflow(WorkflowId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let store = Store::new();
        let rx = store.subscribe().unwrap();

        let id = store.add_expense(valid_draft()).unwrap();

        // The notification was sent before add_expense returned
        match rx.try_recv().unwrap() {
            StoreChange::ExpenseAdded {
                id: added,
                amount,
                ..
            } => {
                assert_eq!(added, id);
                assert_eq!(amount, Money::from_cents(5420));
            }
            other => panic!("unexpected change: {:?}", other),
        }
    }

    #[test]
    fn test_revision_advances_per_mutation() {
        let store = Store::new();
        assert_eq!(store.revision().unwrap(), 0);

        let id = store.add_expense(valid_draft()).unwrap();
        assert_eq!(store.revision().unwrap(), 1);

        store
            .upsert_budget(BudgetScope::Total, Money::from_cents(100000))
            .unwrap();
        assert_eq!(store.revision().unwrap(), 2);

        store.delete_expense(id).unwrap();
        assert_eq!(store.revision().unwrap(), 3);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let store = Store::new();
        let rx = store.subscribe().unwrap();
        drop(rx);

        // Sending to the dropped receiver fails silently and prunes it
        store.add_expense(valid_draft()).unwrap();
        store.add_expense(valid_draft()).unwrap();
        assert_eq!(store.expenses().unwrap().len(), 2);
    }

    #[test]
    fn test_change_display() {
        let change = StoreChange::ExpenseAdded {
            id: ExpenseId::new(),
            title: "Grocery run".to_string(),
            amount: Money::from_cents(5420),
        };
        assert_eq!(change.to_string(), "Logged Grocery run ($54.20)");

        let change = StoreChange::BudgetUpserted {
            id: BudgetTargetId::new(),
            scope: BudgetScope::Category(ExpenseCategory::Food),
            limit: Money::from_cents(40000),
        };
        assert_eq!(change.to_string(), "Budget set: Food $400.00");
    }
}
