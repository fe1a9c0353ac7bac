//! Core data models for Cashpilot
//!
//! This module contains all the data structures that represent the dashboard
//! domain: expenses, budget targets, income streams, and agent workflows.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod workflow;

pub use budget::BudgetTarget;
pub use category::{BudgetScope, ExpenseCategory, PaymentChannel};
pub use expense::{Expense, ExpenseDraft, RECURRING_NOTE};
pub use ids::{BudgetTargetId, ExpenseId, IncomeStreamId, WorkflowId};
pub use income::{Cadence, IncomeDraft, IncomeStream};
pub use money::Money;
pub use workflow::{default_workflows, Workflow, WorkflowStatus};
