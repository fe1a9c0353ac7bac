//! Derived metrics for the dashboard
//!
//! Everything here is recomputed from store snapshots on demand: spend
//! totals, budget utilization bands, the agent insight cards, and the
//! upcoming-events timeline. The [`Dashboard`] aggregate bundles all of
//! them for one render pass.

pub mod insights;
pub mod snapshot;
pub mod timeline;
pub mod utilization;

pub use insights::{build_insights, InsightCard, InsightPriority, MetricChip};
pub use snapshot::{monthly_income, spend_by_category, total_spend, SpendSnapshot};
pub use timeline::{upcoming_events, TimelineEvent, TimelineKind, TIMELINE_LIMIT};
pub use utilization::{compute_utilizations, BudgetStatus, BudgetUtilization};

use chrono::NaiveDate;

use crate::error::CashpilotResult;
use crate::store::Store;

/// All derived state for one render of the dashboard
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub snapshot: SpendSnapshot,
    pub utilizations: Vec<BudgetUtilization>,
    pub insights: Vec<InsightCard>,
    pub timeline: Vec<TimelineEvent>,
}

impl Dashboard {
    /// Recompute every derived metric from the store's current contents
    pub fn compute(store: &Store, today: NaiveDate) -> CashpilotResult<Self> {
        let expenses = store.expenses()?;
        let budgets = store.budgets()?;
        let incomes = store.incomes()?;
        let workflows = store.workflows()?;

        let snapshot = SpendSnapshot::compute(&expenses, &incomes);
        let utilizations = compute_utilizations(&budgets, &expenses);
        let insights = build_insights(&snapshot, &utilizations, &expenses);
        let timeline = upcoming_events(today, &expenses, &incomes, &workflows);

        Ok(Self {
            snapshot,
            utilizations,
            insights,
            timeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, ExpenseCategory, ExpenseDraft, IncomeDraft, Money, PaymentChannel};

    #[test]
    fn test_dashboard_from_empty_store() {
        let store = Store::new();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let dashboard = Dashboard::compute(&store, today).unwrap();

        assert_eq!(dashboard.snapshot.expense_count, 0);
        assert!(dashboard.utilizations.is_empty());
        assert_eq!(dashboard.insights.len(), 4);
        // Seeded workflows still populate the timeline
        assert!(!dashboard.timeline.is_empty());
    }

    #[test]
    fn test_dashboard_reflects_store_contents() {
        let store = Store::new();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        store
            .add_expense(ExpenseDraft::new(
                "Grocery run",
                Money::from_cents(5420),
                ExpenseCategory::Food,
                PaymentChannel::DebitCard,
                today,
            ))
            .unwrap();
        store
            .add_income(IncomeDraft::new(
                "Salary",
                Money::from_cents(420000),
                Cadence::Monthly,
            ))
            .unwrap();
        store
            .upsert_budget(
                crate::models::BudgetScope::Category(ExpenseCategory::Food),
                Money::from_cents(40000),
            )
            .unwrap();

        let dashboard = Dashboard::compute(&store, today).unwrap();

        assert_eq!(dashboard.snapshot.expense_count, 1);
        assert_eq!(dashboard.snapshot.total_spend, Money::from_cents(5420));
        assert_eq!(dashboard.utilizations.len(), 1);
        assert_eq!(dashboard.insights.len(), 4);
    }
}
