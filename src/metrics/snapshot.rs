//! Spend snapshot totals
//!
//! The headline numbers: total tracked spend, average ticket, normalized
//! monthly income, and burn rate. All pure functions over store snapshots.

use std::collections::BTreeMap;

use crate::models::{Expense, ExpenseCategory, IncomeStream, Money};

/// Sum of all expense amounts
pub fn total_spend(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category spend totals
pub fn spend_by_category(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        let entry = totals.entry(expense.category).or_insert_with(Money::zero);
        *entry += expense.amount;
    }
    totals
}

/// All income streams normalized to one monthly figure
pub fn monthly_income(streams: &[IncomeStream]) -> Money {
    streams.iter().map(|s| s.monthly_amount()).sum()
}

/// The headline numbers rendered on the overview cards
#[derive(Debug, Clone, PartialEq)]
pub struct SpendSnapshot {
    /// Sum of all expense amounts
    pub total_spend: Money,

    /// Number of tracked expenses
    pub expense_count: usize,

    /// Average expense amount, zero when nothing is tracked
    pub average_ticket: Money,

    /// Normalized monthly income across all streams
    pub monthly_income: Money,

    /// Spend as a percentage of monthly income, zero when income is zero
    pub burn_rate_pct: f64,
}

impl SpendSnapshot {
    /// Compute the snapshot from current store contents
    pub fn compute(expenses: &[Expense], streams: &[IncomeStream]) -> Self {
        let total = total_spend(expenses);
        let count = expenses.len();
        let average_ticket = if count > 0 {
            Money::from_cents(total.cents() / count as i64)
        } else {
            Money::zero()
        };

        let income = monthly_income(streams);
        let burn_rate_pct = if income.is_positive() {
            total.cents() as f64 / income.cents() as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_spend: total,
            expense_count: count,
            average_ticket,
            monthly_income: income,
            burn_rate_pct,
        }
    }
}

impl Default for SpendSnapshot {
    fn default() -> Self {
        Self::compute(&[], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, ExpenseDraft, IncomeDraft, PaymentChannel};
    use chrono::NaiveDate;

    fn expense(title: &str, cents: i64, category: ExpenseCategory) -> Expense {
        Expense::from_draft(ExpenseDraft::new(
            title,
            Money::from_cents(cents),
            category,
            PaymentChannel::DebitCard,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        ))
    }

    fn stream(title: &str, cents: i64, cadence: Cadence) -> IncomeStream {
        IncomeStream::from_draft(IncomeDraft::new(title, Money::from_cents(cents), cadence))
    }

    #[test]
    fn test_total_and_average() {
        let expenses = vec![
            expense("Rent", 180000, ExpenseCategory::Housing),
            expense("Groceries", 12000, ExpenseCategory::Food),
            expense("Espresso", 480, ExpenseCategory::Food),
        ];

        let snapshot = SpendSnapshot::compute(&expenses, &[]);
        assert_eq!(snapshot.total_spend.cents(), 192480);
        assert_eq!(snapshot.expense_count, 3);
        assert_eq!(snapshot.average_ticket.cents(), 64160);
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let snapshot = SpendSnapshot::compute(&[], &[]);
        assert!(snapshot.total_spend.is_zero());
        assert!(snapshot.average_ticket.is_zero());
        assert_eq!(snapshot.burn_rate_pct, 0.0);
    }

    #[test]
    fn test_average_truncates_cents() {
        let expenses = vec![
            expense("A", 100, ExpenseCategory::Other),
            expense("B", 101, ExpenseCategory::Other),
        ];
        let snapshot = SpendSnapshot::compute(&expenses, &[]);
        assert_eq!(snapshot.average_ticket.cents(), 100);
    }

    #[test]
    fn test_spend_by_category_groups() {
        let expenses = vec![
            expense("Groceries", 12000, ExpenseCategory::Food),
            expense("Espresso", 480, ExpenseCategory::Food),
            expense("Rent", 180000, ExpenseCategory::Housing),
        ];

        let by_category = spend_by_category(&expenses);
        assert_eq!(by_category[&ExpenseCategory::Food].cents(), 12480);
        assert_eq!(by_category[&ExpenseCategory::Housing].cents(), 180000);
        assert!(!by_category.contains_key(&ExpenseCategory::Savings));
    }

    #[test]
    fn test_weekly_stream_counts_four_payouts() {
        let streams = vec![stream("Tutoring", 10000, Cadence::Weekly)];
        assert_eq!(monthly_income(&streams).cents(), 40000);
    }

    #[test]
    fn test_yearly_stream_counts_one_twelfth() {
        let streams = vec![stream("Bonus", 120000, Cadence::Yearly)];
        assert_eq!(monthly_income(&streams).cents(), 10000);
    }

    #[test]
    fn test_mixed_streams_sum() {
        let streams = vec![
            stream("Salary", 450000, Cadence::Monthly),
            stream("Freelance", 65000, Cadence::Biweekly),
        ];
        assert_eq!(monthly_income(&streams).cents(), 450000 + 130000);
    }

    #[test]
    fn test_burn_rate() {
        let expenses = vec![expense("Rent", 250000, ExpenseCategory::Housing)];
        let streams = vec![stream("Salary", 500000, Cadence::Monthly)];

        let snapshot = SpendSnapshot::compute(&expenses, &streams);
        assert_eq!(snapshot.burn_rate_pct, 50.0);
    }

    #[test]
    fn test_burn_rate_with_zero_income_is_zero() {
        let expenses = vec![expense("Rent", 50000, ExpenseCategory::Housing)];
        let snapshot = SpendSnapshot::compute(&expenses, &[]);
        assert_eq!(snapshot.burn_rate_pct, 0.0);
    }

    #[test]
    fn test_burn_rate_can_exceed_hundred() {
        let expenses = vec![expense("Rent", 600000, ExpenseCategory::Housing)];
        let streams = vec![stream("Salary", 400000, Cadence::Monthly)];

        let snapshot = SpendSnapshot::compute(&expenses, &streams);
        assert_eq!(snapshot.burn_rate_pct, 150.0);
    }
}
