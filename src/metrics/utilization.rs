//! Budget utilization
//!
//! Maps each budget target to how much of its limit is consumed and a
//! status band. The 95/75 thresholds are part of the contract the views
//! and insight heuristics rely on.

use std::fmt;

use crate::models::{BudgetScope, BudgetTarget, BudgetTargetId, Expense, Money};

use super::snapshot::{spend_by_category, total_spend};

/// Status band for a budget target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BudgetStatus {
    Ok,
    Warning,
    Critical,
}

impl BudgetStatus {
    /// Get the display label for this band
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One budget target with its consumption figures
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUtilization {
    /// Target identity, for remove/edit actions
    pub id: BudgetTargetId,

    /// What the target covers
    pub scope: BudgetScope,

    /// The ceiling
    pub limit: Money,

    /// Spend counted against this target
    pub spent: Money,

    /// Percent of the limit consumed, capped at 100
    pub percent: f64,

    /// Status band derived from the percent
    pub status: BudgetStatus,
}

/// Percent of the limit consumed, capped at 100; zero for a non-positive limit
pub fn utilization_percent(spent: Money, limit: Money) -> f64 {
    if !limit.is_positive() {
        return 0.0;
    }
    let raw = spent.cents() as f64 * 100.0 / limit.cents() as f64;
    raw.min(100.0)
}

/// Band a utilization percent: >=95 critical, >=75 warning, otherwise ok
pub fn band(percent: f64) -> BudgetStatus {
    if percent >= 95.0 {
        BudgetStatus::Critical
    } else if percent >= 75.0 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    }
}

/// Compute utilization rows for every target, in target order
pub fn compute_utilizations(
    targets: &[BudgetTarget],
    expenses: &[Expense],
) -> Vec<BudgetUtilization> {
    let total = total_spend(expenses);
    let by_category = spend_by_category(expenses);

    targets
        .iter()
        .map(|target| {
            let spent = match target.scope {
                BudgetScope::Total => total,
                BudgetScope::Category(category) => {
                    by_category.get(&category).copied().unwrap_or_default()
                }
            };
            let percent = utilization_percent(spent, target.limit);
            BudgetUtilization {
                id: target.id,
                scope: target.scope,
                limit: target.limit,
                spent,
                percent,
                status: band(percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseDraft, PaymentChannel};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: ExpenseCategory) -> Expense {
        Expense::from_draft(ExpenseDraft::new(
            "Item",
            Money::from_cents(cents),
            category,
            PaymentChannel::Cash,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        ))
    }

    #[test]
    fn test_band_boundaries() {
        // $94.99 of a $100.00 limit stays in the warning band
        assert_eq!(
            band(utilization_percent(
                Money::from_cents(9499),
                Money::from_cents(10000)
            )),
            BudgetStatus::Warning
        );

        // Exactly $95.00 crosses into critical
        assert_eq!(
            band(utilization_percent(
                Money::from_cents(9500),
                Money::from_cents(10000)
            )),
            BudgetStatus::Critical
        );
    }

    #[test]
    fn test_warning_threshold() {
        assert_eq!(band(74.99), BudgetStatus::Ok);
        assert_eq!(band(75.0), BudgetStatus::Warning);
    }

    #[test]
    fn test_percent_caps_at_hundred() {
        let percent = utilization_percent(Money::from_cents(25000), Money::from_cents(10000));
        assert_eq!(percent, 100.0);
        assert_eq!(band(percent), BudgetStatus::Critical);
    }

    #[test]
    fn test_non_positive_limit_reads_zero() {
        assert_eq!(
            utilization_percent(Money::from_cents(5000), Money::zero()),
            0.0
        );
        assert_eq!(
            utilization_percent(Money::from_cents(5000), Money::from_cents(-100)),
            0.0
        );
    }

    #[test]
    fn test_total_scope_counts_all_spend() {
        let targets = vec![BudgetTarget::new(
            BudgetScope::Total,
            Money::from_cents(100000),
        )];
        let expenses = vec![
            expense(30000, ExpenseCategory::Food),
            expense(20000, ExpenseCategory::Housing),
        ];

        let rows = compute_utilizations(&targets, &expenses);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].spent.cents(), 50000);
        assert_eq!(rows[0].percent, 50.0);
        assert_eq!(rows[0].status, BudgetStatus::Ok);
    }

    #[test]
    fn test_category_scope_counts_only_its_category() {
        let targets = vec![BudgetTarget::new(
            BudgetScope::Category(ExpenseCategory::Food),
            Money::from_cents(40000),
        )];
        let expenses = vec![
            expense(30000, ExpenseCategory::Food),
            expense(20000, ExpenseCategory::Housing),
        ];

        let rows = compute_utilizations(&targets, &expenses);
        assert_eq!(rows[0].spent.cents(), 30000);
        assert_eq!(rows[0].percent, 75.0);
        assert_eq!(rows[0].status, BudgetStatus::Warning);
    }

    #[test]
    fn test_untouched_category_reads_zero() {
        let targets = vec![BudgetTarget::new(
            BudgetScope::Category(ExpenseCategory::Education),
            Money::from_cents(40000),
        )];
        let rows = compute_utilizations(&targets, &[]);
        assert!(rows[0].spent.is_zero());
        assert_eq!(rows[0].percent, 0.0);
        assert_eq!(rows[0].status, BudgetStatus::Ok);
    }
}
