//! Sample data for demo mode
//!
//! Seeds a handful of realistic records through the normal store commands
//! so a first launch with `--demo` shows a populated dashboard.

use chrono::{Duration, Utc};

use crate::error::CashpilotResult;
use crate::models::{
    BudgetScope, Cadence, ExpenseCategory, ExpenseDraft, IncomeDraft, Money, PaymentChannel,
};

use super::Store;

/// Seed the store with sample expenses, income streams, and budget targets
pub fn seed_demo_data(store: &Store) -> CashpilotResult<()> {
    let today = Utc::now().date_naive();

    let expenses = [
        (
            "Rent",
            185000,
            ExpenseCategory::Housing,
            PaymentChannel::Transfer,
            12,
            true,
        ),
        (
            "Grocery run",
            12740,
            ExpenseCategory::Food,
            PaymentChannel::DebitCard,
            2,
            false,
        ),
        (
            "Streaming bundle",
            3299,
            ExpenseCategory::Entertainment,
            PaymentChannel::CreditCard,
            5,
            true,
        ),
        (
            "Transit pass",
            8900,
            ExpenseCategory::Transportation,
            PaymentChannel::DigitalWallet,
            8,
            true,
        ),
        (
            "Corner espresso",
            480,
            ExpenseCategory::Food,
            PaymentChannel::Cash,
            1,
            false,
        ),
        (
            "Gym membership",
            4500,
            ExpenseCategory::Personal,
            PaymentChannel::CreditCard,
            15,
            true,
        ),
        (
            "Course bundle",
            21000,
            ExpenseCategory::Education,
            PaymentChannel::DebitCard,
            20,
            false,
        ),
    ];

    for (title, cents, category, channel, days_ago, recurring) in expenses {
        let mut draft = ExpenseDraft::new(
            title,
            Money::from_cents(cents),
            category,
            channel,
            today - Duration::days(days_ago),
        );
        draft.recurring = recurring;
        store.add_expense(draft)?;
    }

    store.add_income(IncomeDraft::new(
        "Salary",
        Money::from_cents(420000),
        Cadence::Monthly,
    ))?;
    store.add_income(IncomeDraft::new(
        "Freelance design",
        Money::from_cents(65000),
        Cadence::Biweekly,
    ))?;

    store.upsert_budget(
        BudgetScope::Category(ExpenseCategory::Food),
        Money::from_cents(60000),
    )?;
    store.upsert_budget(
        BudgetScope::Category(ExpenseCategory::Entertainment),
        Money::from_cents(15000),
    )?;
    store.upsert_budget(
        BudgetScope::Category(ExpenseCategory::Transportation),
        Money::from_cents(20000),
    )?;
    store.upsert_budget(BudgetScope::Total, Money::from_cents(350000))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_every_collection() {
        let store = Store::new();
        seed_demo_data(&store).unwrap();

        assert_eq!(store.expenses().unwrap().len(), 7);
        assert_eq!(store.incomes().unwrap().len(), 2);
        assert_eq!(store.budgets().unwrap().len(), 4);
        assert!(!store.workflows().unwrap().is_empty());
    }

    #[test]
    fn test_seed_twice_keeps_one_target_per_scope() {
        let store = Store::new();
        seed_demo_data(&store).unwrap();
        seed_demo_data(&store).unwrap();

        // Expenses duplicate, budget targets upsert in place
        assert_eq!(store.expenses().unwrap().len(), 14);
        assert_eq!(store.budgets().unwrap().len(), 4);
    }
}
