//! Agent insight cards
//!
//! A fixed table of four heuristics, each mapping the current totals and
//! budget bands to one card: priority, description, recommended actions,
//! and metric chips. Same store contents always produce the same cards;
//! nothing here is learned or fetched.

use std::cmp::Ordering;
use std::fmt;

use crate::models::{Expense, Money};

use super::snapshot::SpendSnapshot;
use super::utilization::{BudgetStatus, BudgetUtilization};

/// Priority label on an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl InsightPriority {
    /// Get the display label for this priority
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A small label/value pair shown under a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricChip {
    pub label: &'static str,
    pub value: String,
}

fn chip(label: &'static str, value: impl Into<String>) -> MetricChip {
    MetricChip {
        label,
        value: value.into(),
    }
}

/// One rendered insight card
#[derive(Debug, Clone, PartialEq)]
pub struct InsightCard {
    /// Stable slug, one per heuristic
    pub id: &'static str,

    /// Card headline
    pub title: &'static str,

    /// Priority badge
    pub priority: InsightPriority,

    /// Narrative line parameterized by current numbers
    pub description: String,

    /// Canned next steps for this branch
    pub actions: Vec<&'static str>,

    /// Metric chips
    pub metrics: Vec<MetricChip>,
}

/// Build all four insight cards in fixed order
pub fn build_insights(
    snapshot: &SpendSnapshot,
    utilizations: &[BudgetUtilization],
    expenses: &[Expense],
) -> Vec<InsightCard> {
    vec![
        guardrail_card(utilizations),
        cashflow_card(snapshot),
        recurring_card(snapshot, expenses),
        savings_card(snapshot),
    ]
}

fn guardrail_card(utilizations: &[BudgetUtilization]) -> InsightCard {
    let Some(worst) = utilizations.iter().max_by(|a, b| {
        a.percent
            .partial_cmp(&b.percent)
            .unwrap_or(Ordering::Equal)
    }) else {
        return InsightCard {
            id: "budget-guardrails",
            title: "Spending guardrails",
            priority: InsightPriority::Low,
            description:
                "No guardrails are set. Add category limits so overspend gets flagged before month end."
                    .to_string(),
            actions: vec![
                "Set an overall Total ceiling",
                "Add limits for the heaviest categories",
            ],
            metrics: vec![chip("guardrails", "0")],
        };
    };

    let (priority, description, actions) = match worst.status {
        BudgetStatus::Critical => (
            InsightPriority::High,
            format!(
                "{} is at {:.0}% of its {} limit. Spending there should pause until the period resets.",
                worst.scope, worst.percent, worst.limit
            ),
            vec![
                "Pause non-essential spending in this scope",
                "Raise the limit if the ceiling is outdated",
            ],
        ),
        BudgetStatus::Warning => (
            InsightPriority::Medium,
            format!(
                "{} has reached {:.0}% of its {} limit. A small cut keeps it inside plan.",
                worst.scope, worst.percent, worst.limit
            ),
            vec![
                "Trim upcoming purchases in this scope",
                "Review the latest charges for one-offs",
            ],
        ),
        BudgetStatus::Ok => (
            InsightPriority::Low,
            format!(
                "All {} guardrails are inside their limits. Peak utilization is {:.0}%.",
                utilizations.len(),
                worst.percent
            ),
            vec!["Keep logging expenses to sharpen the picture"],
        ),
    };

    InsightCard {
        id: "budget-guardrails",
        title: "Spending guardrails",
        priority,
        description,
        actions,
        metrics: vec![
            chip("guardrails", utilizations.len().to_string()),
            chip("peak utilization", format!("{:.0}%", worst.percent)),
        ],
    }
}

fn cashflow_card(snapshot: &SpendSnapshot) -> InsightCard {
    if !snapshot.monthly_income.is_positive() {
        return InsightCard {
            id: "cashflow-burn",
            title: "Cashflow monitor",
            priority: InsightPriority::Medium,
            description:
                "No income streams are tracked, so burn rate reads 0%. Add one to calibrate the cashflow picture."
                    .to_string(),
            actions: vec!["Add a recurring income stream"],
            metrics: vec![
                chip("burn rate", "0%"),
                chip("monthly income", snapshot.monthly_income.to_string()),
            ],
        };
    }

    let burn = snapshot.burn_rate_pct;
    let (priority, description, actions) = if burn >= 90.0 {
        (
            InsightPriority::High,
            format!(
                "Burn rate is {:.0}% of monthly income. The month ends underwater unless spending slows.",
                burn
            ),
            vec![
                "Defer discretionary purchases",
                "Check recurring charges for quick wins",
            ],
        )
    } else if burn >= 65.0 {
        (
            InsightPriority::Medium,
            format!(
                "Burn rate is {:.0}% of monthly income. There is room, but not much slack.",
                burn
            ),
            vec!["Watch the heaviest category this week"],
        )
    } else {
        (
            InsightPriority::Low,
            format!(
                "Burn rate is {:.0}% of monthly income. Cashflow is comfortable.",
                burn
            ),
            vec!["Consider sweeping surplus into savings"],
        )
    };

    InsightCard {
        id: "cashflow-burn",
        title: "Cashflow monitor",
        priority,
        description,
        actions,
        metrics: vec![
            chip("burn rate", format!("{:.0}%", burn)),
            chip("monthly income", snapshot.monthly_income.to_string()),
        ],
    }
}

fn recurring_card(snapshot: &SpendSnapshot, expenses: &[Expense]) -> InsightCard {
    let recurring: Vec<&Expense> = expenses.iter().filter(|e| e.recurring).collect();
    let recurring_total: Money = recurring.iter().map(|e| e.amount).sum();

    if recurring.is_empty() {
        return InsightCard {
            id: "recurring-audit",
            title: "Recurring spend audit",
            priority: InsightPriority::Low,
            description:
                "No recurring charges are tracked yet. Flag subscriptions as recurring to audit them here."
                    .to_string(),
            actions: vec!["Mark subscription expenses as recurring"],
            metrics: vec![chip("recurring charges", "0")],
        };
    }

    let share = if snapshot.total_spend.is_positive() {
        recurring_total.cents() as f64 * 100.0 / snapshot.total_spend.cents() as f64
    } else {
        0.0
    };

    let (priority, description, actions) = if share >= 40.0 {
        (
            InsightPriority::High,
            format!(
                "{} recurring charges make up {:.0}% of tracked spend ({}). That is a heavy fixed load.",
                recurring.len(),
                share,
                recurring_total
            ),
            vec![
                "Cancel overlapping subscriptions",
                "Drop services unused this month",
            ],
        )
    } else if share >= 20.0 {
        (
            InsightPriority::Medium,
            format!(
                "{} recurring charges account for {:.0}% of tracked spend ({}).",
                recurring.len(),
                share,
                recurring_total
            ),
            vec!["Compare annual vs monthly pricing"],
        )
    } else {
        (
            InsightPriority::Low,
            format!(
                "Recurring spend is steady at {:.0}% of the total across {} charges.",
                share,
                recurring.len()
            ),
            vec!["Keep renewals flagged so drift shows up"],
        )
    };

    InsightCard {
        id: "recurring-audit",
        title: "Recurring spend audit",
        priority,
        description,
        actions,
        metrics: vec![
            chip("recurring charges", recurring.len().to_string()),
            chip("recurring spend", recurring_total.to_string()),
        ],
    }
}

fn savings_card(snapshot: &SpendSnapshot) -> InsightCard {
    let headroom = snapshot.monthly_income - snapshot.total_spend;
    let sweep = if headroom.is_positive() {
        // Suggest parking a fifth of the headroom
        Money::from_cents(headroom.cents() / 5)
    } else {
        Money::zero()
    };

    let (priority, description, actions) = if headroom.is_negative() {
        (
            InsightPriority::High,
            format!(
                "Spending exceeds normalized income by {}. The plan needs a cut or new income.",
                headroom.abs()
            ),
            vec!["Trim the top category", "Revisit budget limits"],
        )
    } else if snapshot.monthly_income.is_positive() && headroom * 5 < snapshot.monthly_income {
        (
            InsightPriority::Medium,
            format!(
                "Only {} of monthly income is left after tracked spend. Small sweeps still add up.",
                headroom
            ),
            vec!["Schedule a small automatic transfer"],
        )
    } else {
        (
            InsightPriority::Low,
            format!(
                "{} of headroom remains this month. Sweeping {} into savings keeps the plan ahead.",
                headroom, sweep
            ),
            vec!["Automate a transfer on payday"],
        )
    };

    InsightCard {
        id: "savings-headroom",
        title: "Savings headroom",
        priority,
        description,
        actions,
        metrics: vec![
            chip("headroom", headroom.to_string()),
            chip("suggested sweep", sweep.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::utilization::compute_utilizations;
    use crate::models::{
        BudgetScope, BudgetTarget, Cadence, ExpenseCategory, ExpenseDraft, IncomeDraft,
        IncomeStream, PaymentChannel,
    };
    use chrono::NaiveDate;

    fn expense(cents: i64, category: ExpenseCategory, recurring: bool) -> Expense {
        let mut draft = ExpenseDraft::new(
            "Item",
            Money::from_cents(cents),
            category,
            PaymentChannel::CreditCard,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        );
        draft.recurring = recurring;
        Expense::from_draft(draft)
    }

    fn income(cents: i64) -> IncomeStream {
        IncomeStream::from_draft(IncomeDraft::new(
            "Salary",
            Money::from_cents(cents),
            Cadence::Monthly,
        ))
    }

    #[test]
    fn test_always_four_cards_in_fixed_order() {
        let snapshot = SpendSnapshot::default();
        let cards = build_insights(&snapshot, &[], &[]);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].id, "budget-guardrails");
        assert_eq!(cards[1].id, "cashflow-burn");
        assert_eq!(cards[2].id, "recurring-audit");
        assert_eq!(cards[3].id, "savings-headroom");
    }

    #[test]
    fn test_same_inputs_same_cards() {
        let expenses = vec![expense(5000, ExpenseCategory::Food, true)];
        let streams = vec![income(450000)];
        let snapshot = SpendSnapshot::compute(&expenses, &streams);

        let first = build_insights(&snapshot, &[], &expenses);
        let second = build_insights(&snapshot, &[], &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_critical_guardrail_goes_high() {
        let targets = vec![BudgetTarget::new(
            BudgetScope::Category(ExpenseCategory::Food),
            Money::from_cents(10000),
        )];
        let expenses = vec![expense(9600, ExpenseCategory::Food, false)];
        let utilizations = compute_utilizations(&targets, &expenses);

        let card = guardrail_card(&utilizations);
        assert_eq!(card.priority, InsightPriority::High);
        assert!(card.description.contains("Food"));
        assert!(card.description.contains("96%"));
    }

    #[test]
    fn test_no_guardrails_reads_low() {
        let card = guardrail_card(&[]);
        assert_eq!(card.priority, InsightPriority::Low);
        assert_eq!(card.metrics[0].value, "0");
    }

    #[test]
    fn test_burn_thresholds() {
        let streams = vec![income(100000)];

        let hot = SpendSnapshot::compute(&[expense(95000, ExpenseCategory::Other, false)], &streams);
        assert_eq!(cashflow_card(&hot).priority, InsightPriority::High);

        let mid = SpendSnapshot::compute(&[expense(70000, ExpenseCategory::Other, false)], &streams);
        assert_eq!(cashflow_card(&mid).priority, InsightPriority::Medium);

        let cool = SpendSnapshot::compute(&[expense(30000, ExpenseCategory::Other, false)], &streams);
        assert_eq!(cashflow_card(&cool).priority, InsightPriority::Low);
    }

    #[test]
    fn test_missing_income_flags_setup_step() {
        let snapshot = SpendSnapshot::compute(&[expense(5000, ExpenseCategory::Food, false)], &[]);
        let card = cashflow_card(&snapshot);
        assert_eq!(card.priority, InsightPriority::Medium);
        assert!(card.description.contains("No income streams"));
    }

    #[test]
    fn test_recurring_share_drives_priority() {
        let expenses = vec![
            expense(5000, ExpenseCategory::Entertainment, true),
            expense(5000, ExpenseCategory::Food, false),
        ];
        let snapshot = SpendSnapshot::compute(&expenses, &[]);

        let card = recurring_card(&snapshot, &expenses);
        // Half of all spend recurs
        assert_eq!(card.priority, InsightPriority::High);
        assert_eq!(card.metrics[0].value, "1");
        assert_eq!(card.metrics[1].value, "$50.00");
    }

    #[test]
    fn test_overspend_flips_savings_card_high() {
        let expenses = vec![expense(600000, ExpenseCategory::Housing, false)];
        let streams = vec![income(400000)];
        let snapshot = SpendSnapshot::compute(&expenses, &streams);

        let card = savings_card(&snapshot);
        assert_eq!(card.priority, InsightPriority::High);
        assert!(card.description.contains("$2000.00"));
        assert_eq!(card.metrics[1].value, "$0.00");
    }

    #[test]
    fn test_comfortable_headroom_suggests_sweep() {
        let expenses = vec![expense(100000, ExpenseCategory::Housing, false)];
        let streams = vec![income(500000)];
        let snapshot = SpendSnapshot::compute(&expenses, &streams);

        let card = savings_card(&snapshot);
        assert_eq!(card.priority, InsightPriority::Low);
        // A fifth of the $4000 headroom
        assert_eq!(card.metrics[1].value, "$800.00");
    }
}
