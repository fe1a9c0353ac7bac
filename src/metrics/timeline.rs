//! Cashflow timeline projection
//!
//! Merges three event sources into one short, date-ordered look-ahead:
//! recurring expenses projected 30 days past their recorded date, each
//! income stream's next payout, and each workflow's next run. The result
//! is capped at [`TIMELINE_LIMIT`] entries.

use chrono::{Duration, NaiveDate};

use crate::models::{Expense, IncomeStream, Money, Workflow};

/// Maximum number of events the timeline shows
pub const TIMELINE_LIMIT: usize = 6;

/// Where a timeline event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Expense,
    Income,
    Workflow,
}

/// One upcoming event on the cashflow timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    /// Event source
    pub kind: TimelineKind,

    /// When it lands
    pub date: NaiveDate,

    /// Headline, e.g. "Streaming bundle renewal"
    pub label: String,

    /// Secondary line: category, cadence, or trigger
    pub detail: String,

    /// Money movement, if the event has one
    pub amount: Option<Money>,
}

/// Build the merged, sorted, truncated timeline.
///
/// `today` anchors income projections so the result is reproducible in
/// tests. The sort is stable, so same-day events keep source order:
/// expenses, then incomes, then workflows.
pub fn upcoming_events(
    today: NaiveDate,
    expenses: &[Expense],
    incomes: &[IncomeStream],
    workflows: &[Workflow],
) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = Vec::new();

    for expense in expenses.iter().filter(|e| e.recurring) {
        events.push(TimelineEvent {
            kind: TimelineKind::Expense,
            date: expense.date + Duration::days(30),
            label: format!("{} renewal", expense.title),
            detail: expense.category.label().to_string(),
            amount: Some(expense.amount),
        });
    }

    for stream in incomes {
        events.push(TimelineEvent {
            kind: TimelineKind::Income,
            date: today + Duration::days(stream.cadence.days_until_next()),
            label: format!("{} payout", stream.title),
            detail: stream.cadence.label().to_string(),
            amount: Some(stream.amount),
        });
    }

    for workflow in workflows {
        events.push(TimelineEvent {
            kind: TimelineKind::Workflow,
            date: workflow.next_run.date_naive(),
            label: workflow.name.clone(),
            detail: workflow.trigger.clone(),
            amount: None,
        });
    }

    events.sort_by_key(|e| e.date);
    events.truncate(TIMELINE_LIMIT);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Cadence, ExpenseCategory, ExpenseDraft, IncomeDraft, PaymentChannel, Workflow,
    };
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn recurring_expense(title: &str, date: NaiveDate) -> Expense {
        let mut draft = ExpenseDraft::new(
            title,
            Money::from_cents(3299),
            ExpenseCategory::Entertainment,
            PaymentChannel::CreditCard,
            date,
        );
        draft.recurring = true;
        Expense::from_draft(draft)
    }

    #[test]
    fn test_recurring_expense_projects_thirty_days() {
        let expense = recurring_expense("Streaming bundle", today());
        let events = upcoming_events(today(), &[expense], &[], &[]);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 4, 13).unwrap());
        assert_eq!(events[0].label, "Streaming bundle renewal");
        assert_eq!(events[0].kind, TimelineKind::Expense);
    }

    #[test]
    fn test_non_recurring_expenses_excluded() {
        let expense = Expense::from_draft(ExpenseDraft::new(
            "One-off",
            Money::from_cents(1000),
            ExpenseCategory::Other,
            PaymentChannel::Cash,
            today(),
        ));
        let events = upcoming_events(today(), &[expense], &[], &[]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_income_next_occurrence_per_cadence() {
        let weekly = IncomeStream::from_draft(IncomeDraft::new(
            "Tutoring",
            Money::from_cents(10000),
            Cadence::Weekly,
        ));
        let yearly = IncomeStream::from_draft(IncomeDraft::new(
            "Bonus",
            Money::from_cents(120000),
            Cadence::Yearly,
        ));

        let events = upcoming_events(today(), &[], &[weekly, yearly], &[]);
        assert_eq!(events[0].date, today() + Duration::days(7));
        assert_eq!(events[0].label, "Tutoring payout");
        assert_eq!(events[1].date, today() + Duration::days(365));
    }

    #[test]
    fn test_workflow_uses_stored_next_run() {
        let next_run = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        let workflow = Workflow::new("Subscription sweep", "Scans charges.", "Weekly", next_run);

        let events = upcoming_events(today(), &[], &[], &[workflow]);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
        assert_eq!(events[0].detail, "Weekly");
        assert!(events[0].amount.is_none());
    }

    #[test]
    fn test_sorted_and_truncated_to_six() {
        // Eight renewals land on staggered future dates
        let expenses: Vec<Expense> = (0..8)
            .map(|i| recurring_expense("Sub", today() - Duration::days(i)))
            .collect();

        let events = upcoming_events(today(), &expenses, &[], &[]);
        assert_eq!(events.len(), TIMELINE_LIMIT);
        for pair in events.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        // The earliest renewals made the cut
        assert_eq!(events[0].date, today() + Duration::days(23));
    }

    #[test]
    fn test_same_day_events_keep_source_order() {
        // An expense renewal and a monthly payout on the same day
        let expense = recurring_expense("Gym", today());
        let income = IncomeStream::from_draft(IncomeDraft::new(
            "Salary",
            Money::from_cents(450000),
            Cadence::Monthly,
        ));

        let events = upcoming_events(today(), &[expense], &[income], &[]);
        assert_eq!(events[0].kind, TimelineKind::Expense);
        assert_eq!(events[1].kind, TimelineKind::Income);
        assert_eq!(events[0].date, events[1].date);
    }

    #[test]
    fn test_empty_sources_yield_empty_timeline() {
        assert!(upcoming_events(today(), &[], &[], &[]).is_empty());
    }
}
