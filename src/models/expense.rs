//! Expense model
//!
//! Expenses are append-only: created from a validated draft, deleted by id,
//! never mutated in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{ExpenseCategory, PaymentChannel};
use super::ids::ExpenseId;
use super::money::Money;

/// Note attached automatically when a recurring expense is logged
pub const RECURRING_NOTE: &str = "Auto-scheduled by recurring agent";

/// A single recorded outflow of money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// How it was paid
    pub channel: PaymentChannel,

    /// Date of the expense
    pub date: NaiveDate,

    /// Optional free-form note
    pub notes: Option<String>,

    /// Whether this charge repeats (drives the cashflow timeline)
    #[serde(default)]
    pub recurring: bool,

    /// Tags for filtering and grouping; defaulted from the category
    /// when the draft supplies none
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build an expense from a validated draft, assigning a fresh id
    /// and applying tag and note defaults
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        let tags = draft.normalized_tags();
        let notes = if draft.recurring && draft.notes.is_none() {
            Some(RECURRING_NOTE.to_string())
        } else {
            draft.notes
        };

        Self {
            id: ExpenseId::new(),
            title: draft.title.trim().to_string(),
            amount: draft.amount,
            category: draft.category,
            channel: draft.channel,
            date: draft.date,
            notes,
            recurring: draft.recurring,
            tags,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}

/// Form payload for a new expense, before validation
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    /// Title as typed
    pub title: String,

    /// Parsed amount
    pub amount: Money,

    /// Selected category
    pub category: ExpenseCategory,

    /// Selected payment channel
    pub channel: PaymentChannel,

    /// Expense date
    pub date: NaiveDate,

    /// Optional note (the recurring note is applied later if unset)
    pub notes: Option<String>,

    /// Recurring flag
    pub recurring: bool,

    /// Raw comma-separated tag input
    pub tags_input: String,
}

impl ExpenseDraft {
    /// Create a draft with the given required fields and empty extras
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        channel: PaymentChannel,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            channel,
            date,
            notes: None,
            recurring: false,
            tags_input: String::new(),
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }

    /// Split, trim, and dedupe the raw tag input, falling back to the
    /// category's default tags when nothing usable was supplied
    pub fn normalized_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for raw in self.tags_input.split(',') {
            let tag = raw.trim();
            if tag.is_empty() || tags.iter().any(|t| t == tag) {
                continue;
            }
            tags.push(tag.to_string());
        }

        if tags.is_empty() {
            tags = self
                .category
                .default_tags()
                .iter()
                .map(|t| t.to_string())
                .collect();
        }

        tags
    }
}

/// Validation errors for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ExpenseDraft {
        ExpenseDraft::new(
            "Grocery run",
            Money::from_cents(5420),
            ExpenseCategory::Food,
            PaymentChannel::DebitCard,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn test_from_draft() {
        let expense = Expense::from_draft(sample_draft());
        assert_eq!(expense.title, "Grocery run");
        assert_eq!(expense.amount, Money::from_cents(5420));
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert!(!expense.recurring);
        assert!(expense.notes.is_none());
    }

    #[test]
    fn test_default_tags_applied() {
        let expense = Expense::from_draft(sample_draft());
        assert_eq!(expense.tags, vec!["Groceries".to_string()]);
    }

    #[test]
    fn test_explicit_tags_win_over_defaults() {
        let mut draft = sample_draft();
        draft.tags_input = " weekly , bulk,weekly,  ".to_string();

        let expense = Expense::from_draft(draft);
        assert_eq!(expense.tags, vec!["weekly".to_string(), "bulk".to_string()]);
    }

    #[test]
    fn test_recurring_note_applied() {
        let mut draft = sample_draft();
        draft.recurring = true;

        let expense = Expense::from_draft(draft);
        assert_eq!(expense.notes.as_deref(), Some(RECURRING_NOTE));
    }

    #[test]
    fn test_explicit_note_kept_for_recurring() {
        let mut draft = sample_draft();
        draft.recurring = true;
        draft.notes = Some("Split with roommate".to_string());

        let expense = Expense::from_draft(draft);
        assert_eq!(expense.notes.as_deref(), Some("Split with roommate"));
    }

    #[test]
    fn test_title_trimmed() {
        let mut draft = sample_draft();
        draft.title = "  Grocery run  ".to_string();

        let expense = Expense::from_draft(draft);
        assert_eq!(expense.title, "Grocery run");
    }

    #[test]
    fn test_validate_empty_title() {
        let mut draft = sample_draft();
        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(ExpenseValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let mut draft = sample_draft();
        draft.amount = Money::zero();
        assert!(matches!(
            draft.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        draft.amount = Money::from_cents(-100);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_display() {
        let expense = Expense::from_draft(sample_draft());
        assert_eq!(format!("{}", expense), "2025-03-14 Grocery run $54.20");
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::from_draft(sample_draft());
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.tags, deserialized.tags);
    }
}
