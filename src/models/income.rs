//! Income stream model
//!
//! A recurring inflow with a cadence. Cadences normalize to a monthly
//! figure for the burn-rate math and project a next occurrence for the
//! cashflow timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeStreamId;
use super::money::Money;

/// How often an income stream pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Cadence {
    /// Get all cadences in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Yearly,
        ]
    }

    /// Get the display label for this cadence
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Biweekly => "Biweekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Normalize one payout to a monthly contribution.
    ///
    /// Weekly counts four payouts per month and biweekly two; quarterly
    /// and yearly divide in integer cents, truncating toward zero.
    pub fn monthly_amount(&self, amount: Money) -> Money {
        match self {
            Self::Weekly => amount * 4,
            Self::Biweekly => amount * 2,
            Self::Monthly => amount,
            Self::Quarterly => Money::from_cents(amount.cents() / 3),
            Self::Yearly => Money::from_cents(amount.cents() / 12),
        }
    }

    /// Days from now until the next expected payout
    pub fn days_until_next(&self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 14,
            Self::Monthly => 30,
            Self::Quarterly => 90,
            Self::Yearly => 365,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recurring inflow of money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStream {
    /// Unique identifier
    pub id: IncomeStreamId,

    /// Where the money comes from
    pub title: String,

    /// Amount per payout (always positive)
    pub amount: Money,

    /// How often it pays out
    pub cadence: Cadence,

    /// When the stream was added
    pub created_at: DateTime<Utc>,
}

impl IncomeStream {
    /// Build a stream from a validated draft, assigning a fresh id
    pub fn from_draft(draft: IncomeDraft) -> Self {
        Self {
            id: IncomeStreamId::new(),
            title: draft.title.trim().to_string(),
            amount: draft.amount,
            cadence: draft.cadence,
            created_at: Utc::now(),
        }
    }

    /// This stream's contribution to normalized monthly income
    pub fn monthly_amount(&self) -> Money {
        self.cadence.monthly_amount(self.amount)
    }
}

impl fmt::Display for IncomeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.title, self.amount, self.cadence)
    }
}

/// Form payload for a new income stream, before validation
#[derive(Debug, Clone)]
pub struct IncomeDraft {
    /// Title as typed
    pub title: String,

    /// Parsed amount per payout
    pub amount: Money,

    /// Selected cadence
    pub cadence: Cadence,
}

impl IncomeDraft {
    /// Create a draft
    pub fn new(title: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        Self {
            title: title.into(),
            amount,
            cadence,
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.title.trim().is_empty() {
            return Err(IncomeValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// Validation errors for income drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Income title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Income amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_normalizes_to_four_payouts() {
        let monthly = Cadence::Weekly.monthly_amount(Money::from_cents(10000));
        assert_eq!(monthly.cents(), 40000);
    }

    #[test]
    fn test_yearly_normalizes_to_one_twelfth() {
        let monthly = Cadence::Yearly.monthly_amount(Money::from_cents(120000));
        assert_eq!(monthly.cents(), 10000);
    }

    #[test]
    fn test_biweekly_and_quarterly_normalization() {
        assert_eq!(
            Cadence::Biweekly.monthly_amount(Money::from_cents(5000)).cents(),
            10000
        );
        assert_eq!(
            Cadence::Quarterly.monthly_amount(Money::from_cents(9000)).cents(),
            3000
        );
        assert_eq!(
            Cadence::Monthly.monthly_amount(Money::from_cents(7500)).cents(),
            7500
        );
    }

    #[test]
    fn test_days_until_next() {
        assert_eq!(Cadence::Weekly.days_until_next(), 7);
        assert_eq!(Cadence::Biweekly.days_until_next(), 14);
        assert_eq!(Cadence::Monthly.days_until_next(), 30);
        assert_eq!(Cadence::Quarterly.days_until_next(), 90);
        assert_eq!(Cadence::Yearly.days_until_next(), 365);
    }

    #[test]
    fn test_from_draft() {
        let stream = IncomeStream::from_draft(IncomeDraft::new(
            "Salary",
            Money::from_cents(450000),
            Cadence::Monthly,
        ));
        assert_eq!(stream.title, "Salary");
        assert_eq!(stream.monthly_amount().cents(), 450000);
    }

    #[test]
    fn test_validate_empty_title() {
        let draft = IncomeDraft::new("  ", Money::from_cents(1000), Cadence::Weekly);
        assert_eq!(draft.validate(), Err(IncomeValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let draft = IncomeDraft::new("Freelance", Money::zero(), Cadence::Monthly);
        assert!(matches!(
            draft.validate(),
            Err(IncomeValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_display() {
        let stream = IncomeStream::from_draft(IncomeDraft::new(
            "Salary",
            Money::from_cents(450000),
            Cadence::Monthly,
        ));
        assert_eq!(format!("{}", stream), "Salary $4500.00 (Monthly)");
    }

    #[test]
    fn test_serialization() {
        let stream = IncomeStream::from_draft(IncomeDraft::new(
            "Dividends",
            Money::from_cents(30000),
            Cadence::Quarterly,
        ));
        let json = serde_json::to_string(&stream).unwrap();
        let deserialized: IncomeStream = serde_json::from_str(&json).unwrap();
        assert_eq!(stream.id, deserialized.id);
        assert_eq!(stream.cadence, deserialized.cadence);
    }
}
