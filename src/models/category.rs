//! Expense categories, payment channels, and budget scopes
//!
//! All three are closed enumerations so computation sites can match
//! exhaustively instead of comparing strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Insurance,
    Healthcare,
    Entertainment,
    Personal,
    Education,
    Savings,
    Other,
}

impl ExpenseCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Transportation,
            Self::Food,
            Self::Utilities,
            Self::Insurance,
            Self::Healthcare,
            Self::Entertainment,
            Self::Personal,
            Self::Education,
            Self::Savings,
            Self::Other,
        ]
    }

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Food => "Food",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Personal => "Personal",
            Self::Education => "Education",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    /// Tags applied to a new expense when the user supplies none
    pub fn default_tags(&self) -> &'static [&'static str] {
        match self {
            Self::Housing => &["Fixed", "Rent"],
            Self::Transportation => &["Commute", "Fuel"],
            Self::Food => &["Groceries"],
            Self::Utilities => &["Fixed"],
            Self::Insurance => &["Fixed"],
            Self::Healthcare => &["Medical"],
            Self::Entertainment => &["Subscription"],
            Self::Personal => &["Lifestyle"],
            Self::Education => &["Learning"],
            Self::Savings => &["Transfer"],
            Self::Other => &["General"],
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    Cash,
    DebitCard,
    CreditCard,
    Transfer,
    DigitalWallet,
}

impl PaymentChannel {
    /// Get all channels in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Cash,
            Self::DebitCard,
            Self::CreditCard,
            Self::Transfer,
            Self::DigitalWallet,
        ]
    }

    /// Get the display label for this channel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
            Self::Transfer => "Transfer",
            Self::DigitalWallet => "Digital Wallet",
        }
    }
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a budget target covers: one category, or all spending combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetScope {
    Total,
    Category(ExpenseCategory),
}

impl BudgetScope {
    /// All scopes in display order, the overall total first
    pub fn all() -> &'static [Self] {
        const ALL: [BudgetScope; 12] = [
            BudgetScope::Total,
            BudgetScope::Category(ExpenseCategory::Housing),
            BudgetScope::Category(ExpenseCategory::Transportation),
            BudgetScope::Category(ExpenseCategory::Food),
            BudgetScope::Category(ExpenseCategory::Utilities),
            BudgetScope::Category(ExpenseCategory::Insurance),
            BudgetScope::Category(ExpenseCategory::Healthcare),
            BudgetScope::Category(ExpenseCategory::Entertainment),
            BudgetScope::Category(ExpenseCategory::Personal),
            BudgetScope::Category(ExpenseCategory::Education),
            BudgetScope::Category(ExpenseCategory::Savings),
            BudgetScope::Category(ExpenseCategory::Other),
        ];
        &ALL
    }

    /// Get the display label for this scope
    pub fn label(&self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_set_is_closed() {
        assert_eq!(ExpenseCategory::all().len(), 11);
        assert_eq!(ExpenseCategory::all()[0], ExpenseCategory::Housing);
        assert_eq!(ExpenseCategory::all()[10], ExpenseCategory::Other);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(PaymentChannel::all().len(), 5);
        assert_eq!(PaymentChannel::DebitCard.label(), "Debit Card");
        assert_eq!(PaymentChannel::DigitalWallet.label(), "Digital Wallet");
    }

    #[test]
    fn test_default_tags_table() {
        assert_eq!(
            ExpenseCategory::Housing.default_tags(),
            &["Fixed", "Rent"]
        );
        assert_eq!(ExpenseCategory::Food.default_tags(), &["Groceries"]);
        assert_eq!(ExpenseCategory::Other.default_tags(), &["General"]);

        // Every category has at least one default tag
        for category in ExpenseCategory::all() {
            assert!(!category.default_tags().is_empty());
        }
    }

    #[test]
    fn test_scope_order() {
        let scopes = BudgetScope::all();
        assert_eq!(scopes.len(), 12);
        assert_eq!(scopes[0], BudgetScope::Total);
        assert_eq!(
            scopes[1],
            BudgetScope::Category(ExpenseCategory::Housing)
        );
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(BudgetScope::Total.to_string(), "Total");
        assert_eq!(
            BudgetScope::Category(ExpenseCategory::Healthcare).to_string(),
            "Healthcare"
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Housing).unwrap();
        assert_eq!(json, "\"housing\"");

        let channel: PaymentChannel = serde_json::from_str("\"debit_card\"").unwrap();
        assert_eq!(channel, PaymentChannel::DebitCard);

        let scope = BudgetScope::Category(ExpenseCategory::Food);
        let json = serde_json::to_string(&scope).unwrap();
        let deserialized: BudgetScope = serde_json::from_str(&json).unwrap();
        assert_eq!(scope, deserialized);
    }
}
