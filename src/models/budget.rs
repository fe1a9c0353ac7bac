//! Budget target model
//!
//! A target is a spending ceiling for one scope: a single category, or the
//! overall total. The store enforces at most one target per scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetScope;
use super::ids::BudgetTargetId;
use super::money::Money;

/// A spending ceiling for a category or for all spending combined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTarget {
    /// Unique identifier
    pub id: BudgetTargetId,

    /// What the ceiling covers
    pub scope: BudgetScope,

    /// The ceiling amount (always positive)
    pub limit: Money,

    /// When the target was created
    pub created_at: DateTime<Utc>,

    /// When the limit was last changed
    pub updated_at: DateTime<Utc>,
}

impl BudgetTarget {
    /// Create a new target
    pub fn new(scope: BudgetScope, limit: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetTargetId::new(),
            scope,
            limit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the limit, keeping the same identity
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    /// Validate the target
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scope, self.limit)
    }
}

/// Validation errors for budget targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive (got {})", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
