//! Typed identifiers
//!
//! One UUID newtype per collection so an expense id can never be handed
//! to a budget command. Display renders a short prefixed form for status
//! lines; the full value only travels through serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(BudgetTargetId, "bud-");
define_id!(IncomeStreamId, "inc-");
define_id!(WorkflowId, "wkf-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_short_and_prefixed() {
        let shown = ExpenseId::new().to_string();
        assert!(shown.starts_with("exp-"));
        assert_eq!(shown.len(), 12);

        assert!(WorkflowId::new().to_string().starts_with("wkf-"));
        assert!(BudgetTargetId::new().to_string().starts_with("bud-"));
        assert!(IncomeStreamId::new().to_string().starts_with("inc-"));
    }

    #[test]
    fn test_serde_round_trip() {
        let id = BudgetTargetId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: BudgetTargetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_serializes_as_bare_uuid_string() {
        let id = IncomeStreamId::new();
        let json = serde_json::to_string(&id).unwrap();

        // Transparent newtype: a plain JSON string without the display prefix
        assert!(json.starts_with('"'));
        assert!(!json.contains("inc-"));
    }
}
