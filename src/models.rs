//! Ledger Models
//!
//! Data structures persisted in browser storage.

use serde::{Deserialize, Serialize};

use crate::error::{Field, ValidationError};
use crate::modal::Modal;

/// Which side of the ledger a transaction falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

/// Categories offered by the expense form
pub const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("food", "Food"),
    ("transport", "Transport"),
    ("housing", "Housing"),
    ("health", "Health"),
    ("entertainment", "Entertainment"),
    ("other", "Other"),
];

/// A recorded income or expense.
///
/// Field names on the wire match what earlier versions of the app wrote to
/// `localStorage`, so existing data keeps loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transactionName")]
    pub name: String,
    #[serde(rename = "transactionAmount")]
    pub amount: f64,
    #[serde(rename = "transactionType", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Creation time in epoch milliseconds
    #[serde(rename = "date")]
    pub created_at: i64,
}

/// Raw form input, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: String,
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validate every field and build the transaction.
    ///
    /// All failing fields are reported together. A blank category is treated
    /// as absent.
    pub fn validate(&self, modal: Modal, created_at: i64) -> Result<Transaction, ValidationError> {
        let mut failed = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            failed.push(Field::Name);
        }

        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            failed.push(Field::Amount);
        }

        let kind = modal.kind();
        if kind.is_none() {
            failed.push(Field::Kind);
        }

        match (amount, kind) {
            (Some(amount), Some(kind)) if failed.is_empty() => Ok(Transaction {
                name: name.to_string(),
                amount,
                category: self
                    .category
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
                kind,
                created_at,
            }),
            _ => Err(ValidationError { fields: failed }),
        }
    }
}

/// Parse a positive, finite amount
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(Kind::parse(Kind::Income.as_str()), Some(Kind::Income));
        assert_eq!(Kind::parse("expense"), Some(Kind::Expense));
        assert_eq!(Kind::parse("Income"), None);
    }

    #[test]
    fn test_validate_trims_name_and_blank_category() {
        let draft = TransactionDraft::new("  Salary ", "5000000").with_category("   ");
        let transaction = draft.validate(Modal::Income, 42).unwrap();
        assert_eq!(transaction.name, "Salary");
        assert_eq!(transaction.amount, 5_000_000.0);
        assert_eq!(transaction.category, None);
        assert_eq!(transaction.kind, Kind::Income);
        assert_eq!(transaction.created_at, 42);
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        for amount in ["0", "-5", "abc", "", "NaN", "inf", "  "] {
            let err = TransactionDraft::new("Lunch", amount)
                .validate(Modal::Expense, 0)
                .unwrap_err();
            assert_eq!(err.fields, vec![Field::Amount], "amount {:?}", amount);
        }
    }

    #[test]
    fn test_validate_collects_every_field() {
        let err = TransactionDraft::new(" ", "0").validate(Modal::Closed, 0).unwrap_err();
        assert_eq!(err.fields, vec![Field::Name, Field::Amount, Field::Kind]);
    }

    #[test]
    fn test_wire_format_matches_stored_data() {
        let stored = r#"{"transactionName":"Bus","transactionType":"transport","transactionAmount":2500,"type":"expense","date":1700000000000}"#;
        let transaction: Transaction = serde_json::from_str(stored).unwrap();
        assert_eq!(transaction.name, "Bus");
        assert_eq!(transaction.category.as_deref(), Some("transport"));
        assert_eq!(transaction.kind, Kind::Expense);
        assert_eq!(transaction.created_at, 1_700_000_000_000);

        let income = Transaction {
            name: "Salary".to_string(),
            amount: 100.0,
            category: None,
            kind: Kind::Income,
            created_at: 1,
        };
        let json = serde_json::to_string(&income).unwrap();
        assert!(!json.contains("transactionType"));
        assert!(json.contains(r#""type":"income""#));
    }
}
