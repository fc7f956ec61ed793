//! Transaction primitives.
//!
//! A `Transaction` is one income or expense record of the ledger.

use std::fmt;

use serde::Serialize;

use crate::{EngineError, LedgerDate, Money, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [Self::Income, Self::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Lenient parse used for imported files: `income`, ` EXPENSE ` and the
    /// like are accepted.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse used by the forms and the ledger file.
impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ => Err(EngineError::InvalidType(
                "Type must be either Income or Expense.".to_string(),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub date: LedgerDate,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub notes: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Case-insensitive match of an already lower-cased needle against type,
    /// category and notes.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.kind.as_str().to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.notes.to_lowercase().contains(needle)
    }

    pub(crate) fn apply(&mut self, patch: TransactionPatch) {
        self.kind = patch.kind;
        self.category = patch.category;
        self.amount = patch.amount;
        self.notes = patch.notes;
    }
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub notes: String,
}

impl TransactionDraft {
    pub fn new(
        kind: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            category: category.into(),
            amount: amount.into(),
            notes: notes.into(),
        }
    }

    /// Prefills an edit form from an existing row.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            kind: tx.kind.as_str().to_string(),
            category: tx.category.clone(),
            amount: tx.amount.to_string(),
            notes: tx.notes.clone(),
        }
    }
}

/// The editable part of a transaction; the date never changes after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionPatch {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub notes: String,
}

pub(crate) fn kind_from_form(value: &str) -> ResultEngine<TransactionKind> {
    TransactionKind::try_from(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_kind_parse() {
        assert_eq!(TransactionKind::try_from("Income"), Ok(TransactionKind::Income));
        assert!(TransactionKind::try_from("income").is_err());
        assert!(TransactionKind::try_from("Refund").is_err());
    }

    #[test]
    fn lenient_kind_parse() {
        assert_eq!(
            TransactionKind::parse_lenient(" EXPENSE "),
            Some(TransactionKind::Expense)
        );
        assert_eq!(TransactionKind::parse_lenient("transfer"), None);
    }

    #[test]
    fn matches_type_category_and_notes() {
        let tx = Transaction {
            date: LedgerDate::Raw("x".to_string()),
            kind: TransactionKind::Expense,
            category: "Groceries".to_string(),
            amount: Money::new(100),
            notes: "Weekly Market run".to_string(),
        };
        assert!(tx.matches(""));
        assert!(tx.matches("exp"));
        assert!(tx.matches("grocer"));
        assert!(tx.matches("market"));
        assert!(!tx.matches("income"));
    }
}
