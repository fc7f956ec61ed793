use crate::{Transaction, money::DEFAULT_SYMBOL};

mod list;
mod stats;
mod transactions;

pub use list::{ListQuery, SortOrder};
pub use stats::{BudgetStatus, CategorySlice, ChartData, Dashboard, MonthFilter};

/// The in-memory ledger: every transaction, in insertion order.
///
/// Row positions are the handles used by edit and delete; deleting a row
/// shifts the ones after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    currency_symbol: String,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Symbol stripped from typed amounts besides `₱`.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

pub struct LedgerBuilder {
    transactions: Vec<Transaction>,
    currency_symbol: String,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            currency_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl LedgerBuilder {
    /// Rows loaded from storage.
    pub fn transactions(mut self, transactions: Vec<Transaction>) -> LedgerBuilder {
        self.transactions = transactions;
        self
    }

    /// Currency symbol accepted in typed amounts.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> LedgerBuilder {
        self.currency_symbol = symbol.into();
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            transactions: self.transactions,
            currency_symbol: self.currency_symbol,
        }
    }
}
