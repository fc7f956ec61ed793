//! Personal finance ledger engine.
//!
//! Holds the transactions of one user, validates what gets typed into the
//! forms, answers the history table queries, aggregates the dashboard and
//! reads/writes the CSV ledger file.

pub use dates::{DATE_FORMAT, LedgerDate, month_name, parse_flexible};
pub use error::EngineError;
pub use money::{DEFAULT_SYMBOL, Money};
pub use ops::{
    BudgetStatus, CategorySlice, ChartData, Dashboard, Ledger, LedgerBuilder, ListQuery,
    MonthFilter, SortOrder,
};
pub use storage::{COLUMNS, CsvStore, ImportReport, export_csv, import_csv};
pub use transactions::{Transaction, TransactionDraft, TransactionKind, TransactionPatch};

mod dates;
mod error;
mod money;
mod ops;
mod storage;
mod transactions;
mod util;

/// Longest accepted category, in characters.
pub const MAX_CATEGORY_LEN: usize = 20;
/// Longest accepted note, in characters.
pub const MAX_NOTES_LEN: usize = 50;
/// Most digits accepted before the decimal point of a typed amount.
pub const MAX_AMOUNT_DIGITS: usize = 6;

type ResultEngine<T> = Result<T, EngineError>;
