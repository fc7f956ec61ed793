//! CSV persistence, import and export.
//!
//! The ledger file always carries the header `Date,Type,Category,Amount,Notes`.
//! Dates are written as `dd Mon yyyy`, amounts as plain decimals.

use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::{
    EngineError, Ledger, LedgerDate, Money, ResultEngine, Transaction, TransactionKind,
    dates::parse_flexible,
    util::check_amount_digits,
};

pub const COLUMNS: [&str; 5] = ["Date", "Type", "Category", "Amount", "Notes"];

const TMP_SUFFIX: &str = "tmp";

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: TransactionKind,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            date: tx.date.to_string(),
            kind: tx.kind,
            category: &tx.category,
            amount: tx.amount.to_string(),
            notes: &tx.notes,
        }
    }
}

/// Column positions resolved from a header row.
struct ColumnMap {
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
    notes: usize,
}

impl ColumnMap {
    /// Headers are trimmed and title-cased before matching, so `date`,
    /// ` AMOUNT ` and `Notes` are all accepted.
    fn from_headers(headers: &StringRecord) -> ResultEngine<Self> {
        let normalized: Vec<String> = headers.iter().map(title_case).collect();
        let find = |name: &str| {
            normalized
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EngineError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            date: find(COLUMNS[0])?,
            kind: find(COLUMNS[1])?,
            category: find(COLUMNS[2])?,
            amount: find(COLUMNS[3])?,
            notes: find(COLUMNS[4])?,
        })
    }
}

fn title_case(raw: &str) -> String {
    raw.trim()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

/// The ledger file backing the application.
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every row of the ledger file.
    ///
    /// A missing file is created with the header only. Dates that cannot be
    /// read are kept verbatim; a bad type or amount is an error naming the
    /// line, and so is an amount with more than six whole digits.
    pub fn load(&self, currency_symbol: &str) -> ResultEngine<Vec<Transaction>> {
        let missing = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => true,
            Err(err) => return Err(err.into()),
        };
        if missing {
            tracing::info!("creating empty ledger at {}", self.path.display());
            write_csv(&self.path, &[])?;
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut transactions = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = line_of(&record);
            let kind = TransactionKind::parse_lenient(field(&record, columns.kind)).ok_or_else(
                || EngineError::InvalidRecord {
                    line,
                    message: format!("unknown type '{}'", field(&record, columns.kind)),
                },
            )?;
            let amount = Money::parse_input(field(&record, columns.amount), currency_symbol)
                .and_then(check_amount_digits)
                .map_err(|err| EngineError::InvalidRecord {
                    line,
                    message: err.to_string(),
                })?;
            transactions.push(Transaction {
                date: LedgerDate::parse_stored(field(&record, columns.date)),
                kind,
                category: field(&record, columns.category).to_string(),
                amount,
                notes: field(&record, columns.notes).to_string(),
            });
        }

        tracing::info!(
            rows = transactions.len(),
            "loaded ledger from {}",
            self.path.display()
        );
        Ok(transactions)
    }

    /// Rewrites the whole file. Data goes to a sibling temporary file first
    /// and is then renamed over the ledger.
    pub fn save(&self, ledger: &Ledger) -> ResultEngine<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".");
        tmp.push(TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);

        write_csv(&tmp, ledger.transactions())?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(rows = ledger.len(), "saved ledger to {}", self.path.display());
        Ok(())
    }
}

fn write_csv(path: &Path, transactions: &[Transaction]) -> ResultEngine<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for tx in transactions {
        writer.serialize(CsvRow::from(tx))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the ledger to a user chosen path, adding `.csv` when the path has
/// no extension. Returns the path actually written.
pub fn export_csv(ledger: &Ledger, path: impl AsRef<Path>) -> ResultEngine<PathBuf> {
    let mut path = path.as_ref().to_path_buf();
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    write_csv(&path, ledger.transactions())?;
    tracing::info!(rows = ledger.len(), "exported ledger to {}", path.display());
    Ok(path)
}

/// Outcome of reading a foreign CSV file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows ready to be appended to the ledger.
    pub transactions: Vec<Transaction>,
    /// Rows skipped for an unknown type, an unreadable date, a non-positive
    /// amount or an empty category.
    pub rejected: usize,
}

/// Reads transactions from an arbitrary CSV file.
///
/// All five columns must be present. An amount that cannot be read aborts
/// the whole import; rows with other problems (including amounts with more
/// than six whole digits) are counted as rejected.
pub fn import_csv(path: impl AsRef<Path>, currency_symbol: &str) -> ResultEngine<ImportReport> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut report = ImportReport::default();
    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let amount = Money::parse_input(field(&record, columns.amount), currency_symbol)
            .map_err(|err| EngineError::InvalidRecord {
                line,
                message: format!("could not read amount: {err}"),
            })?;

        let Some(kind) = TransactionKind::parse_lenient(field(&record, columns.kind)) else {
            tracing::debug!(line, "import: unknown type, row skipped");
            report.rejected += 1;
            continue;
        };
        let Some(date) = parse_flexible(field(&record, columns.date)) else {
            tracing::debug!(line, "import: unreadable date, row skipped");
            report.rejected += 1;
            continue;
        };
        let category = field(&record, columns.category);
        if !amount.is_positive() || check_amount_digits(amount).is_err() || category.is_empty() {
            tracing::debug!(line, "import: invalid amount or category, row skipped");
            report.rejected += 1;
            continue;
        }

        report.transactions.push(Transaction {
            date: LedgerDate::Parsed(date),
            kind,
            category: category.to_string(),
            amount,
            notes: field(&record, columns.notes).to_string(),
        });
    }

    tracing::info!(
        accepted = report.transactions.len(),
        rejected = report.rejected,
        "imported {}",
        path.display()
    );
    Ok(report)
}
