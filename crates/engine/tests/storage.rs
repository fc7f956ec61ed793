use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use engine::{
    CsvStore, EngineError, Ledger, LedgerDate, Money, MonthFilter, TransactionDraft,
    TransactionKind, export_csv, import_csv,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ledger_with_rows() -> Ledger {
    let mut ledger = Ledger::builder().build();
    ledger
        .add(&TransactionDraft::new("Income", "Salary", "25,000", "October"), ymd(2026, 10, 1))
        .unwrap();
    ledger
        .add(&TransactionDraft::new("Expense", "Food", "₱350.75", ""), ymd(2026, 10, 3))
        .unwrap();
    ledger
        .add(
            &TransactionDraft::new("Expense", "Personal Care", "1200", "haircut, tip"),
            ymd(2026, 10, 16),
        )
        .unwrap();
    ledger
}

#[test]
fn load_creates_missing_file_with_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("transactions.csv");
    let store = CsvStore::new(&path);

    let rows = store.load("₱").unwrap();
    assert!(rows.is_empty());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Date,Type,Category,Amount,Notes\n"
    );
}

#[test]
fn save_writes_header_dates_and_plain_amounts() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("transactions.csv"));
    store.save(&ledger_with_rows()).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Type,Category,Amount,Notes");
    assert_eq!(lines[1], "01 Oct 2026,Income,Salary,25000.00,October");
    assert_eq!(lines[2], "03 Oct 2026,Expense,Food,350.75,");
    assert_eq!(lines[3], "16 Oct 2026,Expense,Personal Care,1200.00,\"haircut, tip\"");
    assert!(!dir.path().join("transactions.csv.tmp").exists());
}

#[test]
fn add_then_reload_returns_the_same_rows() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("transactions.csv"));
    let ledger = ledger_with_rows();
    store.save(&ledger).unwrap();

    let reloaded = Ledger::builder()
        .transactions(store.load("₱").unwrap())
        .build();
    assert_eq!(reloaded.transactions(), ledger.transactions());
}

#[test]
fn load_keeps_unreadable_dates_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.csv");
    fs::write(
        &path,
        "Date,Type,Category,Amount,Notes\n\
         last tuesday,Expense,Food,12.5,\n\
         2026-02-01,Income,Salary,1000.0,\n",
    )
    .unwrap();

    let rows = CsvStore::new(&path).load("₱").unwrap();
    assert_eq!(rows[0].date, LedgerDate::Raw("last tuesday".to_string()));
    assert_eq!(rows[0].amount, Money::new(1_250));
    assert_eq!(rows[1].date, LedgerDate::Parsed(ymd(2026, 2, 1)));

    let ledger = Ledger::builder().transactions(rows).build();
    CsvStore::new(&path).save(&ledger).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("last tuesday,Expense,Food,12.50,"));
    assert!(content.contains("01 Feb 2026,Income,Salary,1000.00,"));
}

#[test]
fn load_reports_bad_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.csv");
    fs::write(
        &path,
        "Date,Type,Category,Amount,Notes\n01 Jan 2026,Gift,Food,10,\n",
    )
    .unwrap();

    let err = CsvStore::new(&path).load("₱").unwrap_err();
    assert!(matches!(err, EngineError::InvalidRecord { line: 2, .. }), "{err:?}");
}

#[test]
fn load_rejects_amounts_past_six_whole_digits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.csv");
    fs::write(
        &path,
        "Date,Type,Category,Amount,Notes
01 Jan 2026,Expense,Food,90000000000000000,
",
    )
    .unwrap();

    let err = CsvStore::new(&path).load("₱").unwrap_err();
    assert!(matches!(err, EngineError::InvalidRecord { line: 2, .. }), "{err:?}");
}

#[test]
fn export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_with_rows();

    let written = export_csv(&ledger, dir.path().join("backup")).unwrap();
    assert_eq!(written, dir.path().join("backup.csv"));

    let report = import_csv(&written, "₱").unwrap();
    assert_eq!(report.rejected, 0);
    assert_eq!(report.transactions, ledger.transactions());
}

#[test]
fn import_normalizes_headers_amounts_and_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.csv");
    fs::write(
        &path,
        " notes ,AMOUNT,category,type,DATE\n\
         coffee,\"₱1,250.50\",Food,expense,2026-03-05\n\
         pay,\"30,000\",Salary,INCOME,03/31/2026\n\
         moved,100,Savings,transfer,2026-03-06\n\
         ?,100,Food,Expense,someday\n\
         zero,0,Food,Expense,2026-03-07\n",
    )
    .unwrap();

    let report = import_csv(&path, "₱").unwrap();
    assert_eq!(report.rejected, 3);
    assert_eq!(report.transactions.len(), 2);

    let coffee = &report.transactions[0];
    assert_eq!(coffee.kind, TransactionKind::Expense);
    assert_eq!(coffee.amount, Money::new(125_050));
    assert_eq!(coffee.date, LedgerDate::Parsed(ymd(2026, 3, 5)));
    assert_eq!(coffee.notes, "coffee");

    let pay = &report.transactions[1];
    assert_eq!(pay.kind, TransactionKind::Income);
    assert_eq!(pay.amount, Money::new(3_000_000));
    assert_eq!(pay.date, LedgerDate::Parsed(ymd(2026, 3, 31)));
}

#[test]
fn import_skips_oversized_amounts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.csv");
    fs::write(
        &path,
        "Date,Type,Category,Amount,Notes
         2026-03-05,Expense,Food,90000000000000000,
         2026-03-06,Expense,Food,90000000000000000,
         2026-03-07,Income,Salary,1000000,
         2026-03-08,Expense,Food,999999.99,
",
    )
    .unwrap();

    let report = import_csv(&path, "₱").unwrap();
    assert_eq!(report.rejected, 3);
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].amount, Money::new(99_999_999));

    let mut ledger = Ledger::builder().build();
    ledger.extend(report.transactions);
    let dash = ledger.dashboard(MonthFilter::All);
    assert_eq!(dash.total_expenses, Money::new(99_999_999));
}

#[test]
fn import_aborts_on_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    fs::write(&path, "Date,Type,Category,Amount\n2026-03-05,Expense,Food,10\n").unwrap();

    assert_eq!(
        import_csv(&path, "₱").unwrap_err(),
        EngineError::MissingColumn("Notes".to_string())
    );
}

#[test]
fn import_aborts_on_unreadable_amount() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(
        &path,
        "Date,Type,Category,Amount,Notes\n\
         2026-03-05,Expense,Food,10,\n\
         2026-03-06,Expense,Food,ten pesos,\n",
    )
    .unwrap();

    let err = import_csv(&path, "₱").unwrap_err();
    assert!(matches!(err, EngineError::InvalidRecord { line: 3, .. }), "{err:?}");
}

#[test]
fn import_of_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(import_csv(dir.path().join("nope.csv"), "₱").is_err());
}
