use chrono::NaiveDate;

use engine::{
    BudgetStatus, ChartData, EngineError, Ledger, LedgerDate, ListQuery, Money, MonthFilter,
    SortOrder, Transaction, TransactionDraft, TransactionKind,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(date: &str, kind: TransactionKind, category: &str, cents: i64, notes: &str) -> Transaction {
    Transaction {
        date: LedgerDate::parse_stored(date),
        kind,
        category: category.to_string(),
        amount: Money::new(cents),
        notes: notes.to_string(),
    }
}

fn sample_ledger() -> Ledger {
    use TransactionKind::{Expense, Income};
    Ledger::builder()
        .transactions(vec![
            tx("10 Mar 2026", Income, "Salary", 3_000_000, "March pay"),
            tx("02 Mar 2026", Expense, "Food", 120_050, "groceries"),
            tx("15 Apr 2026", Expense, "Transport", 45_000, "train pass"),
            tx("20 Mar 2026", Expense, "Bills", 600_000, "rent share"),
            tx("not a date", Expense, "Food", 10_000, "street food"),
            tx("05 Mar 2025", Expense, "Food", 30_000, "last year"),
        ])
        .build()
}

#[test]
fn add_appends_validated_row_dated_today() {
    let mut ledger = Ledger::builder().build();
    let index = ledger
        .add(
            &TransactionDraft::new("Expense", " Food ", "₱1,500.25", " dinner "),
            ymd(2026, 10, 16),
        )
        .unwrap();

    assert_eq!(index, 0);
    let row = ledger.get(0).unwrap();
    assert_eq!(row.date, LedgerDate::Parsed(ymd(2026, 10, 16)));
    assert_eq!(row.date.to_string(), "16 Oct 2026");
    assert_eq!(row.kind, TransactionKind::Expense);
    assert_eq!(row.category, "Food");
    assert_eq!(row.amount, Money::new(150_025));
    assert_eq!(row.notes, "dinner");
}

#[test]
fn add_rejects_invalid_input_without_touching_ledger() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();
    let today = ymd(2026, 10, 16);

    let cases = [
        (TransactionDraft::new("", "Food", "10", ""), "Missing Information"),
        (TransactionDraft::new("Expense", "Food", "", ""), "Missing Information"),
        (TransactionDraft::new("Transfer", "Food", "10", ""), "Invalid Type"),
        (TransactionDraft::new("Expense", "Food", "ten", ""), "Invalid Amount"),
        (TransactionDraft::new("Expense", "Food", "0", ""), "Invalid Amount"),
        (TransactionDraft::new("Expense", "Food", "-3", ""), "Invalid Amount"),
        (TransactionDraft::new("Expense", "12345", "10", ""), "Invalid Category"),
        (TransactionDraft::new("Expense", "Food & Co", "10", ""), "Invalid Category"),
    ];
    for (draft, title) in cases {
        let err = ledger.add(&draft, today).unwrap_err();
        assert_eq!(err.title(), title, "{draft:?}");
        assert!(err.is_validation());
    }
    assert_eq!(ledger, before);
}

#[test]
fn edit_keeps_date_and_replaces_the_rest() {
    let mut ledger = sample_ledger();
    ledger
        .edit(1, &TransactionDraft::new("Income", "Refund", "₱99.90", "returned"))
        .unwrap();

    let row = ledger.get(1).unwrap();
    assert_eq!(row.date, LedgerDate::Parsed(ymd(2026, 3, 2)));
    assert_eq!(row.kind, TransactionKind::Income);
    assert_eq!(row.category, "Refund");
    assert_eq!(row.amount, Money::new(9_990));
    assert_eq!(row.notes, "returned");
}

#[test]
fn edit_rejects_bad_amount_and_missing_row() {
    let mut ledger = sample_ledger();
    for amount in ["0", "-1", "abc"] {
        let err = ledger
            .edit(0, &TransactionDraft::new("Income", "Salary", amount, ""))
            .unwrap_err();
        assert_eq!(err.title(), "Invalid Amount");
    }
    assert_eq!(ledger.get(0).unwrap().amount, Money::new(3_000_000));

    assert_eq!(
        ledger.edit(42, &TransactionDraft::new("Income", "Salary", "1", "")),
        Err(EngineError::RowNotFound(42))
    );
}

#[test]
fn delete_shifts_later_rows() {
    let mut ledger = sample_ledger();
    let removed = ledger.delete(1).unwrap();
    assert_eq!(removed.category, "Food");
    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger.get(1).unwrap().category, "Transport");
    assert_eq!(ledger.delete(5), Err(EngineError::RowNotFound(5)));
}

#[test]
fn query_filters_case_insensitively() {
    let ledger = sample_ledger();
    let rows = ledger.query(&ListQuery::new("  FOOD ", SortOrder::Ascending));
    assert_eq!(rows, vec![5, 1, 4]);

    let rows = ledger.query(&ListQuery::new("income", SortOrder::Ascending));
    assert_eq!(rows, vec![0]);

    let rows = ledger.query(&ListQuery::new("pass", SortOrder::Ascending));
    assert_eq!(rows, vec![2]);

    assert!(ledger.query(&ListQuery::new("nothing", SortOrder::Ascending)).is_empty());
}

#[test]
fn query_sorts_by_date_with_raw_dates_at_the_end() {
    let ledger = sample_ledger();
    let asc = ledger.query(&ListQuery::new("", SortOrder::Ascending));
    assert_eq!(asc, vec![5, 1, 0, 3, 2, 4]);

    let desc = ledger.query(&ListQuery::new("", SortOrder::Descending));
    assert_eq!(desc, vec![4, 2, 3, 0, 1, 5]);
}

#[test]
fn query_is_idempotent() {
    let ledger = sample_ledger();
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let query = ListQuery::new("o", order);
        let first = ledger.query(&query);
        let second = ledger.query(&query);
        assert_eq!(first, second);
    }
}

#[test]
fn dashboard_for_all_months() {
    let ledger = sample_ledger();
    let dash = ledger.dashboard(MonthFilter::All);

    assert_eq!(dash.total_income, Money::new(3_000_000));
    assert_eq!(dash.total_expenses, Money::new(805_050));
    assert_eq!(dash.remaining, Money::new(2_194_950));
    assert_eq!(
        dash.expenses_by_category.keys().collect::<Vec<_>>(),
        vec!["Bills", "Food", "Transport"]
    );
    assert_eq!(dash.expenses_by_category["Food"], Money::new(160_050));
    let pct = dash.percentage_used.unwrap();
    assert!((pct - 805_050.0 / 3_000_000.0 * 100.0).abs() < 1e-9);
    assert_eq!(dash.status, BudgetStatus::Healthy);
    assert_eq!(dash.status_line(), "26.8% of income used");
}

#[test]
fn dashboard_month_filter_spans_years_and_skips_raw_dates() {
    let ledger = sample_ledger();
    let dash = ledger.dashboard(MonthFilter::Month(3));

    assert_eq!(dash.total_income, Money::new(3_000_000));
    assert_eq!(dash.expenses_by_category["Food"], Money::new(150_050));
    assert_eq!(dash.expenses_by_category["Bills"], Money::new(600_000));
    assert!(!dash.expenses_by_category.contains_key("Transport"));

    let category_sum: Money = dash.expenses_by_category.values().sum();
    assert_eq!(category_sum, dash.total_expenses);

    let ChartData::Slices(slices) = &dash.chart else {
        panic!("expected slices");
    };
    let share: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((share - 100.0).abs() < 1e-9);
}

#[test]
fn dashboard_without_income_or_expenses() {
    let ledger = sample_ledger();
    let april = ledger.dashboard(MonthFilter::Month(4));
    assert_eq!(april.percentage_used, None);
    assert_eq!(april.status, BudgetStatus::NoIncome);
    assert_eq!(april.status_line(), "No income data available");
    assert_eq!(april.progress(), 0.0);

    let december = ledger.dashboard(MonthFilter::Month(12));
    assert_eq!(december.chart, ChartData::NoExpenses);
    assert_eq!(december.total_expenses, Money::ZERO);
}

#[test]
fn dashboard_budget_thresholds() {
    use TransactionKind::{Expense, Income};
    let status_for = |spent: i64| {
        Ledger::builder()
            .transactions(vec![
                tx("01 Jan 2026", Income, "Salary", 10_000, ""),
                tx("02 Jan 2026", Expense, "Food", spent, ""),
            ])
            .build()
            .dashboard(MonthFilter::All)
    };

    assert_eq!(status_for(7_499).status, BudgetStatus::Healthy);
    assert_eq!(status_for(7_500).status, BudgetStatus::Warning);
    assert_eq!(status_for(9_000).status, BudgetStatus::Danger);
    assert_eq!(status_for(10_000).status, BudgetStatus::Danger);

    let over = status_for(12_500);
    assert_eq!(over.status, BudgetStatus::OverBudget);
    assert_eq!(over.remaining, Money::new(-2_500));
    assert_eq!(over.progress(), 100.0);
    assert_eq!(over.status_line(), "125.0% - OVER BUDGET!");
}

#[test]
fn dashboard_totals_clamp_instead_of_overflowing() {
    use TransactionKind::{Expense, Income};
    let ledger = Ledger::builder()
        .transactions(vec![
            tx("01 Jan 2026", Expense, "Rent", i64::MAX, ""),
            tx("02 Jan 2026", Expense, "Rent", i64::MAX, ""),
            tx("03 Jan 2026", Income, "Salary", 100, ""),
        ])
        .build();

    let dash = ledger.dashboard(MonthFilter::All);
    assert_eq!(dash.total_expenses, Money::new(i64::MAX));
    assert_eq!(dash.expenses_by_category["Rent"], Money::new(i64::MAX));
    assert!(dash.remaining.is_negative());
    assert_eq!(dash.status, BudgetStatus::OverBudget);
}

#[test]
fn month_filter_cycles() {
    let mut filter = MonthFilter::All;
    let mut labels = Vec::new();
    for _ in 0..13 {
        labels.push(filter.label());
        filter = filter.next();
    }
    assert_eq!(filter, MonthFilter::All);
    assert_eq!(labels[1], "January");
    assert_eq!(labels[12], "December");
    assert_eq!(MonthFilter::All.prev(), MonthFilter::Month(12));
    assert_eq!(MonthFilter::Month(1).prev(), MonthFilter::All);
}
