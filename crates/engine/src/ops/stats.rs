use std::collections::BTreeMap;

use crate::{Money, dates::month_name};

use super::Ledger;

/// Usage at or above this share of income is shown as a warning.
pub const WARNING_PERCENT: f64 = 75.0;
/// Usage at or above this share of income is shown as danger.
pub const DANGER_PERCENT: f64 = 90.0;

/// Restricts the dashboard to one month of the year (any year).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Months",
            Self::Month(month) => month_name(month),
        }
    }

    /// All Months → January → … → December → All Months.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Month(1),
            Self::Month(month) if month >= 12 => Self::All,
            Self::Month(month) => Self::Month(month + 1),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Month(12),
            Self::Month(month) if month <= 1 => Self::All,
            Self::Month(month) => Self::Month(month - 1),
        }
    }

    fn includes(self, month: Option<u32>) -> bool {
        match self {
            Self::All => true,
            Self::Month(wanted) => month == Some(wanted),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses, `0.0..=100.0`.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    /// Nothing was spent in the selected period.
    NoExpenses,
    Slices(Vec<CategorySlice>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetStatus {
    NoIncome,
    Healthy,
    Warning,
    Danger,
    OverBudget,
}

/// Everything the statistics tab shows for one month filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub month: MonthFilter,
    /// Expense totals keyed by category, sorted by category name.
    pub expenses_by_category: BTreeMap<String, Money>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub remaining: Money,
    /// `100 × expenses / income`; `None` without income.
    pub percentage_used: Option<f64>,
    pub chart: ChartData,
    pub status: BudgetStatus,
}

impl Dashboard {
    /// Progress bar value, clamped to `0..=100`.
    pub fn progress(&self) -> f64 {
        self.percentage_used.unwrap_or(0.0).clamp(0.0, 100.0)
    }

    /// Line shown under the progress bar.
    pub fn status_line(&self) -> String {
        match (self.status, self.percentage_used) {
            (BudgetStatus::NoIncome, _) | (_, None) => "No income data available".to_string(),
            (BudgetStatus::OverBudget, Some(pct)) => format!("{pct:.1}% - OVER BUDGET!"),
            (_, Some(pct)) => format!("{pct:.1}% of income used"),
        }
    }
}

impl Ledger {
    /// Aggregates income, expenses and per-category spending.
    pub fn dashboard(&self, month: MonthFilter) -> Dashboard {
        let mut expenses_by_category: BTreeMap<String, Money> = BTreeMap::new();
        let mut total_income = Money::ZERO;
        let mut total_expenses = Money::ZERO;

        for tx in self
            .transactions
            .iter()
            .filter(|tx| month.includes(tx.date.month()))
        {
            if tx.is_income() {
                total_income = total_income.saturating_add(tx.amount);
            } else {
                total_expenses = total_expenses.saturating_add(tx.amount);
                let spent = expenses_by_category
                    .entry(tx.category.clone())
                    .or_insert(Money::ZERO);
                *spent = spent.saturating_add(tx.amount);
            }
        }
        expenses_by_category.retain(|_, amount| amount.is_positive());

        let remaining = total_income.saturating_sub(total_expenses);
        let percentage_used = total_income
            .is_positive()
            .then(|| total_expenses.as_f64() / total_income.as_f64() * 100.0);

        let chart = if total_expenses.is_positive() && !expenses_by_category.is_empty() {
            let total = total_expenses.as_f64();
            ChartData::Slices(
                expenses_by_category
                    .iter()
                    .map(|(category, amount)| CategorySlice {
                        category: category.clone(),
                        amount: *amount,
                        percent: amount.as_f64() / total * 100.0,
                    })
                    .collect(),
            )
        } else {
            ChartData::NoExpenses
        };

        let status = match percentage_used {
            None => BudgetStatus::NoIncome,
            Some(_) if remaining.is_negative() => BudgetStatus::OverBudget,
            Some(pct) if pct >= DANGER_PERCENT => BudgetStatus::Danger,
            Some(pct) if pct >= WARNING_PERCENT => BudgetStatus::Warning,
            Some(_) => BudgetStatus::Healthy,
        };

        Dashboard {
            month,
            expenses_by_category,
            total_income,
            total_expenses,
            remaining,
            percentage_used,
            chart,
            status,
        }
    }
}
