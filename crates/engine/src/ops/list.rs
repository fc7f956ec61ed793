use super::Ledger;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Search text plus date order for the history table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Matched case-insensitively against type, category and notes.
    pub search: String,
    pub order: SortOrder,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, order: SortOrder) -> Self {
        Self {
            search: search.into(),
            order,
        }
    }
}

impl Ledger {
    /// Returns the positions of the rows matching `query`, sorted by date.
    ///
    /// The sort is stable and always starts from ledger order, so applying
    /// the same query twice gives the same rows in the same order. Rows with
    /// an unreadable date come last when ascending and first when
    /// descending.
    pub fn query(&self, query: &ListQuery) -> Vec<usize> {
        let needle = query.search.trim().to_lowercase();
        let mut rows: Vec<usize> = self
            .transactions
            .iter()
            .enumerate()
            .filter(|(_, tx)| tx.matches(&needle))
            .map(|(index, _)| index)
            .collect();

        rows.sort_by(|&a, &b| {
            let ord = self.transactions[a]
                .date
                .chronological_cmp(&self.transactions[b].date);
            match query.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        rows
    }

    /// Positions of every row in ledger order.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.transactions.len()).collect()
    }
}
