use chrono::NaiveDate;

use crate::{
    EngineError, ResultEngine, Transaction, TransactionDraft,
    util::{validate_edit, validate_new},
};

use super::Ledger;

impl Ledger {
    /// Validates the add form and appends the new row, dated `today`.
    ///
    /// Returns the position of the new row. Nothing changes on error.
    pub fn add(&mut self, draft: &TransactionDraft, today: NaiveDate) -> ResultEngine<usize> {
        let tx = validate_new(draft, today, &self.currency_symbol).inspect_err(|err| {
            tracing::debug!("add rejected: {err}");
        })?;
        tracing::info!(
            kind = %tx.kind,
            category = %tx.category,
            amount = %tx.amount,
            "transaction added"
        );
        self.transactions.push(tx);
        Ok(self.transactions.len() - 1)
    }

    /// Replaces type, category, amount and notes of the row at `index`.
    ///
    /// The date is kept as it was.
    pub fn edit(&mut self, index: usize, draft: &TransactionDraft) -> ResultEngine<()> {
        if index >= self.transactions.len() {
            return Err(EngineError::RowNotFound(index));
        }
        let patch = validate_edit(draft, &self.currency_symbol).inspect_err(|err| {
            tracing::debug!("edit of row {index} rejected: {err}");
        })?;
        let tx = self
            .transactions
            .get_mut(index)
            .ok_or(EngineError::RowNotFound(index))?;
        tx.apply(patch);
        tracing::info!(index, "transaction updated");
        Ok(())
    }

    /// Removes the row at `index`; later rows move up by one.
    pub fn delete(&mut self, index: usize) -> ResultEngine<Transaction> {
        if index >= self.transactions.len() {
            return Err(EngineError::RowNotFound(index));
        }
        let removed = self.transactions.remove(index);
        tracing::info!(index, "transaction deleted");
        Ok(removed)
    }

    /// Appends already validated rows, e.g. from an import.
    pub fn extend(&mut self, rows: impl IntoIterator<Item = Transaction>) -> usize {
        let before = self.transactions.len();
        self.transactions.extend(rows);
        self.transactions.len() - before
    }
}
