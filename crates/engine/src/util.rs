//! Internal helpers for form validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! rules so the add and edit paths enforce the same invariants.

use chrono::NaiveDate;

use crate::{
    EngineError, LedgerDate, MAX_AMOUNT_DIGITS, MAX_CATEGORY_LEN, MAX_NOTES_LEN, Money,
    ResultEngine, Transaction, TransactionDraft, TransactionPatch, transactions::kind_from_form,
};

/// Validate a new row typed in the add form. The row is dated `today`.
pub(crate) fn validate_new(
    draft: &TransactionDraft,
    today: NaiveDate,
    symbol: &str,
) -> ResultEngine<Transaction> {
    let kind_raw = draft.kind.trim();
    let category = draft.category.trim();
    let amount_raw = draft.amount.trim();

    if kind_raw.is_empty() {
        return Err(EngineError::MissingField("type"));
    }
    if category.is_empty() {
        return Err(EngineError::MissingField("category"));
    }
    if amount_raw.is_empty() {
        return Err(EngineError::MissingField("amount"));
    }

    let kind = kind_from_form(kind_raw)?;
    let amount = validate_amount(amount_raw, symbol)?;
    validate_category(category)?;
    let notes = validate_notes(&draft.notes)?;

    Ok(Transaction {
        date: LedgerDate::Parsed(today),
        kind,
        category: category.to_string(),
        amount,
        notes,
    })
}

/// Validate the edit popup. Type comes from a fixed selector, the rest is
/// checked like the add form.
pub(crate) fn validate_edit(draft: &TransactionDraft, symbol: &str) -> ResultEngine<TransactionPatch> {
    let kind = kind_from_form(&draft.kind)?;
    let amount = validate_amount(&draft.amount, symbol)?;
    let category = draft.category.trim();
    if category.is_empty() {
        return Err(EngineError::MissingField("category"));
    }
    validate_category(category)?;
    let notes = validate_notes(&draft.notes)?;

    Ok(TransactionPatch {
        kind,
        category: category.to_string(),
        amount,
        notes,
    })
}

/// Amount must be numeric, strictly positive and at most six whole digits.
pub(crate) fn validate_amount(raw: &str, symbol: &str) -> ResultEngine<Money> {
    let amount = Money::parse_input(raw, symbol)?;
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(
            "Amount must be greater than zero.".to_string(),
        ));
    }
    check_amount_digits(amount)
}

/// At most six digits before the decimal point, whatever the sign. Also
/// applied to rows read from files.
pub(crate) fn check_amount_digits(amount: Money) -> ResultEngine<Money> {
    if amount.whole_units().to_string().len() > MAX_AMOUNT_DIGITS {
        return Err(EngineError::InvalidAmount(format!(
            "Amount can have at most {MAX_AMOUNT_DIGITS} digits before the decimal point."
        )));
    }
    Ok(amount)
}

/// Letters, digits, spaces and hyphens only; never only digits.
pub(crate) fn validate_category(category: &str) -> ResultEngine<()> {
    if category.is_empty()
        || !category
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(EngineError::InvalidCategory(
            "Category cannot contain symbols.\nAllowed: letters, numbers, spaces, hyphens."
                .to_string(),
        ));
    }
    if category.chars().all(|c| c.is_ascii_digit()) {
        return Err(EngineError::InvalidCategory(
            "Category cannot contain only numbers.".to_string(),
        ));
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(EngineError::InvalidCategory(format!(
            "Category cannot be longer than {MAX_CATEGORY_LEN} characters."
        )));
    }
    Ok(())
}

pub(crate) fn validate_notes(notes: &str) -> ResultEngine<String> {
    let notes = notes.trim();
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(EngineError::InvalidNotes(format!(
            "Notes cannot be longer than {MAX_NOTES_LEN} characters."
        )));
    }
    Ok(notes.to_string())
}
