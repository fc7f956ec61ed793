//! The module contains the errors the engine can throw.
//!
//! Validation errors are meant to be shown to the user as they are, so each
//! of them carries an alert title (see [`EngineError::title`]):
//!
//! - [`MissingField`] thrown when a required form field is empty.
//! - [`InvalidType`] thrown when the type is neither income nor expense.
//! - [`InvalidAmount`] thrown when an amount is not numeric or not positive.
//! - [`InvalidCategory`] thrown when a category breaks the naming rules.
//!
//! The remaining variants come from storage and row lookups.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidType`]: EngineError::InvalidType
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidCategory`]: EngineError::InvalidCategory
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Please fill in all required fields!")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidType(String),
    #[error("{0}")]
    InvalidAmount(String),
    #[error("{0}")]
    InvalidCategory(String),
    #[error("{0}")]
    InvalidNotes(String),
    #[error("row {0} not found")]
    RowNotFound(usize),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Short heading used when the error is presented in an alert.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Missing Information",
            Self::InvalidType(_) => "Invalid Type",
            Self::InvalidAmount(_) => "Invalid Amount",
            Self::InvalidCategory(_) => "Invalid Category",
            Self::InvalidNotes(_) => "Invalid Notes",
            Self::RowNotFound(_) => "No selection",
            Self::MissingColumn(_) => "Invalid CSV",
            Self::InvalidRecord { .. } | Self::Csv(_) | Self::Io(_) => "Error",
        }
    }

    /// Returns `true` for errors caused by user input rather than I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidType(_)
                | Self::InvalidAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidNotes(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::InvalidType(a), Self::InvalidType(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::InvalidNotes(a), Self::InvalidNotes(b)) => a == b,
            (Self::RowNotFound(a), Self::RowNotFound(b)) => a == b,
            (Self::MissingColumn(a), Self::MissingColumn(b)) => a == b,
            (
                Self::InvalidRecord {
                    line: la,
                    message: ma,
                },
                Self::InvalidRecord {
                    line: lb,
                    message: mb,
                },
            ) => la == lb && ma == mb,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
