// errors.rs
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use validator::ValidationErrors;

/// Errors originating from either the view logic
/// (bad criteria, malformed records) or downstream layers (DB, XLSX, IO).
#[derive(Error, Debug)]
pub enum LockerError {
    #[error("Not Found")]
    NotFound,

    /// A closed-enumeration value (sort key, category, status) was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A date or amount could not be parsed, or a record broke its invariants.
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Error")]
    InternalError,
}

pub type Result<T, E = LockerError> = std::result::Result<T, E>;

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(pub BTreeMap<String, String>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        // First error per field wins.
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errs: &ValidationErrors) -> Self {
        let mut out = FormErrors::default();
        for (field, list) in errs.field_errors() {
            for e in list.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}
