//! Record-level errors raised by insert and update.

use super::error_code::{self, RosterErrorCode};
use super::StorageError;

/// Errors that can occur while writing a single student record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate student ID: {id}")]
    DuplicateKey { id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RecordError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl RosterErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::DuplicateKey { .. } => error_code::DUPLICATE_KEY,
            Self::Storage(e) => e.error_code(),
        }
    }
}
