//! Bulk import/export errors.

use super::error_code::{self, RosterErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("{path} has no header line")]
    EmptyFile { path: String },

    #[error("header of {path} is missing the {column} column")]
    MissingColumn { path: String, column: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RosterErrorCode for TransferError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::TRANSFER_ERROR,
        }
    }
}
