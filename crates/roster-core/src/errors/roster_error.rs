//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::RosterErrorCode;
use super::{ConfigError, RecordError, StorageError, TransferError};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RosterErrorCode for RosterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Transfer(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
