//! Error handling for Roster.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod record_error;
pub mod roster_error;
pub mod storage_error;
pub mod transfer_error;

pub use config_error::ConfigError;
pub use error_code::RosterErrorCode;
pub use record_error::RecordError;
pub use roster_error::RosterError;
pub use storage_error::StorageError;
pub use transfer_error::TransferError;
