//! RosterErrorCode trait for boundary conversion.

/// Stable error code strings for callers that render errors
/// (e.g. a request handler choosing a user-facing message).
pub trait RosterErrorCode {
    /// Returns the error code string (e.g., "DUPLICATE_KEY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const TRANSFER_ERROR: &str = "TRANSFER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
