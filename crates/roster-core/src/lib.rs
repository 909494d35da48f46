//! # roster-core
//!
//! Foundation crate for the Roster student record store.
//! Defines the record types, field allow-list, errors, config, and tracing setup.
//! The storage crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::RosterConfig;
pub use errors::{RecordError, RosterError, StorageError, TransferError};
pub use types::{DeleteOutcome, Field, FieldMap, FieldValue, Student, Subject, UpdateOutcome};
