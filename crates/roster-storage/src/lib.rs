//! # roster-storage
//!
//! SQLite persistence for student records.
//! Connection management, schema migrations, record queries, TSV transfer,
//! and per-subject statistics.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod stats;
pub mod store;
pub mod transfer;

pub use connection::DatabaseManager;
pub use stats::SubjectStats;
pub use store::RecordStore;
pub use transfer::ImportSummary;
