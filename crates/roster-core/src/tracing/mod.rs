//! Tracing setup for Roster.

pub mod setup;

pub use setup::init_tracing;
