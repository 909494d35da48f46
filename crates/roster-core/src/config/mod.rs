//! Configuration system for Roster.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod database_config;
pub mod roster_config;
pub mod transfer_config;

pub use database_config::DatabaseConfig;
pub use roster_config::{ConfigOverrides, RosterConfig};
pub use transfer_config::{ExportConfig, ImportConfig};
