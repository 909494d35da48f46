//! Shared constants.

/// Display and parse format of `Enroll_Date`, e.g. `9-1-2022`.
pub const ENROLL_DATE_FORMAT: &str = "%m-%d-%Y";

/// Project config file looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "roster.toml";

/// Default size of the read connection pool for file-backed stores.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Default export target when the caller does not name one.
pub const DEFAULT_EXPORT_PATH: &str = "new_student.tsv";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";
