//! V001: the student table.
//!
//! Columns are declared in export order. Scores are INTEGER so that
//! MAX/MIN compare numerically; NULL marks a score that was not supplied.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    ID TEXT PRIMARY KEY NOT NULL,
    Name TEXT NOT NULL DEFAULT '',
    Gender TEXT NOT NULL DEFAULT '',
    Enroll_Date TEXT NOT NULL DEFAULT '',
    English INTEGER,
    Math INTEGER,
    History INTEGER,
    Science INTEGER,
    Arts INTEGER
) STRICT;
"#;
