//! Read-only subject statistics over the student table.
//!
//! Every function takes a caller-supplied connection so several subjects can
//! be computed inside one connection scope. Scores are INTEGER columns, so
//! MAX and MIN compare numerically (9 < 88). NULL scores are ignored; a
//! subject with no scores yields `None`.

use roster_core::errors::StorageError;
use roster_core::types::Subject;
use rusqlite::Connection;
use serde::Serialize;

/// Max, min and mean of one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStats {
    pub subject: Subject,
    pub max: i64,
    pub min: i64,
    /// Arithmetic mean rounded to two decimal places.
    pub average: f64,
    /// Number of rows with a score for this subject.
    pub count: i64,
}

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn aggregate<T: rusqlite::types::FromSql>(
    conn: &Connection,
    function: &str,
    subject: Subject,
) -> Result<Option<T>, StorageError> {
    let sql = format!("SELECT {function}({}) FROM student", subject.column());
    let mut stmt = conn.prepare_cached(&sql).map_err(sqlite_err)?;
    stmt.query_row([], |row| row.get::<_, Option<T>>(0))
        .map_err(sqlite_err)
}

/// Largest score for the subject.
pub fn max_score(conn: &Connection, subject: Subject) -> Result<Option<i64>, StorageError> {
    aggregate(conn, "MAX", subject)
}

/// Smallest score for the subject.
pub fn min_score(conn: &Connection, subject: Subject) -> Result<Option<i64>, StorageError> {
    aggregate(conn, "MIN", subject)
}

/// Mean score for the subject, rounded to two decimals.
pub fn avg_score(conn: &Connection, subject: Subject) -> Result<Option<f64>, StorageError> {
    Ok(aggregate::<f64>(conn, "AVG", subject)?.map(round2))
}

/// All three statistics for one subject in a single query.
pub fn subject_stats(
    conn: &Connection,
    subject: Subject,
) -> Result<Option<SubjectStats>, StorageError> {
    let column = subject.column();
    let sql = format!(
        "SELECT MAX({column}), MIN({column}), AVG({column}), COUNT({column}) FROM student"
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(sqlite_err)?;
    let (max, min, avg, count) = stmt
        .query_row([], |row| {
            Ok((
                row.get::<_, Option<i64>>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, Option<f64>>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(sqlite_err)?;

    Ok(match (max, min, avg) {
        (Some(max), Some(min), Some(avg)) => Some(SubjectStats {
            subject,
            max,
            min,
            average: round2(avg),
            count,
        }),
        _ => None,
    })
}

/// Statistics for every subject that has at least one score, in subject order.
pub fn all_subject_stats(conn: &Connection) -> Result<Vec<SubjectStats>, StorageError> {
    let mut out = Vec::with_capacity(Subject::ALL.len());
    for subject in Subject::ALL {
        if let Some(stats) = subject_stats(conn, subject)? {
            out.push(stats);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(87.8), 87.8);
        assert_eq!(round2(88.333_333), 88.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }
}
