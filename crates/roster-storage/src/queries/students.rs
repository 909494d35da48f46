//! student table CRUD queries.
//!
//! Column names in dynamically built statements come from
//! [`Field::column`], never from caller strings.

use roster_core::errors::StorageError;
use roster_core::types::{Field, FieldValue, Student};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SELECT_STUDENT: &str = "SELECT ID, Name, Gender, Enroll_Date,
        English, Math, History, Science, Arts
 FROM student";

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        gender: row.get(2)?,
        enroll_date: row.get(3)?,
        english: row.get(4)?,
        math: row.get(5)?,
        history: row.get(6)?,
        science: row.get(7)?,
        arts: row.get(8)?,
    })
}

/// Get a single student by identifier.
pub fn get_student(conn: &Connection, id: &str) -> Result<Option<Student>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_STUDENT} WHERE ID = ?1"))
        .map_err(sqlite_err)?;
    stmt.query_row(params![id], row_to_student)
        .optional()
        .map_err(sqlite_err)
}

/// Whether a student with this identifier exists.
pub fn exists(conn: &Connection, id: &str) -> Result<bool, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT 1 FROM student WHERE ID = ?1")
        .map_err(sqlite_err)?;
    stmt.exists(params![id]).map_err(sqlite_err)
}

fn student_params(student: &Student) -> [Value; 9] {
    [
        Value::Text(student.id.clone()),
        Value::Text(student.name.clone()),
        Value::Text(student.gender.clone()),
        Value::Text(student.enroll_date.clone()),
        student.english.map_or(Value::Null, Value::Integer),
        student.math.map_or(Value::Null, Value::Integer),
        student.history.map_or(Value::Null, Value::Integer),
        student.science.map_or(Value::Null, Value::Integer),
        student.arts.map_or(Value::Null, Value::Integer),
    ]
}

/// Insert a new row. A conflicting identifier surfaces as a SQLite error;
/// callers check for duplicates first.
pub fn insert_student(conn: &Connection, student: &Student) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO student (
                ID, Name, Gender, Enroll_Date, English, Math, History, Science, Arts
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .map_err(sqlite_err)?;
    stmt.execute(params_from_iter(student_params(student)))
        .map_err(sqlite_err)?;
    Ok(())
}

/// Insert a row unless its identifier already exists.
/// Returns true if the row was written.
pub fn insert_or_ignore(conn: &Connection, student: &Student) -> Result<bool, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR IGNORE INTO student (
                ID, Name, Gender, Enroll_Date, English, Math, History, Science, Arts
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .map_err(sqlite_err)?;
    let changed = stmt
        .execute(params_from_iter(student_params(student)))
        .map_err(sqlite_err)?;
    Ok(changed == 1)
}

fn field_value_param(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::Text(s.clone()),
        FieldValue::Score(n) => Value::Integer(*n),
    }
}

/// Apply several field changes to one row in a single statement.
/// Returns the number of rows changed (0 or 1).
pub fn update_fields(
    conn: &Connection,
    id: &str,
    changes: &[(Field, FieldValue)],
) -> Result<usize, StorageError> {
    if changes.is_empty() {
        return Ok(0);
    }
    let set_clause = changes
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE student SET {set_clause} WHERE ID = ?{}",
        changes.len() + 1
    );

    let mut values: Vec<Value> = changes.iter().map(|(_, v)| field_value_param(v)).collect();
    values.push(Value::Text(id.to_string()));

    conn.execute(&sql, params_from_iter(values))
        .map_err(sqlite_err)
}

/// Delete one row. Returns the number of rows removed.
pub fn delete_student(conn: &Connection, id: &str) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM student WHERE ID = ?1", params![id])
        .map_err(sqlite_err)
}

/// Count all rows.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM student", [], |row| row.get(0))
        .map_err(sqlite_err)
}

/// Load every row in storage order.
pub fn list_all(conn: &Connection) -> Result<Vec<Student>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_STUDENT} ORDER BY rowid"))
        .map_err(sqlite_err)?;
    let rows = stmt.query_map([], row_to_student).map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}
