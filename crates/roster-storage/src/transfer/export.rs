//! Export the student table to TSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use roster_core::errors::{StorageError, TransferError};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

fn render(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(n) => n.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

/// Write every row to `out`: header from the table's column metadata, then
/// one line per row in storage order. Returns the number of rows written.
pub fn write_tsv<W: Write>(conn: &Connection, out: &mut W) -> Result<usize, TransferError> {
    let io_err = |e: std::io::Error| TransferError::Io {
        path: "<writer>".to_string(),
        message: e.to_string(),
    };

    let mut stmt = conn
        .prepare("SELECT * FROM student ORDER BY rowid")
        .map_err(sqlite_err)?;
    let header = stmt.column_names().join("\t");
    let width = stmt.column_count();
    writeln!(out, "{header}").map_err(io_err)?;

    let mut rows = stmt.query([]).map_err(sqlite_err)?;
    let mut written = 0;
    while let Some(row) = rows.next().map_err(sqlite_err)? {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            cells.push(render(row.get_ref(i).map_err(sqlite_err)?));
        }
        writeln!(out, "{}", cells.join("\t")).map_err(io_err)?;
        written += 1;
    }
    Ok(written)
}

/// Export the student table to a TSV file at `path`.
pub fn export_tsv(conn: &Connection, path: &Path) -> Result<usize, TransferError> {
    let io_err = |e: std::io::Error| TransferError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let written = write_tsv(conn, &mut out).map_err(|e| match e {
        TransferError::Io { message, .. } => TransferError::Io {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;
    out.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), rows = written, "exported student table");
    Ok(written)
}
