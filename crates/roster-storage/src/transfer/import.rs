//! Import student rows from TSV.
//!
//! Line 1 names the columns; each later line maps positionally onto those
//! names. A short line drops its trailing fields (text becomes empty, scores
//! become NULL) and values past the last header are ignored. Rows whose
//! identifier already exists are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use roster_core::errors::TransferError;
use roster_core::types::{Field, Student};
use rusqlite::Connection;

use crate::connection::writer::with_immediate_transaction;
use crate::queries::students;

/// Counts reported by one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written.
    pub inserted: usize,
    /// Rows whose identifier was already present.
    pub duplicates: usize,
    /// Blank lines and lines without an identifier.
    pub skipped_lines: usize,
}

/// Records parsed from a TSV source, before any write.
#[derive(Debug, Clone, Default)]
pub struct ParsedTsv {
    pub records: Vec<Student>,
    pub skipped_lines: usize,
}

/// Parse TSV text. `source` names the input in errors and logs.
pub fn parse_tsv<R: BufRead>(reader: R, source: &str) -> Result<ParsedTsv, TransferError> {
    let io_err = |e: std::io::Error| TransferError::Io {
        path: source.to_string(),
        message: e.to_string(),
    };

    let mut lines = reader.lines();
    let header_line = match lines.next() {
        Some(line) => line.map_err(io_err)?,
        None => {
            return Err(TransferError::EmptyFile {
                path: source.to_string(),
            })
        }
    };

    let header: Vec<Option<Field>> = strip_line_end(&header_line)
        .split('\t')
        .map(|name| {
            let field = Field::from_name(name);
            if field.is_none() {
                tracing::warn!(source, column = name, "ignoring unknown column");
            }
            field
        })
        .collect();
    if !header.contains(&Some(Field::Id)) {
        return Err(TransferError::MissingColumn {
            path: source.to_string(),
            column: Field::Id.column().to_string(),
        });
    }

    let mut parsed = ParsedTsv::default();
    for (idx, line) in lines.enumerate() {
        let line = line.map_err(io_err)?;
        let line_no = idx + 2;
        let line = strip_line_end(&line);
        if line.trim().is_empty() {
            parsed.skipped_lines += 1;
            continue;
        }

        let record = parse_record(&header, line, source, line_no);
        if record.id.trim().is_empty() {
            tracing::warn!(source, line = line_no, "skipping row without an ID");
            parsed.skipped_lines += 1;
            continue;
        }
        parsed.records.push(record);
    }
    Ok(parsed)
}

fn strip_line_end(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn parse_record(header: &[Option<Field>], line: &str, source: &str, line_no: usize) -> Student {
    let mut record = Student::default();
    for (field, raw) in header.iter().zip(line.split('\t')) {
        let Some(field) = *field else { continue };
        if field.is_score() && raw.trim().is_empty() {
            continue;
        }
        match field.parse_value(raw) {
            Ok(value) => record.apply(field, value),
            Err(e) => {
                tracing::warn!(source, line = line_no, error = %e, "storing NULL for unusable score");
            }
        }
    }
    record
}

/// Insert parsed records with conflict-skip, all in one transaction.
pub fn insert_parsed(conn: &Connection, parsed: &ParsedTsv) -> Result<ImportSummary, TransferError> {
    with_immediate_transaction(conn, |tx| {
        let mut summary = ImportSummary {
            skipped_lines: parsed.skipped_lines,
            ..Default::default()
        };
        for record in &parsed.records {
            if students::insert_or_ignore(tx, record)? {
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }
        Ok(summary)
    })
}

/// Bulk-import a TSV file into the student table.
pub fn import_tsv(conn: &Connection, path: &Path) -> Result<ImportSummary, TransferError> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| TransferError::Io {
        path: source.clone(),
        message: e.to_string(),
    })?;
    let parsed = parse_tsv(BufReader::new(file), &source)?;
    let summary = insert_parsed(conn, &parsed)?;

    tracing::info!(
        path = %source,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        skipped = summary.skipped_lines,
        "imported students"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ID\tName\tGender\tEnroll_Date\tEnglish\tMath\tHistory\tScience\tArts";

    #[test]
    fn short_line_drops_trailing_fields() {
        let text = format!("{HEADER}\n7\tAda\tFemale\n");
        let parsed = parse_tsv(text.as_bytes(), "mem").unwrap();
        assert_eq!(parsed.records.len(), 1);
        let ada = &parsed.records[0];
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.enroll_date, "");
        assert_eq!(ada.math, None);
    }

    #[test]
    fn extra_values_are_ignored() {
        let text = format!("{HEADER}\n7\tAda\tFemale\t1-2-2020\t1\t2\t3\t4\t5\t6\t7\n");
        let parsed = parse_tsv(text.as_bytes(), "mem").unwrap();
        assert_eq!(parsed.records[0].arts, Some(5));
    }

    #[test]
    fn header_order_is_positional() {
        let text = "Math\tID\tName\n91\t3\tBo\r\n";
        let parsed = parse_tsv(text.as_bytes(), "mem").unwrap();
        let bo = &parsed.records[0];
        assert_eq!(bo.id, "3");
        assert_eq!(bo.name, "Bo");
        assert_eq!(bo.math, Some(91));
    }

    #[test]
    fn unusable_score_becomes_null() {
        let text = format!("{HEADER}\n9\tEve\tFemale\t1-1-2021\tInvalidGrade\t80\t80\t80\t80\n");
        let parsed = parse_tsv(text.as_bytes(), "mem").unwrap();
        assert_eq!(parsed.records[0].english, None);
        assert_eq!(parsed.records[0].math, Some(80));
    }

    #[test]
    fn blank_lines_and_missing_ids_are_skipped() {
        let text = format!("{HEADER}\n\n\tNoId\n1\tA\n");
        let parsed = parse_tsv(text.as_bytes(), "mem").unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped_lines, 2);
    }

    #[test]
    fn header_without_id_is_rejected() {
        let err = parse_tsv("Name\tMath\nA\t1\n".as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, TransferError::MissingColumn { ref column, .. } if column == "ID"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_tsv("".as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, TransferError::EmptyFile { .. }));
    }
}
