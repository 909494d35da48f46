//! RecordStore — owns the DatabaseManager and exposes the student record
//! operations: CRUD, bulk import/export, and connection scopes for statistics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use roster_core::config::RosterConfig;
use roster_core::errors::{RecordError, RosterError, StorageError, TransferError};
use roster_core::types::{DeleteOutcome, Field, FieldMap, FieldValue, Student, Subject, UpdateOutcome};
use rusqlite::Connection;

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::students;
use crate::stats::{self, SubjectStats};
use crate::transfer::{self, ImportSummary};

/// The student record store.
pub struct RecordStore {
    db: DatabaseManager,
    default_export_path: PathBuf,
}

impl RecordStore {
    /// Open the store described by `config`, then import the configured seed
    /// file if there is one.
    pub fn open(config: &RosterConfig) -> Result<Self, RosterError> {
        RosterConfig::validate(config)?;
        let db = match &config.database.path {
            Some(path) => DatabaseManager::open(path, config.database.effective_read_pool_size())?,
            None => DatabaseManager::open_in_memory()?,
        };
        let store = Self {
            db,
            default_export_path: config.export.effective_default_path(),
        };

        if let Some(seed) = &config.import.seed_file {
            store.import_tsv(seed)?;
        }
        Ok(store)
    }

    /// Open a file-backed store with default settings.
    pub fn open_path(path: &Path) -> Result<Self, StorageError> {
        let config = RosterConfig::for_database(path);
        Ok(Self {
            db: DatabaseManager::open(path, config.database.effective_read_pool_size())?,
            default_export_path: config.export.effective_default_path(),
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
            default_export_path: RosterConfig::default().export.effective_default_path(),
        })
    }

    /// Ensure the schema exists. Idempotent; opening already does this.
    pub fn initialize(&self) -> Result<(), StorageError> {
        self.db.with_writer(crate::migrations::run_migrations)
    }

    /// Get a reference to the database manager (for advanced operations).
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Run `f` against a read connection. The connection is released when
    /// `f` returns, on success or failure.
    ///
    /// In-memory stores serve reads from the writer connection while holding
    /// its lock, so `f` must not call back into this store; it would
    /// deadlock. Use the `&Connection` it is given instead.
    pub fn with_connection<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        self.db.with_reader(f)
    }

    pub fn get(&self, id: &str) -> Result<Option<Student>, StorageError> {
        self.db.with_reader(|conn| students::get_student(conn, id))
    }

    pub fn exists(&self, id: &str) -> Result<bool, StorageError> {
        self.db.with_reader(|conn| students::exists(conn, id))
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        self.db.with_reader(students::count)
    }

    pub fn list_all(&self) -> Result<Vec<Student>, StorageError> {
        self.db.with_reader(students::list_all)
    }

    /// Validate loose form input and insert it as a new student.
    pub fn insert(&self, fields: &FieldMap) -> Result<(), RecordError> {
        let student = Student::from_field_map(fields)?;
        self.insert_student(&student)
    }

    /// Insert a typed record. The duplicate check runs in the same
    /// transaction as the write, before it.
    pub fn insert_student(&self, student: &Student) -> Result<(), RecordError> {
        student.validate()?;
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                if students::exists(tx, &student.id)? {
                    return Err(RecordError::DuplicateKey {
                        id: student.id.clone(),
                    });
                }
                students::insert_student(tx, student)?;
                Ok::<(), RecordError>(())
            })
        })?;
        tracing::debug!(id = %student.id, "inserted student");
        Ok(())
    }

    /// Update named fields of one student.
    ///
    /// Field names are resolved through the field allow-list; the identifier
    /// cannot be changed. When every proposed value already matches the
    /// stored one nothing is written.
    pub fn update(&self, id: &str, updates: &[(&str, &str)]) -> Result<UpdateOutcome, RecordError> {
        let changes = resolve_updates(updates)?;
        if id.is_empty() {
            return Ok(UpdateOutcome::NotFound);
        }

        let outcome = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let Some(current) = students::get_student(tx, id)? else {
                    return Ok(UpdateOutcome::NotFound);
                };
                let unchanged = changes
                    .iter()
                    .all(|(field, value)| current.text(*field) == value.render());
                if unchanged {
                    return Ok(UpdateOutcome::NoChange);
                }
                students::update_fields(tx, id, &changes)?;
                Ok::<_, RecordError>(UpdateOutcome::Updated)
            })
        })?;

        tracing::debug!(id, ?outcome, "update requested");
        Ok(outcome)
    }

    /// Delete one student and confirm the row is gone.
    pub fn delete(&self, id: &str) -> Result<DeleteOutcome, StorageError> {
        self.db.with_writer(|conn| {
            if !students::exists(conn, id)? {
                return Ok(DeleteOutcome::NotFound);
            }
            students::delete_student(conn, id)?;
            if students::exists(conn, id)? {
                return Err(StorageError::DeleteNotVerified { id: id.to_string() });
            }
            tracing::debug!(id, "deleted student");
            Ok(DeleteOutcome::Deleted)
        })
    }

    /// Bulk-import a TSV file, skipping identifiers that already exist.
    pub fn import_tsv(&self, path: &Path) -> Result<ImportSummary, TransferError> {
        self.db.with_writer(|conn| transfer::import_tsv(conn, path))
    }

    /// Export the whole table to a TSV file. Returns the number of rows.
    pub fn export_tsv(&self, path: &Path) -> Result<usize, TransferError> {
        self.db.with_reader(|conn| transfer::export_tsv(conn, path))
    }

    /// Export to the configured default path.
    pub fn export_default(&self) -> Result<usize, TransferError> {
        self.export_tsv(&self.default_export_path)
    }

    pub fn default_export_path(&self) -> &Path {
        &self.default_export_path
    }

    /// Max, min and average of one subject.
    pub fn subject_stats(&self, subject: Subject) -> Result<Option<SubjectStats>, StorageError> {
        self.db.with_reader(|conn| stats::subject_stats(conn, subject))
    }

    /// Statistics for every subject with at least one score, in one
    /// connection scope.
    pub fn all_subject_stats(&self) -> Result<Vec<SubjectStats>, StorageError> {
        self.db.with_reader(stats::all_subject_stats)
    }
}

/// Resolve caller field names into typed changes. A repeated field keeps its
/// last value.
fn resolve_updates(updates: &[(&str, &str)]) -> Result<Vec<(Field, FieldValue)>, RecordError> {
    let mut resolved = BTreeMap::new();
    for (name, raw) in updates {
        let field = Field::from_name(name)
            .ok_or_else(|| RecordError::validation(*name, "unknown field"))?;
        if field == Field::Id {
            return Err(RecordError::validation(field.column(), "the student ID cannot be changed"));
        }
        resolved.insert(field, field.parse_value(raw)?);
    }
    Ok(resolved.into_iter().collect())
}
