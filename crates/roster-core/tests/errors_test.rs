use roster_core::errors::*;

#[test]
fn validation_error_names_the_field() {
    let err = RecordError::validation("English", "expected a string, got number");
    let msg = err.to_string();
    assert!(msg.contains("English"));
    assert!(msg.contains("number"));
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn duplicate_key_is_distinct_from_validation() {
    let err = RecordError::DuplicateKey { id: "53821".into() };
    assert!(err.to_string().contains("53821"));
    assert_eq!(err.error_code(), "DUPLICATE_KEY");
    assert_eq!(err.boundary_string(), "[DUPLICATE_KEY] Duplicate student ID: 53821");
}

#[test]
fn storage_error_converts_to_record_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let record_err: RecordError = storage_err.into();
    assert!(matches!(record_err, RecordError::Storage(_)));
    assert!(record_err.to_string().contains("disk full"));
    assert_eq!(record_err.error_code(), "STORAGE_ERROR");
}

#[test]
fn migration_failure_has_its_own_code() {
    let err = StorageError::MigrationFailed {
        version: 1,
        message: "syntax error".into(),
    };
    assert_eq!(err.error_code(), "MIGRATION_FAILED");
    let transfer: TransferError = err.into();
    assert_eq!(transfer.error_code(), "MIGRATION_FAILED");
}

#[test]
fn roster_error_delegates_codes() {
    let err: RosterError = TransferError::MissingColumn {
        path: "student.tsv".into(),
        column: "ID".into(),
    }
    .into();
    assert_eq!(err.error_code(), "TRANSFER_ERROR");
    assert!(err.to_string().contains("ID"));

    let err: RosterError = ConfigError::FileNotFound {
        path: "roster.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
