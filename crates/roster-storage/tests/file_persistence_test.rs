//! File-backed persistence: reopen survival, WAL mode, read pool visibility,
//! opening from config with a seed file.

use std::path::PathBuf;

use roster_core::config::{ConfigOverrides, RosterConfig};
use roster_core::types::UpdateOutcome;
use roster_storage::connection::pragmas::verify_wal_mode;
use roster_storage::migrations::current_version;
use roster_storage::RecordStore;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/students.tsv")
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("student.db");

    {
        let store = RecordStore::open_path(&db_path).unwrap();
        store.import_tsv(&fixture()).unwrap();
        assert_eq!(
            store.update("53821", &[("English", "85")]).unwrap(),
            UpdateOutcome::Updated
        );
    }

    let store = RecordStore::open_path(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 5);
    assert_eq!(store.get("53821").unwrap().unwrap().english, Some(85));
}

#[test]
fn file_backed_store_uses_wal_and_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open_path(&dir.path().join("student.db")).unwrap();
    let (wal, version) = store
        .database()
        .with_writer(|conn| Ok::<_, roster_core::StorageError>((verify_wal_mode(conn)?, current_version(conn)?)))
        .unwrap();
    assert!(wal);
    assert_eq!(version, 1);
    assert!(store.database().path().is_some());
}

#[test]
fn readers_see_committed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open_path(&dir.path().join("student.db")).unwrap();
    store.import_tsv(&fixture()).unwrap();

    // Several reads rotate through the pool.
    for _ in 0..8 {
        assert!(store.exists("61204").unwrap());
    }
    store.delete("61204").unwrap();
    for _ in 0..8 {
        assert!(!store.exists("61204").unwrap());
    }
}

#[test]
fn open_from_config_imports_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let overrides = ConfigOverrides {
        db_path: Some(dir.path().join("check_student.db")),
        read_pool_size: Some(2),
        seed_file: Some(fixture()),
        export_path: Some(dir.path().join("out.tsv")),
    };
    let config = RosterConfig::load(dir.path(), Some(&overrides)).unwrap();

    let store = RecordStore::open(&config).unwrap();
    assert_eq!(store.count().unwrap(), 5);
    drop(store);

    // Reopening re-runs the seed import, which skips existing rows.
    let store = RecordStore::open(&config).unwrap();
    assert_eq!(store.count().unwrap(), 5);

    assert_eq!(store.export_default().unwrap(), 5);
    assert!(dir.path().join("out.tsv").exists());
}

#[test]
fn open_rejects_invalid_config() {
    let mut config = RosterConfig::default();
    config.database.read_pool_size = Some(0);
    assert!(RecordStore::open(&config).is_err());
}
