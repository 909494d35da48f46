use criterion::{criterion_group, criterion_main, Criterion};

use roster_core::types::{Student, Subject};
use roster_storage::stats;
use roster_storage::RecordStore;

fn make_students(n: usize) -> Vec<Student> {
    (0..n)
        .map(|i| Student {
            id: format!("{:05}", i),
            name: format!("Student {i}"),
            gender: if i % 2 == 0 { "Male" } else { "Female" }.to_string(),
            enroll_date: "9-1-2022".to_string(),
            english: Some((i % 101) as i64),
            math: Some(((i * 7) % 101) as i64),
            history: Some(((i * 11) % 101) as i64),
            science: Some(((i * 13) % 101) as i64),
            arts: Some(((i * 17) % 101) as i64),
        })
        .collect()
}

fn bench_import(c: &mut Criterion) {
    let source = RecordStore::open_in_memory().unwrap();
    for s in make_students(1_000) {
        source.insert_student(&s).unwrap();
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.tsv");
    source.export_tsv(&path).unwrap();

    c.bench_function("import_1k_rows", |b| {
        b.iter(|| {
            let store = RecordStore::open_in_memory().unwrap();
            store.import_tsv(&path).unwrap()
        })
    });
}

fn bench_stats(c: &mut Criterion) {
    let store = RecordStore::open_in_memory().unwrap();
    for s in make_students(10_000) {
        store.insert_student(&s).unwrap();
    }

    c.bench_function("math_stats_10k_rows", |b| {
        b.iter(|| {
            store
                .with_connection(|conn| stats::subject_stats(conn, Subject::Math))
                .unwrap()
        })
    });
    c.bench_function("all_subject_stats_10k_rows", |b| {
        b.iter(|| store.all_subject_stats().unwrap())
    });
}

criterion_group!(benches, bench_import, bench_stats);
criterion_main!(benches);
