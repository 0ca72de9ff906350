//! Benchmarks for booking and calendar sync
//!
//! Run with: cargo bench

use clinic_calendar::booking::{local_datetime, Appointment, BookingService, Doctor};
use clinic_calendar::calendar::{day_grid, CalendarBinder};
use clinic_calendar::storage::{JsonFileStore, MemoryStore, SqliteStore};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tempfile::tempdir;

fn create_test_appointments(count: usize) -> Vec<Appointment> {
    let base = local_datetime::parse("2024-01-01T08:00").unwrap();
    (0..count)
        .map(|i| {
            let at = base + chrono::Duration::minutes((i % 24) as i64 * 30);
            Appointment::new(format!("D{}", i), format!("Patient {}", i), at)
        })
        .collect()
}

fn bench_booking(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking");

    for size in [10, 100, 1000] {
        let appointments = create_test_appointments(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("memory_{}", size), |b| {
            b.iter(|| {
                let mut service = BookingService::load(MemoryStore::new()).unwrap();
                for appt in &appointments {
                    service.book(black_box(appt.clone())).unwrap();
                }
            })
        });
    }

    group.bench_function("json_file_rebook_100", |b| {
        let dir = tempdir().unwrap();
        let mut service = BookingService::load(JsonFileStore::in_dir(dir.path()).unwrap()).unwrap();
        for appt in create_test_appointments(100) {
            service.book(appt).unwrap();
        }
        let rebook = create_test_appointments(1).remove(0);

        b.iter(|| service.book(black_box(rebook.clone())).unwrap());
    });

    group.bench_function("sqlite_rebook_100", |b| {
        let mut service = BookingService::load(SqliteStore::open_in_memory().unwrap()).unwrap();
        for appt in create_test_appointments(100) {
            service.book(appt).unwrap();
        }
        let rebook = create_test_appointments(1).remove(0);

        b.iter(|| service.book(black_box(rebook.clone())).unwrap());
    });

    group.finish();
}

fn bench_calendar(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");

    let appointments = create_test_appointments(500);
    let doctors: Vec<Doctor> = appointments
        .iter()
        .map(|a| Doctor::placeholder(a.resource_id.clone()))
        .collect();
    let date = appointments[0].start.date();

    group.bench_function("sync_500", |b| {
        let mut binder = CalendarBinder::default();
        b.iter(|| binder.sync(black_box(&doctors), black_box(&appointments)));
    });

    group.bench_function("day_grid_500", |b| {
        let mut binder = CalendarBinder::default();
        binder.sync(&doctors, &appointments);
        b.iter(|| day_grid(black_box(&binder), date));
    });

    group.finish();
}

criterion_group!(benches, bench_booking, bench_calendar);
criterion_main!(benches);
