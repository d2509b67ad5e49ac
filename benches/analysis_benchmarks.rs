//! Performance benchmarks for the roster auditor.
//!
//! Measures roster ingestion, violation analysis, and a full run over
//! generated rosters of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use roster_audit::analysis::analyze_roster;
use roster_audit::config::{AuditConfig, Thresholds};
use roster_audit::ingest::read_roster;
use roster_audit::run::AuditRun;

/// Builds a roster with `employees` employees, each working `days` day shifts.
///
/// One shift a week runs long and one starts after short rest, so the
/// analyzer has violations to emit.
fn create_roster(employees: usize, days: usize) -> String {
    let mut csv = String::from("employee_id,employee_name,start_time,end_time\n");
    for day in 0..days {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            + chrono::Duration::days(day as i64);
        for employee in 0..employees {
            let (start, end) = match day % 7 {
                4 => ("06:00:00", "22:00:00"),
                6 => ("00:30:00", "08:00:00"),
                _ => ("08:00:00", "16:00:00"),
            };
            csv.push_str(&format!(
                "emp_{:04},Employee {},{} {},{} {}\n",
                employee, employee, date, start, date, end
            ));
        }
    }
    csv
}

/// Benchmark: Reading a roster into the shift store.
fn bench_ingest(c: &mut Criterion) {
    let csv = create_roster(100, 28);

    let mut group = c.benchmark_group("ingest");
    group.throughput(Throughput::Elements(2800));
    group.bench_function("read_2800_rows", |b| {
        b.iter(|| black_box(read_roster(black_box(csv.as_bytes()), "bench").unwrap()))
    });
    group.finish();
}

/// Benchmark: Violation analysis over an already-grouped roster.
fn bench_analyze(c: &mut Criterion) {
    let ingest = read_roster(create_roster(100, 28).as_bytes(), "bench").unwrap();
    let thresholds = Thresholds::default();

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Elements(ingest.store.shift_count() as u64));
    group.bench_function("analyze_2800_shifts", |b| {
        b.iter(|| black_box(analyze_roster(black_box(&ingest.store), &thresholds)))
    });
    group.finish();
}

/// Benchmark: Full run with report rendering, at several roster sizes.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for employees in [1, 10, 100, 1000].iter() {
        let csv = create_roster(*employees, 28);
        let run = AuditRun::new(AuditConfig::default());

        group.throughput(Throughput::Elements((*employees * 28) as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employees),
            employees,
            |b, _| {
                b.iter(|| {
                    let mut out = Vec::<u8>::with_capacity(64 * 1024);
                    let summary = run
                        .execute_reader(csv.as_bytes(), "bench", &mut out, std::io::sink())
                        .unwrap();
                    black_box((summary, out))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_analyze, bench_scaling);
criterion_main!(benches);
