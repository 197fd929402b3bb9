//! Grouping and export benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `grouping` | Lines/s through the grouping transform at 10k/100k lines |
//! | `export` | End-to-end export latency (read + group + gzip) at 10k lines |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench export_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use maillog_core::{group, Exporter};
use std::hint::black_box;

/// Synthetic formatted log lines cycling through a handful of category tags
/// in short runs, the shape the grouper sees in practice.
fn corpus(n: usize) -> Vec<String> {
    const TAGS: &[&str] = &["com.example.App", "com.example.Db", "com.example.Sync"];
    (0..n)
        .map(|i| {
            let tag = TAGS[i / 5 % TAGS.len()];
            format!("Jan 15 | 10:00:00.000 INFO  [{tag}] log line {i}")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grouping throughput
// ---------------------------------------------------------------------------

fn grouping_bench(c: &mut Criterion) {
    let mut bench = c.benchmark_group("grouping");

    for &count in &[10_000usize, 100_000] {
        let lines = corpus(count);
        bench.throughput(Throughput::Elements(count as u64));
        bench.bench_with_input(BenchmarkId::new("group", count), &lines, |b, lines| {
            b.iter(|| {
                let out = group::group(lines.iter().map(String::as_str));
                black_box(out.len())
            })
        });
    }

    bench.finish();
}

// ---------------------------------------------------------------------------
// End-to-end export
// ---------------------------------------------------------------------------

fn export_bench(c: &mut Criterion) {
    let mut bench = c.benchmark_group("export");

    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("bench.log");
    let mut content = corpus(10_000).join("\n");
    content.push('\n');
    std::fs::write(&source, content).expect("seed bench log");
    let exporter = Exporter::new(dir.path().join("exports"));

    bench.bench_function("end_to_end_10k", |b| {
        b.iter(|| {
            let path = exporter
                .export(&source, Some("bench metadata\n"), "bench")
                .expect("export");
            black_box(path)
        })
    });

    bench.finish();
}

criterion_group!(export_benches, grouping_bench, export_bench);
criterion_main!(export_benches);
