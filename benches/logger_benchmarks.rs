//! Criterion benchmarks for multi_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use multi_logger::prelude::*;
use multi_logger::RotationPolicy;
use std::io;
use std::sync::Arc;

fn null_console() -> SharedSink {
    Arc::new(ConsoleSink::with_writer(Box::new(io::sink())))
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("omitting", |b| {
        b.iter(|| black_box(NamedLogger::omitting("bench: ")));
    });

    let builder = Builder::new(&Config::new()).with_console_sink(Some(null_console()));
    group.bench_function("from_builder", |b| {
        b.iter(|| black_box(builder.logger("bench: ")));
    });

    let parent = builder.logger("parent: ");
    group.bench_function("derive", |b| {
        b.iter(|| black_box(parent.derive("child: ")));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_routed_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("routed_logging");
    group.throughput(Throughput::Elements(1));

    let logger = NamedLogger::with_sink("bench: ", null_console(), None);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("request {} took {}ms", black_box(42), black_box(7))));
    });

    group.bench_function("infoln", |b| {
        b.iter(|| logger.infoln(black_box("Info message")));
    });

    group.finish();
}

fn bench_discarded_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("discarded_logging");
    group.throughput(Throughput::Elements(1));

    let logger = NamedLogger::omitting("bench: ");

    group.bench_function("trace", |b| {
        b.iter(|| logger.trace(black_box("Trace message")));
    });

    group.bench_function("tracef", |b| {
        b.iter(|| logger.tracef(format_args!("value {}", black_box(1))));
    });

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file: SharedSink = Arc::new(
        RotatingFileSink::open(
            temp_dir.path().join("bench.log"),
            RotationPolicy::new().with_max_size(8 * 1024 * 1024).with_max_backups(1),
        )
        .expect("Failed to open log file"),
    );
    let fan_out: SharedSink = Arc::new(FanOutSink::new(vec![null_console(), file]));
    let logger = NamedLogger::with_sink("bench: ", fan_out, None);

    group.bench_function("console_and_file", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
}

// ============================================================================
// Routing Table Benchmarks
// ============================================================================

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    let source = NamedLogger::with_sink("src: ", null_console(), None);
    let target = NamedLogger::omitting("dst: ");

    group.bench_function("copy_from", |b| {
        b.iter(|| target.copy_from(black_box(&source)));
    });

    group.bench_function("get", |b| {
        b.iter(|| black_box(source.get(black_box(LogLevel::Warn))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_routed_logging,
    bench_discarded_logging,
    bench_fan_out,
    bench_routing
);

criterion_main!(benches);
