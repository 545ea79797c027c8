//! Stress tests for shared routing tables
//!
//! These tests verify:
//! - No line is lost when many threads log through one table
//! - Bulk copies are never observed half-applied
//! - Concurrent file output keeps every line intact
//! - Routing changes race safely with logging

use multi_logger::prelude::*;
use multi_logger::{global, redirect, restore, RotationPolicy};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Serialises tests that touch the global logger.
static GLOBAL: Mutex<()> = parking_lot::const_mutex(());

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 500;

#[test]
fn test_concurrent_logging_loses_nothing() {
    let sink = Arc::new(MemorySink::new());
    let root = NamedLogger::with_sink("root: ", sink.clone(), None);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = root.derive(format!("t{}: ", t));
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.infof(format_args!("{}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    let unique: HashSet<_> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());
}

/// Bulk copies race with each other and with single-level updates. A reader
/// may see the warn entry from either kind of writer, but every other level
/// must come from one whole copy.
#[test]
fn test_copy_from_is_never_torn() {
    let a: SharedSink = Arc::new(MemorySink::named("a"));
    let b: SharedSink = Arc::new(MemorySink::named("b"));
    let c: SharedSink = Arc::new(MemorySink::named("c"));
    let all_a = Arc::new(NamedLogger::with_sink("a: ", a, None));
    let all_b = Arc::new(NamedLogger::with_sink("b: ", b, None));
    let target = Arc::new(NamedLogger::omitting("target: "));
    target.copy_from(&all_a);

    let stop = Arc::new(AtomicBool::new(false));

    let mut writers: Vec<_> = (0..2)
        .map(|w| {
            let target = Arc::clone(&target);
            let source = if w == 0 { Arc::clone(&all_a) } else { Arc::clone(&all_b) };
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    target.copy_from(&source);
                }
            })
        })
        .collect();
    {
        let target = Arc::clone(&target);
        let stop = Arc::clone(&stop);
        writers.push(thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                target.set_output(LogLevel::Warn, Arc::clone(&c));
            }
        }));
    }

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let target = Arc::clone(&target);
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let entries = target.table().entries();
                    assert_eq!(entries.len(), 6);

                    let copied: HashSet<&str> = entries
                        .iter()
                        .filter(|(level, _)| *level != LogLevel::Warn)
                        .map(|(_, sink)| sink.name())
                        .collect();
                    assert_eq!(copied.len(), 1, "mixed routing observed: {:?}", copied);
                    assert!(copied.contains("a") || copied.contains("b"));

                    let warn = entries
                        .iter()
                        .find(|(level, _)| *level == LogLevel::Warn)
                        .map(|(_, sink)| sink.name());
                    assert!(matches!(warn, Some("a" | "b" | "c")), "unexpected warn sink {:?}", warn);
                }
            })
        })
        .collect();

    for reader in readers {
        reader.join().expect("reader saw a torn table");
    }
    stop.store(true, Ordering::Relaxed);
    for writer in writers {
        writer.join().unwrap();
    }
}

#[test]
fn test_concurrent_file_writes_stay_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let sink = RotatingFileSink::open(&log_file, RotationPolicy::new().with_max_size(0))
        .expect("Failed to open log file")
        .with_line_format(LineFormat::bare());
    let logger = NamedLogger::with_sink("", Arc::new(sink), None);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.derive(format!("w{} ", t));
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.warnf(format_args!("line {:04}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = std::fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert!(lines.iter().all(|line| line.starts_with("WARN w") && line.len() == "WARN w0 line 0000".len()));
}

#[test]
fn test_routing_changes_race_with_logging() {
    let first = Arc::new(MemorySink::named("first"));
    let second = Arc::new(MemorySink::named("second"));
    let logger = NamedLogger::with_sink("race: ", first.clone(), None);

    let switcher = {
        let logger = logger.derive("switch: ");
        let first = first.clone();
        let second = second.clone();
        thread::spawn(move || {
            for i in 0..1_000 {
                let next: SharedSink = if i % 2 == 0 { second.clone() } else { first.clone() };
                logger.set_output(LogLevel::Error, next);
            }
        })
    };

    for i in 0..1_000 {
        logger.errorf(format_args!("{}", i));
    }
    switcher.join().unwrap();

    assert_eq!(first.len() + second.len(), 1_000);
}

#[test]
fn test_redirect_while_module_loggers_log() {
    let _guard = GLOBAL.lock();
    let sink = Arc::new(MemorySink::new());
    let target = NamedLogger::with_sink("t: ", sink.clone(), None);
    redirect(&target);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let module = global().derive(format!("[m{}] ", t));
            thread::spawn(move || {
                for i in 0..100 {
                    module.info(i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.len(), THREADS * 100);
    restore().expect("Failed to restore");
}
