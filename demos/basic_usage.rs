//! Basic logger usage example
//!
//! Demonstrates a configured logger, derived module loggers, and redirecting
//! the global logger.
//!
//! Run with: cargo run --example basic_usage

use multi_logger::prelude::*;
use multi_logger::{info, redirect, restore};
use std::io::Write;

fn main() -> Result<()> {
    println!("=== Multi Logger - Basic Usage Example ===\n");

    let log_dir = std::env::temp_dir().join("multi_logger_demo");
    let config = Config::new()
        .with_console(true, LogLevel::Debug)
        .with_ansi_color(true)
        .with_file(true, LogLevel::Warn)
        .with_file_location(log_dir.join("demo.log").display().to_string())
        .with_file_rotation("64K", 3);

    let builder = Builder::new(&config);
    let logger = builder.logger("main: ");

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message (not routed)");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warnf(format_args!("{} retries left", 2));
    logger.errorln("This is an error message (console and file)");

    println!("\n2. Derived loggers share routing:");
    let db = logger.derive("[db] ");
    db.info("connected");
    info!(db, "pool size {}", 8);

    println!("\n3. Plain text writers:");
    let mut writer = builder.std_log_at(LogLevel::Info, "[legacy] ");
    writeln!(writer, "written through io::Write")?;

    println!("\n4. Redirecting the global logger:");
    multi_logger::info("global logger, default routing");
    redirect(&logger);
    multi_logger::warn("global logger, redirected to main's sinks");
    restore()?;

    println!("\nLog file: {}", config.resolved_file_location().display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
