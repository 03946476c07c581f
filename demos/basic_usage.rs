//! Basic logger usage example
//!
//! Demonstrates a registry with the console appender, per-logger thresholds
//! and deferred message parts.
//!
//! Run with: cargo run --example basic_usage

use analog::prelude::*;
use analog::info;

fn main() -> Result<()> {
    println!("=== analog - Basic Usage Example ===\n");

    let registry = Registry::new();

    // The root logger is created on first use at level All
    let root = registry.root();

    println!("1. Logging at different levels:");
    root.trace(["This is a trace message"])?;
    root.debug(["This is a debug message"])?;
    root.info(["This is an info message"])?;
    root.warn(["This is a warning message"])?;
    root.error(["This is an error message"])?;
    root.fatal(["This is a fatal message"])?;

    println!("\n2. A named logger with its own threshold:");
    let db = registry.logger_with_level("db", LogLevel::Info);
    db.debug(["Debug message (hidden)"])?;
    db.info(["Info message (visible)"])?;
    db.warn([Part::from("pool exhausted"), Part::from(serde_json::json!({"size": 8}))])?;

    println!("\n3. Deferred parts are only built when the level is enabled:");
    db.trace([Part::lazy(|| {
        println!("   (never printed)");
        "expensive trace"
    })])?;
    info!(db, "{} connections open", 12)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
