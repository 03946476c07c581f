//! Configured registry example
//!
//! Registers named appenders and loggers in one `configure` call, then shows
//! how each appender re-filters events by its own threshold.
//!
//! Run with: cargo run --example configured_registry

use analog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== analog - Configured Registry Example ===\n");

    let everything = Arc::new(MemoryAppender::new());
    let errors = Arc::new(MemoryAppender::with_threshold(LogLevel::Error));

    let registry = Registry::new();
    registry.configure(
        Config::new()
            .appender("everything", everything.clone())
            .appender("errors", errors.clone())
            .appender("console", Arc::new(ConsoleAppender::with_threshold(LogLevel::Warn)))
            .logger(
                LoggerConfig::new("", LogLevel::All)
                    .appender("everything")
                    .appender("errors")
                    .appender("console"),
            )
            .logger(LoggerConfig::new("http", LogLevel::Info)),
    )?;

    let http = registry.logger("http");
    http.debug(["dropped by the http logger threshold"])?;
    http.info(["GET /health 200"])?;
    http.warn(["slow response", "1200ms"])?;
    http.error(["upstream refused connection"])?;

    println!("\nEverything appender ({} lines):", everything.len());
    for line in everything.buffer() {
        println!("  {}", line);
    }
    println!("\nErrors appender ({} lines):", errors.len());
    for line in errors.buffer() {
        println!("  {}", line);
    }

    let metrics = http.metrics();
    println!(
        "\nhttp logger: {} dispatched, {} suppressed",
        metrics.dispatched_count(),
        metrics.suppressed_count()
    );

    Ok(())
}
