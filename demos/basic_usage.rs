//! Basic logger usage example
//!
//! Demonstrates the process-wide logger with its default console and file
//! streams.
//!
//! Run with: cargo run --example basic_usage

use boom_log::prelude::*;
use boom_log::{global, info, warning};

fn main() -> Result<()> {
    println!("=== Boom Log - Basic Usage Example ===\n");

    // Show debug events even in a release build
    let logger = global::logger();
    logger.force_debug(true);

    // Put every event on its own console line
    logger.add_stream(
        DEFAULT_CONSOLE_STREAM,
        std::sync::Arc::new(ConsoleStream::new().with_newline(true).with_colors(true)),
    );

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", "", "");
    logger.info("This is an info message", "", "");
    logger.warning("This is a warning message", "", "");
    logger.error("This is an error message", "", "");
    logger.critical("This is a critical message", "", "");

    println!("\n2. Source and code tags:");
    logger.info("Connected", "network", "");
    logger.error("Connection refused", "network", "N0061");
    info!(logger, source: "main", "Processing {} items", 100);
    warning!(logger, code: "W0002", "Retry attempt {} of {}", 3, 5);

    println!("\n3. Silencing the console for low severities:");
    if let Some(console) = logger.get_stream(DEFAULT_CONSOLE_STREAM) {
        console.set_levels(LogLevel::Error | LogLevel::Critical);
    }
    logger.info("Info message (hidden on console, still in log.txt)", "", "");
    logger.error("Error message (visible)", "", "");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
