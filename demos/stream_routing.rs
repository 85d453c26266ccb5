//! Routing events to several streams
//!
//! Demonstrates an explicitly constructed logger with per-stream level masks
//! and an archive used to inspect history afterwards.
//!
//! Run with: cargo run --example stream_routing

use boom_log::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Boom Log - Stream Routing Example ===\n");

    let problems = Arc::new(FileStream::new("problems.txt").with_newline(true));
    problems.set_levels(LogLevel::Warning | LogLevel::Error | LogLevel::Critical);

    let history = Arc::new(ArchiveStream::new());

    let logger = Logger::builder()
        .build_mode(BuildMode::Release)
        .default_streams(false)
        .stream("console", Arc::new(ConsoleStream::new().with_newline(true)))
        .stream("problems", problems.clone())
        .stream("history", history.clone())
        .build();

    logger.debug("Suppressed: release mode without force_debug", "", "");
    logger.info("Service starting", "main", "");
    logger.warning("Config file missing, using defaults", "config", "CFG01");
    logger.error("Cache unavailable", "cache", "C0500");

    println!("\nStreams: {:?}", logger.stream_names());
    println!("Archived {} events:", history.len());
    for event in history.events() {
        println!("  {:<8} {}", event.level, event.message);
    }
    println!("Problems written to {}", problems.path().display());

    let metrics = logger.metrics();
    println!(
        "\nDispatched: {}, delivered: {}, failed: {}, debug suppressed: {}",
        metrics.events_dispatched(),
        metrics.deliveries(),
        metrics.delivery_failures(),
        metrics.debug_suppressed()
    );

    // Removed streams stop receiving events
    if logger.remove_stream("problems").is_some() {
        logger.error("Not written to problems.txt", "", "");
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
