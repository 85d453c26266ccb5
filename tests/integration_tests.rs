//! Integration tests for logger system
//!
//! These tests verify:
//! - Routing of events to streams by level mask
//! - Stream registry management
//! - Debug visibility in release and debug modes
//! - Rendering of optional source and code segments
//! - Isolation of failing streams
//! - File output and archive export

use boom_log::prelude::*;
use chrono::Local;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn release_logger() -> Logger {
    Logger::new(BuildMode::Release)
}

fn last_message(archive: &ArchiveStream) -> Option<String> {
    archive.last().map(|e| e.message)
}

fn timestamp_prefix(event: &Event) -> String {
    event.timestamp.format(boom_log::EVENT_TIMESTAMP_FORMAT).to_string()
}

#[test]
fn test_logger_levels_routing() {
    let logger = release_logger();
    logger.force_debug(true);

    let dbg_info = Arc::new(ArchiveStream::new());
    dbg_info.set_levels(LogLevel::Debug | LogLevel::Info | LogLevel::Error);
    let warn_crit = Arc::new(ArchiveStream::new());
    warn_crit.set_levels(LogLevel::Warning | LogLevel::Critical | LogLevel::Error);

    logger.add_stream("dbg_info", dbg_info.clone());
    logger.add_stream("warn_crit", warn_crit.clone());

    logger.debug("dbg_msg", "", "");
    assert_eq!(last_message(&dbg_info).as_deref(), Some("dbg_msg"));
    assert_ne!(last_message(&warn_crit).as_deref(), Some("dbg_msg"));

    logger.info("info_msg", "", "");
    assert_eq!(last_message(&dbg_info).as_deref(), Some("info_msg"));
    assert_ne!(last_message(&warn_crit).as_deref(), Some("info_msg"));

    logger.warning("warn_msg", "", "");
    assert_ne!(last_message(&dbg_info).as_deref(), Some("warn_msg"));
    assert_eq!(last_message(&warn_crit).as_deref(), Some("warn_msg"));

    logger.critical("crit_msg", "", "");
    assert_ne!(last_message(&dbg_info).as_deref(), Some("crit_msg"));
    assert_eq!(last_message(&warn_crit).as_deref(), Some("crit_msg"));

    logger.error("err_msg", "", "");
    assert_eq!(last_message(&dbg_info).as_deref(), Some("err_msg"));
    assert_eq!(last_message(&warn_crit).as_deref(), Some("err_msg"));

    assert_eq!(dbg_info.len(), 3);
    assert_eq!(warn_crit.len(), 3);
}

#[test]
fn test_streams_management() {
    let logger = release_logger();
    assert!(logger.get_stream("Target").is_none());

    let target = Arc::new(ArchiveStream::new());
    logger.add_stream("Target", target.clone());

    let found = logger.get_stream("Target").expect("stream registered");
    assert!(std::ptr::addr_eq(Arc::as_ptr(&found), Arc::as_ptr(&target)));

    let removed = logger.remove_stream("Target").expect("stream removed");
    assert!(std::ptr::addr_eq(Arc::as_ptr(&removed), Arc::as_ptr(&target)));
    assert!(logger.get_stream("Target").is_none());

    // No longer registered, so nothing reaches it
    drop(removed);
    logger.info("not delivered", "", "");
    assert!(target.is_empty());
}

#[test]
fn test_output_formatting() {
    let logger = Logger::new(BuildMode::Debug);
    let t = Arc::new(ArchiveStream::new());
    logger.add_stream("Test", t.clone());

    let cases = [
        (LogLevel::Debug, " # ", "dbg_msg"),
        (LogLevel::Info, "   ", "info_msg"),
        (LogLevel::Warning, " ! ", "warning_msg"),
        (LogLevel::Error, "!! ", "error_msg"),
        (LogLevel::Critical, "!!!", "critical_msg"),
    ];

    for (level, symbol, message) in cases {
        logger.log(level, message, "", "");
        let event = t.last().expect("event captured");
        let expected = format!("{}{}{}", symbol, timestamp_prefix(&event), message);
        assert_eq!(event.render(), expected);
    }
}

#[test]
fn test_optional_formatting() {
    let logger = release_logger();
    let t = Arc::new(ArchiveStream::new());
    logger.add_stream("Test", t.clone());

    logger.info("info_msg", "", "C0001");
    let event = t.last().unwrap();
    assert_eq!(
        event.render(),
        format!("   {}[C0001] info_msg", timestamp_prefix(&event))
    );

    logger.info("info_msg", "UnitTest", "");
    let event = t.last().unwrap();
    assert_eq!(
        event.render(),
        format!("   {}info_msg (from UnitTest)", timestamp_prefix(&event))
    );

    logger.info("info_msg", "UnitTest", "C0002");
    let event = t.last().unwrap();
    assert_eq!(
        event.render(),
        format!("   {}[C0002] info_msg (from UnitTest)", timestamp_prefix(&event))
    );
}

#[test]
fn test_debug_messages_release_mode() {
    let logger = release_logger();
    let t = Arc::new(ArchiveStream::new());
    logger.add_stream("Test", t.clone());

    logger.info("Info", "", "");
    logger.debug("Debug", "", "");
    assert_eq!(last_message(&t).as_deref(), Some("Info"));

    logger.force_debug(true);
    logger.debug("Debug", "", "");
    assert_eq!(last_message(&t).as_deref(), Some("Debug"));

    // Other levels are unaffected by the flag
    logger.force_debug(false);
    logger.warning("Warning", "", "");
    assert_eq!(last_message(&t).as_deref(), Some("Warning"));
}

#[test]
fn test_debug_messages_debug_mode() {
    let logger = Logger::new(BuildMode::Debug);
    let t = Arc::new(ArchiveStream::new());
    logger.add_stream("Test", t.clone());

    logger.info("Info", "", "");
    logger.debug("Debug", "", "");
    assert_eq!(last_message(&t).as_deref(), Some("Debug"));
}

#[test]
fn test_event_timestamp_captured_at_log_time() {
    let logger = release_logger();
    let t = Arc::new(ArchiveStream::new());
    logger.add_stream("Test", t.clone());

    let before = Local::now();
    logger.info("timed", "", "");
    let after = Local::now();

    let event = t.last().unwrap();
    assert!(event.timestamp >= before && event.timestamp <= after);
}

#[test]
fn test_error_isolation() {
    // A file stream pointed at a missing directory fails on every event
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let broken = Arc::new(FileStream::new(temp_dir.path().join("nope").join("log.txt")));
    let archive = Arc::new(ArchiveStream::new());

    let logger = release_logger();
    logger.add_stream("1-broken", broken);
    logger.add_stream("2-archive", archive.clone());

    for i in 0..5 {
        logger.error(format!("Message {}", i), "", "");
    }

    assert_eq!(archive.len(), 5);
    assert_eq!(logger.metrics().delivery_failures(), 5);
    assert_eq!(logger.metrics().events_dispatched(), 5);
}

#[test]
fn test_file_stream_through_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.txt");

    let logger = release_logger();
    let file = Arc::new(FileStream::new(&log_file).with_newline(true));
    file.set_levels(LogLevel::Warning | LogLevel::Error | LogLevel::Critical);
    logger.add_stream("file", file);

    logger.info("skipped", "", "");
    logger.warning("kept warning", "Disk", "");
    logger.critical("kept critical", "", "X9");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" ! "));
    assert!(lines[0].ends_with("kept warning (from Disk)"));
    assert!(lines[1].starts_with("!!!"));
    assert!(lines[1].ends_with("[X9] kept critical"));
}

#[test]
fn test_reconfigure_default_streams() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("default.txt");

    let logger = Logger::builder()
        .build_mode(BuildMode::Release)
        .default_log_file(&log_file)
        .build();

    let console = logger
        .get_stream(DEFAULT_CONSOLE_STREAM)
        .expect("default console registered");
    console.set_levels(LevelMask::NONE);

    logger.info("default file", "", "");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with("   "));
    assert!(content.ends_with("default file"));
}

#[test]
fn test_archive_export_json() {
    let logger = release_logger();
    let archive = Arc::new(ArchiveStream::new());
    logger.add_stream("archive", archive.clone());

    logger.error("exported", "Exporter", "J1");

    let json = serde_json::to_string(&archive.events()).expect("serialize events");
    assert!(json.contains("\"message\":\"exported\""));
    assert!(json.contains("\"source\":\"Exporter\""));
    assert!(json.contains("\"level\":\"Error\""));

    let restored: Vec<Event> = serde_json::from_str(&json).expect("deserialize events");
    assert_eq!(restored, archive.events());
}

#[test]
fn test_concurrent_logging() {
    use std::thread;

    let logger = Arc::new(release_logger());
    let archive = Arc::new(ArchiveStream::new());
    logger.add_stream("archive", archive.clone());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.info(format!("thread {} message {}", t, i), "", "");
                }
            })
        })
        .collect();

    // Registry edits while other threads dispatch
    for i in 0..50 {
        let name = format!("temp-{}", i);
        logger.add_stream(name.clone(), Arc::new(ArchiveStream::new()));
        logger.remove_stream(&name);
    }

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    assert_eq!(archive.len(), 800);
    assert_eq!(logger.metrics().events_dispatched(), 800);
}

#[test]
fn test_stream_logging_from_handle() {
    // A stream that logs back into the logger it is registered with
    struct Echo {
        levels: LevelFilter,
        logger: Arc<Logger>,
    }

    impl Stream for Echo {
        fn levels(&self) -> &LevelFilter {
            &self.levels
        }

        fn handle(&self, event: &Event) -> boom_log::Result<()> {
            self.logger.info(format!("echo: {}", event.message), "", "");
            Ok(())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    let logger = Arc::new(release_logger());
    let archive = Arc::new(ArchiveStream::new());
    let echo = Arc::new(Echo {
        levels: LevelFilter::new(LogLevel::Error.into()),
        logger: Arc::clone(&logger),
    });
    logger.add_stream("archive", archive.clone());
    logger.add_stream("echo", echo);

    logger.error("original", "", "");

    let messages: Vec<String> = archive.events().into_iter().map(|e| e.message).collect();
    assert_eq!(messages, vec!["original", "echo: original"]);
}
