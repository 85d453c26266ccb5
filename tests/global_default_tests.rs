//! Tests for the lazily created process-wide logger

use boom_log::global;
use boom_log::prelude::*;

#[test]
fn test_lazy_default_logger() {
    assert!(!global::is_initialized());

    let logger = global::logger();
    assert!(global::is_initialized());
    assert_eq!(logger.build_mode(), BuildMode::current());
    assert_eq!(
        logger.stream_names(),
        vec![DEFAULT_CONSOLE_STREAM.to_string(), DEFAULT_FILE_STREAM.to_string()]
    );

    for name in [DEFAULT_CONSOLE_STREAM, DEFAULT_FILE_STREAM] {
        let stream = logger.get_stream(name).expect("default stream registered");
        assert_eq!(stream.level_mask(), LevelMask::ALL);
    }

    // Defaults can be removed like any other stream
    assert!(logger.remove_stream(DEFAULT_FILE_STREAM).is_some());
    assert_eq!(logger.stream_count(), 1);

    assert!(global::init(Logger::new(BuildMode::Release)).is_err());
}
