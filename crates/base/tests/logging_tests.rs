use base::{StderrLogger, format_record, format_timestamp, init_stderr_logger, parse_level};
use log::{LevelFilter, Log};

fn metadata(level: log::Level) -> log::Metadata<'static> {
    log::MetadataBuilder::new().level(level).target("test").build()
}

#[test]
fn test_stderr_logger_respects_level() {
    let logger = StderrLogger::new(LevelFilter::Info);
    assert_eq!(logger.level(), LevelFilter::Info);
    assert!(logger.enabled(&metadata(log::Level::Error)));
    assert!(logger.enabled(&metadata(log::Level::Info)));
    assert!(!logger.enabled(&metadata(log::Level::Debug)));
    assert!(!logger.enabled(&metadata(log::Level::Trace)));
}

#[test]
fn test_stderr_logger_off_disables_everything() {
    let logger = StderrLogger::new(LevelFilter::Off);
    assert!(!logger.enabled(&metadata(log::Level::Error)));
}

#[test]
fn test_stderr_logger_log_and_flush() {
    let logger = StderrLogger::new(LevelFilter::Trace);
    // should not panic
    logger.log(
        &log::RecordBuilder::new()
            .level(log::Level::Info)
            .target("test")
            .file(Some("test.rs"))
            .line(Some(42))
            .args(format_args!("test message"))
            .build(),
    );
    logger.flush();
}

#[test]
fn test_format_record_contents() {
    let line = format_record(
        &log::RecordBuilder::new()
            .level(log::Level::Warn)
            .target("test")
            .file(Some("tables.rs"))
            .line(Some(100))
            .args(format_args!("table built"))
            .build(),
    );
    assert!(line.contains("[WARN]"), "Should contain log level");
    assert!(line.contains("thread:"), "Should contain thread ID");
    assert!(line.contains("tables.rs:100"), "Should contain file and line");
    assert!(line.ends_with("- table built"), "Should end with message");
}

#[test]
fn test_format_record_without_location() {
    let line = format_record(
        &log::RecordBuilder::new()
            .level(log::Level::Error)
            .args(format_args!("oops"))
            .build(),
    );
    assert!(line.contains("unknown:0 - oops"));
}

#[test]
fn test_format_timestamp_structure() {
    let ts = format_timestamp();
    // YYYY-MM-DDTHH:MM:SS
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
    assert_eq!(parse_level(" INFO "), Some(LevelFilter::Info));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_init_stderr_logger_sets_global_logger() {
    // only the first call in the process installs the logger
    init_stderr_logger();
    init_stderr_logger();
    log::info!("Test message from global logger");
}
