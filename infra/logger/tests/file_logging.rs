use dialecta_domain::config::LoggingConfig;
use dialecta_logger::{Logger, LoggerSettings};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        directory: Some(log_dir.clone()),
        json: true,
        ..LoggingConfig::default()
    };
    let settings = LoggerSettings::from_config("integration-file-logging", &config)?.without_console();
    let logger = Logger::init(settings)?;
    assert!(logger.has_file_output());

    tracing::info!(zone = "andino", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"zone\":\"andino\""), "json line should carry fields: {contents}");

    Ok(())
}
