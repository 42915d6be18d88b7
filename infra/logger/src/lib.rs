//! # Logger
//!
//! Installs the process-wide `tracing` subscriber from the `[logging]` section
//! of the application config: an `EnvFilter` (config level as the default
//! directive, `RUST_LOG` and `logging.filter` on top), a compact stderr layer
//! and, when `logging.directory` is set, a daily rolling file layer written
//! through a non-blocking worker (JSON when `logging.json` is true).
//!
//! ## Example
//!
//! ```rust
//! use dialecta_domain::config::LoggingConfig;
//! use dialecta_logger::{Logger, LoggerSettings};
//!
//! let settings = LoggerSettings::from_config("dialecta", &LoggingConfig::default()).unwrap();
//! let _logger = Logger::init(settings).unwrap();
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use dialecta_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const MAX_LOG_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Validated logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    name: String,
    console: bool,
    level: LevelFilter,
    directory: Option<PathBuf>,
    json: bool,
    filter: Option<String>,
}

impl LoggerSettings {
    /// Builds settings from the config section.
    ///
    /// `name` prefixes rolling files (`dialecta.2026-10-16.log`).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name or an
    /// unknown level.
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let level = LevelFilter::from_str(config.level.trim()).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown level '{}': {e}", config.level).into(),
                context: Some("logging.level".into()),
            }
        })?;

        Ok(Self {
            name,
            console: true,
            level,
            directory: config.directory.clone(),
            json: config.json,
            filter: config.filter.clone(),
        })
    }

    /// Disables the console layer (file-only logging).
    #[must_use]
    pub const fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.filter {
            None => Ok(builder.from_env_lossy()),
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: Some("logging.filter".into()),
            }),
        }
    }
}

/// Handle to the installed subscriber.
///
/// Holds the file worker guard; keep it alive until shutdown so buffered
/// lines are flushed.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] when no layer is enabled or the filter is invalid.
    /// * [`LoggerError::Appender`] when the log directory cannot host the rolling file.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(settings: LoggerSettings) -> Result<Self, LoggerError> {
        if !settings.console && settings.directory.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or set a directory.".into(),
                context: None,
            });
        }

        let env_filter = settings.env_filter()?;
        let mut layers = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = if let Some(dir) = &settings.directory {
            fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", dir.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&settings.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(MAX_LOG_FILES)
                .build(dir)
                .context("Building the rolling file appender")?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(name = %settings.name, level = %settings.level, "Logger initialized");

        Ok(Self { guard })
    }

    /// Whether a file layer (and its worker guard) is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
