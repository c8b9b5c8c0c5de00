//! Logging built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `RELAYHUB_LOG`: Filter directive (like `RUST_LOG`), e.g., `relayhub_core=debug`
//! - `RELAYHUB_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `RELAYHUB_LOG_DIR`: Directory for daily log files (overrides `[logging.file] dir`)
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [logging.file]
//! enabled = true
//! dir = "logs"
//! level = "info"
//!
//! [logging.privacy]
//! log_content = "none"
//! truncate_length = 80
//! ```
//!
//! # Example
//!
//! ```no_run
//! use relayhub_core::logging::{self, LoggingConfig};
//!
//! let _guard = logging::init_logging(LoggingConfig::default())?;
//! # Ok::<(), relayhub_core::Error>(())
//! ```

use crate::Error;
use crate::config::{ContentLogging, LoggingSettings, PrivacySettings};

use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix for the daily rolling log
pub const LOG_FILE_PREFIX: &str = "relayhub.log";

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    /// Get the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Daily file logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogging {
    pub dir: PathBuf,
    pub level: String,
}

/// Logging configuration derived from `[logging]`
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level for stderr output.
    pub level: String,
    /// Output format for stderr.
    pub format: LogFormat,
    /// Write to stderr at all. Off while the TUI owns the terminal.
    pub stderr: bool,
    /// File logging configuration (optional).
    pub file: Option<FileLogging>,
    /// Privacy controls for turn content.
    pub privacy: PrivacySettings,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            stderr: true,
            file: None,
            privacy: PrivacySettings::default(),
        }
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            format: LogFormat::parse_str(&settings.format).unwrap_or_default(),
            stderr: true,
            file: settings
                .file
                .enabled
                .then(|| FileLogging { dir: settings.file.dir.clone(), level: settings.file.level.clone() }),
            privacy: settings.privacy.clone(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the stderr layer.
    pub fn with_stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Raise stderr and file logging to `debug`.
    pub fn verbose(mut self) -> Self {
        self.level = "debug".to_string();
        if let Some(file) = self.file.as_mut() {
            file.level = "debug".to_string();
        }
        self
    }

    /// Enable file logging.
    pub fn with_file_logging(mut self, file: FileLogging) -> Self {
        self.file = Some(file);
        self
    }

    /// Build an EnvFilter from an explicit level and environment variables.
    fn build_env_filter(level: &str) -> EnvFilter {
        let filter = env::var("RELAYHUB_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| level.to_string());

        EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(level))
    }

    /// Detect if stderr is a TTY for pretty formatting.
    fn is_tty() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    /// Determine the appropriate format for stderr output.
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("RELAYHUB_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        match self.format {
            LogFormat::Pretty if !Self::is_tty() => LogFormat::Compact,
            format => format,
        }
    }

    /// Get the log directory path.
    fn log_dir(file: &FileLogging) -> PathBuf {
        match env::var("RELAYHUB_LOG_DIR") {
            Ok(custom_dir) => PathBuf::from(custom_dir),
            Err(_) => file.dir.clone(),
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Formatted stderr output (pretty, json, or compact), unless disabled
/// - Optional daily rolling JSON log file
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// until the process exits.
pub fn init_logging(config: LoggingConfig) -> Result<Option<WorkerGuard>, Error> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut guard = None;

    if config.stderr {
        let filter = LoggingConfig::build_env_filter(&config.level);
        let layer: BoxedLayer = match config.detect_format() {
            LogFormat::Pretty => fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(io::stderr).with_filter(filter).boxed(),
            LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).with_filter(filter).boxed(),
        };
        layers.push(layer);
    }

    if let Some(file) = &config.file {
        let log_dir = LoggingConfig::log_dir(file);
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| Error::Config(format!("Failed to create log directory: {}", e)))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let filter = LoggingConfig::build_env_filter(&file.level);
        layers.push(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(filter)
                .boxed(),
        );
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install log subscriber: {}", e)))?;

    tracing::debug!(
        level = %config.level,
        format = config.format.as_str(),
        stderr = config.stderr,
        file = ?config.file.as_ref().map(|f| sanitize_path(&f.dir)),
        "logging initialized"
    );
    Ok(guard)
}

/// Turn content as it may appear in logs.
pub fn preview_content(content: &str, privacy: &PrivacySettings) -> String {
    match privacy.log_content {
        ContentLogging::None => format!("[{} chars]", content.chars().count()),
        ContentLogging::Truncate => {
            let total = content.chars().count();
            if total <= privacy.truncate_length {
                return content.to_string();
            }
            let mut truncated = content.chars().take(privacy.truncate_length).collect::<String>();
            truncated.push_str("...");
            truncated.push_str(&format!(" ({} total chars)", total));
            truncated
        }
        ContentLogging::Full => content.to_string(),
    }
}

/// Sanitize file paths for logging (remove home directory).
pub fn sanitize_path(path: &std::path::Path) -> String {
    if let Ok(home) = env::var("HOME")
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileLoggingSettings;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!(LogFormat::parse_str("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse_str("PRETTY"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse_str("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse_str("compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse_str("invalid"), None);
    }

    #[test]
    fn test_log_format_as_str() {
        for format in [LogFormat::Pretty, LogFormat::Json, LogFormat::Compact] {
            assert_eq!(LogFormat::parse_str(format.as_str()), Some(format));
        }
    }

    #[test]
    fn test_verbose_raises_every_layer() {
        let config = LoggingConfig::new()
            .with_file_logging(FileLogging { dir: PathBuf::from("logs"), level: "info".to_string() })
            .with_stderr(false)
            .verbose();
        assert_eq!(config.level, "debug");
        assert_eq!(config.file.map(|f| f.level), Some("debug".to_string()));
        assert!(!config.stderr);

        assert_eq!(LoggingConfig::new().verbose().level, "debug");
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.stderr);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::new()
            .with_level("debug")
            .with_format(LogFormat::Json)
            .with_stderr(false)
            .with_file_logging(FileLogging { dir: PathBuf::from("/tmp/logs"), level: "trace".to_string() });

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.stderr);
        assert_eq!(config.file.unwrap().level, "trace");
    }

    #[test]
    fn test_logging_config_from_settings() {
        let settings = LoggingSettings { format: "compact".to_string(), ..LoggingSettings::default() };
        let config = LoggingConfig::from(&settings);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.file, Some(FileLogging { dir: PathBuf::from("logs"), level: "info".to_string() }));

        let settings = LoggingSettings {
            format: "fancy".to_string(),
            file: FileLoggingSettings { enabled: false, ..FileLoggingSettings::default() },
            ..LoggingSettings::default()
        };
        let config = LoggingConfig::from(&settings);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_preview_content_none() {
        let privacy = PrivacySettings { log_content: ContentLogging::None, truncate_length: 100 };
        assert_eq!(preview_content("secret prompt", &privacy), "[13 chars]");
    }

    #[test]
    fn test_preview_content_truncate() {
        let privacy = PrivacySettings { log_content: ContentLogging::Truncate, truncate_length: 10 };

        let redacted = preview_content("abcdefghijklmnopqrstuvwxyz", &privacy);
        assert!(redacted.starts_with("abcdefghij..."));
        assert!(redacted.contains("26 total chars"));

        assert_eq!(preview_content("short", &privacy), "short");
    }

    #[test]
    fn test_preview_content_full() {
        let privacy = PrivacySettings { log_content: ContentLogging::Full, truncate_length: 1 };
        let long_content = "a".repeat(200);
        assert_eq!(preview_content(&long_content, &privacy), long_content);
    }

    #[test]
    fn test_sanitize_path() {
        let abs_path = PathBuf::from("/var/log/relayhub.log");
        assert_eq!(sanitize_path(&abs_path), "/var/log/relayhub.log");

        if let Ok(home) = env::var("HOME")
            && !home.is_empty()
            && home != "/"
        {
            let test_path = PathBuf::from(home).join("notes").join("export.txt");
            assert_eq!(sanitize_path(&test_path), "~/notes/export.txt");
        }
    }
}
