//! Instance-scoped logging for the ALFAcoins client.
//!
//! Each client owns a [`Logger`]. When built from a
//! [`LoggingConfig`](crate::config::LoggingConfig) it carries its own
//! `tracing` dispatcher, so events go to the configured sink regardless of
//! any global subscriber. A disabled logger emits through the ambient
//! dispatcher, which discards everything unless the application installed
//! a subscriber.

mod format;

pub use format::TemplateFormat;

use std::fs::OpenOptions;
use std::io;

use tracing::Dispatch;

use crate::config::{LogLevel, LogTarget, LogWriter, LoggingConfig};
use crate::error::ConfigError;

/// Logger name reported by the `%(name)s` placeholder.
pub const LOGGER_NAME: &str = "alfacoins_api";

/// Logging capability owned by a client.
#[derive(Clone, Default)]
pub struct Logger {
    dispatch: Option<Dispatch>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Logger {
    /// Creates a logger that writes nothing of its own.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Builds a logger from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogFile`] if a file target cannot be opened.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, ConfigError> {
        let writer = match config.target() {
            LogTarget::Console => LogWriter::new(io::stderr()),
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ConfigError::LogFile {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                LogWriter::new(file)
            }
            LogTarget::Writer(writer) => writer.clone(),
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(config.level().as_level_filter())
            .with_writer(writer)
            .event_format(TemplateFormat::new(config.format()))
            .finish();

        Ok(Self {
            dispatch: Some(Dispatch::new(subscriber)),
        })
    }

    /// Returns `true` if this logger has its own sink.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Logs `message` at ERROR.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Logs `message` at WARNING.
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Logs `message` at INFO.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs `message` at DEBUG.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Emits one event at `level`.
    pub fn log(&self, level: LogLevel, message: &str) {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, || emit(level, message)),
            None => emit(level, message),
        }
    }
}

fn emit(level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!(target: LOGGER_NAME, "{message}"),
        LogLevel::Warning => tracing::warn!(target: LOGGER_NAME, "{message}"),
        LogLevel::Info => tracing::info!(target: LOGGER_NAME, "{message}"),
        LogLevel::Debug => tracing::debug!(target: LOGGER_NAME, "{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn buffered_logger(config: LoggingConfig) -> (Logger, Buffer) {
        let buffer = Buffer::default();
        let config = config.with_target(LogTarget::Writer(LogWriter::new(buffer.clone())));
        (Logger::from_config(&config).unwrap(), buffer)
    }

    #[test]
    fn test_disabled_logger_reports_disabled() {
        let logger = Logger::disabled();
        assert!(!logger.is_enabled());
        // Must not panic without any subscriber installed
        logger.error("nothing to see");
    }

    #[test]
    fn test_template_renders_level_name_and_message() {
        let (logger, buffer) =
            buffered_logger(LoggingConfig::default().with_format("%(name)s|%(levelname)s|%(message)s"));

        logger.warning("invalid currency");
        logger.info("second line");

        assert_eq!(
            buffer.contents(),
            "alfacoins_api|WARNING|invalid currency\nalfacoins_api|INFO|second line\n"
        );
    }

    #[test]
    fn test_level_threshold_filters_lower_levels() {
        let (logger, buffer) = buffered_logger(
            LoggingConfig::default()
                .with_level(LogLevel::Warning)
                .with_format("%(levelname)s %(message)s"),
        );

        logger.debug("raw body");
        logger.info("parsed");
        logger.warning("has error");
        logger.error("unparseable");

        assert_eq!(buffer.contents(), "WARNING has error\nERROR unparseable\n");
    }

    #[test]
    fn test_default_format_includes_timestamp() {
        let (logger, buffer) = buffered_logger(LoggingConfig::default());

        logger.debug("hello");

        let line = buffer.contents();
        assert!(line.ends_with(" - alfacoins_api - DEBUG - hello\n"), "{line}");
        // YYYY-MM-DD HH:MM:SS,mmm
        let timestamp = line.split(" - ").next().unwrap();
        assert_eq!(timestamp.len(), 23);
        assert_eq!(&timestamp[19..20], ",");
    }

    #[test]
    fn test_multiline_messages_are_written_whole() {
        let (logger, buffer) = buffered_logger(LoggingConfig::default().with_format("%(message)s"));

        logger.info("Requested: GET /fees\nResponse code: 200");

        assert_eq!(buffer.contents(), "Requested: GET /fees\nResponse code: 200\n");
    }

    #[test]
    fn test_file_target_appends() {
        let path = std::env::temp_dir().join(format!(
            "alfacoins-logger-test-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let config = LoggingConfig::default()
            .with_format("%(message)s")
            .with_target(LogTarget::File(path.clone()));

        Logger::from_config(&config).unwrap().info("first");
        Logger::from_config(&config).unwrap().info("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_file_target_is_config_error() {
        let config = LoggingConfig::default().with_target(LogTarget::File(
            std::env::temp_dir()
                .join("alfacoins-missing-dir")
                .join("nested")
                .join("alfacoins.log"),
        ));

        let result = Logger::from_config(&config);
        assert!(matches!(result, Err(ConfigError::LogFile { .. })));
    }
}
