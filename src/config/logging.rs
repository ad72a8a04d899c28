//! Logging configuration for the ALFAcoins client.
//!
//! A client logs each request and response through its own logger when a
//! [`LoggingConfig`] is supplied. Every option has a default, so
//! `LoggingConfig::default()` gives DEBUG-level output to the console in
//! the default format.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Default file name used when logging to a file without naming one.
pub const DEFAULT_LOG_FILENAME: &str = "alfacoins.log";

/// Default log line template.
pub const DEFAULT_LOG_FORMAT: &str = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";

/// Severity threshold for client log output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only unparseable responses.
    Error,
    /// Adds responses carrying an `error` field.
    Warning,
    /// Adds request lines and parsed responses.
    Info,
    /// Adds raw status codes and bodies.
    #[default]
    Debug,
}

impl LogLevel {
    /// Looks up a level by its name (`ERROR`, `WARNING`, `INFO`, `DEBUG`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ERROR" => Some(Self::Error),
            "WARNING" => Some(Self::Warning),
            "INFO" => Some(Self::Info),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the level name as it appears in log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the equivalent `tracing` filter.
    #[must_use]
    pub const fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warning => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warning
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cloneable, thread-safe sink for log lines.
///
/// Wraps any [`io::Write`] so it can be handed to a client as a log
/// destination.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::{LoggingConfig, LogTarget, LogWriter};
///
/// let config = LoggingConfig::default().with_target(LogTarget::Writer(LogWriter::new(std::io::sink())));
/// ```
#[derive(Clone)]
pub struct LogWriter(Arc<Mutex<Box<dyn io::Write + Send>>>);

impl LogWriter {
    /// Wraps a writer.
    pub fn new(writer: impl io::Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogWriter")
    }
}

/// Exclusive handle on a [`LogWriter`] for the duration of one log line.
pub struct LogWriterGuard<'a>(MutexGuard<'a, Box<dyn io::Write + Send>>);

impl io::Write for LogWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic mid-write leaves the sink usable.
        let guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        LogWriterGuard(guard)
    }
}

/// Where log lines are written.
#[derive(Clone, Debug, Default)]
pub enum LogTarget {
    /// Standard error.
    #[default]
    Console,
    /// A file, opened in append mode.
    File(PathBuf),
    /// A caller-supplied sink.
    Writer(LogWriter),
}

impl LogTarget {
    /// File target using [`DEFAULT_LOG_FILENAME`].
    #[must_use]
    pub fn default_file() -> Self {
        Self::File(PathBuf::from(DEFAULT_LOG_FILENAME))
    }
}

/// Logging options for a client.
///
/// # Defaults
///
/// - `level`: [`LogLevel::Debug`]
/// - `target`: [`LogTarget::Console`]
/// - `format`: [`DEFAULT_LOG_FORMAT`]
///
/// The format recognizes the placeholders `%(asctime)s`, `%(name)s`,
/// `%(levelname)s` and `%(message)s`; `%%` renders a literal `%`.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::{LoggingConfig, LogLevel, LogTarget};
///
/// let config = LoggingConfig::default()
///     .with_level(LogLevel::Info)
///     .with_target(LogTarget::default_file())
///     .with_format("%(levelname)s: %(message)s");
///
/// assert_eq!(config.level(), LogLevel::Info);
/// ```
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    level: LogLevel,
    target: LogTarget,
    format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            target: LogTarget::default(),
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Sets the minimum level written.
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the level by name, keeping the default for unrecognized names.
    #[must_use]
    pub fn with_level_name(self, name: &str) -> Self {
        let level = LogLevel::from_name(name).unwrap_or_default();
        self.with_level(level)
    }

    /// Sets the destination.
    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Sets the line template.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Returns the minimum level written.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the destination.
    #[must_use]
    pub const fn target(&self) -> &LogTarget {
        &self.target
    }

    /// Returns the line template.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_console_debug_setup() {
        let config = LoggingConfig::default();
        assert_eq!(config.level(), LogLevel::Debug);
        assert!(matches!(config.target(), LogTarget::Console));
        assert_eq!(config.format(), DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn test_level_names() {
        for level in [
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Info,
            LogLevel::Debug,
        ] {
            assert_eq!(LogLevel::from_name(level.as_str()), Some(level));
        }
        assert_eq!(LogLevel::from_name("TRACE"), None);
        assert_eq!(LogLevel::from_name("debug"), None);
    }

    #[test]
    fn test_unrecognized_level_name_falls_back_to_debug() {
        let config = LoggingConfig::default()
            .with_level(LogLevel::Error)
            .with_level_name("VERBOSE");
        assert_eq!(config.level(), LogLevel::Debug);

        let config = LoggingConfig::default().with_level_name("WARNING");
        assert_eq!(config.level(), LogLevel::Warning);
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LogLevel::Warning.as_level_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::from(Level::WARN), LogLevel::Warning);
        assert_eq!(LogLevel::from(Level::TRACE), LogLevel::Debug);
    }

    #[test]
    fn test_default_file_target_name() {
        match LogTarget::default_file() {
            LogTarget::File(path) => assert_eq!(path, PathBuf::from("alfacoins.log")),
            other => panic!("Expected file target, got {other:?}"),
        }
    }

    #[test]
    fn test_log_writer_clones_share_sink() {
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

        let buffer = Buffer::default();
        let writer = LogWriter::new(buffer.clone());
        let cloned = writer.clone();

        writer.make_writer().write_all(b"one ").unwrap();
        cloned.make_writer().write_all(b"two").unwrap();

        assert_eq!(buffer.0.lock().unwrap().as_slice(), b"one two");
    }
}
