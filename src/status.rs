use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    Error,
    Warning,
    Info,
    Status,
    Trace,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message_type_str = match self {
            MessageType::Error => "Error",
            MessageType::Warning => "Warning",
            MessageType::Info => "Info",
            MessageType::Status => "Status",
            MessageType::Trace => "Trace",
        };
        write!(f, "{}", message_type_str)
    }
}

impl From<Level> for MessageType {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => MessageType::Error,
            Level::Warn => MessageType::Warning,
            Level::Info => MessageType::Info,
            Level::Debug => MessageType::Status,
            Level::Trace => MessageType::Trace,
        }
    }
}

impl MessageType {
    fn color(&self) -> &'static str {
        match self {
            MessageType::Error => "\x1b[31m",
            MessageType::Warning => "\x1b[33m",
            MessageType::Info => "\x1b[0m",
            MessageType::Status => "\x1b[36m",
            MessageType::Trace => "\x1b[90m",
        }
    }
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
    pub target: String,
    pub content: String,
}

impl StatusMessage {
    pub fn new(message_type: MessageType, target: &str, content: String) -> Self {
        StatusMessage {
            timestamp: Utc::now(),
            message_type,
            target: target.to_owned(),
            content,
        }
    }

    /// One colored line, reset to the default color at the end.
    pub fn render(&self) -> String {
        let white = "\x1b[0m";
        format!(
            "{}{} | {:^8} | {}: {}{}",
            self.message_type.color(),
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.message_type,
            self.target,
            self.content,
            white,
        )
    }
}

/// Writes every enabled log record as a [StatusMessage] to stderr.
pub struct StatusLog {
    max_level: LevelFilter,
}

impl StatusLog {
    pub fn new(max_level: LevelFilter) -> Self {
        StatusLog { max_level }
    }

    /// Warnings by default, every `-v` shows one more level.
    pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Register as the global logger.
    pub fn init(verbose: u8) -> Result<(), log::SetLoggerError> {
        let max_level = Self::level_from_verbosity(verbose);
        log::set_boxed_logger(Box::new(StatusLog::new(max_level)))?;
        log::set_max_level(max_level);

        Ok(())
    }
}

impl Log for StatusLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = StatusMessage::new(
            record.level().into(),
            record.target(),
            record.args().to_string(),
        );
        eprintln!("{}", message.render());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(StatusLog::level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(StatusLog::level_from_verbosity(1), LevelFilter::Info);
        assert_eq!(StatusLog::level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(StatusLog::level_from_verbosity(3), LevelFilter::Trace);
        assert_eq!(StatusLog::level_from_verbosity(200), LevelFilter::Trace);
    }

    #[test]
    fn test_init_installs_global_logger() {
        StatusLog::init(2).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);

        // Only one logger per process.
        assert!(StatusLog::init(0).is_err());
    }

    #[test]
    fn test_enabled() {
        let logger = StatusLog::new(LevelFilter::Info);

        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_render() {
        let message = StatusMessage::new(MessageType::Warning, "libwifi", "bad fcs".to_string());
        let line = message.render();

        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("Warning"));
        assert!(line.ends_with("libwifi: bad fcs\x1b[0m"));
    }
}
