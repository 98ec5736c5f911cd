//! Thread-safe asynchronous logger.
//!
//! [`Logger`] hands formatted records to a writer thread so callers never
//! block on file I/O. Console output goes to stderr so it does not mix with
//! program output on stdout.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::{WriterCommand, spawn_writer_thread};
use std::path::PathBuf;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// Clones, and loggers derived with [`Logger::for_component`], share one
/// writer thread.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Logger::new(dir.path().join("app.log"), LogLevel::Info).unwrap();
/// logger.info("Application started");
/// logger.debug("filtered out");
/// logger.flush();
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Option<Sender<WriterCommand>>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a file logger.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Self::open(log_path, level, None, false)
    }

    /// Creates a file logger tagging every line with `component`.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: String,
        console_output: bool,
    ) -> Result<Self> {
        Self::open(log_path, level, Some(component), console_output)
    }

    /// Creates a logger that only writes to stderr.
    pub fn console(level: LogLevel) -> Self {
        Logger {
            sender: None,
            level,
            component: None,
            console_output: true,
        }
    }

    fn open(
        log_path: PathBuf,
        level: LogLevel,
        component: Option<String>,
        console_output: bool,
    ) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(&log_path, receiver)?;
        Ok(Logger {
            sender: Some(sender),
            level,
            component,
            console_output,
        })
    }

    /// Returns a logger for another component on the same writer.
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let main_logger = Logger::console(LogLevel::Warn);
    /// let parser_logger = main_logger.for_component("Parser");
    /// assert_eq!(parser_logger.level(), LogLevel::Warn);
    /// ```
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    /// Minimum level recorded by this logger.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs a debug message (only if level is Debug or lower).
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message (only if level is Info or lower).
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message (only if level is Warn or lower).
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Blocks until the writer has handled every record sent so far.
    ///
    /// Returns immediately for console-only loggers or if the writer is gone.
    pub fn flush(&self) {
        if let Some(ref sender) = self.sender {
            let (ack_tx, ack_rx) = channel();
            if sender.send(WriterCommand::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        let msg = LogMessage::new(level, self.component.as_deref(), message);

        if self.console_output {
            eprint!("{}", msg.format());
        }

        if let Some(ref sender) = self.sender {
            let _ = sender.send(WriterCommand::Write(msg));
        }
    }
}
