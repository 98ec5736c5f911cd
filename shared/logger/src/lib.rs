//! Thread-safe asynchronous logging.
//!
//! Records are formatted as `[timestamp] LEVEL [component]: message` and
//! written by a background thread, optionally echoed to stderr.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
