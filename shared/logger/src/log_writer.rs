//! Background log file writer.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};

/// Work items accepted by the writer thread.
pub(crate) enum WriterCommand {
    Write(LogMessage),
    /// Acknowledged once every earlier command has been handled.
    Flush(Sender<()>),
}

/// Owns the log file for the lifetime of the writer thread.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens or creates the file in append mode.
    pub fn new(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_message(&mut self, message: &LogMessage) {
        if let Err(e) = self.file.write_all(message.format().as_bytes()) {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Handles commands until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<WriterCommand>) {
        for command in receiver {
            match command {
                WriterCommand::Write(message) => self.write_message(&message),
                WriterCommand::Flush(ack) => {
                    if let Err(e) = self.file.flush() {
                        eprintln!("Error flushing log: {}", e);
                    }
                    let _ = ack.send(());
                }
            }
        }
        let _ = self.file.flush();
    }
}

/// Opens the file on the caller's thread, then hands it to a writer thread.
pub(crate) fn spawn_writer_thread(log_path: &Path, receiver: Receiver<WriterCommand>) -> Result<()> {
    let writer = LogWriter::new(log_path)?;
    std::thread::spawn(move || writer.run(receiver));
    Ok(())
}
