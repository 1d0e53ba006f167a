//! Process-level errors.
//!
//! The game itself has no failure modes: fouls are state transitions and
//! invalid actions are ignored. What can fail is the plumbing around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or stdin/stdout failure.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("cannot serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
