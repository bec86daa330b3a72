// File: ./src/error.rs
use thiserror::Error;

/// Errors raised where text from outside the crate (config files, event
/// sources, string identifiers) is turned into typed values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown calendar view '{0}' (expected day, week or month)")]
    UnknownView(String),

    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    #[error("invalid iCalendar data: {0}")]
    Ics(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
