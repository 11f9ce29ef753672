// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Top-level error type for the notification service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Dialog Error: {0}")]
    Dialog(#[from] DialogError),

    #[error("Marshal Error: {0}")]
    Marshal(#[from] MarshalError),
}

/// Failures raised by a dialog backend while showing a message box.
///
/// These are environment or programming errors: the service never retries
/// them beyond the single unowned fallback and never fabricates an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// The backend cannot display anything in the current environment.
    #[error("dialog backend unavailable: {0}")]
    Unavailable(String),

    /// The backend returned a result that does not belong to the requested button set.
    #[error("unexpected dialog result: {0}")]
    UnexpectedResult(String),

    /// Any other backend failure.
    #[error("{0}")]
    Other(String),
}

/// Failures while handing work to a UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// The UI loop has shut down and no longer accepts work.
    #[error("UI loop is no longer running")]
    Disconnected,

    /// The task was accepted but never replied (it panicked or the loop stopped).
    #[error("UI task ended without a result")]
    NoReply,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
