use std::fmt;

/// Failure to install the `log` bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingError {
    /// Another `log` backend was set before [`init_logging`](crate::init_logging).
    AlreadyInstalled,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::AlreadyInstalled => {
                f.write_str("a `log` backend is already installed")
            }
        }
    }
}

impl std::error::Error for LoggingError {}
