//! Unified error type for the mcdu-led-lib crate.
//!
//! [`McduError`] wraps driver errors and the configuration/CLI error kinds.
//! Controller operations never return it: they log and report an
//! [`Outcome`](crate::controller::Outcome) instead.

use std::fmt;

use crate::driver::DriverError;

/// Unified error type for mcdu-led-lib operations.
#[derive(Debug)]
pub enum McduError {
    /// Panel driver error (connection, write).
    Driver(DriverError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
    /// A request was refused by the controller (bad name, bad brightness, driver failure).
    Rejected(String),
}

impl fmt::Display for McduError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McduError::Driver(e) => write!(f, "{e}"),
            McduError::Io(e) => write!(f, "I/O error: {e}"),
            McduError::Config(e) => write!(f, "Config error: {e}"),
            McduError::Rejected(e) => write!(f, "Request rejected: {e}"),
        }
    }
}

impl std::error::Error for McduError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            McduError::Driver(e) => Some(e),
            McduError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DriverError> for McduError {
    fn from(e: DriverError) -> Self {
        McduError::Driver(e)
    }
}

impl From<std::io::Error> for McduError {
    fn from(e: std::io::Error) -> Self {
        McduError::Io(e)
    }
}

/// Crate-level Result alias using [`McduError`].
pub type Result<T> = std::result::Result<T, McduError>;
