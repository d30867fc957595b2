// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only the configuration layer can fail. The presentation core reports
//! rejections through `bool` returns and swallows stale callbacks.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// A config file could not be parsed or serialized.
    Config(String),
}

impl Error {
    /// Returns the user-facing warning key for this error.
    #[must_use]
    pub fn warning_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-config-load-error",
            Error::Config(_) => "notification-config-parse-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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
