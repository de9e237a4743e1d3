//! Unified error type for all ledger operations.

use thiserror::Error;

/// Things that can go wrong when using the ledger.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An item name or file path was empty or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Quantity arithmetic left the range of `i64`.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
    /// The file parsed as JSON but is not an object of name -> integer pairs.
    #[error("invalid inventory file format: {0}")]
    InvalidFormat(String),
    /// The file is not valid JSON at all.
    #[error("parse error: {0}")]
    Parse(String),
    /// File system problem (read, write).
    #[error("i/o error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub(crate) fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() {
            Error::Parse(err.to_string())
        } else {
            Error::InvalidFormat(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
