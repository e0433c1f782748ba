//! Error type for constructing a search.

use crate::types::{Word, MAX_BITS};

/// Error type for invalid search parameters.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The parameter is structurally nonsensical (e.g. zero pins).
    InvalidArgument(String),
    /// The width exceeds [`MAX_BITS`].
    OutOfRange { name: &'static str, value: Word },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::OutOfRange { name, value } => {
                write!(f, "{} = {} is too big; only [1, {}] is supported", name, value, MAX_BITS)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
