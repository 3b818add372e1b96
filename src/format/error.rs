use std::fmt;

use thiserror::Error;

/// Which argument of a formatting call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Target,
    Now,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Target => f.write_str("target"),
            Side::Now => f.write_str("now"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    /// Input could not be read as an RFC 3339 / ISO 8601 instant.
    #[error("invalid {side} instant {input:?}: {source}")]
    InvalidInstant {
        side: Side,
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
