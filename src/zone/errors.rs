use std::fmt;

/// Zone-related errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// Zone file parsing error
    ParseError(String),
    /// Invalid TTL value
    InvalidTTL(String),
    /// Invalid resource record type
    InvalidRRType(String),
}

impl ZoneError {
    /// Attach the source line number to an error coming out of the stream
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::ParseError(msg) => Self::ParseError(format!("line {line}: {msg}")),
            other => Self::ParseError(format!("line {line}: {other}")),
        }
    }
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Zone parse error: {}", msg),
            Self::InvalidTTL(ttl) => write!(f, "Invalid TTL value: {}", ttl),
            Self::InvalidRRType(rtype) => write!(f, "Invalid resource record type: {}", rtype),
        }
    }
}

impl std::error::Error for ZoneError {}

pub type Result<T> = std::result::Result<T, ZoneError>;
