//! Error management module

use std::error::Error as StdError;
use std::fmt;
use std::io;

/// The error type used by this crate.
#[derive(Debug)]
pub enum SplitError {
    /// The supplied [`SplitConfig`](crate::config::SplitConfig) is invalid.
    Configuration(ConfigError),
    /// An error was returned by the underlying reader.
    Reader(io::Error),
    /// The input could not be parsed as the configured format.
    Parse(ParseError),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Configuration(e) => write!(f, "invalid configuration: {}", e),
            SplitError::Reader(e) => write!(f, "I/O error: {}", e),
            SplitError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl StdError for SplitError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SplitError::Configuration(e) => Some(e),
            SplitError::Reader(e) => Some(e),
            SplitError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SplitError {
    #[inline]
    fn from(error: io::Error) -> Self {
        SplitError::Reader(error)
    }
}

impl From<ConfigError> for SplitError {
    #[inline]
    fn from(error: ConfigError) -> Self {
        SplitError::Configuration(error)
    }
}

impl From<ParseError> for SplitError {
    #[inline]
    fn from(error: ParseError) -> Self {
        SplitError::Parse(error)
    }
}

/// Errors detected when building a [`SplitConfig`](crate::config::SplitConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `bufsize` was zero.
    ZeroBufsize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBufsize => write!(f, "bufsize must be at least 1"),
        }
    }
}

impl StdError for ConfigError {}

/// Errors detected while recognizing document boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The stream ended in the middle of a document.
    UnexpectedEof {
        /// Byte offset from the start of the stream where the document began.
        offset: u64,
    },
    /// A closing tag did not match the currently open one (XML only).
    MismatchedEndTag {
        /// Name found at the opening tag.
        expected: String,
        /// Name found at the closing tag.
        found: String,
    },
    /// A byte could not be valid at this point for the configured format.
    UnexpectedByte {
        /// Byte offset from the start of the stream.
        offset: u64,
        /// The unexpected byte.
        byte: u8,
    },
    /// A UBJSON marker byte is not part of the supported marker table.
    InvalidMarker {
        /// Byte offset from the start of the stream.
        offset: u64,
        /// The unrecognized marker byte.
        marker: u8,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { offset } => {
                write!(f, "unexpected end of stream in document started at offset {}", offset)
            }
            ParseError::MismatchedEndTag { expected, found } => {
                write!(f, "expected closing tag for '{}', found '{}'", expected, found)
            }
            ParseError::UnexpectedByte { offset, byte } => {
                write!(f, "unexpected byte {:#04x} at offset {}", byte, offset)
            }
            ParseError::InvalidMarker { offset, marker } => {
                write!(f, "invalid UBJSON marker {:#04x} at offset {}", marker, offset)
            }
        }
    }
}

impl StdError for ParseError {}

/// A specialized `Result` type where the error is hard-wired to [`SplitError`].
pub type Result<T> = std::result::Result<T, SplitError>;
