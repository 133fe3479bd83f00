use std::io;

use thiserror::Error;

/// Everything that can go wrong while reading an AFM document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO failure")]
    IoError(#[from] io::Error),
    #[error("The AFM file should start with 'StartFontMetrics' and not '{0}'")]
    BadHeader(String),
    #[error("Unexpected end of file, expected {0}")]
    UnexpectedEof(&'static str),
    #[error("Expected '{expected}', found '{found}'")]
    ExpectedKeyword {
        expected: &'static str,
        found: String,
    },
    #[error("Unknown AFM key '{0}'")]
    UnknownKey(String),
    #[error("Unknown kerning data type '{0}'")]
    UnknownKernData(String),
    #[error("Expected kern pair command, found '{0}'")]
    UnknownKernPair(String),
    #[error("Unknown char metrics command '{0}'")]
    UnknownCharMetric(String),
    #[error("Expected {expected} value, found '{found}'")]
    InvalidNumber {
        expected: &'static str,
        found: String,
    },
    #[error("Expected boolean value, found '{0}'")]
    InvalidBool(String),
    #[error("Invalid hex string '{value}': {reason}")]
    InvalidHexString { value: String, reason: &'static str },
    #[error("A bounding box needs 4 numbers, found {0}")]
    InvalidBoundingBox(usize),
    #[error("Expected ';' after '{key}', found '{found}'")]
    ExpectedSemicolon { key: &'static str, found: String },
    #[error("Missing ';' after '{0}'")]
    MissingSemicolon(&'static str),
    #[error("Missing value for '{0}'")]
    MissingValue(&'static str),
    #[error("MetricsSets must be in the set {{0,1,2}} and not '{0}'")]
    MetricSetsOutOfRange(i32),
    #[error("{source} in line '{line}'")]
    BadLine {
        line: String,
        #[source]
        source: Box<Error>,
    },
}

/// The broad class of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The byte source failed.
    Io,
    /// Bad header, missing or mismatched terminator, unknown keyword.
    Structural,
    /// A value could not be converted to the expected type.
    Format,
    /// A char metrics field is malformed (missing ';' or value).
    Grammar,
    /// A value is outside the range a field accepts.
    Validation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IoError(_) => ErrorKind::Io,
            Error::BadHeader(_)
            | Error::UnexpectedEof(_)
            | Error::ExpectedKeyword { .. }
            | Error::UnknownKey(_)
            | Error::UnknownKernData(_)
            | Error::UnknownKernPair(_) => ErrorKind::Structural,
            Error::InvalidNumber { .. }
            | Error::InvalidBool(_)
            | Error::InvalidHexString { .. }
            | Error::InvalidBoundingBox(_) => ErrorKind::Format,
            Error::UnknownCharMetric(_)
            | Error::ExpectedSemicolon { .. }
            | Error::MissingSemicolon(_)
            | Error::MissingValue(_) => ErrorKind::Grammar,
            Error::MetricSetsOutOfRange(_) => ErrorKind::Validation,
            Error::BadLine { source, .. } => source.kind(),
        }
    }

    pub(crate) fn in_line(self, line: &str) -> Error {
        Error::BadLine {
            line: line.to_string(),
            source: Box::new(self),
        }
    }
}
