use thiserror::Error;

/// A row of one of the reference datasets that could not be understood.
///
/// Every variant is fatal: the generated table is only useful if it reflects the input data
/// exactly, so nothing is skipped or guessed at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid hexadecimal code point {value:?}")]
    InvalidHex { line: usize, value: String },
    #[error("line {line}: invalid OS/2 bit number {value:?}")]
    InvalidBit { line: usize, value: String },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: usize, expected: &'static str, found: usize },
    #[error("line {line}: malformed code point range {value:?}")]
    InvalidRange { line: usize, value: String },
    #[error("line {line}: continuation row with no preceding bit number")]
    OrphanContinuation { line: usize },
    #[error("line {line}: \"Last\" marker without a preceding \"First\" marker")]
    UnmatchedLast { line: usize },
    #[error("line {line}: \"First\" marker while the range from line {pending_line} is still open")]
    NestedFirst { line: usize, pending_line: usize },
    #[error("line {line}: \"First\" marker is never closed by a \"Last\" marker")]
    UnclosedFirst { line: usize },
}
