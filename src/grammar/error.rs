//! Error types of header readers and writers.

/// Malformed header value.
///
/// Carries the byte that could not be read, if any, and its position in the value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    /// `None` when the end of the value was reached.
    pub found: Option<u8>,
}

impl ParseError {
    #[inline]
    pub(crate) fn new(kind: ParseErrorKind, position: usize, found: Option<u8>) -> Self {
        Self { kind, position, found }
    }
}

/// Kind of [`ParseError`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("unexpected end of value")]
    UnexpectedEnd,
    #[error("empty name")]
    EmptyName,
    #[error("empty value")]
    EmptyValue,
    #[error("quality is not a number between 0 and 1")]
    InvalidQuality,
    #[error("invalid number")]
    InvalidNumber,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid encoding")]
    InvalidEncoding,
    #[error("malformed value")]
    Malformed,
}

/// Typed value that cannot be written into a header value.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("entity size is unknown but required to resolve the range")]
    UnknownEntitySize,
    #[error("range is larger than the entity")]
    RangeTooLarge,
    #[error("range has neither index nor size")]
    InvalidRange,
    #[error("empty name")]
    EmptyName,
    #[error("value is not a token")]
    InvalidToken,
    #[error("date is outside of the years 1970 to 9999")]
    InvalidDate,
}
