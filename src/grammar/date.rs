//! `HTTP-date` headers and `Retry-After`.
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::{FormatError, ParseError, ParseErrorKind};
use crate::data::RetryAfter;

/// Read an `HTTP-date` in any of the RFC 1123, RFC 850 or asctime formats.
pub fn read_date(value: &str) -> Result<SystemTime, ParseError> {
    httpdate::parse_http_date(value.trim())
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, 0, value.bytes().next()))
}

/// `9999-12-31T23:59:59Z`, the last second of a four digit year.
const MAX_DATE_SECS: u64 = 253_402_300_799;

/// Write an `HTTP-date` in the RFC 1123 format.
///
/// # Errors
///
/// Returns error if the date is before the Unix epoch or after the year 9999.
pub fn write_date(date: SystemTime) -> Result<String, FormatError> {
    match date.duration_since(UNIX_EPOCH) {
        Ok(since) if since.as_secs() <= MAX_DATE_SECS => Ok(httpdate::fmt_http_date(date)),
        _ => Err(FormatError::InvalidDate),
    }
}

/// Read a `Retry-After` value, either an `HTTP-date` or a number of seconds.
pub fn read_retry_after(value: &str) -> Result<RetryAfter, ParseError> {
    let value = value.trim();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse()
            .map(|secs| RetryAfter::Delay(Duration::from_secs(secs)))
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, 0, value.bytes().next()));
    }
    read_date(value).map(RetryAfter::Date)
}

/// Write a `Retry-After` value.
pub fn write_retry_after(retry_after: &RetryAfter) -> Result<String, FormatError> {
    match retry_after {
        RetryAfter::Date(date) => write_date(*date),
        RetryAfter::Delay(delay) => Ok(itoa::Buffer::new().format(delay.as_secs()).to_owned()),
    }
}
