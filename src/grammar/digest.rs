//! `Content-MD5`.
use base64::{Engine, engine::general_purpose::STANDARD};

use super::{ParseError, ParseErrorKind};
use crate::data::Digest;

/// Read a base64 encoded MD5 digest.
pub fn read_md5_digest(value: &str) -> Result<Digest, ParseError> {
    let value = value.trim();
    let bytes = STANDARD
        .decode(value)
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidEncoding, 0, value.bytes().next()))?;
    Ok(Digest::md5(bytes))
}

/// Write a digest as base64, `None` unless it is an MD5 digest.
pub fn write_md5_digest(digest: &Digest) -> Option<String> {
    digest
        .algorithm()
        .eq_ignore_ascii_case(Digest::MD5)
        .then(|| STANDARD.encode(digest.value()))
}
