use std::str::FromStr;

use bytes::Bytes;

use crate::headers::error::HeaderError;
use crate::matches;

/// HTTP Header Value.
///
/// Value is valid UTF-8 without control characters other than HTAB, and without leading or
/// trailing whitespace.
#[derive(Clone)]
pub struct HeaderValue {
    /// is valid UTF-8
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub const fn from_static(value: &'static str) -> Self {
        match validate_header_value(value.as_bytes()) {
            Ok(()) => Self {
                bytes: Bytes::from_static(value.as_bytes()),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(value: B) -> Result<Self, HeaderError> {
        let bytes = value.into();
        if std::str::from_utf8(&bytes).is_err() {
            return Err(HeaderError::Invalid);
        }
        match validate_header_value(&bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => Err(err),
        }
    }

    /// Parse header value by copying from string.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_slice<A: AsRef<str>>(value: A) -> Result<Self, HeaderError> {
        let value = value.as_ref();
        match validate_header_value(value.as_bytes()) {
            Ok(()) => Ok(Self {
                bytes: Bytes::copy_from_slice(value.as_bytes()),
            }),
            Err(err) => Err(err),
        }
    }

    /// Parse header value from an owned string without copying.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_string(value: String) -> Result<Self, HeaderError> {
        match validate_header_value(value.as_bytes()) {
            Ok(()) => Ok(Self {
                bytes: Bytes::from(value),
            }),
            Err(err) => Err(err),
        }
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns header value as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is validated UTF-8 at construction
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns the length of the value in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the value is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ===== Parsing =====

/// Maximum length of a header value.
pub const MAX_HEADER_VALUE_LEN: usize = 1 << 13; // 8KB

const fn validate_header_value(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;
    match bytes {
        // no leading SP / HTAB
        | [b' ' | b'\t', ..]
        // no trailing SP / HTAB
        | [.., b' ' | b'\t'] => {
            return Err(E::Invalid);
        },
        _ => {}
    }
    // too long
    if bytes.len() > MAX_HEADER_VALUE_LEN {
        return Err(E::TooLong);
    }
    let mut error = false;
    while let [byte, rest @ ..] = bytes {
        error |= !matches::is_header_value(*byte);
        bytes = rest;
    }
    if !error { Ok(()) } else { Err(E::Invalid) }
}

// ===== Traits =====

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderValue").field(&self.as_str()).finish()
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderValue {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s)
    }
}

impl TryFrom<String> for HeaderValue {
    type Error = HeaderError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl PartialEq for HeaderValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for HeaderValue {}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<String> for HeaderValue {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<HeaderValue> for Bytes {
    #[inline]
    fn from(value: HeaderValue) -> Self {
        value.bytes
    }
}
