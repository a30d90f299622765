/// Invalid [`HeaderName`] or [`HeaderValue`] input.
///
/// [`HeaderName`]: super::HeaderName
/// [`HeaderValue`]: super::HeaderValue
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// Header name is empty.
    #[error("header name cannot be empty")]
    Empty,
    /// Input exceeds [`MAX_HEADER_NAME_LEN`] or [`MAX_HEADER_VALUE_LEN`].
    ///
    /// [`MAX_HEADER_NAME_LEN`]: super::MAX_HEADER_NAME_LEN
    /// [`MAX_HEADER_VALUE_LEN`]: super::MAX_HEADER_VALUE_LEN
    #[error("header exceeds the maximum length")]
    TooLong,
    /// Name is not a `token`, or value is not `field-content`.
    #[error("header contains a byte outside its grammar")]
    Invalid,
}

impl HeaderError {
    pub(crate) const fn from_len(len: usize) -> Self {
        if len == 0 { Self::Empty } else { Self::TooLong }
    }

    /// Panic in const context, where `Display` is unavailable.
    pub(crate) const fn panic_const(self) -> ! {
        match self {
            Self::Empty => panic!("header name cannot be empty"),
            Self::TooLong => panic!("header exceeds the maximum length"),
            Self::Invalid => panic!("header contains a byte outside its grammar"),
        }
    }
}
