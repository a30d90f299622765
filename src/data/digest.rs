use bytes::Bytes;

/// Digest value computed with a named algorithm.
///
/// Two digests are equal only if both the algorithm and the bytes are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: String,
    value: Bytes,
}

impl Digest {
    pub const MD5: &'static str = "MD5";
    pub const SHA_1: &'static str = "SHA-1";
    pub const SHA_256: &'static str = "SHA-256";

    #[inline]
    pub fn new(algorithm: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            algorithm: algorithm.into(),
            value: value.into(),
        }
    }

    /// Create new MD5 [`Digest`], as carried by `Content-MD5`.
    #[inline]
    pub fn md5(value: impl Into<Bytes>) -> Self {
        Self::new(Self::MD5, value)
    }

    #[inline]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    #[inline]
    pub fn value(&self) -> &Bytes {
        &self.value
    }
}
