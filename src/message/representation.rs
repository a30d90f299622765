use std::time::SystemTime;

use crate::data::{CharacterSet, Digest, Disposition, Encoding, Language, MediaType, Range, Tag};

/// Metadata of a message entity, as described by the entity headers.
///
/// Content itself is out of scope, [`size`][Representation::size] and
/// [`available`][Representation::available] stand in for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    /// `Content-Type` media type, without the `charset` parameter.
    pub media_type: Option<MediaType>,
    /// `Content-Type` charset.
    pub character_set: Option<CharacterSet>,
    /// `Content-Encoding`, in the order they were applied.
    pub encodings: Vec<Encoding>,
    /// `Content-Language`.
    pub languages: Vec<Language>,
    /// `Content-Location`.
    pub location_ref: Option<String>,
    /// `Content-MD5`.
    pub digest: Option<Digest>,
    /// `Content-Range`, the part of the complete entity this representation holds.
    pub range: Option<Range>,
    /// Size of the complete entity in bytes, `None` if unknown.
    pub size: Option<u64>,
    /// Whether there is content to transfer.
    pub available: bool,
    /// `ETag`.
    pub tag: Option<Tag>,
    /// `Expires`.
    pub expiration_date: Option<SystemTime>,
    /// `Last-Modified`.
    pub modification_date: Option<SystemTime>,
    /// `Content-Disposition`.
    pub disposition: Option<Disposition>,
}

impl Representation {
    /// Create new available [`Representation`] of the given media type.
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type: Some(media_type),
            ..Self::default()
        }
    }

    /// Create new [`Representation`] with nothing to transfer.
    pub fn empty() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the number of bytes actually transferred.
    ///
    /// This is the size of the range when there is one, otherwise the complete size.
    pub fn available_size(&self) -> Option<u64> {
        let Some(range) = &self.range else {
            return self.size;
        };
        match self.size {
            Some(size) => range.resolve(size).map(|(first, last)| last - first + 1),
            None => match (range.index(), range.size()) {
                (Some(_), Some(size)) => Some(size),
                _ => None,
            },
        }
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self {
            media_type: None,
            character_set: None,
            encodings: Vec::new(),
            languages: Vec::new(),
            location_ref: None,
            digest: None,
            range: None,
            size: None,
            available: true,
            tag: None,
            expiration_date: None,
            modification_date: None,
            disposition: None,
        }
    }
}
