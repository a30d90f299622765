use super::{CharacterSet, MediaType, Metadata};

/// Decomposed `Content-Type` value.
///
/// The `charset` parameter never appears in the media type parameters, it lives in
/// [`ContentType::character_set`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentType {
    pub media_type: MediaType,
    pub character_set: Option<CharacterSet>,
}

impl ContentType {
    /// Create new [`ContentType`], extracting `charset` from the media type parameters.
    pub fn new(mut media_type: MediaType, character_set: Option<CharacterSet>) -> Self {
        let extracted = media_type
            .parameters_mut()
            .remove_first("charset", true)
            .and_then(|e| e.value)
            .map(|e| CharacterSet::from_name(&e));
        Self {
            media_type,
            character_set: character_set.or(extracted),
        }
    }
}

impl From<MediaType> for ContentType {
    #[inline]
    fn from(media_type: MediaType) -> Self {
        Self::new(media_type, None)
    }
}
