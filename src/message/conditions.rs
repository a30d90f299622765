use std::time::SystemTime;

use crate::data::Tag;

/// Conditions of a conditional request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conditions {
    /// `If-Match`.
    pub match_tags: Vec<Tag>,
    /// `If-None-Match`.
    pub none_match_tags: Vec<Tag>,
    /// `If-Modified-Since`.
    pub modified_since: Option<SystemTime>,
    /// `If-Unmodified-Since`.
    pub unmodified_since: Option<SystemTime>,
    /// `If-Range` with an entity tag.
    pub range_tag: Option<Tag>,
    /// `If-Range` with a date.
    pub range_date: Option<SystemTime>,
}

impl Conditions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no condition is set.
    pub fn is_empty(&self) -> bool {
        self.match_tags.is_empty()
            && self.none_match_tags.is_empty()
            && self.modified_since.is_none()
            && self.unmodified_since.is_none()
            && self.range_tag.is_none()
            && self.range_date.is_none()
    }
}
