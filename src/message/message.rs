use std::time::SystemTime;

use super::Representation;
use crate::data::{CacheDirective, RecipientInfo, Warning};
use crate::headers::HeaderMap;

/// Fields shared by requests and responses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    /// `Date`.
    pub date: Option<SystemTime>,
    /// `Cache-Control`.
    pub cache_directives: Vec<CacheDirective>,
    /// `Via`.
    pub recipients_info: Vec<RecipientInfo>,
    /// `Warning`.
    pub warnings: Vec<Warning>,
    /// Entity headers.
    pub entity: Option<Representation>,
    /// Extension headers, never contains a [standard][crate::headers::standard] header.
    pub headers: HeaderMap,
}

impl Message {
    /// Create new empty [`Message`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the message carries an available entity.
    pub fn is_entity_available(&self) -> bool {
        self.entity.as_ref().is_some_and(Representation::is_available)
    }
}
