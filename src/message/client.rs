use crate::data::{CharacterSet, Encoding, Expectation, Language, MediaType, Preference, Product};
use crate::grammar::{self, ParseError};

/// Client properties sent in a request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientInfo {
    /// `Accept`.
    pub accepted_media_types: Vec<Preference<MediaType>>,
    /// `Accept-Charset`.
    pub accepted_character_sets: Vec<Preference<CharacterSet>>,
    /// `Accept-Encoding`.
    pub accepted_encodings: Vec<Preference<Encoding>>,
    /// `Accept-Language`.
    pub accepted_languages: Vec<Preference<Language>>,
    /// `User-Agent`, as written on the wire.
    pub agent: Option<String>,
    /// `From`.
    pub from: Option<String>,
    /// `Expect`.
    pub expectations: Vec<Expectation>,
}

impl ClientInfo {
    /// Create new empty [`ClientInfo`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the product tokens of the agent.
    pub fn agent_products(&self) -> Result<Vec<Product>, ParseError> {
        match &self.agent {
            Some(agent) => grammar::read_products(agent),
            None => Ok(Vec::new()),
        }
    }

    /// Set the agent from product tokens.
    pub fn set_agent_products(&mut self, products: &[Product]) -> Result<(), grammar::FormatError> {
        self.agent = Some(grammar::write_products(products)?);
        Ok(())
    }
}
