use crate::data::Product;
use crate::grammar::{self, ParseError};

/// Server properties sent in a response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerInfo {
    /// `Server`, as written on the wire.
    pub agent: Option<String>,
    /// `Accept-Ranges: bytes`.
    pub accept_ranges: bool,
}

impl ServerInfo {
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
}
