/// Intermediary recipient, as listed in the `Via` header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecipientInfo {
    /// Received protocol, e.g: `1.1` or `HTTP/1.1`.
    pub protocol: String,
    /// Host with optional port, or pseudonym.
    pub name: String,
    pub comment: Option<String>,
}

impl RecipientInfo {
    #[inline]
    pub fn new(protocol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            name: name.into(),
            comment: None,
        }
    }
}
