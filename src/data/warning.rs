use std::time::SystemTime;

/// Additional message status information, in the `Warning` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// Three digit warn-code, e.g: `110` for a stale response.
    pub code: u16,
    /// Host or pseudonym of the agent adding the warning.
    pub agent: String,
    pub text: String,
    pub date: Option<SystemTime>,
}

impl Warning {
    pub const RESPONSE_STALE: u16 = 110;
    pub const REVALIDATION_FAILED: u16 = 111;
    pub const DISCONNECTED: u16 = 112;
    pub const HEURISTIC_EXPIRATION: u16 = 113;
    pub const MISCELLANEOUS: u16 = 199;
    pub const TRANSFORMATION_APPLIED: u16 = 214;
    pub const PERSISTENT_MISCELLANEOUS: u16 = 299;

    #[inline]
    pub fn new(code: u16, agent: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code,
            agent: agent.into(),
            text: text.into(),
            date: None,
        }
    }
}
