use super::{Message, ServerInfo, delegate, message_fields};
use crate::data::{ChallengeRequest, CookieSetting, Dimensions, RetryAfter};
use crate::http::{Method, StatusCode};

/// Structured HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub message: Message,
    pub status: StatusCode,
    /// `Age` in seconds.
    pub age: Option<u64>,
    /// `Allow`.
    pub allowed_methods: Vec<Method>,
    /// `Location`.
    pub location_ref: Option<String>,
    /// `Retry-After`.
    pub retry_after: Option<RetryAfter>,
    /// `WWW-Authenticate`.
    pub challenge_requests: Vec<ChallengeRequest>,
    /// `Proxy-Authenticate`.
    pub proxy_challenge_requests: Vec<ChallengeRequest>,
    pub server_info: ServerInfo,
    /// `Vary`.
    pub dimensions: Dimensions,
    /// `Set-Cookie`.
    pub cookie_settings: Vec<CookieSetting>,
}

/// Constructor
impl Response {
    /// Create new [`Response`] with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            message: Message::new(),
            status,
            age: None,
            allowed_methods: Vec::new(),
            location_ref: None,
            retry_after: None,
            challenge_requests: Vec::new(),
            proxy_challenge_requests: Vec::new(),
            server_info: ServerInfo::new(),
            dimensions: Dimensions::new(),
            cookie_settings: Vec::new(),
        }
    }
}

impl Response {
    message_fields!();
}

impl Default for Response {
    #[inline]
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}
