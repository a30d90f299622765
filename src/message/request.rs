use super::{ClientInfo, Conditions, Message, delegate, message_fields};
use crate::data::{ChallengeResponse, Cookie, Range};
use crate::http::Method;

/// Structured HTTP request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    pub message: Message,
    pub method: Method,
    /// `Host`.
    pub host_ref: Option<String>,
    /// `Referer`.
    pub referrer_ref: Option<String>,
    /// `Max-Forwards`.
    pub max_forwards: Option<u64>,
    /// `Range`.
    pub ranges: Vec<Range>,
    /// `Cookie`.
    pub cookies: Vec<Cookie>,
    /// `Authorization`.
    pub challenge_response: Option<ChallengeResponse>,
    /// `Proxy-Authorization`.
    pub proxy_challenge_response: Option<ChallengeResponse>,
    pub client_info: ClientInfo,
    pub conditions: Conditions,
}

/// Constructor
impl Request {
    /// Create new [`Request`] with the given method.
    #[inline]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

impl Request {
    message_fields!();

    /// Returns `true` if only part of the entity is requested.
    #[inline]
    pub fn is_ranged(&self) -> bool {
        !self.ranges.is_empty()
    }
}
