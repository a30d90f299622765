use std::borrow::Cow;

use super::Parameters;

/// Authentication scheme, with a public name and the technical name written on the wire.
#[derive(Clone, Debug)]
pub struct ChallengeScheme {
    name: Cow<'static, str>,
    technical_name: Cow<'static, str>,
}

impl ChallengeScheme {
    pub const HTTP_BASIC: ChallengeScheme = ChallengeScheme::from_static("HTTP_BASIC", "Basic");
    pub const HTTP_DIGEST: ChallengeScheme = ChallengeScheme::from_static("HTTP_DIGEST", "Digest");
    pub const HTTP_OAUTH_BEARER: ChallengeScheme =
        ChallengeScheme::from_static("HTTP_Bearer", "Bearer");

    const KNOWN: [ChallengeScheme; 3] = [Self::HTTP_BASIC, Self::HTTP_DIGEST, Self::HTTP_OAUTH_BEARER];

    const fn from_static(name: &'static str, technical_name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            technical_name: Cow::Borrowed(technical_name),
        }
    }

    /// Create new arbitrary [`ChallengeScheme`].
    #[inline]
    pub fn new(name: impl Into<String>, technical_name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            technical_name: Cow::Owned(technical_name.into()),
        }
    }

    /// Resolve a scheme from its wire name, case-insensitively.
    ///
    /// Unknown schemes are named `HTTP_<technical name>`.
    pub fn from_technical_name(technical_name: &str) -> Self {
        match Self::KNOWN
            .iter()
            .find(|e| e.technical_name.eq_ignore_ascii_case(technical_name))
        {
            Some(known) => known.clone(),
            None => Self::new(format!("HTTP_{technical_name}"), technical_name),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name written on the wire, e.g: `Basic`.
    #[inline]
    pub fn technical_name(&self) -> &str {
        &self.technical_name
    }
}

impl PartialEq for ChallengeScheme {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for ChallengeScheme {}

// ===== ChallengeMessage =====

/// Fields shared by [`ChallengeRequest`] and [`ChallengeResponse`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeMessage {
    pub scheme: ChallengeScheme,
    pub realm: Option<String>,
    /// Parameters with no dedicated field.
    pub parameters: Parameters,
    pub digest_algorithm: Option<String>,
    pub opaque: Option<String>,
    pub server_nonce: Option<String>,
    raw_value: Option<String>,
}

impl ChallengeMessage {
    #[inline]
    pub fn new(scheme: ChallengeScheme) -> Self {
        Self {
            scheme,
            realm: None,
            parameters: Parameters::new(),
            digest_algorithm: None,
            opaque: None,
            server_nonce: None,
            raw_value: None,
        }
    }

    /// Returns the cached wire form of the challenge, after the scheme name.
    ///
    /// When present, formatting writes it verbatim instead of the structured fields.
    #[inline]
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_deref()
    }

    #[inline]
    pub fn set_raw_value(&mut self, raw_value: impl Into<String>) {
        self.raw_value = Some(raw_value.into());
    }

    /// Drop the cached wire form, the next format recomputes it from the structured fields.
    #[inline]
    pub fn clear_raw_value(&mut self) {
        self.raw_value = None;
    }
}

// ===== ChallengeRequest =====

/// Challenge issued by a server, in `WWW-Authenticate` and `Proxy-Authenticate`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeRequest {
    pub message: ChallengeMessage,
    /// URIs defining the protection space.
    pub domain_refs: Vec<String>,
    pub stale: bool,
    /// Supported quality of protection, e.g: `auth`, `auth-int`.
    pub quality_options: Vec<String>,
}

impl ChallengeRequest {
    #[inline]
    pub fn new(scheme: ChallengeScheme) -> Self {
        Self {
            message: ChallengeMessage::new(scheme),
            domain_refs: Vec::new(),
            stale: false,
            quality_options: Vec::new(),
        }
    }

    /// Create new [`ChallengeRequest`] with a realm.
    #[inline]
    pub fn with_realm(scheme: ChallengeScheme, realm: impl Into<String>) -> Self {
        let mut request = Self::new(scheme);
        request.message.realm = Some(realm.into());
        request
    }

    #[inline]
    pub fn scheme(&self) -> &ChallengeScheme {
        &self.message.scheme
    }

    #[inline]
    pub fn realm(&self) -> Option<&str> {
        self.message.realm.as_deref()
    }
}

// ===== ChallengeResponse =====

/// Credentials sent by a client, in `Authorization` and `Proxy-Authorization`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeResponse {
    pub message: ChallengeMessage,
    /// User name, for `Basic` and `Digest`.
    pub identifier: Option<String>,
    /// Password for `Basic`, request digest for `Digest`, token for `Bearer`.
    pub secret: Option<String>,
    pub secret_algorithm: Option<String>,
    pub client_nonce: Option<String>,
    /// Request URI the digest was computed against.
    pub digest_ref: Option<String>,
    /// Selected quality of protection.
    pub quality: Option<String>,
    pub server_nonce_count: u32,
}

impl ChallengeResponse {
    #[inline]
    pub fn new(scheme: ChallengeScheme) -> Self {
        Self {
            message: ChallengeMessage::new(scheme),
            identifier: None,
            secret: None,
            secret_algorithm: None,
            client_nonce: None,
            digest_ref: None,
            quality: None,
            server_nonce_count: 0,
        }
    }

    /// Create new [`ChallengeResponse`] with identifier and secret.
    pub fn with_credentials(
        scheme: ChallengeScheme,
        identifier: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let mut response = Self::new(scheme);
        response.identifier = Some(identifier.into());
        response.secret = Some(secret.into());
        response
    }

    #[inline]
    pub fn scheme(&self) -> &ChallengeScheme {
        &self.message.scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_scheme() {
        assert_eq!(ChallengeScheme::from_technical_name("basic"), ChallengeScheme::HTTP_BASIC);
        assert_eq!(ChallengeScheme::from_technical_name("DIGEST").technical_name(), "Digest");

        let custom = ChallengeScheme::from_technical_name("Negotiate");
        assert_eq!(custom.name(), "HTTP_Negotiate");
        assert_eq!(custom.technical_name(), "Negotiate");
    }

    #[test]
    fn test_raw_value() {
        let mut request = ChallengeRequest::with_realm(ChallengeScheme::HTTP_BASIC, "r");
        assert!(request.message.raw_value().is_none());
        request.message.set_raw_value("realm=\"r\"");
        assert_eq!(request.message.raw_value(), Some("realm=\"r\""));
        request.message.clear_raw_value();
        assert!(request.message.raw_value().is_none());
    }
}
