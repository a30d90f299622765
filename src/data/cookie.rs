/// Cookie sent by a client in the `Cookie` header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cookie {
    /// `0` for Netscape cookies, `1` for RFC 2109 cookies.
    pub version: u32,
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
}

impl Cookie {
    /// Create new version 0 [`Cookie`].
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            version: 0,
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
        }
    }

    #[inline]
    pub fn with_version(version: u32, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            version,
            ..Self::new(name, value)
        }
    }
}

/// Cookie set by a server in the `Set-Cookie` header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CookieSetting {
    pub cookie: Cookie,
    pub comment: Option<String>,
    /// Lifetime in seconds, `None` for a session cookie, `0` to discard.
    pub max_age: Option<u64>,
    pub secure: bool,
    /// Not readable by client scripts, written as `HttpOnly`.
    pub access_restricted: bool,
}

impl CookieSetting {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from(Cookie::new(name, value))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.cookie.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.cookie.value
    }
}

impl From<Cookie> for CookieSetting {
    #[inline]
    fn from(cookie: Cookie) -> Self {
        Self {
            cookie,
            ..Default::default()
        }
    }
}
