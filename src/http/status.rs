/// HTTP [Status Code][rfc], any three digit value from `100` to `599`.
///
/// The class of the code decides which response headers are meaningful, see
/// [`response_headers`][crate::convert::response_headers].
///
/// [rfc]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

macro_rules! known {
    ($($code:literal $id:ident $reason:literal;)*) => {
        impl StatusCode {
            $(
                #[doc = concat!("`", stringify!($code), " ", $reason, "`.")]
                pub const $id: Self = Self($code);
            )*

            /// Returns the standard reason phrase, `None` for codes without a constant.
            pub const fn reason(&self) -> Option<&'static str> {
                match self.0 {
                    $($code => Some($reason),)*
                    _ => None,
                }
            }
        }
    };
}

known! {
    100 CONTINUE "Continue";
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    200 OK "OK";
    201 CREATED "Created";
    204 NO_CONTENT "No Content";
    206 PARTIAL_CONTENT "Partial Content";
    301 MOVED_PERMANENTLY "Moved Permanently";
    302 FOUND "Found";
    303 SEE_OTHER "See Other";
    304 NOT_MODIFIED "Not Modified";
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    308 PERMANENT_REDIRECT "Permanent Redirect";
    400 BAD_REQUEST "Bad Request";
    401 UNAUTHORIZED "Unauthorized";
    403 FORBIDDEN "Forbidden";
    404 NOT_FOUND "Not Found";
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    407 PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required";
    412 PRECONDITION_FAILED "Precondition Failed";
    416 RANGE_NOT_SATISFIABLE "Range Not Satisfiable";
    417 EXPECTATION_FAILED "Expectation Failed";
    429 TOO_MANY_REQUESTS "Too Many Requests";
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    503 SERVICE_UNAVAILABLE "Service Unavailable";
}

impl StatusCode {
    /// Returns `None` if `code` is not in `100..=599`.
    #[inline]
    pub const fn from_u16(code: u16) -> Option<Self> {
        match code {
            100..=599 => Some(Self(code)),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// `1xx`
    #[inline]
    pub const fn is_informational(&self) -> bool {
        self.0 < 200
    }

    /// `2xx`
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0, 200..=299)
    }

    /// `3xx`
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0, 300..=399)
    }

    /// `4xx`
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0, 400..=499)
    }

    /// `5xx`
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.0 >= 500
    }

    /// Returns `true` if the response never has content, so it must not send `Content-Length`.
    ///
    /// This is `1xx` and `204`.
    #[inline]
    pub const fn is_bodiless(&self) -> bool {
        self.is_informational() || self.0 == 204
    }

    /// Returns `true` if a `Location` header is expected, a redirection other than `304`, or
    /// `201`.
    #[inline]
    pub const fn expects_location(&self) -> bool {
        matches!(self.0, 201 | 301 | 302 | 303 | 307 | 308)
    }
}

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {reason}", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.0).finish()
    }
}
