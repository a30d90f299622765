use bytes::Bytes;

use crate::headers::error::HeaderError;
use crate::matches;

/// HTTP Header name.
///
/// # Case Normalization
///
/// Input is normalized to lowercase at construction time, so comparing two names is always an
/// ASCII case-insensitive comparison. [`from_static`][HeaderName::from_static] will panic at
/// compile time when name contains uppercase character.
///
/// Normalization requires copying the bytes. If the input is known to not contains uppercase
/// character, use [`from_bytes_lowercase`][HeaderName::from_bytes_lowercase] that does not incur
/// copy but returns error instead.
#[derive(Clone)]
pub struct HeaderName {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    /// is valid ASCII
    Arbitrary(Bytes),
}

impl HeaderName {
    /// Parse header name from static string.
    ///
    /// The input must not contains ASCII uppercase characters.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name or contains ASCII uppercase characters.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_header_name_lowercase(name.as_bytes()) {
            Ok(()) => Self {
                repr: Repr::Static(name),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name from [`Bytes`].
    ///
    /// The input must not contains ASCII uppercase characters.
    ///
    /// For more flexible API use [`HeaderName::from_slice`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name or contains ASCII uppercase
    /// characters.
    #[inline]
    pub fn from_bytes_lowercase<B: Into<Bytes>>(name: B) -> Result<Self, HeaderError> {
        let name = name.into();
        match validate_header_name_lowercase(&name) {
            Ok(()) => Ok(Self {
                repr: Repr::Arbitrary(name),
            }),
            Err(err) => Err(err),
        }
    }

    /// Parse header name by copying from slice of bytes.
    ///
    /// Input name is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let bytes = name.as_ref();
        if matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
            copy_to_header_name(bytes)
        } else {
            Err(HeaderError::from_len(bytes.len()))
        }
    }

    /// Extracts a string slice of the header name.
    ///
    /// The returned string will always in ASCII lowercase.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            // SAFETY: `Arbitrary` only constructed from validated ASCII token
            Repr::Arbitrary(bytes) => unsafe { std::str::from_utf8_unchecked(bytes) },
        }
    }

    /// Checks that two header name are an ASCII case-insensitive match.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }

    /// Returns `true` if this is one of the [`standard`] headers.
    ///
    /// Standard headers have a structured counterpart in the message model and are never carried
    /// as extension headers.
    #[inline]
    pub fn is_standard(&self) -> bool {
        standard::is_standard(self.as_str())
    }
}

// ===== Parser =====

/// Maximum length of a header name.
pub const MAX_HEADER_NAME_LEN: usize = 1024; // 1KB

/// token       = 1*tchar
/// field-name  = token
const fn validate_header_name_lowercase(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;

    if !matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
        return Err(E::from_len(bytes.len()));
    }

    while let [byte, rest @ ..] = bytes {
        if matches::is_token_lowercase(*byte) {
            bytes = rest;
        } else {
            return Err(E::Invalid);
        }
    }

    Ok(())
}

/// Lowercased `tchar`, any other byte maps to a value with the MSB set.
const LOWERCASE_NAME: [u8; 256] = {
    let mut bytes = [0b1000_0000; 256];
    let mut i = 0u8;
    loop {
        if matches::is_token(i) {
            bytes[i as usize] = i.to_ascii_lowercase();
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    bytes
};

fn copy_to_header_name(bytes: &[u8]) -> Result<HeaderName, HeaderError> {
    let mut name = vec![0; bytes.len()];

    for (output, input) in name.iter_mut().zip(bytes) {
        *output = LOWERCASE_NAME[*input as usize];

        if *output & 128 == 128 {
            return Err(HeaderError::Invalid);
        }
    }

    Ok(HeaderName {
        repr: Repr::Arbitrary(name.into()),
    })
}

// ===== Ref Traits =====

/// A type that can be used for [`HeaderMap`] lookup.
///
/// [`HeaderMap`]: super::HeaderMap
#[allow(private_bounds)]
pub trait AsHeaderName: Sealed {}

pub(crate) trait Sealed {
    fn as_header_str(&self) -> &str;
}

impl<K: AsHeaderName + ?Sized> AsHeaderName for &K {}
impl<K: Sealed + ?Sized> Sealed for &K {
    fn as_header_str(&self) -> &str {
        K::as_header_str(self)
    }
}

impl AsHeaderName for str {}
impl Sealed for str {
    fn as_header_str(&self) -> &str {
        self
    }
}

impl AsHeaderName for String {}
impl Sealed for String {
    fn as_header_str(&self) -> &str {
        self
    }
}

impl AsHeaderName for HeaderName {}
impl Sealed for HeaderName {
    fn as_header_str(&self) -> &str {
        self.as_str()
    }
}

/// A type that can be converted into [`HeaderName`] for [`HeaderMap`] insertion.
///
/// # Panics
///
/// Converting a `&'static str` that is not a valid header name panics.
///
/// [`HeaderMap`]: super::HeaderMap
pub trait IntoHeaderName {
    fn into_header_name(self) -> HeaderName;
}

impl IntoHeaderName for HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self
    }
}

impl IntoHeaderName for &HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self.clone()
    }
}

impl IntoHeaderName for &'static str {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        match HeaderName::from_slice(self) {
            Ok(name) => name,
            Err(err) => err.panic_const(),
        }
    }
}

// ===== Traits =====

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl std::hash::Hash for HeaderName {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(self.as_str(), state);
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        // HeaderName is guaranteed to have ascii lowercase value,
        // therefore it is correct for case-insensitive eq
        self.as_str() == other.as_str()
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl std::str::FromStr for HeaderName {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s)
    }
}

// ===== Standard Headers =====

standard_header! {
    /// HTTP Standard Headers.
    ///
    /// Every header listed here is read into or written from a structured field of the message
    /// model.
    mod standard;

    // ===== Authentication =====

    /// Defines the authentication method that should be used to access a resource.
    pub const WWW_AUTHENTICATE: HeaderName = "www-authenticate";

    /// Contains the credentials to authenticate a user-agent with a server.
    pub const AUTHORIZATION: HeaderName = "authorization";

    /// Contains information from the server about a successful authentication.
    pub const AUTHENTICATION_INFO: HeaderName = "authentication-info";

    /// Defines the authentication method that should be used to access a resource behind a proxy
    /// server.
    pub const PROXY_AUTHENTICATE: HeaderName = "proxy-authenticate";

    /// Contains the credentials to authenticate a user agent with a proxy server.
    pub const PROXY_AUTHORIZATION: HeaderName = "proxy-authorization";

    // ===== Caching =====

    /// The time, in seconds, that the object has been in a proxy cache.
    pub const AGE: HeaderName = "age";

    /// Directives for caching mechanisms in both requests and responses.
    pub const CACHE_CONTROL: HeaderName = "cache-control";

    /// The date/time after which the response is considered stale.
    pub const EXPIRES: HeaderName = "expires";

    /// Implementation-specific header that may have various effects anywhere along the
    /// request-response chain.
    pub const PRAGMA: HeaderName = "pragma";

    /// General warning information about possible problems.
    pub const WARNING: HeaderName = "warning";

    // ===== Conditionals =====

    /// The last modification date of the resource.
    pub const LAST_MODIFIED: HeaderName = "last-modified";

    /// A unique string identifying the version of the resource.
    pub const ETAG: HeaderName = "etag";

    /// Applies the method only if the stored resource matches one of the given ETags.
    pub const IF_MATCH: HeaderName = "if-match";

    /// Applies the method only if the stored resource doesn't match any of the given ETags.
    pub const IF_NONE_MATCH: HeaderName = "if-none-match";

    /// Transmits the resource only if it has been modified after the given date.
    pub const IF_MODIFIED_SINCE: HeaderName = "if-modified-since";

    /// Transmits the resource only if it has not been modified after the given date.
    pub const IF_UNMODIFIED_SINCE: HeaderName = "if-unmodified-since";

    /// Makes a range request conditional on the given ETag or date.
    pub const IF_RANGE: HeaderName = "if-range";

    /// Determines how to match request headers to decide whether a cached response can be used.
    pub const VARY: HeaderName = "vary";

    // ===== Connection management =====

    /// Controls whether the network connection stays open after the current transaction finishes.
    pub const CONNECTION: HeaderName = "connection";

    // ===== Content negotiation =====

    /// Informs the server about the types of data that can be sent back.
    pub const ACCEPT: HeaderName = "accept";

    /// Preferences for charsets in textual response content.
    pub const ACCEPT_CHARSET: HeaderName = "accept-charset";

    /// The encoding algorithm, usually a compression algorithm, that can be used on the resource
    /// sent back.
    pub const ACCEPT_ENCODING: HeaderName = "accept-encoding";

    /// Informs the server about the human language the server is expected to send back.
    pub const ACCEPT_LANGUAGE: HeaderName = "accept-language";

    // ===== Controls =====

    /// Indicates expectations that need to be fulfilled by the server.
    pub const EXPECT: HeaderName = "expect";

    /// When using TRACE, indicates the maximum number of hops the request can do.
    pub const MAX_FORWARDS: HeaderName = "max-forwards";

    // ===== Cookies =====

    /// Contains stored HTTP cookies previously sent by the server with the Set-Cookie header.
    pub const COOKIE: HeaderName = "cookie";

    /// Send cookies from the server to the user-agent.
    pub const SET_COOKIE: HeaderName = "set-cookie";

    /// Obsolete variant of Set-Cookie.
    pub const SET_COOKIE2: HeaderName = "set-cookie2";

    // ===== Message body information =====

    /// The size of the resource, in decimal number of bytes.
    pub const CONTENT_LENGTH: HeaderName = "content-length";

    /// Indicates the media type of the resource.
    pub const CONTENT_TYPE: HeaderName = "content-type";

    /// Used to specify the compression algorithm.
    pub const CONTENT_ENCODING: HeaderName = "content-encoding";

    /// Describes the human language(s) intended for the audience.
    pub const CONTENT_LANGUAGE: HeaderName = "content-language";

    /// Indicates an alternate location for the returned data.
    pub const CONTENT_LOCATION: HeaderName = "content-location";

    /// Base64 MD5 digest of the entity.
    pub const CONTENT_MD5: HeaderName = "content-md5";

    /// Where in a full body message a partial message belongs.
    pub const CONTENT_RANGE: HeaderName = "content-range";

    /// Indicates if the resource should be displayed inline or downloaded as attachment.
    pub const CONTENT_DISPOSITION: HeaderName = "content-disposition";

    // ===== Range requests =====

    /// Indicates if the server supports range requests.
    pub const ACCEPT_RANGES: HeaderName = "accept-ranges";

    /// Indicates the part of a document that the server should return.
    pub const RANGE: HeaderName = "range";

    // ===== Request context =====

    /// Contains an Internet email address for a human user who controls the requesting user
    /// agent.
    pub const FROM: HeaderName = "from";

    /// Specifies the domain name of the server and (optionally) the TCP port number.
    pub const HOST: HeaderName = "host";

    /// The address of the previous web page from which a link to the currently requested page was
    /// followed.
    pub const REFERER: HeaderName = "referer";

    /// Contains a characteristic string that identifies the user agent.
    pub const USER_AGENT: HeaderName = "user-agent";

    // ===== Response context =====

    /// Lists the set of HTTP request methods supported by a resource.
    pub const ALLOW: HeaderName = "allow";

    /// Contains information about the software used by the origin server.
    pub const SERVER: HeaderName = "server";

    /// Indicates the URL to redirect a page to.
    pub const LOCATION: HeaderName = "location";

    /// Indicates how long the user agent should wait before making a follow-up request.
    pub const RETRY_AFTER: HeaderName = "retry-after";

    // ===== Transfer coding =====

    /// Specifies the form of encoding used to safely transfer the resource to the user.
    pub const TRANSFER_ENCODING: HeaderName = "transfer-encoding";

    /// Specifies the transfer encodings the user agent is willing to accept.
    pub const TE: HeaderName = "te";

    /// Allows the sender to include additional fields at the end of chunked message.
    pub const TRAILER: HeaderName = "trailer";

    // ===== Other =====

    /// Contains the date and time at which the message was originated.
    pub const DATE: HeaderName = "date";

    /// Added by proxies, both forward and reverse proxies.
    pub const VIA: HeaderName = "via";

    /// Used to upgrade an already established connection to a different protocol.
    pub const UPGRADE: HeaderName = "upgrade";
}

// ===== Macros =====

macro_rules! standard_header {
    (
        $(#[$mod_doc:meta])*
        mod $mod_name:ident;

        $(
            $(#[$doc:meta])*
            $vis:vis const $id:ident: $t:ty = $name:literal;
        )*
    ) => {
        $(#[$mod_doc])*
        pub mod $mod_name {
            use super::*;

            $(
                $(#[$doc])*
                $vis const $id: $t = HeaderName::from_static($name);
            )*

            /// Lowercase names of every standard header.
            pub const ALL: &[&str] = &[$($name,)*];

            /// Returns `true` if `name` is a standard header, compared case-insensitively.
            pub fn is_standard(name: &str) -> bool {
                ALL.iter().any(|e| e.eq_ignore_ascii_case(name))
            }
        }
    };
}

use standard_header;
