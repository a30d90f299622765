use crate::matches;

/// HTTP Method.
///
/// Standard methods follow [RFC9110] and the PATCH method from [RFC5789]. Any other `token` is
/// an extension method, which is neither safe nor idempotent.
///
/// [RFC5789]: https://www.rfc-editor.org/rfc/rfc5789
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Method(Repr);

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr {
    Standard(u8),
    /// is a valid token
    Extension(Box<str>),
}

struct Props {
    safe: bool,
    idem: bool,
    value: &'static str,
}

props! {
    static PROPS: [9];

    /// The [GET] method requests transfer of a current selected representation for the target
    /// resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET = (0, "GET", safe, idem);
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, "HEAD", safe, idem);
    /// The [POST] method requests that the target resource process the enclosed representation.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST = (2, "POST", , );
    /// The [PUT] method requests that the state of the target resource be created or replaced.
    ///
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    pub const PUT = (3, "PUT", , idem);
    /// The [DELETE] method requests that the origin server remove the target resource.
    ///
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    pub const DELETE = (4, "DELETE", , idem);
    /// The [CONNECT] method requests a tunnel to the destination origin server.
    ///
    /// [CONNECT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-connect>
    pub const CONNECT = (5, "CONNECT", , );
    /// The [OPTIONS] method requests the communication options available for the target
    /// resource.
    ///
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (6, "OPTIONS", safe, idem);
    /// The [TRACE] method requests a remote, application-level loop-back of the request message.
    ///
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (7, "TRACE", safe, idem);
    /// The [PATCH] method requests that a set of changes be applied to the resource.
    ///
    /// [PATCH]: <https://www.rfc-editor.org/rfc/rfc5789#section-2>
    pub const PATCH = (8, "PATCH", , );
}

impl Method {
    /// Create [`Method`] from its token, case-sensitively.
    ///
    /// Unknown tokens become extension methods.
    ///
    /// # Errors
    ///
    /// Returns error if `token` is not a valid `token`.
    pub fn from_token(token: &str) -> Result<Self, InvalidMethod> {
        if let Some(method) = Self::from_standard(token) {
            return Ok(method);
        }
        if matches::is_token_str(token) {
            Ok(Self(Repr::Extension(token.into())))
        } else {
            Err(InvalidMethod)
        }
    }

    /// Returns `true` if method is considered ["safe"], read-only on the origin server.
    ///
    /// ["safe"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-safe-methods>
    #[inline]
    pub fn is_safe(&self) -> bool {
        match &self.0 {
            Repr::Standard(idx) => PROPS[*idx as usize].safe,
            Repr::Extension(_) => false,
        }
    }

    /// Returns `true` if method is considered ["idempotent"].
    ///
    /// ["idempotent"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-idempotent-methods>
    #[inline]
    pub fn is_idempotent(&self) -> bool {
        match &self.0 {
            Repr::Standard(idx) => PROPS[*idx as usize].idem,
            Repr::Extension(_) => false,
        }
    }

    /// Returns `true` if this is not one of the standard methods.
    #[inline]
    pub fn is_extension(&self) -> bool {
        matches!(self.0, Repr::Extension(_))
    }

    /// Returns string representation of the method.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Standard(idx) => PROPS[*idx as usize].value,
            Repr::Extension(token) => &**token,
        }
    }
}

impl Default for Method {
    #[inline]
    fn default() -> Self {
        Self::GET
    }
}

impl std::str::FromStr for Method {
    type Err = InvalidMethod;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Method is not a valid token.
pub struct InvalidMethod;

impl std::error::Error for InvalidMethod { }

impl std::fmt::Debug for InvalidMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid method")
    }
}

impl std::fmt::Display for InvalidMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid method")
    }
}

// ===== Macros =====

macro_rules! props {
    (
        static $props:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal, $($safe:ident)?, $($idem:ident)?);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self(Repr::Standard($idx));
            )*

            fn from_standard(src: &str) -> Option<Method> {
                match src {
                    $(
                        $val => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }

        static $props: [Props; $len] = [
            $(
                Props { value: $val, safe: prop!($($safe)?), idem: prop!($($idem)?) },
            )*
        ];
    };
}

macro_rules! prop {
    (safe) => { true };
    (idem) => { true };
    () => { false };
}

use {props, prop};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method() {
        assert_eq!(Method::from_token("GET").unwrap(), Method::GET);
        assert!(Method::GET.is_safe());
        assert!(Method::PUT.is_idempotent());
        assert!(!Method::PUT.is_safe());
        assert!(!Method::POST.is_idempotent());

        let propfind = Method::from_token("PROPFIND").unwrap();
        assert!(propfind.is_extension());
        assert_eq!(propfind.as_str(), "PROPFIND");
        assert!(!propfind.is_safe());

        assert!(Method::from_token("BAD METHOD").is_err());
        assert!(Method::from_token("").is_err());
    }
}
