//! HTTP grammar character classes.
//!
//! Every predicate is backed by a 256 entry lookup table built at compile time.
//!
//! ```not_rust
//! CHAR       = <any US-ASCII character (octets 0 - 127)>
//! CTL        = <any US-ASCII control character (octets 0 - 31) and DEL (127)>
//! separators = "(" | ")" | "<" | ">" | "@" | "," | ";" | ":" | "\" | <">
//!            | "/" | "[" | "]" | "?" | "=" | "{" | "}" | SP | HT
//! token      = 1*<any CHAR except CTLs or separators>
//! TEXT       = <any OCTET except CTLs, but including LWS>
//! ```
//!
//! [RFC2616]: <https://datatracker.ietf.org/doc/html/rfc2616#section-2.2>

macro_rules! byte_map {
    // ===== 256 lookup table =====
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

byte_map! {
    /// CHAR = <any US-ASCII character (octets 0 - 127)>
    #[inline(always)]
    pub const fn is_char(byte: u8) {
        byte < 128
    }
}

byte_map! {
    /// CTL = <any US-ASCII control character (octets 0 - 31) and DEL (127)>
    #[inline(always)]
    pub const fn is_ctl(byte: u8) {
        byte < 32 || byte == 127
    }
}

byte_map! {
    /// separators = "(" | ")" | "<" | ">" | "@" | "," | ";" | ":" | "\" | <">
    ///            | "/" | "[" | "]" | "?" | "=" | "{" | "}" | SP | HT
    #[inline(always)]
    pub const fn is_separator(byte: u8) {
        matches!(
            byte,
            | b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"'
            | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}' | b' ' | b'\t'
        )
    }
}

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        byte < 128 && !(byte < 32 || byte == 127) && !is_separator(byte)
    }
}

byte_map! {
    /// TEXT = <any OCTET except CTLs, but including LWS>
    #[inline(always)]
    pub const fn is_text(byte: u8) {
        is_linear_white_space(byte) || !(byte < 32 || byte == 127)
    }
}

/// SP | HT
#[inline(always)]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// CR | LF | SP | HT
#[inline(always)]
pub const fn is_linear_white_space(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | b' ' | b'\t')
}

#[inline(always)]
pub const fn is_carriage_return(byte: u8) -> bool {
    byte == b'\r'
}

#[inline(always)]
pub const fn is_line_feed(byte: u8) -> bool {
    byte == b'\n'
}

#[inline(always)]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline(always)]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline(always)]
pub const fn is_upper(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

#[inline(always)]
pub const fn is_lower(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

#[inline(always)]
pub const fn is_double_quote(byte: u8) -> bool {
    byte == b'"'
}

#[inline(always)]
pub const fn is_comma(byte: u8) -> bool {
    byte == b','
}

#[inline(always)]
pub const fn is_semicolon(byte: u8) -> bool {
    byte == b';'
}

byte_map! {
    /// ctext = <any TEXT excluding "(" and ")">
    #[inline(always)]
    pub const fn is_comment_text(byte: u8) {
        is_text(byte) && byte != b'(' && byte != b')'
    }
}

byte_map! {
    /// qdtext = <any TEXT except <">>
    #[inline(always)]
    pub const fn is_quoted_text(byte: u8) {
        is_text(byte) && byte != b'"'
    }
}

byte_map! {
    /// field-value = *( field-content / obs-fold )
    ///
    /// Visible characters, SP, HTAB and obs-text.
    #[inline(always)]
    pub const fn is_header_value(byte: u8) {
        byte == b'\t' || (byte >= 0x20 && byte != 0x7f)
    }
}

byte_map! {
    /// Specialized `token` for lowercase only header name.
    #[inline(always)]
    pub const fn is_token_lowercase(byte: u8) {
        is_token(byte) && !byte.is_ascii_uppercase()
    }
}

byte_map! {
    /// token68 = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
    ///
    /// Without the trailing `=` padding.
    #[inline(always)]
    pub const fn is_token68(byte: u8) {
        matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'+' | b'/')
    }
}

/// Returns `true` if `value` is a non empty `token`.
pub const fn is_token_str(value: &str) -> bool {
    let mut bytes = value.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    while let [byte, rest @ ..] = bytes {
        if !is_token(*byte) {
            return false;
        }
        bytes = rest;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        for byte in b"abcXYZ019!#$%&'*+-.^_`|~" {
            assert!(is_token(*byte), "{:?}", *byte as char);
        }
        for byte in b"()<>@,;:\\\"/[]?={} \t\x00\x1f\x7f\x80\xff" {
            assert!(!is_token(*byte), "{:?}", *byte as char);
        }
        assert!(is_token_str("gzip"));
        assert!(is_token_str("x-custom.1"));
        assert!(!is_token_str(""));
        assert!(!is_token_str("file name"));
        assert!(!is_token_str("a/b"));
    }

    #[test]
    fn test_text() {
        assert!(is_text(b' '));
        assert!(is_text(b'\t'));
        assert!(is_text(b'\r'));
        assert!(is_text(b'a'));
        assert!(is_text(0xe9));
        assert!(!is_text(0x00));
        assert!(!is_text(0x7f));

        assert!(!is_quoted_text(b'"'));
        assert!(is_quoted_text(b'\\'));
        assert!(!is_comment_text(b'('));
        assert!(!is_comment_text(b')'));
    }

    #[test]
    fn test_separator_and_space() {
        assert!(is_separator(b'='));
        assert!(is_separator(b' '));
        assert!(!is_separator(b'-'));
        assert!(is_space(b'\t'));
        assert!(!is_space(b'\r'));
        assert!(is_linear_white_space(b'\n'));
        assert!(is_header_value(b'"'));
        assert!(!is_header_value(b'\r'));
        assert!(is_token_lowercase(b'a'));
        assert!(!is_token_lowercase(b'A'));
        assert!(is_token68(b'/'));
        assert!(!is_token68(b'='));
        assert!(!is_token68(b'"'));
    }
}
