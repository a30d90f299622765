use std::borrow::Cow;

/// Entity tag, as found in `ETag` and conditional headers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    opaque: Cow<'static, str>,
    weak: bool,
}

impl Tag {
    /// The `*` tag, matching any entity.
    pub const ALL: Tag = Tag {
        opaque: Cow::Borrowed("*"),
        weak: false,
    };

    /// Create new strong [`Tag`] from its opaque value, without quotes.
    #[inline]
    pub fn new(opaque: impl Into<String>) -> Self {
        Self {
            opaque: Cow::Owned(opaque.into()),
            weak: false,
        }
    }

    /// Create new weak [`Tag`] from its opaque value, without quotes.
    #[inline]
    pub fn weak(opaque: impl Into<String>) -> Self {
        Self {
            opaque: Cow::Owned(opaque.into()),
            weak: true,
        }
    }

    /// Parse a tag from its wire form: `"xyz"`, `W/"xyz"` or `*`.
    ///
    /// Returns `None` for unquoted or unterminated tags.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value == "*" {
            return Some(Self::ALL);
        }

        let (weak, rest) = match value.strip_prefix("W/") {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        let opaque = rest.strip_prefix('"')?.strip_suffix('"')?;
        if opaque.contains('"') {
            return None;
        }

        Some(Self {
            opaque: Cow::Owned(opaque.to_owned()),
            weak,
        })
    }

    /// Returns the opaque value, without quotes.
    #[inline]
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    #[inline]
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        self.opaque == "*"
    }

    /// Returns `true` if both tags are equal, weak tags only match when `weak_comparison` is set.
    pub fn matches(&self, other: &Tag, weak_comparison: bool) -> bool {
        if self.is_all() || other.is_all() {
            return true;
        }
        if !weak_comparison && (self.weak || other.weak) {
            return false;
        }
        self.opaque == other.opaque
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            return f.write_str("*");
        }
        if self.weak {
            f.write_str("W/")?;
        }
        write!(f, "\"{}\"", self.opaque)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse() {
        assert_eq!(Tag::parse("\"xyz\""), Some(Tag::new("xyz")));
        assert_eq!(Tag::parse("W/\"xyz\""), Some(Tag::weak("xyz")));
        assert_eq!(Tag::parse(" * "), Some(Tag::ALL));
        assert_eq!(Tag::parse("c3pio"), None);
        assert_eq!(Tag::parse("\"unterminated"), None);
        assert_eq!(Tag::parse("\"a\"b\""), None);

        assert_eq!(Tag::weak("v1").to_string(), "W/\"v1\"");
        assert!(Tag::weak("v1").matches(&Tag::new("v1"), true));
        assert!(!Tag::weak("v1").matches(&Tag::new("v1"), false));
    }
}
