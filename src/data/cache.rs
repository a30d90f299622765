/// Directive of the `Cache-Control` header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheDirective {
    pub name: String,
    pub value: Option<String>,
    /// The value is a number of seconds, written without quotes.
    pub digit: bool,
}

impl CacheDirective {
    #[inline]
    pub fn new(name: impl Into<String>, value: Option<String>, digit: bool) -> Self {
        Self {
            name: name.into(),
            value,
            digit,
        }
    }

    #[inline]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, None, false)
    }

    fn seconds(name: &str, seconds: u64) -> Self {
        let mut buf = itoa::Buffer::new();
        Self::new(name, Some(buf.format(seconds).to_owned()), true)
    }

    fn field_names(name: &str, fields: &[&str]) -> Self {
        if fields.is_empty() {
            Self::flag(name)
        } else {
            Self::new(name, Some(fields.join(", ")), false)
        }
    }

    pub fn max_age(seconds: u64) -> Self {
        Self::seconds("max-age", seconds)
    }

    /// `max-stale`, with no value accepting a response of any staleness.
    pub fn max_stale(seconds: Option<u64>) -> Self {
        match seconds {
            Some(seconds) => Self::seconds("max-stale", seconds),
            None => Self::flag("max-stale"),
        }
    }

    pub fn min_fresh(seconds: u64) -> Self {
        Self::seconds("min-fresh", seconds)
    }

    pub fn shared_max_age(seconds: u64) -> Self {
        Self::seconds("s-maxage", seconds)
    }

    pub fn must_revalidate() -> Self {
        Self::flag("must-revalidate")
    }

    pub fn proxy_must_revalidate() -> Self {
        Self::flag("proxy-revalidate")
    }

    /// `no-cache`, optionally restricted to the given header fields.
    pub fn no_cache(fields: &[&str]) -> Self {
        Self::field_names("no-cache", fields)
    }

    pub fn no_store() -> Self {
        Self::flag("no-store")
    }

    pub fn no_transform() -> Self {
        Self::flag("no-transform")
    }

    pub fn only_if_cached() -> Self {
        Self::flag("only-if-cached")
    }

    /// `private`, optionally restricted to the given header fields.
    pub fn private(fields: &[&str]) -> Self {
        Self::field_names("private", fields)
    }

    pub fn public() -> Self {
        Self::flag("public")
    }
}
