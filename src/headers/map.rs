use super::{
    AsHeaderName, Header, HeaderName, HeaderValue, IntoHeaderName,
    iter::{GetAll, Iter},
};

/// HTTP Headers Multimap.
///
/// Headers are kept in insertion order and the same name may appear multiple times. Lookup is
/// ASCII case-insensitive.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<Header>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of header fields, counting repeated names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns header fields as slice.
    #[inline]
    pub fn fields(&self) -> &[Header] {
        &self.fields
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key<K: AsHeaderName>(&self, name: K) -> bool {
        let name = name.as_header_str();
        self.fields.iter().any(|e| e.is(name))
    }

    /// Returns a reference to the first header value corresponding to the given header name.
    ///
    /// ```rust
    /// use headwork::headers::{standard::CONTENT_TYPE, HeaderMap, HeaderValue};
    ///
    /// let mut map = HeaderMap::new();
    /// map.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
    /// assert_eq!(map.get("Content-Type").unwrap().as_str(), "text/html");
    /// ```
    #[inline]
    pub fn get<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        let name = name.as_header_str();
        self.fields.iter().find(|e| e.is(name)).map(Header::value)
    }

    /// Returns an iterator to all header values corresponding to the given header name.
    ///
    /// The iterator only borrows the map, `name` can be a temporary.
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> GetAll<'_> {
        let name = name.as_header_str();
        match self.fields.iter().position(|e| e.is(name)) {
            Some(first) => GetAll::new(self.fields[first].name().as_str(), &self.fields[first..]),
            None => GetAll::new("", &[]),
        }
    }

    /// Returns all values of the given header name joined with `", "`.
    ///
    /// This is the combined field value of a multi-valued header, as if every occurence was
    /// written on a single line.
    pub fn get_joined<K: AsHeaderName>(&self, name: K) -> Option<String> {
        let name = name.as_header_str();
        let mut joined: Option<String> = None;
        for value in self.get_all(name) {
            match &mut joined {
                Some(joined) => {
                    joined.push_str(", ");
                    joined.push_str(value.as_str());
                }
                None => joined = Some(value.as_str().to_owned()),
            }
        }
        joined
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Append header value, keeping existing values of the same name.
    #[inline]
    pub fn append<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) {
        self.fields.push(Header::new(name.into_header_name(), value));
    }

    /// Append a [`Header`].
    #[inline]
    pub fn push(&mut self, header: Header) {
        self.fields.push(header);
    }

    /// Insert header value, replacing every existing value of the same name.
    ///
    /// Returns the first replaced value, if any. The new value takes the position of the first
    /// replaced one.
    pub fn insert<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) -> Option<HeaderValue> {
        let name = name.into_header_name();
        match self.fields.iter().position(|e| e.name() == &name) {
            Some(index) => {
                let old = std::mem::replace(&mut self.fields[index], Header::new(name.clone(), value));
                let mut i = index + 1;
                while i < self.fields.len() {
                    if self.fields[i].name() == &name {
                        self.fields.remove(i);
                    } else {
                        i += 1;
                    }
                }
                Some(old.into_parts().1)
            }
            None => {
                self.fields.push(Header::new(name, value));
                None
            }
        }
    }

    /// Remove every value of the given header name.
    ///
    /// Returns the first removed value, if any.
    pub fn remove<K: AsHeaderName>(&mut self, name: K) -> Option<HeaderValue> {
        let name = name.as_header_str();
        let mut first = None;
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].is(name) {
                let (_, value) = self.fields.remove(i).into_parts();
                if first.is_none() {
                    first = Some(value);
                }
            } else {
                i += 1;
            }
        }
        first
    }

    /// Retains only the headers specified by the predicate.
    #[inline]
    pub fn retain<F: FnMut(&Header) -> bool>(&mut self, f: F) {
        self.fields.retain(f);
    }

    /// Clears the map, removing all headers.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

// ===== Traits =====

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|e| (e.name().as_str(), e.value().as_str())))
            .finish()
    }
}

impl Extend<Header> for HeaderMap {
    fn extend<T: IntoIterator<Item = Header>>(&mut self, iter: T) {
        self.fields.extend(iter);
    }
}

impl Extend<(HeaderName, HeaderValue)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (HeaderName, HeaderValue)>>(&mut self, iter: T) {
        self.fields
            .extend(iter.into_iter().map(|(name, value)| Header::new(name, value)));
    }
}

impl FromIterator<Header> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for HeaderMap {
    type Item = Header;

    type IntoIter = std::vec::IntoIter<Header>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
