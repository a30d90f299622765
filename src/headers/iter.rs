use super::{Header, HeaderMap, HeaderName, HeaderValue};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, Header>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(fields: &'a [Header]) -> Self {
        Self {
            iter: fields.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| (e.name(), e.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator returned from [`HeaderMap::get_all`].
pub struct GetAll<'a> {
    name: &'a str,
    iter: std::slice::Iter<'a, Header>,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(name: &'a str, fields: &'a [Header]) -> Self {
        Self {
            name,
            iter: fields.iter(),
        }
    }

    /// Returns `true` if there is still remaining value.
    pub fn has_remaining(&self) -> bool {
        self.iter.clone().any(|e| e.is(self.name))
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        self.iter.find(|e| e.is(name)).map(Header::value)
    }
}

impl std::fmt::Debug for GetAll<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list()
            .entries(Self {
                name: self.name,
                iter: self.iter.clone(),
            })
            .finish()
    }
}
