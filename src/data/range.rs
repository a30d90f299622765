/// Byte range descriptor, as found in `Range` and `Content-Range`.
///
/// A range is an index and a size. A missing index ([`Range::INDEX_LAST`]) makes it a suffix
/// range, covering the last `size` bytes. A missing size ([`Range::SIZE_MAX`]) makes it open
/// ended, covering everything from index to the end of the entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    unit: String,
    index: Option<u64>,
    size: Option<u64>,
}

impl Range {
    /// Index of the first byte.
    pub const INDEX_FIRST: Option<u64> = Some(0);
    /// Index of a suffix range, counted from the end of the entity.
    pub const INDEX_LAST: Option<u64> = None;
    /// Size of an open ended range.
    pub const SIZE_MAX: Option<u64> = None;

    /// Default range unit.
    pub const BYTES: &'static str = "bytes";

    /// Create new byte [`Range`].
    #[inline]
    pub fn new(index: Option<u64>, size: Option<u64>) -> Self {
        Self::with_unit(Self::BYTES, index, size)
    }

    #[inline]
    pub fn with_unit(unit: impl Into<String>, index: Option<u64>, size: Option<u64>) -> Self {
        Self {
            unit: unit.into(),
            index,
            size,
        }
    }

    /// Range covering `first..=last`.
    ///
    /// Returns `None` if `last` is before `first`.
    pub fn from_positions(first: u64, last: u64) -> Option<Self> {
        let size = last.checked_sub(first)?.checked_add(1)?;
        Some(Self::new(Some(first), Some(size)))
    }

    /// Range covering the last `size` bytes.
    #[inline]
    pub fn suffix(size: u64) -> Self {
        Self::new(Self::INDEX_LAST, Some(size))
    }

    /// Range covering everything from `index` to the end.
    #[inline]
    pub fn starting_at(index: u64) -> Self {
        Self::new(Some(index), Self::SIZE_MAX)
    }

    #[inline]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[inline]
    pub fn index(&self) -> Option<u64> {
        self.index
    }

    #[inline]
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns `true` if this range covers the whole entity.
    pub fn is_full(&self) -> bool {
        self.index == Self::INDEX_FIRST && self.size == Self::SIZE_MAX
    }

    /// Resolve this range into inclusive `(first, last)` positions against an entity size.
    ///
    /// Returns `None` when the range is unsatisfiable for the entity. A suffix larger than the
    /// entity covers the whole entity.
    pub fn resolve(&self, entity_size: u64) -> Option<(u64, u64)> {
        if entity_size == 0 {
            return None;
        }
        let end = entity_size - 1;

        match (self.index, self.size) {
            (Some(index), _) if index > end => None,
            (Some(_), Some(0)) | (None, Some(0)) => None,
            (Some(index), Some(size)) => Some((index, index.saturating_add(size - 1).min(end))),
            (Some(index), None) => Some((index, end)),
            (None, Some(size)) => Some((entity_size.saturating_sub(size), end)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_resolve() {
        let range = Range::from_positions(500, 999).unwrap();
        assert_eq!(range.size(), Some(500));
        assert_eq!(range.resolve(1500), Some((500, 999)));
        assert_eq!(range.resolve(800), Some((500, 799)));
        assert_eq!(range.resolve(500), None);

        assert_eq!(Range::suffix(500).resolve(1500), Some((1000, 1499)));
        assert_eq!(Range::suffix(5000).resolve(1500), Some((0, 1499)));
        assert_eq!(Range::starting_at(9500).resolve(10000), Some((9500, 9999)));
        assert_eq!(Range::new(None, None).resolve(10), None);
        assert_eq!(Range::suffix(0).resolve(10), None);
        assert!(Range::from_positions(10, 5).is_none());
        assert!(Range::new(Range::INDEX_FIRST, Range::SIZE_MAX).is_full());
    }
}
