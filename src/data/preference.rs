use super::{Metadata, Parameters};

/// Metadata with an associated quality, as listed in `Accept-*` headers.
///
/// The order of preferences in a list is significant, the first listed wins ties.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference<T> {
    metadata: T,
    quality: f32,
    parameters: Parameters,
}

impl<T: Metadata> Preference<T> {
    /// Create new [`Preference`] with the default quality of `1`.
    #[inline]
    pub fn new(metadata: T) -> Self {
        Self::with_quality(metadata, 1.0)
    }

    /// Create new [`Preference`] with the given quality, clamped to `[0, 1]`.
    #[inline]
    pub fn with_quality(metadata: T, quality: f32) -> Self {
        Self {
            metadata,
            quality: quality.clamp(0.0, 1.0),
            parameters: Parameters::new(),
        }
    }

    #[inline]
    pub fn metadata(&self) -> &T {
        &self.metadata
    }

    #[inline]
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Set quality, clamped to `[0, 1]`.
    #[inline]
    pub fn set_quality(&mut self, quality: f32) {
        self.quality = quality.clamp(0.0, 1.0);
    }

    /// Returns accept-extension parameters, listed after `q`.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[inline]
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    #[inline]
    pub fn into_metadata(self) -> T {
        self.metadata
    }
}

impl<T: Metadata> From<T> for Preference<T> {
    #[inline]
    fn from(metadata: T) -> Self {
        Self::new(metadata)
    }
}
