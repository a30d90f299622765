use std::collections::BTreeSet;

use crate::headers::{HeaderName, standard};

/// Axis along which a representation may vary, written into `Vary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Authorization,
    CharacterSet,
    ClientAddress,
    ClientAgent,
    Encoding,
    Language,
    MediaType,
    Time,
    Unspecified,
}

/// Ordered set of [`Dimension`].
pub type Dimensions = BTreeSet<Dimension>;

impl Dimension {
    /// Returns the request header this dimension varies on.
    ///
    /// Returns `None` for dimensions that can only be expressed as `Vary: *`.
    pub const fn header_name(&self) -> Option<HeaderName> {
        match self {
            Self::Authorization => Some(standard::AUTHORIZATION),
            Self::CharacterSet => Some(standard::ACCEPT_CHARSET),
            Self::ClientAgent => Some(standard::USER_AGENT),
            Self::Encoding => Some(standard::ACCEPT_ENCODING),
            Self::Language => Some(standard::ACCEPT_LANGUAGE),
            Self::MediaType => Some(standard::ACCEPT),
            Self::ClientAddress | Self::Time | Self::Unspecified => None,
        }
    }

    /// Map a request header name from `Vary` to its dimension.
    ///
    /// Unknown names map to [`Dimension::Unspecified`].
    pub fn from_header_name(name: &str) -> Self {
        const MAPPED: [Dimension; 6] = [
            Dimension::Authorization,
            Dimension::CharacterSet,
            Dimension::ClientAgent,
            Dimension::Encoding,
            Dimension::Language,
            Dimension::MediaType,
        ];

        if name == "*" {
            return Self::Unspecified;
        }
        MAPPED
            .into_iter()
            .find(|e| matches!(e.header_name(), Some(h) if h.eq_ignore_ascii_case(name)))
            .unwrap_or(Self::Unspecified)
    }
}
