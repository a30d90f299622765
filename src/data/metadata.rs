//! Representation metadata: media types, languages, character sets and encodings.
use std::borrow::Cow;

use super::Parameters;

/// Metadata that a representation may be described or negotiated by.
///
/// Names compare ASCII case-insensitively.
pub trait Metadata: Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Returns the metadata name as it appears on the wire.
    fn name(&self) -> &str;

    /// Create metadata from its wire name, resolving well known names to their canonical form.
    fn from_name(name: &str) -> Self;

    /// Create metadata from its wire name and parameters.
    ///
    /// Metadata without parameters discards them.
    fn with_parameters(name: &str, parameters: Parameters) -> Self {
        let _ = parameters;
        Self::from_name(name)
    }

    /// Returns the metadata own parameters, if the metadata kind carries any.
    fn parameters(&self) -> Option<&Parameters> {
        None
    }
}

// ===== MediaType =====

/// Media type, e.g: `text/html; level=1`.
#[derive(Clone, Debug)]
pub struct MediaType {
    name: Cow<'static, str>,
    parameters: Parameters,
}

impl MediaType {
    /// Create new [`MediaType`] without parameters.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            parameters: Parameters::new(),
        }
    }

    /// Create new [`MediaType`] with parameters.
    #[inline]
    pub fn with_params(name: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            parameters,
        }
    }

    const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            parameters: Parameters::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the part before `/`, e.g: `text`.
    pub fn main_type(&self) -> &str {
        match self.name.split_once('/') {
            Some((main, _)) => main,
            None => &self.name,
        }
    }

    /// Returns the part after `/`, e.g: `html`.
    pub fn sub_type(&self) -> &str {
        match self.name.split_once('/') {
            Some((_, sub)) => sub,
            None => "*",
        }
    }

    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[inline]
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Returns `true` if neither the main nor the sub type is a wildcard.
    pub fn is_concrete(&self) -> bool {
        self.main_type() != "*" && self.sub_type() != "*"
    }

    pub const ALL: MediaType = MediaType::from_static("*/*");
    pub const APPLICATION_ALL: MediaType = MediaType::from_static("application/*");
    pub const APPLICATION_JSON: MediaType = MediaType::from_static("application/json");
    pub const APPLICATION_XML: MediaType = MediaType::from_static("application/xml");
    pub const APPLICATION_OCTET_STREAM: MediaType = MediaType::from_static("application/octet-stream");
    pub const APPLICATION_WWW_FORM: MediaType = MediaType::from_static("application/x-www-form-urlencoded");
    pub const MULTIPART_FORM_DATA: MediaType = MediaType::from_static("multipart/form-data");
    pub const TEXT_ALL: MediaType = MediaType::from_static("text/*");
    pub const TEXT_PLAIN: MediaType = MediaType::from_static("text/plain");
    pub const TEXT_HTML: MediaType = MediaType::from_static("text/html");
    pub const TEXT_XML: MediaType = MediaType::from_static("text/xml");
    pub const TEXT_CSS: MediaType = MediaType::from_static("text/css");
    pub const IMAGE_ALL: MediaType = MediaType::from_static("image/*");
    pub const IMAGE_PNG: MediaType = MediaType::from_static("image/png");
    pub const IMAGE_JPEG: MediaType = MediaType::from_static("image/jpeg");

    const KNOWN: &[MediaType] = &[
        Self::ALL,
        Self::APPLICATION_ALL,
        Self::APPLICATION_JSON,
        Self::APPLICATION_XML,
        Self::APPLICATION_OCTET_STREAM,
        Self::APPLICATION_WWW_FORM,
        Self::MULTIPART_FORM_DATA,
        Self::TEXT_ALL,
        Self::TEXT_PLAIN,
        Self::TEXT_HTML,
        Self::TEXT_XML,
        Self::TEXT_CSS,
        Self::IMAGE_ALL,
        Self::IMAGE_PNG,
        Self::IMAGE_JPEG,
    ];
}

impl Metadata for MediaType {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn from_name(name: &str) -> Self {
        match Self::KNOWN.iter().find(|e| e.name.eq_ignore_ascii_case(name)) {
            Some(known) => known.clone(),
            None => Self::new(name),
        }
    }

    fn with_parameters(name: &str, parameters: Parameters) -> Self {
        let mut media_type = Self::from_name(name);
        media_type.parameters = parameters;
        media_type
    }

    #[inline]
    fn parameters(&self) -> Option<&Parameters> {
        Some(&self.parameters)
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.parameters == other.parameters
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ===== Plain metadata =====

macro_rules! plain_metadata {
    (
        $(#[$doc:meta])*
        pub struct $id:ident;
        $(
            $(#[$cdoc:meta])*
            pub const $cid:ident = $name:literal;
        )*
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $id {
            name: Cow<'static, str>,
        }

        impl $id {
            $(
                $(#[$cdoc])*
                pub const $cid: $id = $id { name: Cow::Borrowed($name) };
            )*

            const KNOWN: &[$id] = &[$(Self::$cid,)*];

            /// Create new metadata with the given name.
            #[inline]
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: Cow::Owned(name.into()) }
            }

            #[inline]
            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl Metadata for $id {
            #[inline]
            fn name(&self) -> &str {
                &self.name
            }

            fn from_name(name: &str) -> Self {
                match Self::KNOWN.iter().find(|e| e.name.eq_ignore_ascii_case(name)) {
                    Some(known) => known.clone(),
                    None => Self::new(name),
                }
            }
        }

        impl PartialEq for $id {
            fn eq(&self, other: &Self) -> bool {
                self.name.eq_ignore_ascii_case(&other.name)
            }
        }

        impl Eq for $id {}

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

plain_metadata! {
    /// Natural language tag, e.g: `en-us`.
    pub struct Language;

    pub const ALL = "*";
    pub const ENGLISH = "en";
    pub const ENGLISH_US = "en-us";
    pub const ENGLISH_GB = "en-gb";
    pub const FRENCH = "fr";
    pub const GERMAN = "de";
    pub const SPANISH = "es";
    pub const ITALIAN = "it";
}

impl Language {
    /// Returns the primary tag, e.g: `en` for `en-us`.
    pub fn primary_tag(&self) -> &str {
        match self.name.split_once('-') {
            Some((primary, _)) => primary,
            None => &self.name,
        }
    }

    /// Returns the subtags, e.g: `["us"]` for `en-us`.
    pub fn subtags(&self) -> Vec<&str> {
        self.name.split('-').skip(1).collect()
    }
}

plain_metadata! {
    /// Character set, e.g: `UTF-8`.
    pub struct CharacterSet;

    pub const ALL = "*";
    pub const UTF_8 = "UTF-8";
    pub const UTF_16 = "UTF-16";
    pub const US_ASCII = "US-ASCII";
    pub const ISO_8859_1 = "ISO-8859-1";
    pub const WINDOWS_1252 = "windows-1252";
}

plain_metadata! {
    /// Content coding, e.g: `gzip`.
    pub struct Encoding;

    pub const ALL = "*";
    /// The default encoding, with no transformation.
    pub const IDENTITY = "identity";
    pub const GZIP = "gzip";
    pub const DEFLATE = "deflate";
    pub const COMPRESS = "compress";
    pub const BROTLI = "br";
    pub const ZIP = "zip";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type() {
        let media = MediaType::from_name("Text/HTML");
        assert_eq!(media.name(), "text/html");
        assert_eq!(media, MediaType::TEXT_HTML);
        assert_eq!(media.main_type(), "text");
        assert_eq!(media.sub_type(), "html");
        assert!(media.is_concrete());
        assert!(!MediaType::TEXT_ALL.is_concrete());

        let media = MediaType::from_name("application/vnd.custom+json");
        assert_eq!(media.name(), "application/vnd.custom+json");
        assert_eq!(media.sub_type(), "vnd.custom+json");
    }

    #[test]
    fn test_plain_metadata() {
        assert_eq!(CharacterSet::from_name("utf-8").name(), "UTF-8");
        assert_eq!(Encoding::from_name("GZIP"), Encoding::GZIP);
        assert_eq!(Encoding::from_name("x-custom").name(), "x-custom");

        let language = Language::from_name("en-US");
        assert_eq!(language, Language::ENGLISH_US);
        assert_eq!(language.primary_tag(), "en");
        assert_eq!(language.subtags(), ["us"]);
    }
}
