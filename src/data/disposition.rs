use std::time::SystemTime;

use super::Parameters;
use crate::grammar::{self, FormatError};

/// `Content-Disposition` value.
#[derive(Clone, Debug, PartialEq)]
pub struct Disposition {
    kind: String,
    parameters: Parameters,
}

impl Disposition {
    pub const ATTACHMENT: &'static str = "attachment";
    pub const INLINE: &'static str = "inline";
    pub const FORM_DATA: &'static str = "form-data";
    /// Disposition that is never written.
    pub const NONE: &'static str = "none";

    pub const FILENAME: &'static str = "filename";
    pub const NAME: &'static str = "name";
    pub const CREATION_DATE: &'static str = "creation-date";
    pub const MODIFICATION_DATE: &'static str = "modification-date";
    pub const READ_DATE: &'static str = "read-date";
    pub const SIZE: &'static str = "size";

    #[inline]
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_parameters(kind, Parameters::new())
    }

    #[inline]
    pub fn with_parameters(kind: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            kind: kind.into(),
            parameters,
        }
    }

    /// Returns the disposition type, e.g: `attachment`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind.eq_ignore_ascii_case(Self::NONE)
    }

    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[inline]
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    #[inline]
    pub fn filename(&self) -> Option<&str> {
        self.parameters.first_value(Self::FILENAME, true)
    }

    #[inline]
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.parameters.set(Self::FILENAME, filename, true);
    }

    pub fn size(&self) -> Option<u64> {
        self.parameters.first_value(Self::SIZE, true)?.parse().ok()
    }

    pub fn set_size(&mut self, size: u64) {
        let mut buf = itoa::Buffer::new();
        self.parameters.set(Self::SIZE, buf.format(size), true);
    }

    pub fn creation_date(&self) -> Option<SystemTime> {
        self.date(Self::CREATION_DATE)
    }

    pub fn set_creation_date(&mut self, date: SystemTime) -> Result<(), FormatError> {
        self.set_date(Self::CREATION_DATE, date)
    }

    pub fn modification_date(&self) -> Option<SystemTime> {
        self.date(Self::MODIFICATION_DATE)
    }

    pub fn set_modification_date(&mut self, date: SystemTime) -> Result<(), FormatError> {
        self.set_date(Self::MODIFICATION_DATE, date)
    }

    pub fn read_date(&self) -> Option<SystemTime> {
        self.date(Self::READ_DATE)
    }

    pub fn set_read_date(&mut self, date: SystemTime) -> Result<(), FormatError> {
        self.set_date(Self::READ_DATE, date)
    }

    fn date(&self, name: &str) -> Option<SystemTime> {
        httpdate::parse_http_date(self.parameters.first_value(name, true)?).ok()
    }

    fn set_date(&mut self, name: &str, date: SystemTime) -> Result<(), FormatError> {
        self.parameters.set(name, grammar::write_date(date)?, true);
        Ok(())
    }
}

impl Default for Disposition {
    #[inline]
    fn default() -> Self {
        Self::new(Self::NONE)
    }
}
