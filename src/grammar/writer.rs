use std::time::SystemTime;

use super::FormatError;
use crate::data::{Parameter, Parameters};
use crate::matches;

/// A typed value that can be written into a header value.
pub trait WriteValue {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError>;
}

/// Buffer a header value is written into.
#[derive(Clone, Debug, Default)]
pub struct HeaderWriter {
    buf: String,
}

impl HeaderWriter {
    /// Create new empty [`HeaderWriter`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    // ===== Primitives =====

    /// Append verbatim.
    #[inline]
    pub fn append(&mut self, value: &str) -> &mut Self {
        self.buf.push_str(value);
        self
    }

    #[inline]
    pub fn append_char(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    #[inline]
    pub fn append_number(&mut self, number: u64) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.buf.push_str(buf.format(number));
        self
    }

    /// Append a `token`.
    ///
    /// # Errors
    ///
    /// Returns error if `token` is empty or contains a non token character.
    pub fn append_token(&mut self, token: &str) -> Result<&mut Self, FormatError> {
        if token.is_empty() {
            return Err(FormatError::EmptyName);
        }
        if !matches::is_token_str(token) {
            return Err(FormatError::InvalidToken);
        }
        Ok(self.append(token))
    }

    /// Append a `quoted-string`, escaping `"` and `\`.
    pub fn append_quoted_string(&mut self, value: &str) -> &mut Self {
        self.buf.reserve(value.len() + 2);
        self.buf.push('"');
        for c in value.chars() {
            if matches!(c, '"' | '\\') {
                self.buf.push('\\');
            }
            self.buf.push(c);
        }
        self.buf.push('"');
        self
    }

    /// Append a `comment`, escaping `(`, `)` and `\`.
    pub fn append_comment(&mut self, value: &str) -> &mut Self {
        self.buf.push('(');
        for c in value.chars() {
            if matches!(c, '(' | ')' | '\\') {
                self.buf.push('\\');
            }
            self.buf.push(c);
        }
        self.buf.push(')');
        self
    }

    /// Append `value` verbatim if it is a `token`, otherwise as a `quoted-string`.
    pub fn append_value(&mut self, value: &str) -> &mut Self {
        if matches::is_token_str(value) {
            self.append(value)
        } else {
            self.append_quoted_string(value)
        }
    }

    /// Append `name[=value]`.
    pub fn append_parameter(&mut self, param: &Parameter) -> Result<&mut Self, FormatError> {
        self.append_token(&param.name)?;
        if let Some(value) = &param.value {
            self.append_char('=').append_value(value);
        }
        Ok(self)
    }

    /// Append every parameter, each preceded by `"; "`.
    pub fn append_parameters(&mut self, params: &Parameters) -> Result<&mut Self, FormatError> {
        for param in params {
            self.append_parameter_separator().append_parameter(param)?;
        }
        Ok(self)
    }

    #[inline]
    pub fn append_value_separator(&mut self) -> &mut Self {
        self.append(", ")
    }

    #[inline]
    pub fn append_parameter_separator(&mut self) -> &mut Self {
        self.append("; ")
    }

    /// Append a `qvalue` with at most three decimals, trailing zeros trimmed.
    pub fn append_quality(&mut self, quality: f32) -> &mut Self {
        let milli = (quality.clamp(0.0, 1.0) * 1000.0).round() as u32;
        match milli {
            1000.. => self.append("1"),
            0 => self.append("0"),
            _ => {
                let mut buf = itoa::Buffer::new();
                let digits = buf.format(milli);
                let mut fraction = String::with_capacity(3);
                for _ in digits.len()..3 {
                    fraction.push('0');
                }
                fraction.push_str(digits);
                self.append("0.").append(fraction.trim_end_matches('0'))
            }
        }
    }

    /// Append an `HTTP-date` in the preferred RFC 1123 format.
    pub fn append_date(&mut self, date: SystemTime) -> Result<&mut Self, FormatError> {
        Ok(self.append(&super::write_date(date)?))
    }

    /// Append typed values separated by `", "`.
    pub fn append_values<T: WriteValue>(&mut self, values: &[T]) -> Result<&mut Self, FormatError> {
        let mut first = true;
        for value in values {
            if first {
                first = false;
            } else {
                self.append_value_separator();
            }
            value.write_value(self)?;
        }
        Ok(self)
    }
}

impl std::fmt::Display for HeaderWriter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}

// ===== Functions =====

/// Write a single typed value into a new string.
pub fn write<T: WriteValue + ?Sized>(value: &T) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    value.write_value(&mut writer)?;
    Ok(writer.into_string())
}

/// Write typed values into a new comma separated string.
pub fn write_all<T: WriteValue>(values: &[T]) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    writer.append_values(values)?;
    Ok(writer.into_string())
}

// ===== Tokens =====

impl WriteValue for String {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(self)?;
        Ok(())
    }
}
