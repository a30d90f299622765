use super::{ParseError, ParseErrorKind};
use crate::data::Parameter;
use crate::matches;

/// A typed value that can be read from a header value.
pub trait ReadValue: Sized + PartialEq {
    /// Read one value, stopping before the `,` that separates it from the next one.
    ///
    /// Returns `Ok(None)` when there is nothing to read, or when the value is malformed in a
    /// way that only drops this value.
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError>;

    /// Returns `true` if this value should be added to the already read `values`.
    ///
    /// Duplicates are dropped by default.
    fn can_add(&self, values: &[Self]) -> bool {
        !values.contains(self)
    }
}

/// Single pass cursor over one header value.
///
/// [`read`][HeaderReader::read] always moves the cursor forward, even past the end, so that a
/// following [`unread`][HeaderReader::unread] always steps back over exactly what was read.
#[derive(Clone, Debug)]
pub struct HeaderReader<'a> {
    value: &'a str,
    index: usize,
    mark: usize,
}

impl<'a> HeaderReader<'a> {
    /// Create new [`HeaderReader`] at the start of `value`.
    #[inline]
    pub const fn new(value: &'a str) -> Self {
        Self {
            value,
            index: 0,
            mark: 0,
        }
    }

    /// Returns the whole value being read.
    #[inline]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// Returns the current byte offset.
    #[inline]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Returns `true` if there is nothing left to read.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.index >= self.value.len()
    }

    /// Returns the remaining unread value.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.slice(self.index, self.value.len())
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.value.as_bytes().get(self.index).copied()
    }

    /// Consume and returns the next byte, `None` at the end of the value.
    #[inline]
    pub fn read(&mut self) -> Option<u8> {
        let byte = self.peek();
        self.index += 1;
        byte
    }

    /// Step back over the last read byte.
    #[inline]
    pub fn unread(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Remember the current position.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.index;
    }

    /// Go back to the last marked position.
    #[inline]
    pub fn reset(&mut self) {
        self.index = self.mark;
    }

    /// Read every byte matching the predicate, possibly none.
    #[inline]
    pub fn read_while(&mut self, f: impl Fn(u8) -> bool) -> &'a str {
        self.advance_while(f)
    }

    fn advance_while(&mut self, f: impl Fn(u8) -> bool) -> &'a str {
        let start = self.index;
        while let Some(byte) = self.peek() {
            if !f(byte) {
                break;
            }
            self.index += 1;
        }
        self.slice(start, self.index)
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.value.len());
        self.value.get(start.min(end)..end).unwrap_or_default()
    }

    // ===== Errors =====

    /// Create error of the given kind at the current position.
    #[inline]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.index, self.peek())
    }

    /// Create error for the byte at the current position.
    ///
    /// Call [`unread`][HeaderReader::unread] first to report a byte that was just read.
    pub fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(_) => self.error(ParseErrorKind::UnexpectedChar),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    // ===== Separators =====

    /// Skip spaces and horizontal tabs, returns `true` if any was skipped.
    pub fn skip_spaces(&mut self) -> bool {
        !self.advance_while(matches::is_space).is_empty()
    }

    /// Skip a `,` surrounded by optional spaces, returns `true` if found.
    pub fn skip_value_separator(&mut self) -> bool {
        self.skip_separator(b',')
    }

    /// Skip a `;` surrounded by optional spaces, returns `true` if found.
    pub fn skip_parameter_separator(&mut self) -> bool {
        self.skip_separator(b';')
    }

    fn skip_separator(&mut self, separator: u8) -> bool {
        self.skip_spaces();
        if self.peek() == Some(separator) {
            self.index += 1;
            self.skip_spaces();
            true
        } else {
            false
        }
    }

    // ===== Primitives =====

    /// Read a `token`, returns `None` if the next byte is not a token character.
    pub fn read_token(&mut self) -> Option<&'a str> {
        let token = self.advance_while(matches::is_token);
        (!token.is_empty()).then_some(token)
    }

    /// Read a `token68` that fills the rest of a list element, e.g: `YWJj==`.
    ///
    /// Nothing is consumed when it is followed by anything but spaces, `,` or the end.
    ///
    /// ```not_rust
    /// token68 = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
    /// ```
    pub fn read_token68(&mut self) -> Option<&'a str> {
        let start = self.index;
        let body = self.advance_while(matches::is_token68);
        self.advance_while(|byte| byte == b'=');
        let end = self.index;
        self.skip_spaces();
        if !body.is_empty() && matches!(self.peek(), None | Some(b',')) {
            Some(self.slice(start, end))
        } else {
            self.index = start;
            None
        }
    }

    /// Read `1*DIGIT`, returns `None` if the next byte is not a digit.
    pub fn read_digits(&mut self) -> Option<&'a str> {
        let digits = self.advance_while(matches::is_digit);
        (!digits.is_empty()).then_some(digits)
    }

    /// Read `1*DIGIT` as a number.
    pub fn read_number(&mut self) -> Result<Option<u64>, ParseError> {
        match self.read_digits() {
            Some(digits) => digits
                .parse()
                .map(Some)
                .map_err(|_| self.error(ParseErrorKind::InvalidNumber)),
            None => Ok(None),
        }
    }

    /// Read a `quoted-string`, returns the unescaped content without the quotes.
    ///
    /// ```not_rust
    /// quoted-string  = ( <"> *(qdtext | quoted-pair ) <"> )
    /// quoted-pair    = "\" CHAR
    /// ```
    pub fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        if self.read() != Some(b'"') {
            self.unread();
            return Err(self.unexpected());
        }

        let mut buf = Vec::new();
        loop {
            match self.read() {
                Some(b'"') => break,
                Some(b'\\') => match self.read() {
                    Some(byte) if matches::is_char(byte) => buf.push(byte),
                    _ => {
                        self.unread();
                        return Err(self.unexpected());
                    }
                },
                Some(byte) if matches::is_quoted_text(byte) => buf.push(byte),
                _ => {
                    self.unread();
                    return Err(self.unexpected());
                }
            }
        }

        String::from_utf8(buf).map_err(|_| self.error(ParseErrorKind::InvalidEncoding))
    }

    /// Read a `comment`, returns the content without the outer parentheses.
    ///
    /// Nested comments are kept verbatim in the returned content.
    ///
    /// ```not_rust
    /// comment = "(" *( ctext | quoted-pair | comment ) ")"
    /// ```
    pub fn read_comment(&mut self) -> Result<String, ParseError> {
        if self.read() != Some(b'(') {
            self.unread();
            return Err(self.unexpected());
        }

        let mut buf = Vec::new();
        let mut depth = 1usize;
        loop {
            match self.read() {
                Some(b'(') => {
                    depth += 1;
                    buf.push(b'(');
                }
                Some(b')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    buf.push(b')');
                }
                Some(b'\\') => match self.read() {
                    Some(byte) if matches::is_char(byte) => buf.push(byte),
                    _ => {
                        self.unread();
                        return Err(self.unexpected());
                    }
                },
                Some(byte) if matches::is_comment_text(byte) => buf.push(byte),
                _ => {
                    self.unread();
                    return Err(self.unexpected());
                }
            }
        }

        String::from_utf8(buf).map_err(|_| self.error(ParseErrorKind::InvalidEncoding))
    }

    /// Read every `TEXT` byte up to the end of the value, trimmed.
    pub fn read_raw_text(&mut self) -> &'a str {
        self.advance_while(matches::is_text).trim_matches(is_space_char)
    }

    /// Read up to the next top level `,` or the end of the value, trimmed.
    ///
    /// Commas inside quoted strings do not end the value. The separator itself is not consumed.
    /// Returns `None` if the value is empty.
    pub fn read_raw_value(&mut self) -> Option<&'a str> {
        self.skip_spaces();
        let start = self.index;
        let mut quoted = false;
        while let Some(byte) = self.peek() {
            match byte {
                b',' if !quoted => break,
                b'"' => quoted = !quoted,
                b'\\' if quoted => self.index += 1,
                _ => {}
            }
            self.index += 1;
        }
        let value = self.slice(start, self.index).trim_end_matches(is_space_char);
        (!value.is_empty()).then_some(value)
    }

    /// Read a `token [ "=" ( token | quoted-string ) ]` parameter.
    pub fn read_parameter(&mut self) -> Result<Parameter, ParseError> {
        self.skip_spaces();
        let Some(name) = self.read_token() else {
            return Err(self.error(ParseErrorKind::EmptyName));
        };
        self.skip_spaces();
        if self.peek() == Some(b'=') {
            self.index += 1;
            let value = self.read_parameter_value()?;
            Ok(Parameter::new(name, value))
        } else {
            Ok(Parameter::flag(name))
        }
    }

    /// Read a parameter value, either a `token` or a `quoted-string`.
    pub fn read_parameter_value(&mut self) -> Result<String, ParseError> {
        self.skip_spaces();
        if self.peek() == Some(b'"') {
            return self.read_quoted_string();
        }
        match self.read_token() {
            Some(token) => Ok(token.to_owned()),
            None => Err(self.error(ParseErrorKind::EmptyValue)),
        }
    }

    // ===== Values =====

    /// Read a single typed value.
    #[inline]
    pub fn read_value<T: ReadValue>(&mut self) -> Result<Option<T>, ParseError> {
        T::read_value(self)
    }

    /// Read every `,` separated typed value up to the end of the value.
    pub fn read_values<T: ReadValue>(&mut self) -> Result<Vec<T>, ParseError> {
        let mut values = Vec::new();
        self.skip_spaces();
        loop {
            if let Some(value) = T::read_value(self)? {
                if value.can_add(&values) {
                    values.push(value);
                }
            }
            if !self.skip_value_separator() {
                break;
            }
        }
        self.expect_end()?;
        Ok(values)
    }

    /// Returns error if anything other than spaces is left to read.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        self.skip_spaces();
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.unexpected()),
        }
    }
}

fn is_space_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

// ===== Functions =====

/// Read a single typed value from a whole header value.
pub fn read<T: ReadValue>(value: &str) -> Result<Option<T>, ParseError> {
    let mut reader = HeaderReader::new(value);
    reader.skip_spaces();
    let result = reader.read_value()?;
    reader.expect_end()?;
    Ok(result)
}

/// Read every typed value of a comma separated header value.
pub fn read_all<T: ReadValue>(value: &str) -> Result<Vec<T>, ParseError> {
    HeaderReader::new(value).read_values()
}

// ===== Tokens =====

impl ReadValue for String {
    /// Read a `token`, as listed in `Connection`, `Transfer-Encoding` or `Accept-Ranges`.
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        Ok(reader.read_token().map(str::to_owned))
    }

    fn can_add(&self, values: &[Self]) -> bool {
        !values.iter().any(|e| e.eq_ignore_ascii_case(self))
    }
}
