use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::CacheDirective;
use crate::matches;

impl ReadValue for CacheDirective {
    /// cache-directive = token [ "=" ( token | quoted-string ) ]
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        if reader.is_end() || reader.peek() == Some(b',') {
            return Ok(None);
        }
        let param = reader.read_parameter()?;
        let digit = param
            .value
            .as_deref()
            .is_some_and(|e| !e.is_empty() && e.bytes().all(matches::is_digit));
        Ok(Some(CacheDirective::new(param.name.to_ascii_lowercase(), param.value, digit)))
    }
}

impl WriteValue for CacheDirective {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(&self.name)?;
        if let Some(value) = &self.value {
            writer.append_char('=');
            if self.digit {
                writer.append(value);
            } else {
                writer.append_quoted_string(value);
            }
        }
        Ok(())
    }
}
