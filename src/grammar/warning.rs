use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ParseErrorKind, ReadValue, WriteValue};
use crate::data::Warning;
use crate::matches;

impl ReadValue for Warning {
    /// warning-value = warn-code SP warn-agent SP warn-text [SP warn-date]
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        if reader.is_end() || reader.peek() == Some(b',') {
            return Ok(None);
        }

        let Some(code) = reader.read_digits() else {
            return Err(reader.unexpected());
        };
        let code = match code.parse::<u16>() {
            Ok(parsed) if code.len() == 3 => parsed,
            _ => return Err(reader.error(ParseErrorKind::InvalidNumber)),
        };

        if !reader.skip_spaces() {
            return Err(reader.unexpected());
        }
        let agent = reader.read_while(|b| !matches::is_space(b) && b != b',' && b != b'"');
        if agent.is_empty() {
            return Err(reader.unexpected());
        }

        reader.skip_spaces();
        let text = reader.read_quoted_string()?;

        reader.skip_spaces();
        let date = if reader.peek() == Some(b'"') {
            let date = reader.read_quoted_string()?;
            match httpdate::parse_http_date(&date) {
                Ok(date) => Some(date),
                Err(_) => return Err(reader.error(ParseErrorKind::InvalidDate)),
            }
        } else {
            None
        };

        let mut warning = Warning::new(code, agent, text);
        warning.date = date;
        Ok(Some(warning))
    }

    fn can_add(&self, _: &[Self]) -> bool {
        true
    }
}

impl WriteValue for Warning {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        if self.agent.is_empty() {
            return Err(FormatError::EmptyName);
        }
        writer
            .append_number(self.code.into())
            .append_char(' ')
            .append(&self.agent)
            .append_char(' ')
            .append_quoted_string(&self.text);
        if let Some(date) = self.date {
            writer.append(" \"").append_date(date)?.append_char('"');
        }
        Ok(())
    }
}
