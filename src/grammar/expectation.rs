use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::{Expectation, Parameters};

impl ReadValue for Expectation {
    /// expectation = token [ "=" ( token | quoted-string ) *( ";" parameter ) ]
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        if reader.is_end() || reader.peek() == Some(b',') {
            return Ok(None);
        }
        let head = reader.read_parameter()?;
        let mut parameters = Parameters::new();
        while reader.skip_parameter_separator() {
            parameters.push(reader.read_parameter()?);
        }

        let mut expectation = Expectation::new(head.name.to_ascii_lowercase(), head.value);
        expectation.parameters = parameters;
        Ok(Some(expectation))
    }
}

impl WriteValue for Expectation {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(&self.name)?;
        if let Some(value) = &self.value {
            writer.append_char('=').append_value(value);
        }
        writer.append_parameters(&self.parameters)?;
        Ok(())
    }
}
