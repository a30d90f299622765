use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::{Disposition, Parameters};

impl ReadValue for Disposition {
    /// disposition = type *( ";" parameter )
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        let Some(kind) = reader.read_token() else {
            return Ok(None);
        };

        let mut params = Parameters::new();
        while reader.skip_parameter_separator() {
            params.push(reader.read_parameter()?);
        }

        Ok(Some(Disposition::with_parameters(kind.to_ascii_lowercase(), params)))
    }
}

impl WriteValue for Disposition {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(self.kind())?.append_parameters(self.parameters())?;
        Ok(())
    }
}
