use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::http::Method;

impl ReadValue for Method {
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        match reader.read_token() {
            // a token is always a valid method
            Some(token) => Ok(Method::from_token(token).ok()),
            None => Ok(None),
        }
    }
}

impl WriteValue for Method {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append(self.as_str());
        Ok(())
    }
}
