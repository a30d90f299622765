//! `Vary`.
use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::{Dimension, Dimensions};

impl ReadValue for Dimension {
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        Ok(reader.read_token().map(Dimension::from_header_name))
    }
}

impl WriteValue for Dimensions {
    /// Writes `*` when the representation varies on something that is not a request header.
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        let mut names = Vec::with_capacity(self.len());
        for dimension in self {
            match dimension.header_name() {
                Some(name) => names.push(name),
                None => {
                    writer.append_char('*');
                    return Ok(());
                }
            }
        }

        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                writer.append_value_separator();
            }
            writer.append(name.as_str());
        }
        Ok(())
    }
}

/// Read a `Vary` value into an ordered set.
pub fn read_dimensions(value: &str) -> Result<Dimensions, ParseError> {
    Ok(HeaderReader::new(value)
        .read_values::<Dimension>()?
        .into_iter()
        .collect())
}
