use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::Tag;
use crate::log::warning;

impl ReadValue for Tag {
    /// Malformed tags are dropped, the rest of the list is still read.
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        let Some(raw) = reader.read_raw_value() else {
            return Ok(None);
        };
        let tag = Tag::parse(raw);
        if tag.is_none() {
            warning!("dropping malformed entity tag: {raw:?}");
        }
        Ok(tag)
    }
}

impl WriteValue for Tag {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        if self.is_all() {
            writer.append_char('*');
            return Ok(());
        }
        if self.is_weak() {
            writer.append("W/");
        }
        writer.append_quoted_string(self.opaque());
        Ok(())
    }
}
