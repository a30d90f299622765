use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ReadValue, WriteValue};
use crate::data::RecipientInfo;
use crate::matches;

impl ReadValue for RecipientInfo {
    /// ```not_rust
    /// Via = 1#( received-protocol received-by [ comment ] )
    /// received-protocol = [ protocol-name "/" ] protocol-version
    /// received-by = ( host [ ":" port ] ) | pseudonym
    /// ```
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        if reader.is_end() || reader.peek() == Some(b',') {
            return Ok(None);
        }

        let protocol = reader.read_while(|b| matches::is_token(b) || b == b'/');
        if protocol.is_empty() || !reader.skip_spaces() {
            return Err(reader.unexpected());
        }

        let name = reader.read_while(|b| matches::is_token(b) || matches!(b, b':' | b'[' | b']'));
        if name.is_empty() {
            return Err(reader.unexpected());
        }

        let mut recipient = RecipientInfo::new(protocol, name);
        reader.skip_spaces();
        if reader.peek() == Some(b'(') {
            recipient.comment = Some(reader.read_comment()?);
        }
        Ok(Some(recipient))
    }

    fn can_add(&self, _: &[Self]) -> bool {
        true
    }
}

impl WriteValue for RecipientInfo {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        if self.protocol.is_empty() || self.name.is_empty() {
            return Err(FormatError::EmptyName);
        }
        writer.append(&self.protocol).append_char(' ').append(&self.name);
        if let Some(comment) = &self.comment {
            writer.append_char(' ').append_comment(comment);
        }
        Ok(())
    }
}
