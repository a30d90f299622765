//! `Accept-*`, `Content-Type`, `Content-Encoding` and `Content-Language`.
use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ParseErrorKind, ReadValue, WriteValue};
use crate::data::{ContentType, Encoding, Language, MediaType, Metadata, Parameter, Parameters, Preference};
use crate::matches;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Name,
    ParameterName,
    ParameterValue,
}

/// Read `name *( ";" parameter )` up to a top level `,` or the end of the value.
///
/// Returns `Ok(None)` if the name is empty and no parameter follows.
fn read_metadata(reader: &mut HeaderReader<'_>) -> Result<Option<(String, Vec<Parameter>)>, ParseError> {
    let mut state = State::Name;
    let mut name = String::new();
    let mut param_name = String::new();
    let mut params = Vec::new();
    // a space was seen after a non empty name
    let mut ended = false;

    loop {
        let next = reader.read();
        match state {
            State::Name => match next {
                None => break,
                Some(b',') => {
                    reader.unread();
                    break;
                }
                Some(b';' | b'=') if name.is_empty() => {
                    reader.unread();
                    return Err(reader.error(ParseErrorKind::EmptyName));
                }
                Some(b';') => {
                    state = State::ParameterName;
                    ended = false;
                }
                Some(byte) if matches::is_space(byte) => ended = !name.is_empty(),
                Some(byte) if !ended && (matches::is_token(byte) || byte == b'/') => {
                    name.push(byte as char)
                }
                Some(_) => {
                    reader.unread();
                    return Err(reader.unexpected());
                }
            },
            State::ParameterName => match next {
                Some(b'=') if !param_name.is_empty() => {
                    state = State::ParameterValue;
                    ended = false;
                }
                None | Some(b',' | b';' | b'=') if param_name.is_empty() => {
                    reader.unread();
                    return Err(reader.error(ParseErrorKind::EmptyName));
                }
                None => {
                    params.push(Parameter::flag(std::mem::take(&mut param_name)));
                    break;
                }
                Some(b',') => {
                    params.push(Parameter::flag(std::mem::take(&mut param_name)));
                    reader.unread();
                    break;
                }
                Some(b';') => {
                    params.push(Parameter::flag(std::mem::take(&mut param_name)));
                    ended = false;
                }
                Some(byte) if matches::is_space(byte) => ended = !param_name.is_empty(),
                Some(byte) if !ended && matches::is_token(byte) => param_name.push(byte as char),
                Some(_) => {
                    reader.unread();
                    return Err(reader.unexpected());
                }
            },
            State::ParameterValue => {
                reader.unread();
                let value = reader.read_parameter_value()?;
                params.push(Parameter::new(std::mem::take(&mut param_name), value));
                reader.skip_spaces();
                match reader.read() {
                    None => break,
                    Some(b';') => state = State::ParameterName,
                    Some(b',') => {
                        reader.unread();
                        break;
                    }
                    Some(_) => {
                        reader.unread();
                        return Err(reader.unexpected());
                    }
                }
            }
        }
    }

    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some((name, params)))
    }
}

/// qvalue = ( "0" [ "." 0*3DIGIT ] ) | ( "1" [ "." 0*3("0") ] )
///
/// More than three decimals are tolerated.
pub(crate) fn parse_quality(value: &str) -> Option<f32> {
    let mut dots = 0;
    for byte in value.bytes() {
        match byte {
            b'.' => dots += 1,
            b'0'..=b'9' => {}
            _ => return None,
        }
    }
    if value.is_empty() || dots > 1 || value.starts_with('.') {
        return None;
    }
    let quality: f32 = value.parse().ok()?;
    (0.0..=1.0).contains(&quality).then_some(quality)
}

// ===== Preference =====

impl<T: Metadata> ReadValue for Preference<T> {
    /// Parameters before `q` belong to the metadata, the ones after are accept-extensions of the
    /// preference.
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        let Some((name, params)) = read_metadata(reader)? else {
            return Ok(None);
        };

        let mut quality = None;
        let mut metadata_params = Parameters::new();
        let mut extensions = Parameters::new();

        for param in params {
            if quality.is_none() && param.name.eq_ignore_ascii_case("q") {
                let value = param.value.as_deref().unwrap_or_default();
                match parse_quality(value) {
                    Some(q) => quality = Some(q),
                    None => return Err(reader.error(ParseErrorKind::InvalidQuality)),
                }
            } else if quality.is_some() {
                extensions.push(param);
            } else {
                metadata_params.push(param);
            }
        }

        let metadata = T::with_parameters(&name, metadata_params);
        let mut preference = Preference::with_quality(metadata, quality.unwrap_or(1.0));
        *preference.parameters_mut() = extensions;
        Ok(Some(preference))
    }
}

impl<T: Metadata> WriteValue for Preference<T> {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        let metadata = self.metadata();
        if metadata.name().is_empty() {
            return Err(FormatError::EmptyName);
        }
        writer.append(metadata.name());

        if let Some(params) = metadata.parameters() {
            for param in params {
                writer.append_char(';').append_parameter(param)?;
            }
        }

        if self.quality() < 1.0 {
            writer.append(";q=").append_quality(self.quality());
        }

        for param in self.parameters() {
            writer.append_char(';').append_parameter(param)?;
        }

        Ok(())
    }
}

// ===== Content-Type =====

impl ReadValue for ContentType {
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        let Some((name, params)) = read_metadata(reader)? else {
            return Ok(None);
        };
        let media_type = MediaType::with_parameters(&name, params.into_iter().collect());
        Ok(Some(ContentType::new(media_type, None)))
    }
}

impl WriteValue for ContentType {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        let name = self.media_type.name();
        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }
        writer.append(name).append_parameters(self.media_type.parameters())?;
        if let Some(charset) = &self.character_set {
            writer
                .append_parameter_separator()
                .append("charset=")
                .append_value(charset.name());
        }
        Ok(())
    }
}

// ===== Metadata lists =====

impl ReadValue for Encoding {
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        Ok(reader.read_token().map(Encoding::from_name))
    }

    /// `identity` is implied and never listed.
    fn can_add(&self, values: &[Self]) -> bool {
        *self != Encoding::IDENTITY && !values.contains(self)
    }
}

impl WriteValue for Encoding {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(self.name())?;
        Ok(())
    }
}

impl ReadValue for Language {
    fn read_value(reader: &mut HeaderReader<'_>) -> Result<Option<Self>, ParseError> {
        reader.skip_spaces();
        Ok(reader.read_token().map(Language::from_name))
    }
}

impl WriteValue for Language {
    fn write_value(&self, writer: &mut HeaderWriter) -> Result<(), FormatError> {
        writer.append_token(self.name())?;
        Ok(())
    }
}
