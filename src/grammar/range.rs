//! `Range` and `Content-Range`.
use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ParseErrorKind};
use crate::data::Range;

/// Read a `Range` value, e.g: `bytes=0-499, 1000-, -500`.
///
/// ```not_rust
/// ranges-specifier = unit "=" range-spec *( "," range-spec )
/// range-spec       = first-pos "-" [ last-pos ] | "-" suffix-length
/// ```
pub fn read_ranges(value: &str) -> Result<Vec<Range>, ParseError> {
    let mut reader = HeaderReader::new(value);
    reader.skip_spaces();
    if reader.is_end() {
        return Ok(Vec::new());
    }

    let Some(unit) = reader.read_token() else {
        return Err(reader.unexpected());
    };
    reader.skip_spaces();
    if reader.read() != Some(b'=') {
        reader.unread();
        return Err(reader.unexpected());
    }

    let mut ranges = Vec::new();
    loop {
        reader.skip_spaces();
        let first = reader.read_number()?;
        if reader.read() != Some(b'-') {
            reader.unread();
            return Err(reader.unexpected());
        }
        let last = reader.read_number()?;

        let range = match (first, last) {
            (Some(first), Some(last)) if first <= last => match span(first, last) {
                Some(size) => Range::with_unit(unit, Some(first), Some(size)),
                None => return Err(reader.error(ParseErrorKind::InvalidNumber)),
            },
            (Some(first), None) => Range::with_unit(unit, Some(first), Range::SIZE_MAX),
            (None, Some(suffix)) => Range::with_unit(unit, Range::INDEX_LAST, Some(suffix)),
            _ => return Err(reader.error(ParseErrorKind::Malformed)),
        };
        ranges.push(range);

        if !reader.skip_value_separator() {
            break;
        }
    }

    reader.expect_end()?;
    Ok(ranges)
}

/// Number of positions in `first..=last`, `None` when it does not fit in a `u64`.
fn span(first: u64, last: u64) -> Option<u64> {
    last.checked_sub(first)?.checked_add(1)
}

/// Write a `Range` value.
///
/// The unit of the first range is used for all of them.
///
/// # Errors
///
/// Returns error if a range has neither index nor size.
pub fn write_ranges(ranges: &[Range]) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    let Some(head) = ranges.first() else {
        return Ok(String::new());
    };
    writer.append_token(head.unit())?.append_char('=');

    for (i, range) in ranges.iter().enumerate() {
        if i > 0 {
            writer.append_char(',');
        }
        match (range.index(), range.size()) {
            (Some(index), None) => {
                writer.append_number(index).append_char('-');
            }
            (Some(index), Some(size)) if size > 0 => {
                writer
                    .append_number(index)
                    .append_char('-')
                    .append_number(index.saturating_add(size - 1));
            }
            (None, Some(suffix)) => {
                writer.append_char('-').append_number(suffix);
            }
            _ => return Err(FormatError::InvalidRange),
        }
    }

    Ok(writer.into_string())
}

/// Read a `Content-Range` value.
///
/// Returns the range, `None` for an unsatisfied range (`*`), and the complete entity size,
/// `None` when given as `*`.
///
/// ```not_rust
/// content-range = unit SP ( first-pos "-" last-pos | "*" ) "/" ( length | "*" )
/// ```
pub fn read_content_range(value: &str) -> Result<(Option<Range>, Option<u64>), ParseError> {
    let mut reader = HeaderReader::new(value);
    reader.skip_spaces();

    let Some(unit) = reader.read_token() else {
        return Err(reader.unexpected());
    };
    if !reader.skip_spaces() {
        return Err(reader.unexpected());
    }

    let range = if reader.peek() == Some(b'*') {
        reader.read();
        None
    } else {
        let first = reader.read_number()?;
        if reader.read() != Some(b'-') {
            reader.unread();
            return Err(reader.unexpected());
        }
        let last = reader.read_number()?;
        match (first, last) {
            (Some(first), Some(last)) if first <= last => match span(first, last) {
                Some(size) => Some((first, size)),
                None => return Err(reader.error(ParseErrorKind::InvalidNumber)),
            },
            _ => return Err(reader.error(ParseErrorKind::Malformed)),
        }
    };

    if reader.read() != Some(b'/') {
        reader.unread();
        return Err(reader.unexpected());
    }

    let size = if reader.peek() == Some(b'*') {
        reader.read();
        None
    } else {
        match reader.read_number()? {
            Some(size) => Some(size),
            None => return Err(reader.unexpected()),
        }
    };
    reader.expect_end()?;

    let range = range.map(|(first, size)| Range::with_unit(unit, Some(first), Some(size)));
    Ok((range, size))
}

/// Write a `Content-Range` value for a range of an entity.
///
/// # Errors
///
/// Returns error when the entity size is unknown but needed to resolve the range, when a suffix
/// is larger than the entity, or when the range has neither index nor size.
pub fn write_content_range(range: &Range, entity_size: Option<u64>) -> Result<String, FormatError> {
    let (first, last) = match (range.index(), range.size()) {
        (None, None) | (_, Some(0)) => return Err(FormatError::InvalidRange),
        (Some(index), Some(size)) => {
            let last = index.saturating_add(size - 1);
            match entity_size {
                Some(entity_size) => {
                    if index >= entity_size {
                        return Err(FormatError::InvalidRange);
                    }
                    (index, last.min(entity_size - 1))
                }
                None => (index, last),
            }
        }
        (Some(index), None) => {
            let entity_size = entity_size.ok_or(FormatError::UnknownEntitySize)?;
            if index >= entity_size {
                return Err(FormatError::InvalidRange);
            }
            (index, entity_size - 1)
        }
        (None, Some(suffix)) => {
            let entity_size = entity_size.ok_or(FormatError::UnknownEntitySize)?;
            if suffix > entity_size {
                return Err(FormatError::RangeTooLarge);
            }
            (entity_size - suffix, entity_size - 1)
        }
    };

    let mut writer = HeaderWriter::new();
    writer
        .append_token(range.unit())?
        .append_char(' ')
        .append_number(first)
        .append_char('-')
        .append_number(last)
        .append_char('/');
    match entity_size {
        Some(size) => writer.append_number(size),
        None => writer.append_char('*'),
    };
    Ok(writer.into_string())
}

/// Write the `Content-Range` of a `416` response, e.g: `bytes */1500`.
///
/// # Errors
///
/// Returns error if the unit is not a token.
pub fn write_unsatisfied_content_range(unit: &str, entity_size: u64) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    writer.append_token(unit)?.append(" */").append_number(entity_size);
    Ok(writer.into_string())
}
