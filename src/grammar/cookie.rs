//! `Cookie` and `Set-Cookie`.
use std::time::SystemTime;

use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ParseErrorKind};
use crate::data::{Cookie, CookieSetting};
use crate::log::debug;

fn read_number<T: std::str::FromStr>(reader: &HeaderReader<'_>, value: &str) -> Result<T, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| reader.error(ParseErrorKind::InvalidNumber))
}

/// Read `name [ "=" value ]`, value being a quoted string or raw text up to a separator.
fn read_pair(reader: &mut HeaderReader<'_>, stop_at_comma: bool) -> Result<(String, String), ParseError> {
    reader.skip_spaces();
    let Some(name) = reader.read_token() else {
        return Err(reader.error(ParseErrorKind::EmptyName));
    };
    reader.skip_spaces();
    if reader.peek() != Some(b'=') {
        return Ok((name.to_owned(), String::new()));
    }
    reader.read();
    let value = read_attribute_value(reader, stop_at_comma)?;
    Ok((name.to_owned(), value))
}

fn read_attribute_value(reader: &mut HeaderReader<'_>, stop_at_comma: bool) -> Result<String, ParseError> {
    reader.skip_spaces();
    if reader.peek() == Some(b'"') {
        return reader.read_quoted_string();
    }
    let value = reader.read_while(|b| b != b';' && !(stop_at_comma && b == b','));
    Ok(value.trim_end().to_owned())
}

// ===== Cookie =====

/// Read every cookie of a `Cookie` value.
///
/// A leading `$Version` applies to every cookie, `$Path` and `$Domain` apply to the cookie
/// before them.
pub fn read_cookies(value: &str) -> Result<Vec<Cookie>, ParseError> {
    let mut reader = HeaderReader::new(value);
    let mut cookies: Vec<Cookie> = Vec::new();
    let mut version = 0;

    loop {
        reader.skip_spaces();
        if reader.is_end() {
            break;
        }

        let (name, value) = read_pair(&mut reader, version > 0)?;
        if let Some(attribute) = name.strip_prefix('$') {
            match attribute.to_ascii_lowercase().as_str() {
                "version" => version = read_number(&reader, &value)?,
                "path" => {
                    if let Some(cookie) = cookies.last_mut() {
                        cookie.path = Some(value);
                    }
                }
                "domain" => {
                    if let Some(cookie) = cookies.last_mut() {
                        cookie.domain = Some(value);
                    }
                }
                _ => {}
            }
        } else {
            cookies.push(Cookie::with_version(version, name, value));
        }

        reader.skip_spaces();
        match reader.read() {
            None => break,
            Some(b';' | b',') => {}
            Some(_) => {
                reader.unread();
                return Err(reader.unexpected());
            }
        }
    }

    Ok(cookies)
}

/// Write a `Cookie` value.
///
/// Versioned cookies are preceded by a single `$Version`, the lowest of all cookies.
pub fn write_cookies(cookies: &[Cookie]) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    let version = cookies.iter().map(|e| e.version).min().unwrap_or_default();

    if version > 0 {
        writer
            .append("$Version=\"")
            .append_number(version.into())
            .append("\"; ");
    }

    for (i, cookie) in cookies.iter().enumerate() {
        if i > 0 {
            writer.append_parameter_separator();
        }
        writer.append_token(&cookie.name)?.append_char('=');

        if version == 0 {
            writer.append(&cookie.value);
            continue;
        }

        writer.append_quoted_string(&cookie.value);
        if let Some(path) = &cookie.path {
            writer.append("; $Path=").append_quoted_string(path);
        }
        if let Some(domain) = &cookie.domain {
            writer.append("; $Domain=").append_quoted_string(domain);
        }
    }

    Ok(writer.into_string())
}

// ===== Set-Cookie =====

/// Read a `Set-Cookie` value.
///
/// `Max-Age` takes precedence over `Expires`, which is converted into a max age relative to
/// now. Unknown attributes are ignored.
pub fn read_cookie_setting(value: &str) -> Result<CookieSetting, ParseError> {
    let mut reader = HeaderReader::new(value);
    let (name, value) = read_pair(&mut reader, false)?;
    let mut setting = CookieSetting::new(name, value);
    let mut expires_age = None;

    while reader.skip_parameter_separator() {
        if reader.is_end() {
            break;
        }
        let Some(attribute) = reader.read_token() else {
            return Err(reader.error(ParseErrorKind::EmptyName));
        };
        reader.skip_spaces();
        let value = if reader.peek() == Some(b'=') {
            reader.read();
            Some(read_attribute_value(&mut reader, false)?)
        } else {
            None
        };
        let value_str = value.as_deref().unwrap_or_default();

        match attribute.to_ascii_lowercase().as_str() {
            "version" => setting.cookie.version = read_number(&reader, value_str)?,
            "path" => setting.cookie.path = value,
            "domain" => setting.cookie.domain = value,
            "comment" => setting.comment = value,
            "max-age" => {
                let age: i64 = read_number(&reader, value_str)?;
                setting.max_age = Some(age.max(0).unsigned_abs());
            }
            "expires" => match httpdate::parse_http_date(value_str) {
                Ok(date) => {
                    let age = date
                        .duration_since(SystemTime::now())
                        .map(|e| e.as_secs())
                        .unwrap_or_default();
                    expires_age = Some(age);
                }
                Err(_) => {
                    debug!("ignoring cookie expiration date: {value_str:?}");
                }
            },
            "secure" => setting.secure = true,
            "httponly" => setting.access_restricted = true,
            _ => {}
        }
    }

    reader.expect_end()?;
    if setting.max_age.is_none() {
        setting.max_age = expires_age;
    }
    Ok(setting)
}

/// Write a `Set-Cookie` value.
pub fn write_cookie_setting(setting: &CookieSetting) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    let cookie = &setting.cookie;
    let versioned = cookie.version > 0;

    writer.append_token(&cookie.name)?.append_char('=');
    if versioned {
        writer.append_quoted_string(&cookie.value);
        writer.append("; Version=").append_number(cookie.version.into());
    } else {
        writer.append(&cookie.value);
    }

    if let Some(path) = &cookie.path {
        writer.append("; Path=");
        if versioned {
            writer.append_quoted_string(path);
        } else {
            writer.append(path);
        }
    }
    if let Some(max_age) = setting.max_age {
        writer.append("; Max-Age=").append_number(max_age);
    }
    if let Some(domain) = &cookie.domain {
        writer.append("; Domain=");
        if versioned {
            writer.append_quoted_string(domain);
        } else {
            writer.append(domain);
        }
    }
    if setting.secure {
        writer.append("; Secure");
    }
    if setting.access_restricted {
        writer.append("; HttpOnly");
    }
    if let Some(comment) = &setting.comment {
        writer.append("; Comment=").append_value(comment);
    }

    Ok(writer.into_string())
}
