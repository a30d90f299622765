use super::{put, put_written, read_header};
use crate::data::{CacheDirective, RecipientInfo, Warning};
use crate::grammar;
use crate::headers::{HeaderMap, HeaderName, HeaderValue, standard};
use crate::message::Message;

/// Add `Cache-Control`, `Date`, `Via` and `Warning`.
pub fn add_general_headers(message: &Message, headers: &mut HeaderMap) {
    if !message.cache_directives.is_empty() {
        put_written(headers, standard::CACHE_CONTROL, grammar::write_all(&message.cache_directives));
    }
    if let Some(date) = message.date {
        put_written(headers, standard::DATE, grammar::write_date(date));
    }
    if !message.recipients_info.is_empty() {
        put_written(headers, standard::VIA, grammar::write_all(&message.recipients_info));
    }
    if !message.warnings.is_empty() {
        put_written(headers, standard::WARNING, grammar::write_all(&message.warnings));
    }
}

/// Copy a general header into the message.
///
/// Returns `false` if the header is not a general header.
pub(super) fn copy_general_header(name: &HeaderName, value: &HeaderValue, message: &mut Message) -> bool {
    match name.as_str() {
        "cache-control" => {
            if let Some(directives) = read_header(name, value, grammar::read_all::<CacheDirective>) {
                message.cache_directives.extend(directives);
            }
        }
        // resolved by `copy_pragma` once every header is copied
        "pragma" => {}
        "date" => message.date = read_header(name, value, grammar::read_date),
        "via" => {
            if let Some(recipients) = read_header(name, value, grammar::read_all::<RecipientInfo>) {
                message.recipients_info.extend(recipients);
            }
        }
        "warning" => {
            if let Some(warnings) = read_header(name, value, grammar::read_all::<Warning>) {
                message.warnings.extend(warnings);
            }
        }
        _ => return false,
    }
    true
}

/// Map an HTTP/1.0 `Pragma: no-cache` to the `no-cache` directive.
///
/// Only applies when no `Cache-Control` directive was read.
pub(super) fn copy_pragma(headers: &HeaderMap, message: &mut Message) {
    if !message.cache_directives.is_empty() {
        return;
    }
    let no_cache = headers.get_all(&standard::PRAGMA).any(|value| {
        value.as_str().split(',').any(|e| e.trim().eq_ignore_ascii_case("no-cache"))
    });
    if no_cache {
        message.cache_directives.push(CacheDirective::no_cache(&[]));
    }
}
