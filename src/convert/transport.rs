use super::read_number;
use crate::grammar;
use crate::headers::{HeaderMap, HeaderName, standard};

/// Returns the `Content-Length`, `None` if absent or malformed.
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(standard::CONTENT_LENGTH)?;
    read_number(&standard::CONTENT_LENGTH, value)
}

/// Returns `true` if `Transfer-Encoding` lists `chunked`.
pub fn is_chunked_encoding(headers: &HeaderMap) -> bool {
    has_token(headers, &standard::TRANSFER_ENCODING, "chunked")
}

/// Returns `true` if `Connection` lists `close`.
pub fn is_connection_close(headers: &HeaderMap) -> bool {
    has_token(headers, &standard::CONNECTION, "close")
}

fn has_token(headers: &HeaderMap, name: &HeaderName, token: &str) -> bool {
    headers.get_all(name).any(|value| {
        grammar::read_all::<String>(value.as_str())
            .is_ok_and(|tokens| tokens.iter().any(|e| e.eq_ignore_ascii_case(token)))
    })
}
