//! Message Aggregation.
//!
//! Fill a [`Request`] or [`Response`] from a [`HeaderMap`], and write them back into one.
//!
//! A malformed value only affects its own header: it is logged and skipped, and the
//! corresponding field stays unset. Headers that are not [standard] are kept verbatim as
//! extension headers.
//!
//! ```
//! use headwork::convert;
//! use headwork::headers::{HeaderMap, HeaderValue};
//! use headwork::message::Request;
//!
//! let mut headers = HeaderMap::new();
//! headers.append("accept", HeaderValue::from_static("text/html;q=0.9, */*;q=0.1"));
//! headers.append("x-request-id", HeaderValue::from_static("42"));
//!
//! let mut request = Request::default();
//! convert::copy_request_headers(&headers, &mut request);
//! assert_eq!(request.client_info.accepted_media_types.len(), 2);
//! assert_eq!(request.headers().get("x-request-id").unwrap(), "42");
//! ```
//!
//! [`Request`]: crate::message::Request
//! [`Response`]: crate::message::Response
//! [standard]: crate::headers::standard
use crate::grammar::{FormatError, ParseError};
use crate::headers::{HeaderMap, HeaderName, HeaderValue};
use crate::log::warning;

mod general;
mod entity;
mod request;
mod response;
mod extension;
mod transport;

pub use general::add_general_headers;
pub use entity::{add_entity_headers, extract_entity_headers};
pub use request::{add_request_headers, copy_request_headers, request_headers};
pub use response::{
    add_response_headers, copy_response_headers, copy_response_transport_headers, response_headers,
};
pub use extension::{add_extension_headers, keep_extension_headers_only, is_standard_header};
pub use transport::{content_length, is_chunked_encoding, is_connection_close};

/// Append a header, skipping it when the value is not a valid field value.
fn put(headers: &mut HeaderMap, name: HeaderName, value: String) {
    match HeaderValue::from_string(value) {
        Ok(value) => headers.append(name, value),
        Err(err) => {
            warning!("skipping invalid {name} header: {err}");
        }
    }
}

/// Append a written header, skipping it when the writer failed.
fn put_written(headers: &mut HeaderMap, name: HeaderName, value: Result<String, FormatError>) {
    match value {
        Ok(value) => put(headers, name, value),
        Err(err) => {
            warning!("skipping {name} header: {err}");
        }
    }
}

/// Read a header value, skipping it when malformed.
fn read_header<T>(
    name: &HeaderName,
    value: &HeaderValue,
    read: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Option<T> {
    match read(value.as_str()) {
        Ok(ok) => Some(ok),
        Err(err) => {
            warning!("skipping malformed {name} header {:?}: {err}", value.as_str());
            None
        }
    }
}

/// Read a header value that must be a number.
fn read_number(name: &HeaderName, value: &HeaderValue) -> Option<u64> {
    match value.as_str().trim().parse() {
        Ok(number) => Some(number),
        Err(_) => {
            warning!("skipping malformed {name} header {:?}: not a number", value.as_str());
            None
        }
    }
}
