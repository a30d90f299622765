use crate::headers::{HeaderMap, standard};
use crate::log::warning;

/// Append extension headers.
///
/// Standard headers are rejected, they must be set through the structured fields.
pub fn add_extension_headers(headers: &mut HeaderMap, extensions: &HeaderMap) {
    for header in extensions.fields() {
        if header.name().is_standard() {
            warning!(
                "rejecting {} extension header, use the corresponding structured field instead",
                header.name()
            );
        } else {
            headers.push(header.clone());
        }
    }
}

/// Returns only the headers that are not standard.
pub fn keep_extension_headers_only(headers: &HeaderMap) -> HeaderMap {
    headers
        .fields()
        .iter()
        .filter(|e| !e.name().is_standard())
        .cloned()
        .collect()
}

/// Returns `true` if `name` is a standard header, compared case-insensitively.
#[inline]
pub fn is_standard_header(name: &str) -> bool {
    standard::is_standard(name)
}
