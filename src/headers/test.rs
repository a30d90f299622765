use crate::headers::standard::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use crate::headers::AsHeaderName;
use crate::headers::{Header, HeaderError, HeaderMap, HeaderName, HeaderValue};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<HeaderName>();
    is_send_sync::<HeaderValue>();
    is_send_sync::<Header>();
    fn _is_dyn_compat(_: &dyn AsHeaderName) { }
};

#[test]
fn test_header_name() {
    let name = HeaderName::from_slice("Content-Type").unwrap();
    assert_eq!(name.as_str(), "content-type");
    assert_eq!(name, CONTENT_TYPE);
    assert!(name.is_standard());
    assert!(name == "CONTENT-TYPE");

    let name = HeaderName::from_slice("X-Powered-By").unwrap();
    assert_eq!(name.as_str(), "x-powered-by");
    assert!(!name.is_standard());

    assert_eq!(HeaderName::from_slice(""), Err(HeaderError::Empty));
    assert_eq!(HeaderName::from_slice("Content Type"), Err(HeaderError::Invalid));
    assert_eq!(HeaderName::from_slice("Content:Type"), Err(HeaderError::Invalid));
    assert!(HeaderName::from_bytes_lowercase("Upper").is_err());
    assert!(HeaderName::from_bytes_lowercase("lower").is_ok());
}

#[test]
fn test_header_value() {
    assert!(HeaderValue::from_slice("text/html; charset=UTF-8").is_ok());
    assert!(HeaderValue::from_slice("attachment; filename=\"caf\u{e9}.txt\"").is_ok());
    assert_eq!(HeaderValue::from_slice(" leading"), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice("trailing\t"), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice("line\r\nfeed"), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_bytes(&b"\xff\xfe"[..]), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice("x".repeat(9000)), Err(HeaderError::TooLong));
    assert!(HeaderValue::from_slice("").unwrap().is_empty());
}

#[test]
fn header_map() {
    let mut map = HeaderMap::new();

    map.insert("content-type", HeaderValue::from_static("FOO"));
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key("Content-Type"));

    assert!(map.insert(ACCEPT, HeaderValue::from_static("BAR")).is_none());
    assert!(map.insert(CONTENT_LENGTH, HeaderValue::from_static("LEN")).is_none());
    assert!(map.insert("host", HeaderValue::from_static("BAR")).is_none());
    assert!(map.insert("X-Custom", HeaderValue::from_static("BAR")).is_none());

    assert_eq!(map.len(), 5);
    assert!(map.contains_key("accept"));
    assert!(map.contains_key("x-custom"));

    // Insert Multi

    map.append("content-length", HeaderValue::from_static("BAR"));

    let mut all = map.get_all("Content-Length");
    assert!(matches!(all.next(), Some(v) if v == "LEN"));
    assert!(matches!(all.next(), Some(v) if v == "BAR"));
    assert!(all.next().is_none());

    assert_eq!(map.get_joined("content-length").as_deref(), Some("LEN, BAR"));

    // Lookup key may be a temporary

    let all = map.get_all(&CONTENT_LENGTH);
    assert_eq!(all.count(), 2);
    let mut all = map.get_all(HeaderName::from_static("content-length"));
    assert!(all.has_remaining());
    assert!(matches!(all.next(), Some(v) if v == "LEN"));
    assert_eq!(map.get_all("x-missing").count(), 0);

    // Insert replaces every value

    let old = map.insert("content-length", HeaderValue::from_static("10"));
    assert_eq!(old.unwrap(), "LEN");
    assert_eq!(map.get_all("content-length").count(), 1);
    assert_eq!(map.get("content-length").unwrap(), "10");

    // Order is preserved

    let names = map.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["content-type", "accept", "content-length", "host", "x-custom"]);

    // Remove

    assert!(map.remove("accept").is_some());
    assert!(map.remove("accept").is_none());
    assert!(!map.contains_key("accept"));
    assert!(map.contains_key("content-type"));

    // Clear

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains_key("content-type"));
    assert!(map.get_joined("content-type").is_none());
}
