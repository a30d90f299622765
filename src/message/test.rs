use std::time::{Duration, SystemTime};

use crate::data::{CacheDirective, MediaType, Product, Range, RetryAfter, Tag};
use crate::headers::HeaderValue;
use crate::http::{Method, StatusCode};
use crate::message::*;

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<Message>();
    is_send_sync::<Representation>();
    is_send_sync::<Request>();
    is_send_sync::<Response>();
};

#[test]
fn test_available_size() {
    let mut entity = Representation::new(MediaType::TEXT_PLAIN);
    assert_eq!(entity.available_size(), None);

    entity.size = Some(1500);
    assert_eq!(entity.available_size(), Some(1500));

    entity.range = Range::from_positions(500, 999);
    assert_eq!(entity.available_size(), Some(500));

    entity.range = Some(Range::suffix(100));
    assert_eq!(entity.available_size(), Some(100));

    entity.range = Some(Range::starting_at(1000));
    assert_eq!(entity.available_size(), Some(500));

    entity.size = None;
    assert_eq!(entity.available_size(), None);

    entity.range = Range::from_positions(0, 9);
    assert_eq!(entity.available_size(), Some(10));
}

#[test]
fn test_representation() {
    assert!(Representation::default().is_available());
    assert!(!Representation::empty().is_available());

    let message = Message {
        entity: Some(Representation::empty()),
        ..Message::new()
    };
    assert!(!message.is_entity_available());
    assert!(!Message::new().is_entity_available());
}

#[test]
fn test_conditions() {
    let mut conditions = Conditions::new();
    assert!(conditions.is_empty());

    conditions.range_tag = Some(Tag::new("xyz"));
    assert!(!conditions.is_empty());
}

#[test]
fn test_accessors() {
    let mut request = Request::new(Method::POST);
    assert_eq!(request.method, Method::POST);
    assert!(!request.is_ranged());

    let date = SystemTime::UNIX_EPOCH + Duration::from_secs(784111777);
    *request.date_mut() = Some(date);
    request.cache_directives_mut().push(CacheDirective::no_store());
    request.headers_mut().append("x-a", HeaderValue::from_static("1"));

    assert_eq!(*request.date(), Some(date));
    assert_eq!(request.message.date, Some(date));
    assert_eq!(request.cache_directives().len(), 1);
    assert_eq!(request.headers().len(), 1);

    let mut response = Response::default();
    assert_eq!(response.status, StatusCode::OK);
    *response.entity_mut() = Some(Representation::new(MediaType::TEXT_HTML));
    assert!(response.message.is_entity_available());

    let response = Response::new(StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.retry_after.is_none());
    assert!(response.dimensions.is_empty());
}

#[test]
fn test_agent_products() {
    let mut client = ClientInfo::new();
    assert!(client.agent_products().unwrap().is_empty());

    let mut product = Product::with_version("Mozilla", "5.0");
    product.comment = Some("X11; Linux x86_64".into());
    client.set_agent_products(&[product, Product::with_version("Firefox", "128.0")]).unwrap();
    assert_eq!(client.agent.as_deref(), Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0"));
    assert_eq!(client.agent_products().unwrap().len(), 2);

    let server = ServerInfo {
        agent: Some("Apache/2.4.1 (Unix)".into()),
        accept_ranges: false,
    };
    let products = server.agent_products().unwrap();
    assert_eq!(products[0].name, "Apache");
    assert_eq!(products[0].version.as_deref(), Some("2.4.1"));
}

#[test]
fn test_retry_after() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
    let retry = RetryAfter::from(Duration::from_secs(120));
    assert_eq!(retry.at(now), now + Duration::from_secs(120));

    let retry = RetryAfter::from(SystemTime::UNIX_EPOCH);
    assert_eq!(retry.at(now), SystemTime::UNIX_EPOCH);
}

#[test]
fn test_default_agent() {
    assert!(DEFAULT_AGENT.starts_with("headwork/"));
}
