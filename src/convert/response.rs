use super::general::{add_general_headers, copy_general_header, copy_pragma};
use super::{add_entity_headers, add_extension_headers, extract_entity_headers, keep_extension_headers_only};
use super::{put, put_written, read_header, read_number};
use crate::http::{Method, StatusCode};
use crate::grammar;
use crate::headers::{HeaderMap, HeaderName, HeaderValue, standard};
use crate::log::{debug, warning};
use crate::message::{DEFAULT_AGENT, Representation, Response};

/// Add the response specific headers.
///
/// `Server` defaults to [`DEFAULT_AGENT`], every challenge and cookie setting is written in its
/// own header. A `405` response always has `Allow`, even when no method is allowed.
pub fn add_response_headers(response: &Response, headers: &mut HeaderMap) {
    let status = response.status;
    if response.server_info.accept_ranges {
        put(headers, standard::ACCEPT_RANGES, "bytes".to_owned());
    }
    if let Some(age) = response.age {
        put(headers, standard::AGE, itoa::Buffer::new().format(age).to_owned());
    }
    if !response.allowed_methods.is_empty() || status == StatusCode::METHOD_NOT_ALLOWED {
        put_written(headers, standard::ALLOW, grammar::write_all(&response.allowed_methods));
    }
    match &response.location_ref {
        Some(location) => put(headers, standard::LOCATION, location.clone()),
        None if status.expects_location() => {
            warning!("{status} response without Location");
        }
        None => {}
    }
    if status == StatusCode::PROXY_AUTHENTICATION_REQUIRED && response.proxy_challenge_requests.is_empty() {
        warning!("{status} response without Proxy-Authenticate challenge");
    }
    if status == StatusCode::UNAUTHORIZED && response.challenge_requests.is_empty() {
        warning!("{status} response without WWW-Authenticate challenge");
    }
    for request in &response.proxy_challenge_requests {
        put_written(headers, standard::PROXY_AUTHENTICATE, grammar::write_challenge_request(request));
    }
    if let Some(retry_after) = &response.retry_after {
        put_written(headers, standard::RETRY_AFTER, grammar::write_retry_after(retry_after));
    }
    let agent = response.server_info.agent.as_deref().unwrap_or(DEFAULT_AGENT);
    put(headers, standard::SERVER, agent.to_owned());

    if !response.dimensions.is_empty() {
        put_written(headers, standard::VARY, grammar::write(&response.dimensions));
    }
    for setting in &response.cookie_settings {
        put_written(headers, standard::SET_COOKIE, grammar::write_cookie_setting(setting));
    }
    for request in &response.challenge_requests {
        put_written(headers, standard::WWW_AUTHENTICATE, grammar::write_challenge_request(request));
    }
}

/// Copy response headers into the response, on the client side.
///
/// Fills the response fields, the server info, the general fields and the extension headers.
/// Entity headers are left to [`extract_entity_headers`].
pub fn copy_response_transport_headers(headers: &HeaderMap, response: &mut Response) {
    debug!("copying {} response headers", headers.len());

    for (name, value) in headers {
        if copy_general_header(name, value, &mut response.message) {
            continue;
        }
        copy_response_header(name, value, response);
    }
    copy_pragma(headers, &mut response.message);

    response.message.headers.extend(keep_extension_headers_only(headers));
}

/// Copy response headers into the response, including the entity headers.
pub fn copy_response_headers(headers: &HeaderMap, response: &mut Response) {
    copy_response_transport_headers(headers, response);

    let mut entity = Representation::default();
    if extract_entity_headers(headers, &mut entity) {
        response.message.entity = Some(entity);
    }
}

fn copy_response_header(name: &HeaderName, value: &HeaderValue, response: &mut Response) {
    match name.as_str() {
        "accept-ranges" => {
            if let Some(units) = read_header(name, value, grammar::read_all::<String>) {
                response.server_info.accept_ranges = units.iter().any(|e| e.eq_ignore_ascii_case("bytes"));
            }
        }
        "age" => response.age = read_number(name, value),
        "allow" => {
            if let Some(methods) = read_header(name, value, grammar::read_all::<Method>) {
                response.allowed_methods.extend(methods);
            }
        }
        "location" => response.location_ref = Some(value.as_str().to_owned()),
        "proxy-authenticate" => {
            if let Some(requests) = read_header(name, value, grammar::read_challenge_requests) {
                response.proxy_challenge_requests.extend(requests);
            }
        }
        "retry-after" => response.retry_after = read_header(name, value, grammar::read_retry_after),
        "server" => response.server_info.agent = Some(value.as_str().to_owned()),
        "vary" => {
            if let Some(dimensions) = read_header(name, value, grammar::read_dimensions) {
                response.dimensions.extend(dimensions);
            }
        }
        "set-cookie" => {
            if let Some(setting) = read_header(name, value, grammar::read_cookie_setting) {
                response.cookie_settings.push(setting);
            }
        }
        "www-authenticate" => {
            if let Some(requests) = read_header(name, value, grammar::read_challenge_requests) {
                response.challenge_requests.extend(requests);
            }
        }
        _ => {}
    }
}

/// Returns every header of the response: general, response, entity then extension headers.
pub fn response_headers(response: &Response) -> HeaderMap {
    let mut headers = HeaderMap::new();
    add_general_headers(&response.message, &mut headers);
    add_response_headers(response, &mut headers);
    add_entity_headers(response.message.entity.as_ref(), &mut headers);
    add_status_entity_headers(response, &mut headers);
    add_extension_headers(&mut headers, &response.message.headers);
    headers
}

/// Adjust the entity headers to the response status.
///
/// A bodiless status drops `Content-Length`, a `416` reports the complete size in
/// `Content-Range` when the entity has no range of its own.
fn add_status_entity_headers(response: &Response, headers: &mut HeaderMap) {
    let status = response.status;
    if status.is_bodiless() {
        headers.remove(standard::CONTENT_LENGTH);
    }
    if status != StatusCode::RANGE_NOT_SATISFIABLE {
        return;
    }
    let Some(entity) = &response.message.entity else {
        return;
    };
    if let (None, Some(size)) = (&entity.range, entity.size) {
        put_written(headers, standard::CONTENT_RANGE, grammar::write_unsatisfied_content_range("bytes", size));
    }
}
