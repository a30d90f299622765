use super::general::{add_general_headers, copy_general_header, copy_pragma};
use super::{add_entity_headers, add_extension_headers, extract_entity_headers};
use super::{put, put_written, read_header, read_number};
use crate::data::{CharacterSet, Encoding, Expectation, Language, MediaType, Preference, Tag};
use crate::grammar;
use crate::headers::{HeaderMap, HeaderName, HeaderValue, standard};
use crate::log::debug;
use crate::message::{DEFAULT_AGENT, Representation, Request};

/// Add the request specific headers.
///
/// `Accept` defaults to `*/*` and `User-Agent` to [`DEFAULT_AGENT`].
pub fn add_request_headers(request: &Request, headers: &mut HeaderMap) {
    let client = &request.client_info;

    if client.accepted_media_types.is_empty() {
        put(headers, standard::ACCEPT, "*/*".to_owned());
    } else {
        put_written(headers, standard::ACCEPT, grammar::write_all(&client.accepted_media_types));
    }
    if !client.accepted_character_sets.is_empty() {
        put_written(headers, standard::ACCEPT_CHARSET, grammar::write_all(&client.accepted_character_sets));
    }
    if !client.accepted_encodings.is_empty() {
        put_written(headers, standard::ACCEPT_ENCODING, grammar::write_all(&client.accepted_encodings));
    }
    if !client.accepted_languages.is_empty() {
        put_written(headers, standard::ACCEPT_LANGUAGE, grammar::write_all(&client.accepted_languages));
    }
    if !client.expectations.is_empty() {
        put_written(headers, standard::EXPECT, grammar::write_all(&client.expectations));
    }
    if let Some(from) = &client.from {
        put(headers, standard::FROM, from.clone());
    }
    if let Some(host) = &request.host_ref {
        put(headers, standard::HOST, host.clone());
    }

    let conditions = &request.conditions;
    if !conditions.match_tags.is_empty() {
        put_written(headers, standard::IF_MATCH, grammar::write_all(&conditions.match_tags));
    }
    if let Some(date) = conditions.modified_since {
        put_written(headers, standard::IF_MODIFIED_SINCE, grammar::write_date(date));
    }
    if !conditions.none_match_tags.is_empty() {
        put_written(headers, standard::IF_NONE_MATCH, grammar::write_all(&conditions.none_match_tags));
    }
    if let Some(tag) = &conditions.range_tag {
        put_written(headers, standard::IF_RANGE, grammar::write(tag));
    } else if let Some(date) = conditions.range_date {
        put_written(headers, standard::IF_RANGE, grammar::write_date(date));
    }
    if let Some(date) = conditions.unmodified_since {
        put_written(headers, standard::IF_UNMODIFIED_SINCE, grammar::write_date(date));
    }

    if let Some(max_forwards) = request.max_forwards {
        put(headers, standard::MAX_FORWARDS, itoa::Buffer::new().format(max_forwards).to_owned());
    }
    if !request.ranges.is_empty() {
        put_written(headers, standard::RANGE, grammar::write_ranges(&request.ranges));
    }
    if let Some(referrer) = &request.referrer_ref {
        put(headers, standard::REFERER, referrer.clone());
    }
    let agent = client.agent.as_deref().unwrap_or(DEFAULT_AGENT);
    put(headers, standard::USER_AGENT, agent.to_owned());

    if !request.cookies.is_empty() {
        put_written(headers, standard::COOKIE, grammar::write_cookies(&request.cookies));
    }
    if let Some(response) = &request.challenge_response {
        put_written(headers, standard::AUTHORIZATION, grammar::write_challenge_response(response));
    }
    if let Some(response) = &request.proxy_challenge_response {
        put_written(headers, standard::PROXY_AUTHORIZATION, grammar::write_challenge_response(response));
    }
}

/// Copy request headers into the request, on the server side.
///
/// Fills the request fields, the client info, the conditions, the general fields, the entity
/// when any entity header is present, and the extension headers.
pub fn copy_request_headers(headers: &HeaderMap, request: &mut Request) {
    debug!("copying {} request headers", headers.len());

    for (name, value) in headers {
        if copy_general_header(name, value, &mut request.message) {
            continue;
        }
        copy_request_header(name, value, request);
    }
    copy_pragma(headers, &mut request.message);

    let mut entity = Representation::default();
    if extract_entity_headers(headers, &mut entity) {
        request.message.entity = Some(entity);
    }

    request.message.headers.extend(super::keep_extension_headers_only(headers));
}

fn copy_request_header(name: &HeaderName, value: &HeaderValue, request: &mut Request) {
    let client = &mut request.client_info;
    let conditions = &mut request.conditions;

    match name.as_str() {
        "accept" => {
            if let Some(prefs) = read_header(name, value, grammar::read_all::<Preference<MediaType>>) {
                client.accepted_media_types.extend(prefs);
            }
        }
        "accept-charset" => {
            if let Some(prefs) = read_header(name, value, grammar::read_all::<Preference<CharacterSet>>) {
                client.accepted_character_sets.extend(prefs);
            }
        }
        "accept-encoding" => {
            if let Some(prefs) = read_header(name, value, grammar::read_all::<Preference<Encoding>>) {
                client.accepted_encodings.extend(prefs);
            }
        }
        "accept-language" => {
            if let Some(prefs) = read_header(name, value, grammar::read_all::<Preference<Language>>) {
                client.accepted_languages.extend(prefs);
            }
        }
        "expect" => {
            if let Some(expectations) = read_header(name, value, grammar::read_all::<Expectation>) {
                client.expectations.extend(expectations);
            }
        }
        "from" => client.from = Some(value.as_str().to_owned()),
        "user-agent" => client.agent = Some(value.as_str().to_owned()),
        "host" => request.host_ref = Some(value.as_str().to_owned()),
        "referer" => request.referrer_ref = Some(value.as_str().to_owned()),
        "max-forwards" => request.max_forwards = read_number(name, value),
        "if-match" => {
            if let Some(tags) = read_header(name, value, grammar::read_all::<Tag>) {
                conditions.match_tags.extend(tags);
            }
        }
        "if-none-match" => {
            if let Some(tags) = read_header(name, value, grammar::read_all::<Tag>) {
                conditions.none_match_tags.extend(tags);
            }
        }
        "if-modified-since" => conditions.modified_since = read_header(name, value, grammar::read_date),
        "if-unmodified-since" => conditions.unmodified_since = read_header(name, value, grammar::read_date),
        "if-range" => {
            let raw = value.as_str().trim_start();
            if raw.starts_with('"') || raw.starts_with("W/") {
                conditions.range_tag = read_header(name, value, grammar::read::<Tag>).flatten();
            } else {
                conditions.range_date = read_header(name, value, grammar::read_date);
            }
        }
        "range" => {
            if let Some(ranges) = read_header(name, value, grammar::read_ranges) {
                request.ranges.extend(ranges);
            }
        }
        "cookie" => {
            if let Some(cookies) = read_header(name, value, grammar::read_cookies) {
                request.cookies.extend(cookies);
            }
        }
        "authorization" => {
            request.challenge_response = read_header(name, value, grammar::read_challenge_response);
        }
        "proxy-authorization" => {
            request.proxy_challenge_response = read_header(name, value, grammar::read_challenge_response);
        }
        _ => {}
    }
}

/// Returns every header of the request: general, request, entity then extension headers.
///
/// Entity headers are only written when the request has an entity.
pub fn request_headers(request: &Request) -> HeaderMap {
    let mut headers = HeaderMap::new();
    add_general_headers(&request.message, &mut headers);
    add_request_headers(request, &mut headers);
    if let Some(entity) = &request.message.entity {
        add_entity_headers(Some(entity), &mut headers);
    }
    add_extension_headers(&mut headers, &request.message.headers);
    headers
}
