use super::{put, put_written, read_header, read_number};
use crate::data::{ContentType, Disposition, Encoding, Language, Tag};
use crate::grammar;
use crate::headers::{HeaderMap, standard};
use crate::log::debug;
use crate::message::Representation;

/// Add the entity headers of a representation.
///
/// `Content-Length` is `0` when there is no available entity. Metadata of an unavailable entity
/// is still written, as for a response to `HEAD`.
pub fn add_entity_headers(entity: Option<&Representation>, headers: &mut HeaderMap) {
    let Some(entity) = entity else {
        put(headers, standard::CONTENT_LENGTH, "0".to_owned());
        return;
    };

    if !entity.is_available() {
        put(headers, standard::CONTENT_LENGTH, "0".to_owned());
    } else if let Some(size) = entity.available_size() {
        put(headers, standard::CONTENT_LENGTH, itoa::Buffer::new().format(size).to_owned());
    }

    let encodings: Vec<Encoding> = entity
        .encodings
        .iter()
        .filter(|e| **e != Encoding::IDENTITY)
        .cloned()
        .collect();
    if !encodings.is_empty() {
        put_written(headers, standard::CONTENT_ENCODING, grammar::write_all(&encodings));
    }
    if !entity.languages.is_empty() {
        put_written(headers, standard::CONTENT_LANGUAGE, grammar::write_all(&entity.languages));
    }
    if let Some(location) = &entity.location_ref {
        put(headers, standard::CONTENT_LOCATION, location.clone());
    }
    if let Some(digest) = &entity.digest {
        match grammar::write_md5_digest(digest) {
            Some(value) => put(headers, standard::CONTENT_MD5, value),
            None => {
                debug!("no header for {} digest", digest.algorithm());
            }
        }
    }
    if let Some(range) = &entity.range {
        put_written(headers, standard::CONTENT_RANGE, grammar::write_content_range(range, entity.size));
    }
    if let Some(media_type) = &entity.media_type {
        let content_type = ContentType::new(media_type.clone(), entity.character_set.clone());
        put_written(headers, standard::CONTENT_TYPE, grammar::write(&content_type));
    }
    if let Some(date) = entity.expiration_date {
        put_written(headers, standard::EXPIRES, grammar::write_date(date));
    }
    if let Some(date) = entity.modification_date {
        put_written(headers, standard::LAST_MODIFIED, grammar::write_date(date));
    }
    if let Some(tag) = &entity.tag {
        put_written(headers, standard::ETAG, grammar::write(tag));
    }
    if let Some(disposition) = entity.disposition.as_ref().filter(|e| !e.is_none()) {
        put_written(headers, standard::CONTENT_DISPOSITION, grammar::write(disposition));
    }
}

/// Fill a representation from the entity headers.
///
/// Returns `true` if any entity header was found.
pub fn extract_entity_headers(headers: &HeaderMap, entity: &mut Representation) -> bool {
    let mut found = false;
    let mut content_length = None;
    let mut complete_size = None;

    for (name, value) in headers {
        match name.as_str() {
            "content-encoding" => {
                if let Some(encodings) = read_header(name, value, grammar::read_all::<Encoding>) {
                    entity.encodings.extend(encodings);
                }
            }
            "content-language" => {
                if let Some(languages) = read_header(name, value, grammar::read_all::<Language>) {
                    entity.languages.extend(languages);
                }
            }
            "content-length" => content_length = read_number(name, value),
            "content-location" => entity.location_ref = Some(value.as_str().to_owned()),
            "content-md5" => entity.digest = read_header(name, value, grammar::read_md5_digest),
            "content-range" => {
                if let Some((range, size)) = read_header(name, value, grammar::read_content_range) {
                    entity.range = range;
                    complete_size = size;
                }
            }
            "content-type" => {
                if let Some(Some(content_type)) = read_header(name, value, grammar::read::<ContentType>) {
                    entity.media_type = Some(content_type.media_type);
                    entity.character_set = content_type.character_set;
                }
            }
            "expires" => entity.expiration_date = read_header(name, value, grammar::read_date),
            "last-modified" => entity.modification_date = read_header(name, value, grammar::read_date),
            "etag" => entity.tag = read_header(name, value, grammar::read::<Tag>).flatten(),
            "content-disposition" => {
                entity.disposition = read_header(name, value, grammar::read::<Disposition>).flatten();
            }
            _ => continue,
        }
        found = true;
    }

    entity.size = match &entity.range {
        Some(_) => complete_size,
        None => content_length,
    };
    if found {
        entity.available = content_length != Some(0) || super::is_chunked_encoding(headers);
    }
    found
}
