use std::time::{Duration, SystemTime};

use crate::data::*;
use crate::grammar::*;
use crate::http::Method;

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<ParseError>();
    is_send_sync::<FormatError>();
    is_send_sync::<HeaderReader<'static>>();
    is_send_sync::<HeaderWriter>();
    is_send_sync::<ChallengeWriter>();
};

macro_rules! parse_err {
    ($e:expr) => {
        match $e {
            Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
            Err(err) => err,
        }
    };
}

// ===== Reader =====

#[test]
fn test_reader_primitives() {
    let mut reader = HeaderReader::new("  token \"a\\\"b\" (x (y) z)rest");
    assert!(reader.skip_spaces());
    assert_eq!(reader.read_token(), Some("token"));
    assert!(reader.skip_spaces());
    assert_eq!(reader.read_quoted_string().unwrap(), "a\"b");
    reader.skip_spaces();
    assert_eq!(reader.read_comment().unwrap(), "x (y) z");
    assert_eq!(reader.remaining(), "rest");

    reader.mark();
    assert_eq!(reader.read(), Some(b'r'));
    reader.reset();
    assert_eq!(reader.peek(), Some(b'r'));
    assert_eq!(reader.read_token(), Some("rest"));
    assert!(reader.is_end());
    assert_eq!(reader.read(), None);
    reader.unread();
    assert!(reader.is_end());

    let mut reader = HeaderReader::new("a=1 ; b = \"two\" ;c");
    assert_eq!(reader.read_parameter().unwrap(), Parameter::new("a", "1"));
    assert!(reader.skip_parameter_separator());
    assert_eq!(reader.read_parameter().unwrap(), Parameter::new("b", "two"));
    assert!(reader.skip_parameter_separator());
    assert_eq!(reader.read_parameter().unwrap(), Parameter::flag("c"));
    assert!(reader.expect_end().is_ok());

    let mut reader = HeaderReader::new("\"a, b\", c");
    assert_eq!(reader.read_raw_value(), Some("\"a, b\""));
    assert!(reader.skip_value_separator());
    assert_eq!(reader.read_raw_value(), Some("c"));
    assert_eq!(reader.read_raw_value(), None);
}

#[test]
fn test_reader_errors() {
    let err = HeaderReader::new("\"abc").read_quoted_string().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(err.position, 4);
    assert_eq!(err.found, None);

    let err = HeaderReader::new("(a(b)").read_comment().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);

    let err = parse_err!(read::<ContentType>("text/html@"));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedChar);
    assert_eq!(err.position, 9);
    assert_eq!(err.found, Some(b'@'));

    let err = parse_err!(read::<ContentType>("text/html x"));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedChar);
    assert_eq!(err.found, Some(b'x'));

    let err = HeaderReader::new("a=").read_parameter().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyValue);

    let err = parse_err!(read_all::<String>("a, b c"));
    assert_eq!(err.kind, ParseErrorKind::UnexpectedChar);
    assert_eq!(err.position, 5);
}

#[test]
fn test_token_list() {
    assert_eq!(read_all::<String>("close, Upgrade ,CLOSE").unwrap(), ["close", "Upgrade"]);
    assert!(read_all::<String>("").unwrap().is_empty());
    assert_eq!(write_all(&["bytes".to_owned()]).unwrap(), "bytes");
}

// ===== Writer =====

#[test]
fn test_writer_primitives() {
    let mut writer = HeaderWriter::new();
    writer
        .append_value("token")
        .append_value_separator()
        .append_value("a b")
        .append_parameter_separator()
        .append_quoted_string("q\"\\")
        .append_char(' ')
        .append_comment("(c)");
    assert_eq!(writer.as_str(), "token, \"a b\"; \"q\\\"\\\\\" (\\(c\\))");

    assert_eq!(HeaderWriter::new().append_token("").unwrap_err(), FormatError::EmptyName);
    assert_eq!(HeaderWriter::new().append_token("a b").unwrap_err(), FormatError::InvalidToken);

    let mut writer = HeaderWriter::new();
    writer.append_parameter(&Parameter::flag("secure")).unwrap();
    writer.append_parameters(&Parameters::new().with("a", "1").with("b", "x y")).unwrap();
    assert_eq!(writer.to_string(), "secure; a=1; b=\"x y\"");
}

#[test]
fn test_writer_quality() {
    macro_rules! test {
        ($($q:expr => $expected:literal),* $(,)?) => {
            $(
                let mut writer = HeaderWriter::new();
                writer.append_quality($q);
                assert_eq!(writer.as_str(), $expected, "quality {}", $q);
            )*
        };
    }

    test! {
        1.0 => "1",
        0.0 => "0",
        0.5 => "0.5",
        0.125 => "0.125",
        0.1234 => "0.123",
        0.001 => "0.001",
        0.8 => "0.8",
        2.0 => "1",
    }
}

// ===== Metadata =====

#[test]
fn test_content_type() {
    macro_rules! test {
        ($input:literal => $expected:literal) => {
            let content_type = read::<ContentType>($input).unwrap().unwrap();
            assert_eq!(write(&content_type).unwrap(), $expected);
        };
    }

    test!("text/html; charset=UTF-8" => "text/html; charset=UTF-8");
    test!("text/plain ;  format=flowed" => "text/plain; format=flowed");
    test!("multipart/form-data; boundary=\"a b\"" => "multipart/form-data; boundary=\"a b\"");
    test!("application/json;charset=utf-8" => "application/json; charset=UTF-8");

    let content_type = read::<ContentType>("text/html; charset=ISO-8859-1; level=1").unwrap().unwrap();
    assert_eq!(content_type.media_type.name(), "text/html");
    assert_eq!(content_type.media_type.parameters().first_value("level", false), Some("1"));
    assert!(content_type.media_type.parameters().first("charset", true).is_none());
    assert_eq!(content_type.character_set, Some(CharacterSet::ISO_8859_1));

    assert!(read::<ContentType>("").unwrap().is_none());
    let err = parse_err!(read::<ContentType>("; charset=UTF-8"));
    assert_eq!(err.kind, ParseErrorKind::EmptyName);
}

#[test]
fn test_preferences() {
    let prefs: Vec<Preference<Encoding>> = read_all("gzip;q=1.0, identity;q=0.5, *;q=0").unwrap();
    let names: Vec<&str> = prefs.iter().map(|e| e.metadata().name()).collect();
    let qualities: Vec<f32> = prefs.iter().map(Preference::quality).collect();
    assert_eq!(names, ["gzip", "identity", "*"]);
    assert_eq!(qualities, [1.0, 0.5, 0.0]);
    assert_eq!(write_all(&prefs).unwrap(), "gzip, identity;q=0.5, *;q=0");

    let prefs: Vec<Preference<Encoding>> = read_all("").unwrap();
    assert!(prefs.is_empty());

    let prefs: Vec<Preference<MediaType>> = read_all("text/html;level=1;q=0.5;ext=x").unwrap();
    let pref = &prefs[0];
    assert_eq!(pref.metadata().name(), "text/html");
    assert_eq!(pref.metadata().parameters().first_value("level", false), Some("1"));
    assert!(pref.metadata().parameters().first("ext", false).is_none());
    assert_eq!(pref.parameters().first_value("ext", false), Some("x"));
    assert_eq!(pref.quality(), 0.5);
    assert_eq!(write_all(&prefs).unwrap(), "text/html;level=1;q=0.5;ext=x");

    let prefs: Vec<Preference<Language>> = read_all(" , en-US , fr;q=0.8,").unwrap();
    assert_eq!(prefs.len(), 2);
    assert_eq!(prefs[0].metadata(), &Language::ENGLISH_US);
    assert_eq!(prefs[1].metadata(), &Language::FRENCH);

    let prefs: Vec<Preference<CharacterSet>> = read_all("utf-8, UTF-8;q=0.1").unwrap();
    assert_eq!(prefs.len(), 2, "different quality is a different preference");

    let err = parse_err!(read_all::<Preference<MediaType>>("text/html;q=2"));
    assert_eq!(err.kind, ParseErrorKind::InvalidQuality);
    let err = parse_err!(read_all::<Preference<MediaType>>("text/html;q=abc"));
    assert_eq!(err.kind, ParseErrorKind::InvalidQuality);
    let err = parse_err!(read_all::<Preference<MediaType>>("text/html, ;q=0.5"));
    assert_eq!(err.kind, ParseErrorKind::EmptyName);
    let err = parse_err!(read_all::<Preference<MediaType>>("text/html;=1"));
    assert_eq!(err.kind, ParseErrorKind::EmptyName);
}

#[test]
fn test_metadata_lists() {
    let encodings: Vec<Encoding> = read_all("gzip, identity, GZIP, br").unwrap();
    assert_eq!(encodings, [Encoding::GZIP, Encoding::BROTLI]);
    assert_eq!(write_all(&encodings).unwrap(), "gzip, br");

    let languages: Vec<Language> = read_all("en-GB, de").unwrap();
    assert_eq!(languages[0].primary_tag(), "en");
    assert_eq!(write_all(&languages).unwrap(), "en-gb, de");
}

// ===== Disposition =====

#[test]
fn test_disposition() {
    let disposition = read::<Disposition>("attachment; filename=\"file with space.txt\"").unwrap().unwrap();
    assert_eq!(disposition.kind(), Disposition::ATTACHMENT);
    assert_eq!(disposition.filename(), Some("file with space.txt"));
    assert_eq!(write(&disposition).unwrap(), "attachment; filename=\"file with space.txt\"");

    let disposition = read::<Disposition>("INLINE; size=120").unwrap().unwrap();
    assert_eq!(disposition.kind(), Disposition::INLINE);
    assert_eq!(disposition.size(), Some(120));

    let mut disposition = Disposition::new(Disposition::FORM_DATA);
    disposition.set_filename("a.txt");
    disposition.set_modification_date(SystemTime::UNIX_EPOCH + Duration::from_secs(784111777)).unwrap();
    assert_eq!(
        write(&disposition).unwrap(),
        "form-data; filename=a.txt; modification-date=\"Sun, 06 Nov 1994 08:49:37 GMT\""
    );
}

// ===== Tag =====

#[test]
fn test_tags() {
    let tags: Vec<Tag> = read_all("\"xyz\", \"r2d2\", c3pio, *").unwrap();
    assert_eq!(tags, [Tag::new("xyz"), Tag::new("r2d2"), Tag::ALL]);

    let tags: Vec<Tag> = read_all("W/\"a, b\", \"c\"").unwrap();
    assert_eq!(tags, [Tag::weak("a, b"), Tag::new("c")]);
    assert_eq!(write_all(&tags).unwrap(), "W/\"a, b\", \"c\"");
    assert_eq!(write(&Tag::ALL).unwrap(), "*");

    assert!(read_all::<Tag>("unquoted").unwrap().is_empty());
}

// ===== Range =====

#[test]
fn test_ranges() {
    let ranges = read_ranges("bytes=500-999").unwrap();
    assert_eq!(ranges, [Range::new(Some(500), Some(500))]);
    assert_eq!(ranges[0].resolve(1500), Some((500, 999)));

    let ranges = read_ranges("bytes=0-499, 1000-, -500").unwrap();
    assert_eq!(ranges, [Range::from_positions(0, 499).unwrap(), Range::starting_at(1000), Range::suffix(500)]);
    assert_eq!(write_ranges(&ranges).unwrap(), "bytes=0-499,1000-,-500");

    assert!(read_ranges("").unwrap().is_empty());
    assert_eq!(parse_err!(read_ranges("bytes=9-1")).kind, ParseErrorKind::Malformed);
    assert_eq!(parse_err!(read_ranges("bytes=-")).kind, ParseErrorKind::Malformed);
    assert_eq!(parse_err!(read_ranges("bytes 0-1")).kind, ParseErrorKind::UnexpectedChar);
    assert_eq!(
        parse_err!(read_ranges("bytes=0-18446744073709551615")).kind,
        ParseErrorKind::InvalidNumber,
    );
    let ranges = read_ranges("bytes=1-18446744073709551615").unwrap();
    assert_eq!(ranges[0].size(), Some(u64::MAX));

    assert_eq!(write_ranges(&[Range::new(None, None)]), Err(FormatError::InvalidRange));
}

#[test]
fn test_content_range() {
    macro_rules! test {
        ($range:expr, $size:expr => $expected:expr) => {
            assert_eq!(write_content_range(&$range, $size), $expected);
        };
    }

    test!(Range::suffix(500), Some(1500) => Ok("bytes 1000-1499/1500".to_owned()));
    test!(Range::from_positions(500, 999).unwrap(), Some(1500) => Ok("bytes 500-999/1500".to_owned()));
    test!(Range::from_positions(500, 999).unwrap(), None => Ok("bytes 500-999/*".to_owned()));
    test!(Range::from_positions(0, 9999).unwrap(), Some(100) => Ok("bytes 0-99/100".to_owned()));
    test!(Range::starting_at(10), Some(100) => Ok("bytes 10-99/100".to_owned()));
    test!(Range::starting_at(10), None => Err(FormatError::UnknownEntitySize));
    test!(Range::suffix(10), None => Err(FormatError::UnknownEntitySize));
    test!(Range::suffix(2000), Some(1500) => Err(FormatError::RangeTooLarge));
    test!(Range::starting_at(100), Some(100) => Err(FormatError::InvalidRange));
    test!(Range::new(None, None), Some(100) => Err(FormatError::InvalidRange));

    let (range, size) = read_content_range("bytes 0-499/1234").unwrap();
    assert_eq!(range, Range::from_positions(0, 499));
    assert_eq!(size, Some(1234));

    let (range, size) = read_content_range("bytes */1234").unwrap();
    assert_eq!(range, None);
    assert_eq!(size, Some(1234));

    let (range, size) = read_content_range("bytes 0-499/*").unwrap();
    assert!(range.is_some());
    assert_eq!(size, None);

    assert_eq!(parse_err!(read_content_range("bytes 0-499")).kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(
        parse_err!(read_content_range("bytes 0-18446744073709551615/*")).kind,
        ParseErrorKind::InvalidNumber,
    );
}

// ===== Challenge =====

#[test]
fn test_challenge_requests() {
    let requests = read_challenge_requests("Basic realm=\"a\", Digest realm=\"b\", nonce=\"n\"").unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].scheme(), &ChallengeScheme::HTTP_BASIC);
    assert_eq!(requests[0].realm(), Some("a"));
    assert_eq!(requests[1].scheme(), &ChallengeScheme::HTTP_DIGEST);
    assert_eq!(requests[1].realm(), Some("b"));
    assert_eq!(requests[1].message.server_nonce.as_deref(), Some("n"));
    assert_eq!(write_challenge_request(&requests[1]).unwrap(), "Digest realm=\"b\", nonce=\"n\"");

    let requests = read_challenge_requests(
        "Digest realm=\"api\", qop=\"auth,auth-int\", domain=\"/a /b\", stale=TRUE, charset=UTF-8",
    )
    .unwrap();
    let request = &requests[0];
    assert_eq!(request.quality_options, ["auth", "auth-int"]);
    assert_eq!(request.domain_refs, ["/a", "/b"]);
    assert!(request.stale);
    assert_eq!(request.message.parameters.first_value("charset", false), Some("UTF-8"));

    let requests = read_challenge_requests("Negotiate, Basic").unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].scheme().technical_name(), "Negotiate");
    assert_eq!(requests[0].message.raw_value(), None);

    let requests = read_challenge_requests("Negotiate abc123").unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].scheme().technical_name(), "Negotiate");
    assert_eq!(requests[0].message.raw_value(), Some("abc123"));

    let requests = read_challenge_requests("Negotiate YWJj==, Basic realm=\"a\"").unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].message.raw_value(), Some("YWJj=="));
    assert_eq!(write_challenge_request(&requests[0]).unwrap(), "Negotiate YWJj==");
    assert_eq!(requests[1].realm(), Some("a"));

    let mut request = ChallengeRequest::with_realm(ChallengeScheme::HTTP_DIGEST, "x");
    request.message.server_nonce = Some("n".into());
    request.stale = true;
    request.quality_options = vec!["auth".into()];
    assert_eq!(
        write_challenge_request(&request).unwrap(),
        "Digest realm=\"x\", nonce=\"n\", stale=true, qop=\"auth\""
    );

    let mut request = requests[1].clone();
    request.message.set_raw_value("realm=\"cached\"");
    assert_eq!(write_challenge_request(&request).unwrap(), "Basic realm=\"cached\"");
    request.message.clear_raw_value();
    request.message.realm = Some("fresh".into());
    assert_eq!(write_challenge_request(&request).unwrap(), "Basic realm=\"fresh\"");
}

#[test]
fn test_challenge_responses() {
    let response = read_challenge_response("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==").unwrap();
    assert_eq!(response.scheme(), &ChallengeScheme::HTTP_BASIC);
    assert_eq!(response.identifier.as_deref(), Some("Aladdin"));
    assert_eq!(response.secret.as_deref(), Some("open sesame"));

    let response = ChallengeResponse::with_credentials(ChallengeScheme::HTTP_BASIC, "Aladdin", "open sesame");
    assert_eq!(write_challenge_response(&response).unwrap(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");

    let err = read_challenge_response("Basic !!!").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidEncoding);
    assert_eq!(err.position, 6);

    let response = read_challenge_response("Bearer mF_9.B5f-4.1JqM").unwrap();
    assert_eq!(response.scheme(), &ChallengeScheme::HTTP_OAUTH_BEARER);
    assert_eq!(response.secret.as_deref(), Some("mF_9.B5f-4.1JqM"));

    let response = read_challenge_response(
        "Digest username=\"Mufasa\", realm=\"testrealm@host.com\", nonce=\"abc\", \
         uri=\"/dir/index.html\", qop=auth, nc=0000000a, cnonce=\"0a4f113b\", response=\"6629fae4\"",
    )
    .unwrap();
    assert_eq!(response.identifier.as_deref(), Some("Mufasa"));
    assert_eq!(response.message.realm.as_deref(), Some("testrealm@host.com"));
    assert_eq!(response.digest_ref.as_deref(), Some("/dir/index.html"));
    assert_eq!(response.quality.as_deref(), Some("auth"));
    assert_eq!(response.server_nonce_count, 10);
    assert_eq!(response.client_nonce.as_deref(), Some("0a4f113b"));
    assert_eq!(response.secret.as_deref(), Some("6629fae4"));

    let mut response = response;
    response.message.clear_raw_value();
    assert_eq!(
        write_challenge_response(&response).unwrap(),
        "Digest username=\"Mufasa\", realm=\"testrealm@host.com\", nonce=\"abc\", \
         uri=\"/dir/index.html\", qop=auth, nc=0000000a, cnonce=\"0a4f113b\", response=\"6629fae4\""
    );

    let response = read_challenge_response("Custom dG9rZW4=").unwrap();
    assert_eq!(response.scheme().name(), "HTTP_Custom");
    assert_eq!(response.message.raw_value(), Some("dG9rZW4="));
    assert_eq!(write_challenge_response(&response).unwrap(), "Custom dG9rZW4=");
}

#[test]
fn test_challenge_writer() {
    let mut writer = ChallengeWriter::new(&ChallengeScheme::new("HTTP_Custom", "Custom")).unwrap();
    assert!(writer.is_first());
    writer.append_challenge_parameter("a", "token").unwrap();
    writer.append_challenge_parameter("b", "two words").unwrap();
    writer.append_quoted_challenge_parameter("c", "token").unwrap();
    assert!(!writer.is_first());
    assert_eq!(writer.into_string(), "Custom a=token, b=\"two words\", c=\"token\"");

    assert!(ChallengeWriter::new(&ChallengeScheme::new("x", "bad scheme")).is_err());
}

// ===== Cookie =====

#[test]
fn test_cookies() {
    let input = "$Version=\"1\"; Customer=\"WILE_E_COYOTE\"; $Path=\"/acme\"";
    let cookies = read_cookies(input).unwrap();
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].version, 1);
    assert_eq!(cookies[0].name, "Customer");
    assert_eq!(cookies[0].value, "WILE_E_COYOTE");
    assert_eq!(cookies[0].path.as_deref(), Some("/acme"));
    assert_eq!(write_cookies(&cookies).unwrap(), input);

    let cookies = read_cookies("a=1; b=two words;c=").unwrap();
    assert_eq!(cookies, [Cookie::new("a", "1"), Cookie::new("b", "two words"), Cookie::new("c", "")]);
    assert_eq!(write_cookies(&cookies[..2]).unwrap(), "a=1; b=two words");

    assert!(read_cookies("").unwrap().is_empty());
    assert_eq!(write_cookies(&[Cookie::new("", "x")]), Err(FormatError::EmptyName));
}

#[test]
fn test_cookie_setting() {
    let setting = read_cookie_setting("id=a3fWa; Max-Age=2592000; Path=/; Secure; HttpOnly").unwrap();
    assert_eq!(setting.name(), "id");
    assert_eq!(setting.value(), "a3fWa");
    assert_eq!(setting.max_age, Some(2592000));
    assert_eq!(setting.cookie.path.as_deref(), Some("/"));
    assert!(setting.secure);
    assert!(setting.access_restricted);
    assert_eq!(
        write_cookie_setting(&setting).unwrap(),
        "id=a3fWa; Path=/; Max-Age=2592000; Secure; HttpOnly"
    );

    let setting = read_cookie_setting("a=b; Expires=Thu, 01 Jan 1970 00:00:00 GMT").unwrap();
    assert_eq!(setting.max_age, Some(0));

    let setting = read_cookie_setting("a=b; expires=garbage; Max-Age=-5").unwrap();
    assert_eq!(setting.max_age, Some(0));

    let setting = read_cookie_setting("a=b; comment=hi").unwrap();
    assert_eq!(setting.comment.as_deref(), Some("hi"));

    let mut setting = CookieSetting::new("v", "x y");
    setting.cookie.version = 1;
    setting.cookie.domain = Some(".example.com".into());
    setting.comment = Some("a comment".into());
    assert_eq!(
        write_cookie_setting(&setting).unwrap(),
        "v=\"x y\"; Version=1; Domain=\".example.com\"; Comment=\"a comment\""
    );

    assert_eq!(parse_err!(read_cookie_setting("a=b; Max-Age=soon")).kind, ParseErrorKind::InvalidNumber);
}

// ===== Others =====

#[test]
fn test_warnings() {
    let warnings: Vec<Warning> = read_all(
        "110 anderson/1.3.37 \"Response is stale\", 199 - \"a\" \"Sun, 06 Nov 1994 08:49:37 GMT\"",
    )
    .unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].code, Warning::RESPONSE_STALE);
    assert_eq!(warnings[0].agent, "anderson/1.3.37");
    assert_eq!(warnings[0].text, "Response is stale");
    assert_eq!(warnings[1].date, Some(SystemTime::UNIX_EPOCH + Duration::from_secs(784111777)));
    assert_eq!(
        write_all(&warnings).unwrap(),
        "110 anderson/1.3.37 \"Response is stale\", 199 - \"a\" \"Sun, 06 Nov 1994 08:49:37 GMT\""
    );

    assert_eq!(parse_err!(read_all::<Warning>("1100 x \"t\"")).kind, ParseErrorKind::InvalidNumber);
    assert_eq!(parse_err!(read_all::<Warning>("110 x \"t\" \"never\"")).kind, ParseErrorKind::InvalidDate);

    let mut warning = Warning::new(Warning::MISCELLANEOUS, "-", "a");
    warning.date = Some(SystemTime::UNIX_EPOCH - Duration::from_secs(60));
    assert_eq!(write(&warning), Err(FormatError::InvalidDate));
}

#[test]
fn test_methods() {
    let methods: Vec<Method> = read_all("GET, HEAD,PUT, GET, PURGE").unwrap();
    assert_eq!(methods.len(), 4);
    assert_eq!(methods[0], Method::GET);
    assert!(methods[3].is_extension());
    assert_eq!(write_all(&methods).unwrap(), "GET, HEAD, PUT, PURGE");
}

#[test]
fn test_products() {
    let input = "Mozilla/5.0 (X11; Linux x86_64) Firefox/96.0";
    let products = read_products(input).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Mozilla");
    assert_eq!(products[0].version.as_deref(), Some("5.0"));
    assert_eq!(products[0].comment.as_deref(), Some("X11; Linux x86_64"));
    assert_eq!(products[1], Product::with_version("Firefox", "96.0"));
    assert_eq!(write_products(&products).unwrap(), input);

    assert_eq!(parse_err!(read_products("(orphan)")).kind, ParseErrorKind::Malformed);
    assert_eq!(parse_err!(read_products("curl/")).kind, ParseErrorKind::UnexpectedEnd);
}

#[test]
fn test_cache_directives() {
    let directives: Vec<CacheDirective> = read_all("max-age=3600, No-Cache=\"Set-Cookie\", public").unwrap();
    assert_eq!(
        directives,
        [CacheDirective::max_age(3600), CacheDirective::no_cache(&["Set-Cookie"]), CacheDirective::public()]
    );
    assert_eq!(write_all(&directives).unwrap(), "max-age=3600, no-cache=\"Set-Cookie\", public");
    assert_eq!(write(&CacheDirective::max_stale(None)).unwrap(), "max-stale");
}

#[test]
fn test_expectations() {
    let expectations: Vec<Expectation> = read_all("100-Continue").unwrap();
    assert_eq!(expectations, [Expectation::continue_response()]);

    let expectations: Vec<Expectation> = read_all("x=\"a b\"; p=1").unwrap();
    assert_eq!(expectations[0].value.as_deref(), Some("a b"));
    assert_eq!(expectations[0].parameters.first_value("p", false), Some("1"));
    assert_eq!(write_all(&expectations).unwrap(), "x=\"a b\"; p=1");
}

#[test]
fn test_recipients() {
    let input = "1.0 fred, 1.1 example.com:8080 (Apache/1.1)";
    let recipients: Vec<RecipientInfo> = read_all(input).unwrap();
    assert_eq!(recipients.len(), 2);
    assert_eq!(recipients[0], RecipientInfo::new("1.0", "fred"));
    assert_eq!(recipients[1].name, "example.com:8080");
    assert_eq!(recipients[1].comment.as_deref(), Some("Apache/1.1"));
    assert_eq!(write_all(&recipients).unwrap(), input);

    assert_eq!(parse_err!(read_all::<RecipientInfo>("1.1")).kind, ParseErrorKind::UnexpectedEnd);
}

#[test]
fn test_dimensions() {
    let dimensions = read_dimensions("Accept, accept-language, X-Custom").unwrap();
    assert_eq!(
        dimensions,
        Dimensions::from([Dimension::Language, Dimension::MediaType, Dimension::Unspecified])
    );
    assert_eq!(read_dimensions("*").unwrap(), Dimensions::from([Dimension::Unspecified]));

    let dimensions = Dimensions::from([Dimension::MediaType, Dimension::Language]);
    assert_eq!(write(&dimensions).unwrap(), "accept-language, accept");

    let dimensions = Dimensions::from([Dimension::MediaType, Dimension::ClientAddress]);
    assert_eq!(write(&dimensions).unwrap(), "*");
}

#[test]
fn test_dates() {
    let expected = SystemTime::UNIX_EPOCH + Duration::from_secs(784111777);
    for input in [
        "Sun, 06 Nov 1994 08:49:37 GMT",
        "Sunday, 06-Nov-94 08:49:37 GMT",
        "Sun Nov  6 08:49:37 1994",
    ] {
        assert_eq!(read_date(input).unwrap(), expected, "{input}");
    }
    assert_eq!(write_date(expected).unwrap(), "Sun, 06 Nov 1994 08:49:37 GMT");
    assert_eq!(write_date(SystemTime::UNIX_EPOCH).unwrap(), "Thu, 01 Jan 1970 00:00:00 GMT");
    assert_eq!(write_date(SystemTime::UNIX_EPOCH - Duration::from_secs(1)), Err(FormatError::InvalidDate));
    assert_eq!(
        write_date(SystemTime::UNIX_EPOCH + Duration::from_secs(253_402_300_800)),
        Err(FormatError::InvalidDate),
    );
    assert_eq!(read_date("yesterday").unwrap_err().kind, ParseErrorKind::InvalidDate);

    assert_eq!(read_retry_after("120").unwrap(), RetryAfter::Delay(Duration::from_secs(120)));
    assert_eq!(read_retry_after("Sun, 06 Nov 1994 08:49:37 GMT").unwrap(), RetryAfter::Date(expected));
    assert_eq!(write_retry_after(&RetryAfter::Delay(Duration::from_secs(120))).unwrap(), "120");
    assert_eq!(write_retry_after(&RetryAfter::Date(expected)).unwrap(), "Sun, 06 Nov 1994 08:49:37 GMT");
}

#[test]
fn test_md5_digest() {
    let digest = read_md5_digest("Q2hlY2sgSW50ZWdyaXR5IQ==").unwrap();
    assert_eq!(digest.algorithm(), Digest::MD5);
    assert_eq!(&digest.value()[..], b"Check Integrity!");
    assert_eq!(write_md5_digest(&digest).as_deref(), Some("Q2hlY2sgSW50ZWdyaXR5IQ=="));

    assert_eq!(write_md5_digest(&Digest::new(Digest::SHA_256, &b"x"[..])), None);
    assert_eq!(read_md5_digest("@@").unwrap_err().kind, ParseErrorKind::InvalidEncoding);
}
