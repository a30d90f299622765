use headwork::{
    convert,
    headers::{HeaderMap, HeaderName, HeaderValue},
    message::Request,
};
use std::io::{self, BufRead};

/// Reads `Name: value` lines from stdin until an empty line, then prints the headers that the
/// structured request writes back.
fn main() -> io::Result<()> {
    env_logger::init();

    let mut headers = HeaderMap::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            eprintln!("! missing `:` in {line:?}");
            continue;
        };
        let (Ok(name), Ok(value)) = (name.parse::<HeaderName>(), HeaderValue::from_slice(value.trim())) else {
            eprintln!("! invalid header {line:?}");
            continue;
        };
        headers.append(name, value);
    }

    let mut request = Request::default();
    convert::copy_request_headers(&headers, &mut request);

    let client = &request.client_info;
    println!("> accept: {} media types, {} languages", client.accepted_media_types.len(), client.accepted_languages.len());
    println!("> entity: {:?}", request.entity().as_ref().map(|e| e.media_type.as_ref().map(|m| m.name().to_owned())));
    println!("> extensions: {}", request.headers().len());

    for (name, value) in &convert::request_headers(&request) {
        println!("{name}: {value}");
    }

    Ok(())
}
