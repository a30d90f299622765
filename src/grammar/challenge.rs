//! `WWW-Authenticate`, `Proxy-Authenticate`, `Authorization` and `Proxy-Authorization`.
use base64::{Engine, engine::general_purpose::STANDARD};

use super::{FormatError, HeaderReader, HeaderWriter, ParseError, ParseErrorKind};
use crate::data::{ChallengeMessage, ChallengeRequest, ChallengeResponse, ChallengeScheme, Parameter, Parameters};

/// Writer of a single challenge: the scheme followed by `", "` separated auth-params.
#[derive(Debug)]
pub struct ChallengeWriter {
    writer: HeaderWriter,
    first: bool,
}

impl ChallengeWriter {
    /// Create new [`ChallengeWriter`], starting with the scheme technical name.
    ///
    /// # Errors
    ///
    /// Returns error if the scheme name is not a token.
    pub fn new(scheme: &ChallengeScheme) -> Result<Self, FormatError> {
        let mut writer = HeaderWriter::new();
        writer.append_token(scheme.technical_name())?;
        Ok(Self {
            writer,
            first: true,
        })
    }

    /// Returns `true` if no parameter has been written yet.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.first
    }

    fn separate(&mut self) {
        if self.first {
            self.first = false;
            self.writer.append_char(' ');
        } else {
            self.writer.append_value_separator();
        }
    }

    /// Append `name=value`, quoting the value only if it is not a token.
    pub fn append_challenge_parameter(&mut self, name: &str, value: &str) -> Result<&mut Self, FormatError> {
        self.separate();
        self.writer.append_token(name)?.append_char('=').append_value(value);
        Ok(self)
    }

    /// Append `name="value"`.
    pub fn append_quoted_challenge_parameter(&mut self, name: &str, value: &str) -> Result<&mut Self, FormatError> {
        self.separate();
        self.writer.append_token(name)?.append_char('=').append_quoted_string(value);
        Ok(self)
    }

    /// Append a generic parameter, a flag when it has no value.
    pub fn append_parameter(&mut self, param: &Parameter) -> Result<&mut Self, FormatError> {
        self.separate();
        self.writer.append_parameter(param)?;
        Ok(self)
    }

    /// Append credentials or a cached wire form verbatim, after the scheme.
    pub fn append_raw(&mut self, raw: &str) -> &mut Self {
        if !raw.is_empty() {
            self.separate();
            self.writer.append(raw);
        }
        self
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.writer.into_string()
    }
}

// ===== Requests =====

/// Read every challenge of a `WWW-Authenticate` or `Proxy-Authenticate` value.
///
/// Commas separate both challenges and their parameters, a token that is not followed by `=`
/// starts a new challenge. A `token68` after the scheme is kept as the raw value.
pub fn read_challenge_requests(value: &str) -> Result<Vec<ChallengeRequest>, ParseError> {
    let mut reader = HeaderReader::new(value);
    let mut requests = Vec::new();

    loop {
        // challenges without parameters are only separated by a comma
        while reader.skip_value_separator() { }
        if reader.is_end() {
            break;
        }
        let Some(scheme) = reader.read_token() else {
            return Err(reader.unexpected());
        };
        let mut request = ChallengeRequest::new(ChallengeScheme::from_technical_name(scheme));
        if !reader.skip_spaces() {
            requests.push(request);
            continue;
        }
        if let Some(token68) = reader.read_token68() {
            request.message.set_raw_value(token68);
            requests.push(request);
            continue;
        }

        let start = reader.position();
        let mut end = start;
        let mut params = Parameters::new();
        loop {
            reader.skip_spaces();
            reader.mark();
            if reader.read_token().is_none() {
                break;
            }
            reader.skip_spaces();
            let is_param = reader.peek() == Some(b'=');
            reader.reset();
            if !is_param {
                break;
            }
            params.push(reader.read_parameter()?);
            end = reader.position();
            if !reader.skip_value_separator() {
                break;
            }
        }

        let raw = reader.slice(start, end);
        if !raw.is_empty() {
            request.message.set_raw_value(raw);
        }
        for param in params {
            read_request_parameter(&mut request, param);
        }
        requests.push(request);
    }

    Ok(requests)
}

fn read_request_parameter(request: &mut ChallengeRequest, param: Parameter) {
    if read_message_parameter(&mut request.message, &param) {
        return;
    }
    let value = param.value.as_deref().unwrap_or_default();
    match param.name.to_ascii_lowercase().as_str() {
        "domain" => request.domain_refs = value.split_whitespace().map(str::to_owned).collect(),
        "stale" => request.stale = value.eq_ignore_ascii_case("true"),
        "qop" => {
            request.quality_options = value
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_owned)
                .collect()
        }
        _ => request.message.parameters.push(param),
    }
}

/// Returns `true` if the parameter is one of the fields shared by requests and responses.
fn read_message_parameter(message: &mut ChallengeMessage, param: &Parameter) -> bool {
    let field = match param.name.to_ascii_lowercase().as_str() {
        "realm" => &mut message.realm,
        "nonce" => &mut message.server_nonce,
        "opaque" => &mut message.opaque,
        "algorithm" => &mut message.digest_algorithm,
        _ => return false,
    };
    *field = param.value.clone();
    true
}

/// Write a `WWW-Authenticate` or `Proxy-Authenticate` challenge.
///
/// The cached raw value is written verbatim when present.
pub fn write_challenge_request(request: &ChallengeRequest) -> Result<String, FormatError> {
    let message = &request.message;
    let mut writer = ChallengeWriter::new(&message.scheme)?;

    if let Some(raw) = message.raw_value() {
        writer.append_raw(raw);
        return Ok(writer.into_string());
    }

    if let Some(realm) = &message.realm {
        writer.append_quoted_challenge_parameter("realm", realm)?;
    }
    if !request.domain_refs.is_empty() {
        writer.append_quoted_challenge_parameter("domain", &request.domain_refs.join(" "))?;
    }
    if let Some(nonce) = &message.server_nonce {
        writer.append_quoted_challenge_parameter("nonce", nonce)?;
    }
    if let Some(opaque) = &message.opaque {
        writer.append_quoted_challenge_parameter("opaque", opaque)?;
    }
    if request.stale {
        writer.append_challenge_parameter("stale", "true")?;
    }
    if let Some(algorithm) = &message.digest_algorithm {
        writer.append_challenge_parameter("algorithm", algorithm)?;
    }
    if !request.quality_options.is_empty() {
        writer.append_quoted_challenge_parameter("qop", &request.quality_options.join(","))?;
    }
    for param in &message.parameters {
        writer.append_parameter(param)?;
    }

    Ok(writer.into_string())
}

// ===== Responses =====

/// Read an `Authorization` or `Proxy-Authorization` value.
///
/// `Basic` credentials are decoded into identifier and secret, `Bearer` tokens become the
/// secret, other schemes are read as auth-params.
pub fn read_challenge_response(value: &str) -> Result<ChallengeResponse, ParseError> {
    let mut reader = HeaderReader::new(value);
    reader.skip_spaces();
    let Some(scheme) = reader.read_token() else {
        return Err(reader.unexpected());
    };
    reader.skip_spaces();
    let start = reader.position();
    let raw = reader.read_raw_text();
    reader.expect_end()?;

    let mut response = ChallengeResponse::new(ChallengeScheme::from_technical_name(scheme));
    if raw.is_empty() {
        return Ok(response);
    }
    response.message.set_raw_value(raw);

    let scheme = response.message.scheme.clone();
    if scheme == ChallengeScheme::HTTP_BASIC {
        let invalid = || ParseError::new(ParseErrorKind::InvalidEncoding, start, None);
        let decoded = STANDARD.decode(raw).map_err(|_| invalid())?;
        let credentials = String::from_utf8(decoded).map_err(|_| invalid())?;
        match credentials.split_once(':') {
            Some((identifier, secret)) => {
                response.identifier = Some(identifier.to_owned());
                response.secret = Some(secret.to_owned());
            }
            None => response.identifier = Some(credentials),
        }
    } else if scheme == ChallengeScheme::HTTP_OAUTH_BEARER {
        response.secret = Some(raw.to_owned());
    } else {
        let params = match read_auth_params(raw) {
            Ok(params) => params,
            // token68 credentials of an unknown scheme, only kept as raw value
            Err(_) if scheme != ChallengeScheme::HTTP_DIGEST => return Ok(response),
            Err(err) => {
                return Err(ParseError::new(err.kind, start + err.position, err.found));
            }
        };
        for param in params {
            read_response_parameter(&mut response, param, start)?;
        }
    }

    Ok(response)
}

fn read_auth_params(value: &str) -> Result<Parameters, ParseError> {
    let mut reader = HeaderReader::new(value);
    let mut params = Parameters::new();
    loop {
        params.push(reader.read_parameter()?);
        if !reader.skip_value_separator() {
            break;
        }
    }
    reader.expect_end()?;
    Ok(params)
}

fn read_response_parameter(response: &mut ChallengeResponse, param: Parameter, start: usize) -> Result<(), ParseError> {
    if read_message_parameter(&mut response.message, &param) {
        return Ok(());
    }
    let field = match param.name.to_ascii_lowercase().as_str() {
        "username" => &mut response.identifier,
        "uri" => &mut response.digest_ref,
        "response" => &mut response.secret,
        "cnonce" => &mut response.client_nonce,
        "qop" => &mut response.quality,
        "nc" => {
            let count = param.value.as_deref().unwrap_or_default();
            response.server_nonce_count = u32::from_str_radix(count, 16)
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, start, None))?;
            return Ok(());
        }
        _ => {
            response.message.parameters.push(param);
            return Ok(());
        }
    };
    *field = param.value;
    Ok(())
}

/// Write an `Authorization` or `Proxy-Authorization` value.
///
/// The cached raw value is written verbatim when present. Digest hashes are not computed, the
/// secret of a `Digest` response is written as the `response` parameter.
pub fn write_challenge_response(response: &ChallengeResponse) -> Result<String, FormatError> {
    let message = &response.message;
    let mut writer = ChallengeWriter::new(&message.scheme)?;

    if let Some(raw) = message.raw_value() {
        writer.append_raw(raw);
        return Ok(writer.into_string());
    }

    if message.scheme == ChallengeScheme::HTTP_BASIC {
        let credentials = format!(
            "{}:{}",
            response.identifier.as_deref().unwrap_or_default(),
            response.secret.as_deref().unwrap_or_default(),
        );
        writer.append_raw(&STANDARD.encode(credentials));
        return Ok(writer.into_string());
    }

    if message.scheme == ChallengeScheme::HTTP_OAUTH_BEARER {
        writer.append_raw(response.secret.as_deref().unwrap_or_default());
        return Ok(writer.into_string());
    }

    if let Some(identifier) = &response.identifier {
        writer.append_quoted_challenge_parameter("username", identifier)?;
    }
    if let Some(realm) = &message.realm {
        writer.append_quoted_challenge_parameter("realm", realm)?;
    }
    if let Some(nonce) = &message.server_nonce {
        writer.append_quoted_challenge_parameter("nonce", nonce)?;
    }
    if let Some(digest_ref) = &response.digest_ref {
        writer.append_quoted_challenge_parameter("uri", digest_ref)?;
    }
    if let Some(quality) = &response.quality {
        writer.append_challenge_parameter("qop", quality)?;
    }
    if response.server_nonce_count > 0 {
        writer.append_challenge_parameter("nc", &format!("{:08x}", response.server_nonce_count))?;
    }
    if let Some(client_nonce) = &response.client_nonce {
        writer.append_quoted_challenge_parameter("cnonce", client_nonce)?;
    }
    if let Some(secret) = &response.secret {
        writer.append_quoted_challenge_parameter("response", secret)?;
    }
    if let Some(algorithm) = &message.digest_algorithm {
        writer.append_challenge_parameter("algorithm", algorithm)?;
    }
    if let Some(opaque) = &message.opaque {
        writer.append_quoted_challenge_parameter("opaque", opaque)?;
    }
    for param in &message.parameters {
        writer.append_parameter(param)?;
    }

    Ok(writer.into_string())
}
