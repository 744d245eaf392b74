//! `Authorization` header parsing for HTTP Basic authentication
//!
//! Every step returns `None` on malformed input so a bad header can never
//! surface as an error, only as "no identity".

use base64::{Engine as _, engine::general_purpose};

/// Header carrying credentials
pub const AUTHORIZATION: &str = "Authorization";

/// Scheme name for HTTP Basic
pub const BASIC_SCHEME: &str = "Basic";

/// Split a header value into `(scheme, token)` at the first space.
///
/// The token is everything after that single space, returned verbatim
/// without trimming. A value with no space or an empty scheme yields `None`.
pub fn extract_scheme_and_token(header: Option<&str>) -> Option<(&str, &str)> {
    let (scheme, token) = header?.split_once(' ')?;
    if scheme.is_empty() {
        return None;
    }
    Some((scheme, token))
}

/// Decode a standard base64 token into UTF-8 text
pub fn decode_basic(token: &str) -> Option<String> {
    let bytes = general_purpose::STANDARD.decode(token).ok()?;
    String::from_utf8(bytes).ok()
}

/// Split `email:password` on the first colon.
///
/// The password may itself contain colons.
pub fn split_credentials(plaintext: &str) -> Option<(String, String)> {
    plaintext
        .split_once(':')
        .map(|(email, password)| (email.to_string(), password.to_string()))
}

/// Full Basic pipeline: header value to `(email, password)`
pub fn basic_credentials(header: Option<&str>) -> Option<(String, String)> {
    let (scheme, token) = extract_scheme_and_token(header)?;
    if scheme != BASIC_SCHEME {
        return None;
    }
    let plaintext = decode_basic(token)?;
    split_credentials(&plaintext)
}

/// Build a Basic header value for `email` and `password`
pub fn basic_authorization(email: &str, password: &str) -> String {
    format!(
        "{} {}",
        BASIC_SCHEME,
        general_purpose::STANDARD.encode(format!("{}:{}", email, password))
    )
}
