//! Default cookie value codec: URL-safe base64, padding included
use crate::error::CookieError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

pub fn encode(value: &str) -> String {
    URL_SAFE.encode(value)
}

/// Fails when `value` is not valid URL-safe base64 or does not decode to UTF-8
pub fn decode(value: &str) -> Result<String, CookieError> {
    let bytes = URL_SAFE
        .decode(value)
        .map_err(|_| CookieError::Decoding(value.to_string()))?;

    String::from_utf8(bytes).map_err(|_| CookieError::Decoding(value.to_string()))
}
