//! actix-web glue: [Registry] as a request extractor and [Definition] as a `Set-Cookie` header
use crate::definition::Definition;
use crate::registry::Registry;
use actix_utils::future::{Ready, ready};
use actix_web::dev::Payload;
use actix_web::http::header::{
    COOKIE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, SET_COOKIE, TryIntoHeaderPair,
    TryIntoHeaderValue,
};
use actix_web::{FromRequest, HttpRequest};
use anyhow::anyhow;

fn e400<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorBadRequest(e)
}

/// Extracts the request cookies, an absent `Cookie` header gives an empty [Registry]
impl FromRequest for Registry {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(registry_from_headers(req.headers()).map_err(e400))
    }
}

// Clients may split cookies over several `Cookie` headers, they are joined back
// in the order they were received so later duplicates still win.
fn registry_from_headers(headers: &HeaderMap) -> Result<Registry, anyhow::Error> {
    let mut segments = Vec::new();

    for header in headers.get_all(COOKIE) {
        let header = header
            .to_str()
            .map_err(|e| anyhow!("Invalid cookie header encoding: {}", e))?;
        segments.push(header);
    }

    if segments.is_empty() {
        log::debug!("Request has no cookie header");
        return Ok(Registry::empty());
    }

    Ok(Registry::coerce(&segments.join("; ")))
}

impl TryIntoHeaderValue for &Definition {
    type Error = InvalidHeaderValue;

    fn try_into_value(self) -> Result<HeaderValue, Self::Error> {
        HeaderValue::from_str(self.to_s())
    }
}

impl TryIntoHeaderValue for Definition {
    type Error = InvalidHeaderValue;

    fn try_into_value(self) -> Result<HeaderValue, Self::Error> {
        (&self).try_into_value()
    }
}

/// Pairs the definition with the `Set-Cookie` header name
impl TryIntoHeaderPair for Definition {
    type Error = InvalidHeaderValue;

    fn try_into_pair(self) -> Result<(HeaderName, HeaderValue), Self::Error> {
        Ok((SET_COOKIE, self.try_into_value()?))
    }
}
