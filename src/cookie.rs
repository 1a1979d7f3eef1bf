//! The name/value pair carried in a `Cookie` header or at the head of a `Set-Cookie` header
use crate::encoding;
use crate::error::CookieError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

/// Separates the cookie name from its value
pub(crate) const NAME_VALUE_SEPARATOR: char = '=';

/// Separates cookies in a `Cookie` header, and a cookie from its attributes
pub(crate) const COOKIE_SEPARATOR: &str = "; ";

/// An immutable cookie name and value.
///
/// Every transformation returns a new [Cookie] with the same name.
/// ```
/// use crumbs::Cookie;
///
/// let cookie = Cookie::coerce("SID=a=b");
/// assert_eq!(cookie.name(), "SID");
/// assert_eq!(cookie.value(), "a=b");
/// assert_eq!(cookie.to_string(), "SID=a=b");
/// ```
#[derive(Debug, Clone)]
pub struct Cookie {
    name: String,
    value: String,
    rendered: OnceLock<String>,
}

impl Cookie {
    /// Create a cookie, the name and value are not validated
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            rendered: OnceLock::new(),
        }
    }

    /// Create a cookie with an empty value
    pub fn empty(name: impl Into<String>) -> Self {
        Cookie::new(name, String::new())
    }

    /// Parse the `name=value` wire form.
    ///
    /// Only the first `=` separates the name from the value. Without any `=`
    /// the whole string is the name and the value is empty.
    pub fn coerce(string: &str) -> Self {
        match string.split_once(NAME_VALUE_SEPARATOR) {
            Some((name, value)) => Cookie::new(name, value),
            None => Cookie::empty(string),
        }
    }

    /// Serialize `value` with serde_json and use the JSON text as the cookie value
    pub fn json<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self, CookieError> {
        let name = name.into();
        let data = serde_json::to_string(value)
            .map_err(|_| CookieError::Serialization(type_name::<T>().to_string()))?;
        Ok(Cookie::new(name, data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `name=value` text, computed once
    pub fn to_s(&self) -> &str {
        self.rendered
            .get_or_init(|| format!("{}{NAME_VALUE_SEPARATOR}{}", self.name, self.value))
    }

    /// Deserialize the value as JSON into `T`
    pub fn parse_json<T: DeserializeOwned>(&self) -> Result<T, CookieError> {
        serde_json::from_str(&self.value).map_err(|_| {
            CookieError::Deserialization(self.value.clone(), type_name::<T>().to_string())
        })
    }

    /// Encode the value with URL-safe base64
    pub fn encode(&self) -> Self {
        self.with_value(encoding::encode(&self.value))
    }

    /// Decode a value produced by [Cookie::encode]
    pub fn decode(&self) -> Result<Self, CookieError> {
        self.decode_with(encoding::decode)
    }

    /// Encode the value with a custom encoder, its error is returned as is
    pub fn encode_with<F, E>(&self, encoder: F) -> Result<Self, E>
    where
        F: FnOnce(&str) -> Result<String, E>,
    {
        encoder(&self.value).map(|value| self.with_value(value))
    }

    /// Decode the value with a custom decoder, its error is returned as is
    pub fn decode_with<F, E>(&self, decoder: F) -> Result<Self, E>
    where
        F: FnOnce(&str) -> Result<String, E>,
    {
        decoder(&self.value).map(|value| self.with_value(value))
    }

    pub fn encrypt<B: CryptoBox + ?Sized>(&self, crypto_box: &B) -> Result<Self, B::Error> {
        crypto_box.encrypt(&self.value).map(|value| self.with_value(value))
    }

    pub fn decrypt<B: CryptoBox + ?Sized>(&self, crypto_box: &B) -> Result<Self, B::Error> {
        crypto_box.decrypt(&self.value).map(|value| self.with_value(value))
    }

    fn with_value(&self, value: String) -> Self {
        Cookie::new(self.name.clone(), value)
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Cookie {}

impl Hash for Cookie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_s())
    }
}

impl FromStr for Cookie {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Cookie::coerce(s))
    }
}

impl From<&str> for Cookie {
    fn from(value: &str) -> Self {
        Cookie::coerce(value)
    }
}

/// Symmetric encryption over cookie values.
///
/// `decrypt(encrypt(v))` is expected to give back `v`. Errors are passed through
/// [Cookie::encrypt] and [Cookie::decrypt] untouched.
pub trait CryptoBox {
    type Error;

    fn encrypt(&self, plaintext: &str) -> Result<String, Self::Error>;

    fn decrypt(&self, ciphertext: &str) -> Result<String, Self::Error>;
}
